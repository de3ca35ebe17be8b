use serde::{Deserialize, Serialize};

use super::pressure::PSI_PER_BAR;

/// 압축률 단위. 내부 기준은 bar⁻¹이다.
/// microsip은 유전 공학에서 쓰는 1e-6 psi⁻¹이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressibilityUnit {
    PerBar,
    PerMegaPascal,
    PerPsi,
    Microsip,
}

fn to_per_bar(value: f64, unit: CompressibilityUnit) -> f64 {
    match unit {
        CompressibilityUnit::PerBar => value,
        CompressibilityUnit::PerMegaPascal => value / 10.0,
        CompressibilityUnit::PerPsi => value * PSI_PER_BAR,
        CompressibilityUnit::Microsip => value * 1.0e-6 * PSI_PER_BAR,
    }
}

fn from_per_bar(value: f64, unit: CompressibilityUnit) -> f64 {
    match unit {
        CompressibilityUnit::PerBar => value,
        CompressibilityUnit::PerMegaPascal => value * 10.0,
        CompressibilityUnit::PerPsi => value / PSI_PER_BAR,
        CompressibilityUnit::Microsip => value / PSI_PER_BAR / 1.0e-6,
    }
}

/// 압축률을 다른 단위로 변환한다.
pub fn convert_compressibility(
    value: f64,
    from: CompressibilityUnit,
    to: CompressibilityUnit,
) -> f64 {
    let base = to_per_bar(value, from);
    from_per_bar(base, to)
}
