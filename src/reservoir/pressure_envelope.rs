//! 저장층 최대 허용 압력(Pmax) 포락선.
//!
//! 하한 최소 수평 응력(Shmin)에 크레스트 기준 안전계수를 적용하고
//! 크레스트 아래 구간의 정수압 수두를 더한다.

/// 최소 수평 응력(Shmin)을 결정하는 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShminModel {
    /// 측정 또는 해석으로 얻은 응력 구배 [bar/m]를 그대로 사용한다.
    Gradient(f64),
    /// SNS 기준 분지의 심도-응력 경험식(크레스트 심도의 3차식)을 사용한다.
    SnsTrend,
}

/// 심도 의존 최대 허용 압력을 계산한다.
/// 입력: 심도 z[m], 크레스트 심도 crest[m], 안전계수 SF (분율),
/// 정수압 구배 hydro[bar/m], Shmin 모델. 출력: [bar].
///
/// `ShminModel::Gradient(0.0)`은 유효한 입력이며 응력 항을 0으로 만든다.
pub fn max_allowable_pressure(
    depth_m: f64,
    crest_m: f64,
    safety_factor: f64,
    hydro_gradient_bar_per_m: f64,
    shmin: ShminModel,
) -> f64 {
    // SNS 3차식 계수는 기준 분지 피팅 값 그대로 유지한다.
    let stress_bar = match shmin {
        ShminModel::SnsTrend => {
            0.76 * 2.63e-9 * crest_m.powi(3)
                + 0.15 * 8.02e-6 * crest_m.powi(2)
                + 1.15 * 0.12 * crest_m
        }
        ShminModel::Gradient(shmin_bar_per_m) => shmin_bar_per_m * depth_m,
    };
    (1.0 - safety_factor) * stress_bar + (depth_m - crest_m) * hydro_gradient_bar_per_m
}
