//! 단위 변환 회귀 테스트.
use co2_storage_toolbox::conversion::convert;
use co2_storage_toolbox::quantity::QuantityKind;
use co2_storage_toolbox::units::{
    convert_pressure_mode, PressureMode, PressureUnit, PSI_PER_BAR,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12e} got {actual:.12e} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn bar_to_psi_uses_correlation_factor() {
    // 경험 상관식과 같은 14.5038 인자를 써야 한다.
    let psi = convert(QuantityKind::Pressure, 1.0, "bar", "psi").expect("bar→psi");
    assert_eq!(psi, PSI_PER_BAR);
    let bar = convert(QuantityKind::Pressure, PSI_PER_BAR, "psi", "bar").expect("psi→bar");
    assert_close("psi→bar", bar, 1.0, 1e-12);
}

#[test]
fn temperature_conversion_matches_correlation_form() {
    // 물 압축률 상관식의 °F 환산(9/5·T+32)과 같은 결과
    let f = convert(QuantityKind::Temperature, 35.0, "C", "F").expect("C→F");
    assert_close("35C→F", f, 95.0, 1e-12);
    let k = convert(QuantityKind::Temperature, 31.0, "C", "K").expect("C→K");
    assert_close("31C→K", k, 304.15, 1e-12);
}

#[test]
fn depth_conversion_meter_foot() {
    let ft = convert(QuantityKind::Depth, 1000.0, "m", "ft").expect("m→ft");
    assert_close("1000m→ft", ft, 1000.0 / 0.3048, 1e-12);
    let m = convert(QuantityKind::Depth, 2.5, "km", "m").expect("km→m");
    assert_close("2.5km→m", m, 2500.0, 1e-12);
}

#[test]
fn density_conversion_oilfield_units() {
    let kg = convert(QuantityKind::Density, 100.0, "lb/ft3", "kg/m3").expect("lb/ft3→kg/m3");
    assert_close("100lb/ft3", kg, 1601.8463, 1e-10);
    let g_cm3 = convert(QuantityKind::Density, 778.5, "kg/m3", "g/cm3").expect("kg/m3→g/cm3");
    assert_close("778.5kg/m3", g_cm3, 0.7785, 1e-12);
}

#[test]
fn compressibility_conversion_roundtrip() {
    let usip = convert(QuantityKind::Compressibility, 4.45e-5, "1/bar", "usip").expect("→usip");
    let back = convert(QuantityKind::Compressibility, usip, "usip", "1/bar").expect("→1/bar");
    assert_close("usip roundtrip", back, 4.45e-5, 1e-12);
    // 1/psi는 bar⁻¹보다 14.5038배 작은 단위 값이 된다
    let per_psi = convert(QuantityKind::Compressibility, 1.0, "1/bar", "1/psi").expect("→1/psi");
    assert_close("1/bar→1/psi", per_psi, 1.0 / PSI_PER_BAR, 1e-12);
}

#[test]
fn gauge_to_absolute_pressure_mode() {
    // 0 bar(g) → 1.01325 bar(a)
    let bar_abs = convert_pressure_mode(
        0.0,
        PressureUnit::Bar,
        PressureMode::Gauge,
        PressureUnit::Bar,
        PressureMode::Absolute,
    );
    assert_close("0barg→bara", bar_abs, 1.01325, 1e-12);
    // 절대→게이지 왕복
    let round = convert_pressure_mode(
        bar_abs,
        PressureUnit::Bar,
        PressureMode::Absolute,
        PressureUnit::Bar,
        PressureMode::Gauge,
    );
    assert_close("roundtrip", round, 0.0, 1e-12);
}

#[test]
fn unknown_unit_is_rejected() {
    assert!(convert(QuantityKind::Pressure, 1.0, "torr", "bar").is_err());
    assert!(convert(QuantityKind::Temperature, 1.0, "C", "degX").is_err());
}
