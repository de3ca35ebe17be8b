//! 최대 허용 압력 분기/기준점 테스트.
use co2_storage_toolbox::reservoir::{
    max_allowable_pressure, ShminModel, DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
    DEFAULT_SAFETY_FACTOR,
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
fn sns_trend_reference_point() {
    let pmax = max_allowable_pressure(
        2000.0,
        1500.0,
        DEFAULT_SAFETY_FACTOR,
        DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
        ShminModel::SnsTrend,
    );
    assert_close("Pmax SNS", pmax, 239.98479499999996, 1e-12);
}

#[test]
fn sns_trend_at_crest_has_no_head_term() {
    // z == crest 이면 정수압 수두 항이 0이다.
    let pmax = max_allowable_pressure(
        1200.0,
        1200.0,
        DEFAULT_SAFETY_FACTOR,
        DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
        ShminModel::SnsTrend,
    );
    assert_close("Pmax SNS crest", pmax, 145.16830943999997, 1e-12);
}

#[test]
fn supplied_gradient_uses_linear_branch() {
    let pmax = max_allowable_pressure(
        2000.0,
        1500.0,
        DEFAULT_SAFETY_FACTOR,
        DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
        ShminModel::Gradient(0.16),
    );
    assert_close("Pmax gradient 0.16", pmax, 328.0, 1e-12);
}

#[test]
fn zero_gradient_leaves_only_hydrostatic_head() {
    // Gradient(0.0)은 SNS 폴백이 아니라 응력 항 0으로 동작해야 한다.
    let pmax = max_allowable_pressure(
        2000.0,
        1500.0,
        DEFAULT_SAFETY_FACTOR,
        DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
        ShminModel::Gradient(0.0),
    );
    assert_close("Pmax gradient 0", pmax, 56.0, 1e-12);
}

#[test]
fn custom_safety_factor_and_gradient() {
    let sns = max_allowable_pressure(2500.0, 2000.0, 0.1, 0.105, ShminModel::SnsTrend);
    assert_close("Pmax SNS custom", sns, 319.62215999999995, 1e-12);
    let grad = max_allowable_pressure(2500.0, 2000.0, 0.1, 0.105, ShminModel::Gradient(0.155));
    assert_close("Pmax gradient custom", grad, 401.25000000000006, 1e-12);
}
