//! Ouyang(2011) CO2 밀도 분기/기준점 테스트.
//!
//! 경계(1070/3000 psi)에서 값의 연속성은 기대하지 않는다. 문서화된 불연속이므로
//! 경계 양쪽에서 올바른 분기를 타는지와 기준점 값만 확인한다.
use co2_storage_toolbox::co2::{
    co2_density, PressureRegime, IDEAL_GAS_LIMIT_PSI, REGIME_SPLIT_PSI,
};
use co2_storage_toolbox::units::PSI_PER_BAR;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.12e} got {actual:.12e} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn regime_split_is_closed_on_the_high_side() {
    assert_eq!(PressureRegime::from_psi(2999.999), PressureRegime::LowPressure);
    assert_eq!(PressureRegime::from_psi(3000.0), PressureRegime::HighPressure);
    assert_eq!(PressureRegime::from_psi(3000.001), PressureRegime::HighPressure);
}

#[test]
fn ideal_gas_branch_below_critical_pressure() {
    // 70 bar ≈ 1015 psi < 1070 psi
    assert!(70.0 * PSI_PER_BAR < IDEAL_GAS_LIMIT_PSI);
    assert_close("rho(70bar, 40C)", co2_density(70.0, 40.0), 1737.5485397194784, 1e-12);
    assert_close("rho(65bar, 25C)", co2_density(65.0, 25.0), 1694.6103897297646, 1e-12);
    assert_close("rho(30bar, 10C)", co2_density(30.0, 10.0), 823.5614518500867, 1e-12);
}

#[test]
fn low_pressure_table_between_thresholds() {
    // 80 bar ≈ 1160 psi: 다항식 저압표 구간
    let p_psi = 80.0 * PSI_PER_BAR;
    assert!(p_psi >= IDEAL_GAS_LIMIT_PSI && p_psi < REGIME_SPLIT_PSI);
    assert_close("rho(80bar, 40C)", co2_density(80.0, 40.0), 307.4486615130427, 1e-9);
    assert_close("rho(120bar, 45C)", co2_density(120.0, 45.0), 639.9076535459735, 1e-9);
    assert_close("rho(150bar, 40C)", co2_density(150.0, 40.0), 778.5325330444803, 1e-9);
    assert_close("rho(100bar, 50C)", co2_density(100.0, 50.0), 398.28257545246436, 1e-9);
}

#[test]
fn high_pressure_table_above_split() {
    // 210 bar ≈ 3046 psi: 고압표 구간
    assert!(210.0 * PSI_PER_BAR >= REGIME_SPLIT_PSI);
    assert_close("rho(210bar, 40C)", co2_density(210.0, 40.0), 849.3576564143733, 1e-9);
    assert_close("rho(300bar, 60C)", co2_density(300.0, 60.0), 829.783602950006, 1e-9);
    assert_close("rho(250bar, 80C)", co2_density(250.0, 80.0), 685.2355041346702, 1e-9);
}

#[test]
fn table_switch_straddles_3000_psi() {
    // 206 bar → 2987.8 psi (저압표), 207 bar → 3002.3 psi (고압표)
    assert_close("rho(206bar, 50C)", co2_density(206.0, 50.0), 800.2761164178446, 1e-9);
    assert_close("rho(207bar, 50C)", co2_density(207.0, 50.0), 793.935756323686, 1e-9);
}

#[test]
fn supercritical_density_is_liquid_like() {
    // 초임계 구간에서는 수백 kg/m³의 액체급 밀도가 나와야 한다.
    let rho = co2_density(150.0, 40.0);
    assert!(rho > 600.0 && rho < 1000.0, "rho={rho}");
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = co2_density(185.0, 55.0);
    let b = co2_density(185.0, 55.0);
    assert_eq!(a.to_bits(), b.to_bits());
    let c = co2_density(60.0, 20.0);
    let d = co2_density(60.0, 20.0);
    assert_eq!(c.to_bits(), d.to_bits());
}

#[test]
fn nan_inputs_propagate() {
    assert!(co2_density(f64::NAN, 40.0).is_nan());
    assert!(co2_density(150.0, f64::NAN).is_nan());
}
