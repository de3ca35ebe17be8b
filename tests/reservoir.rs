//! 저류층 상관식 기준점 회귀 테스트. 기대값은 원 상관식을 그대로 평가한 값이다.
use co2_storage_toolbox::reservoir::{
    initial_pressure, rock_compressibility, temperature_at_depth, water_compressibility,
    DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA, DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M,
    DEFAULT_SURFACE_TEMP_C, DEFAULT_THERMAL_GRADIENT_C_PER_M,
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
fn surface_temperature_equals_surface_default() {
    let t = temperature_at_depth(0.0, DEFAULT_THERMAL_GRADIENT_C_PER_M, DEFAULT_SURFACE_TEMP_C);
    assert_eq!(t, 5.0);
}

#[test]
fn temperature_follows_linear_gradient() {
    let t = temperature_at_depth(
        1000.0,
        DEFAULT_THERMAL_GRADIENT_C_PER_M,
        DEFAULT_SURFACE_TEMP_C,
    );
    assert_close("T(1000m)", t, 35.0, 1e-12);
    let t2 = temperature_at_depth(
        2500.0,
        DEFAULT_THERMAL_GRADIENT_C_PER_M,
        DEFAULT_SURFACE_TEMP_C,
    );
    assert_close("T(2500m)", t2, 80.0, 1e-12);
    // 구배/지표 온도를 바꾼 경우
    let t3 = temperature_at_depth(1800.0, 0.025, 10.0);
    assert_close("T(1800m, 0.025, 10)", t3, 55.0, 1e-12);
}

#[test]
fn initial_pressure_is_hydrostatic_minus_depletion() {
    let p = initial_pressure(1000.0, 0.0, DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M);
    assert_close("Pini(1000m)", p, 112.0, 1e-12);
    let p2 = initial_pressure(1000.0, 10.0, DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M);
    assert_close("Pini(1000m, 10bar)", p2, 102.0, 1e-12);
    let p3 = initial_pressure(1800.0, 25.0, 0.1);
    assert_close("Pini(1800m, 25bar, 0.1)", p3, 155.0, 1e-12);
}

#[test]
fn initial_pressure_monotonic_in_depth_and_depletion() {
    let hydro = DEFAULT_HYDROSTATIC_GRADIENT_BAR_PER_M;
    assert!(initial_pressure(1500.0, 0.0, hydro) > initial_pressure(1000.0, 0.0, hydro));
    assert!(initial_pressure(1000.0, 20.0, hydro) < initial_pressure(1000.0, 0.0, hydro));
}

#[test]
fn rock_compressibility_reference_points() {
    let c = rock_compressibility(0.2, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA).expect("por 0.2");
    assert_close("c_r(0.2)", c, 5.289272726418407e-5, 1e-12);
    let c2 = rock_compressibility(0.1, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA).expect("por 0.1");
    assert_close("c_r(0.1)", c2, 7.05218032890822e-5, 1e-12);
    let c3 = rock_compressibility(0.35, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA).expect("por 0.35");
    assert_close("c_r(0.35)", c3, 4.193099523749995e-5, 1e-12);
    // 정수 아닌 지수 -0.5 케이스
    let c4 = rock_compressibility(0.25, 3.0e-5, -0.5).expect("por 0.25");
    assert_close("c_r(0.25, -0.5)", c4, 6.0e-5, 1e-12);
}

#[test]
fn rock_compressibility_strictly_decreasing_in_porosity() {
    let mut prev = f64::INFINITY;
    for por in [0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35] {
        let c = rock_compressibility(por, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA).expect("por > 0");
        assert!(c < prev, "c_r must decrease: por={por} c={c} prev={prev}");
        prev = c;
    }
}

#[test]
fn rock_compressibility_domain_errors() {
    // 음수 밑에 비정수 지수
    assert!(rock_compressibility(-0.1, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA).is_err());
    // 0 밑에 음수 지수
    assert!(rock_compressibility(0.0, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA).is_err());
    // NaN 입력은 오류가 아니라 NaN으로 전파
    let nan = rock_compressibility(f64::NAN, DEFAULT_HALL_ALPHA, DEFAULT_HALL_BETA)
        .expect("NaN propagates");
    assert!(nan.is_nan());
}

#[test]
fn water_compressibility_reference_points() {
    let c = water_compressibility(
        1000.0,
        100.0,
        DEFAULT_THERMAL_GRADIENT_C_PER_M,
        DEFAULT_SURFACE_TEMP_C,
    );
    assert_close("c_w(1000m, 100bar)", c, 4.451852656519561e-5, 1e-10);
    let c2 = water_compressibility(
        1500.0,
        150.0,
        DEFAULT_THERMAL_GRADIENT_C_PER_M,
        DEFAULT_SURFACE_TEMP_C,
    );
    assert_close("c_w(1500m, 150bar)", c2, 4.2963059572742906e-5, 1e-10);
    let c3 = water_compressibility(800.0, 90.0, 0.035, 8.0);
    assert_close("c_w(800m, 90bar, 0.035, 8)", c3, 4.465427219849538e-5, 1e-10);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = water_compressibility(
        1234.0,
        130.0,
        DEFAULT_THERMAL_GRADIENT_C_PER_M,
        DEFAULT_SURFACE_TEMP_C,
    );
    let b = water_compressibility(
        1234.0,
        130.0,
        DEFAULT_THERMAL_GRADIENT_C_PER_M,
        DEFAULT_SURFACE_TEMP_C,
    );
    assert_eq!(a.to_bits(), b.to_bits());
}
