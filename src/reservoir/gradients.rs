//! 심도에 선형인 온도/압력 구배 상관식.

/// 심도에 따른 지층 온도를 선형 지온구배로 계산한다.
/// 입력: 심도 z[m], 지온구배 [°C/m], 지표 온도 Ts[°C]. 출력: [°C].
pub fn temperature_at_depth(
    depth_m: f64,
    thermal_gradient_c_per_m: f64,
    surface_temp_c: f64,
) -> f64 {
    depth_m * thermal_gradient_c_per_m + surface_temp_c
}

/// 초기 공극압을 정수압 구배에서 고갈량을 빼는 방식으로 계산한다.
/// 입력: 심도 z[m], 고갈량 depl[bar], 정수압 구배 [bar/m]. 출력: [bar].
pub fn initial_pressure(depth_m: f64, depletion_bar: f64, hydro_gradient_bar_per_m: f64) -> f64 {
    depth_m * hydro_gradient_bar_per_m - depletion_bar
}
