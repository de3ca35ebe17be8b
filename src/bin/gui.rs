#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use co2_storage_toolbox::{
    co2::{self, PressureRegime},
    config::{self, DefaultUnits, UnitSystem},
    conversion, i18n,
    quantity::QuantityKind,
    reservoir::{
        initial_pressure, max_allowable_pressure, rock_compressibility, temperature_at_depth,
        water_compressibility, ShminModel,
    },
    units::{
        convert_compressibility, convert_density, convert_pressure, convert_temperature,
        pressure::to_bar, temperature::to_celsius, CompressibilityUnit, DensityUnit, PressureUnit,
        TemperatureUnit, PSI_PER_BAR,
    },
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([900.0, 640.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "CO2 Storage Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다.
/// 1) assets/fonts/ 아래 프로젝트 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 설정 탭의 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Co2Density,
    Reservoir,
    Compressibility,
    Envelope,
    UnitConv,
    Settings,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CompMode {
    Rock,
    Water,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ShminMode {
    SnsTrend,
    Gradient,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    theme: ThemeChoice,
    // 설정
    lang_input: String,
    font_path_input: String,
    font_status: Option<String>,
    settings_status: Option<String>,
    // CO2 밀도
    co2_pressure: f64,
    co2_pressure_unit: PressureUnit,
    co2_temperature: f64,
    co2_temperature_unit: TemperatureUnit,
    co2_result: Option<String>,
    // 저류층 상태
    res_depth: f64,
    res_depletion: f64,
    res_thermal: f64,
    res_surface_temp: f64,
    res_hydro: f64,
    res_result: Option<String>,
    // 압축률
    comp_mode: CompMode,
    comp_porosity: f64,
    comp_alpha: f64,
    comp_beta: f64,
    comp_depth: f64,
    comp_pressure: f64,
    comp_result: Option<String>,
    // 최대 허용 압력
    env_depth: f64,
    env_crest: f64,
    env_sf: f64,
    env_hydro: f64,
    env_shmin_mode: ShminMode,
    env_shmin: f64,
    env_result: Option<String>,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let lang = i18n::resolve_language(&cfg.language, None);
        let tr = i18n::Translator::new_with_pack(&lang, None);
        let r = cfg.reservoir.clone();
        Self {
            lang_input: cfg.language.clone(),
            tr,
            tab: Tab::Co2Density,
            theme: ThemeChoice::System,
            font_path_input: String::new(),
            font_status: None,
            settings_status: None,
            co2_pressure: 150.0,
            co2_pressure_unit: PressureUnit::Bar,
            co2_temperature: 40.0,
            co2_temperature_unit: TemperatureUnit::Celsius,
            co2_result: None,
            res_depth: 1000.0,
            res_depletion: 0.0,
            res_thermal: r.thermal_gradient_c_per_m,
            res_surface_temp: r.surface_temp_c,
            res_hydro: r.hydrostatic_gradient_bar_per_m,
            res_result: None,
            comp_mode: CompMode::Rock,
            comp_porosity: 0.2,
            comp_alpha: r.hall_alpha,
            comp_beta: r.hall_beta,
            comp_depth: 1000.0,
            comp_pressure: 112.0,
            comp_result: None,
            env_depth: 2000.0,
            env_crest: 1500.0,
            env_sf: r.safety_factor,
            env_hydro: r.hydrostatic_gradient_bar_per_m,
            env_shmin_mode: ShminMode::SnsTrend,
            env_shmin: 0.16,
            env_result: None,
            conv_kind: QuantityKind::Pressure,
            conv_value: 1.0,
            conv_from: "bar".to_string(),
            conv_to: "psi".to_string(),
            conv_result: None,
            config: cfg,
        }
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Co2Density, txt("gui.tab.co2_density", "CO2 Density")),
            (Tab::Reservoir, txt("gui.tab.reservoir", "Reservoir State")),
            (
                Tab::Compressibility,
                txt("gui.tab.compressibility", "Compressibility"),
            ),
            (Tab::Envelope, txt("gui.tab.envelope", "Max Allowable Pressure")),
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
            (Tab::Settings, txt("gui.tab.settings", "Settings")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_co2_density(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.co2.heading", "CO2 Density (Ouyang 2011)"),
            &txt(
                "gui.co2.tip",
                "Density from pressure and temperature. Below the critical pressure the ideal-gas branch is used.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("co2_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.co2.pressure", "Pressure"));
                    ui.add(egui::DragValue::new(&mut self.co2_pressure).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.co2.pressure_unit", "Pressure unit"));
                    pressure_unit_combo(ui, "co2_p_unit", &mut self.co2_pressure_unit);
                    ui.end_row();

                    ui.label(txt("gui.co2.temperature", "Temperature"));
                    ui.add(egui::DragValue::new(&mut self.co2_temperature).speed(0.5));
                    ui.end_row();

                    ui.label(txt("gui.co2.temperature_unit", "Temperature unit"));
                    temperature_unit_combo(ui, "co2_t_unit", &mut self.co2_temperature_unit);
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.compute", "Compute")).clicked() {
                let p_bar = to_bar(self.co2_pressure, self.co2_pressure_unit);
                let t_c = to_celsius(self.co2_temperature, self.co2_temperature_unit);
                let rho = co2::co2_density(p_bar, t_c);
                let p_psi = p_bar * PSI_PER_BAR;
                let note = if p_psi < co2::IDEAL_GAS_LIMIT_PSI {
                    txt("gui.co2.note_ideal", "Ideal-gas branch (< 1070 psi)")
                } else {
                    match PressureRegime::from_psi(p_psi) {
                        PressureRegime::LowPressure => {
                            txt("gui.co2.note_low", "Low-pressure table (< 3000 psi)")
                        }
                        PressureRegime::HighPressure => {
                            txt("gui.co2.note_high", "High-pressure table (>= 3000 psi)")
                        }
                    }
                };
                let rho_out = convert_density(
                    rho,
                    DensityUnit::KgPerCubicMeter,
                    self.config.default_units.density,
                );
                self.co2_result = Some(format!(
                    "{rho_out:.2} {} ({note})",
                    density_symbol(self.config.default_units.density)
                ));
            }
            if let Some(res) = &self.co2_result {
                ui.label(res);
            }
        });
    }

    fn ui_reservoir(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.reservoir.heading", "Reservoir Temperature / Initial Pressure"),
            &txt(
                "gui.reservoir.tip",
                "Depth profile from the linear thermal and hydrostatic gradients",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("res_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.reservoir.depth", "Depth z [m]"));
                    ui.add(egui::DragValue::new(&mut self.res_depth).speed(10.0));
                    ui.end_row();

                    ui.label(txt("gui.reservoir.depletion", "Depletion [bar]"));
                    ui.add(egui::DragValue::new(&mut self.res_depletion).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.reservoir.thermal", "Thermal gradient [°C/m]"));
                    ui.add(egui::DragValue::new(&mut self.res_thermal).speed(0.001));
                    ui.end_row();

                    ui.label(txt("gui.reservoir.surface_temp", "Surface temperature [°C]"));
                    ui.add(egui::DragValue::new(&mut self.res_surface_temp).speed(0.5));
                    ui.end_row();

                    ui.label(txt("gui.reservoir.hydro", "Hydrostatic gradient [bar/m]"));
                    ui.add(egui::DragValue::new(&mut self.res_hydro).speed(0.001));
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.compute", "Compute")).clicked() {
                let t_c = temperature_at_depth(self.res_depth, self.res_thermal, self.res_surface_temp);
                let p_bar = initial_pressure(self.res_depth, self.res_depletion, self.res_hydro);
                let du = &self.config.default_units;
                let t_out = convert_temperature(t_c, TemperatureUnit::Celsius, du.temperature);
                let p_out = convert_pressure(p_bar, PressureUnit::Bar, du.pressure);
                self.res_result = Some(format!(
                    "T = {t_out:.2} {} / Pini = {p_out:.3} {}",
                    temperature_symbol(du.temperature),
                    pressure_symbol(du.pressure)
                ));
            }
            if let Some(res) = &self.res_result {
                ui.label(res);
            }
        });
    }

    fn ui_compressibility(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.comp.heading", "Compressibility"),
            &txt("gui.comp.tip", "Rock: Hall (1953), water: Brill & Beggs (1978)"),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.comp_mode, CompMode::Rock, txt("gui.comp.mode_rock", "Rock"));
            ui.selectable_value(
                &mut self.comp_mode,
                CompMode::Water,
                txt("gui.comp.mode_water", "Water"),
            );
        });
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("comp_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| match self.comp_mode {
                    CompMode::Rock => {
                        ui.label(txt("gui.comp.porosity", "Porosity (fraction)"));
                        ui.add(egui::DragValue::new(&mut self.comp_porosity).speed(0.01));
                        ui.end_row();

                        ui.label(txt("gui.comp.alpha", "alpha [1/bar]"));
                        ui.add(egui::DragValue::new(&mut self.comp_alpha).speed(1e-6));
                        ui.end_row();

                        ui.label(txt("gui.comp.beta", "beta"));
                        ui.add(egui::DragValue::new(&mut self.comp_beta).speed(0.01));
                        ui.end_row();
                    }
                    CompMode::Water => {
                        ui.label(txt("gui.comp.depth", "Depth z [m]"));
                        ui.add(egui::DragValue::new(&mut self.comp_depth).speed(10.0));
                        ui.end_row();

                        ui.label(txt("gui.comp.pressure", "Pore pressure [bar]"));
                        ui.add(egui::DragValue::new(&mut self.comp_pressure).speed(1.0));
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.compute", "Compute")).clicked() {
                let result = match self.comp_mode {
                    CompMode::Rock => {
                        rock_compressibility(self.comp_porosity, self.comp_alpha, self.comp_beta)
                    }
                    CompMode::Water => Ok(water_compressibility(
                        self.comp_depth,
                        self.comp_pressure,
                        self.config.reservoir.thermal_gradient_c_per_m,
                        self.config.reservoir.surface_temp_c,
                    )),
                };
                self.comp_result = Some(match result {
                    Ok(c_bar) => {
                        let unit = self.config.default_units.compressibility;
                        let out = convert_compressibility(c_bar, CompressibilityUnit::PerBar, unit);
                        format!("{out:.6e} {}", compressibility_symbol(unit))
                    }
                    Err(e) => format!("{}: {e}", txt("gui.common.error_prefix", "Error")),
                });
            }
            if let Some(res) = &self.comp_result {
                ui.label(res);
            }
        });
    }

    fn ui_envelope(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.env.heading", "Maximum Allowable Pressure"),
            &txt(
                "gui.env.tip",
                "Shmin lower bound with crest safety factor and hydrostatic head",
            ),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut self.env_shmin_mode,
                ShminMode::SnsTrend,
                txt("gui.env.shmin_mode_sns", "SNS depth trend"),
            );
            ui.selectable_value(
                &mut self.env_shmin_mode,
                ShminMode::Gradient,
                txt("gui.env.shmin_mode_gradient", "Enter Shmin gradient"),
            );
        });
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("env_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.env.depth", "Depth z [m]"));
                    ui.add(egui::DragValue::new(&mut self.env_depth).speed(10.0));
                    ui.end_row();

                    ui.label(txt("gui.env.crest", "Crest depth [m]"));
                    ui.add(egui::DragValue::new(&mut self.env_crest).speed(10.0));
                    ui.end_row();

                    ui.label(txt("gui.env.sf", "Safety factor SF"));
                    ui.add(egui::DragValue::new(&mut self.env_sf).speed(0.01));
                    ui.end_row();

                    ui.label(txt("gui.env.hydro", "Hydrostatic gradient [bar/m]"));
                    ui.add(egui::DragValue::new(&mut self.env_hydro).speed(0.001));
                    ui.end_row();

                    if self.env_shmin_mode == ShminMode::Gradient {
                        ui.label(txt("gui.env.shmin", "Shmin gradient [bar/m]"));
                        ui.add(egui::DragValue::new(&mut self.env_shmin).speed(0.001));
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.common.compute", "Compute")).clicked() {
                let shmin = match self.env_shmin_mode {
                    ShminMode::SnsTrend => ShminModel::SnsTrend,
                    ShminMode::Gradient => ShminModel::Gradient(self.env_shmin),
                };
                let pmax_bar = max_allowable_pressure(
                    self.env_depth,
                    self.env_crest,
                    self.env_sf,
                    self.env_hydro,
                    shmin,
                );
                let unit = self.config.default_units.pressure;
                let p_out = convert_pressure(pmax_bar, PressureUnit::Bar, unit);
                self.env_result = Some(format!("Pmax = {p_out:.3} {}", pressure_symbol(unit)));
            }
            if let Some(res) = &self.env_result {
                ui.label(res);
            }
        });
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Select a quantity, enter a value and run the conversion.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.unit.quantity", "Quantity"));
                    let before = self.conv_kind;
                    let q_options = [
                        (
                            QuantityKind::Temperature,
                            txt("gui.unit.quantity_label.temperature", "Temperature"),
                        ),
                        (
                            QuantityKind::Pressure,
                            txt("gui.unit.quantity_label.pressure", "Pressure"),
                        ),
                        (QuantityKind::Depth, txt("gui.unit.quantity_label.depth", "Depth")),
                        (
                            QuantityKind::Density,
                            txt("gui.unit.quantity_label.density", "Density"),
                        ),
                        (
                            QuantityKind::Compressibility,
                            txt("gui.unit.quantity_label.compressibility", "Compressibility"),
                        ),
                    ];
                    let selected_label = q_options
                        .iter()
                        .find(|(k, _)| *k == self.conv_kind)
                        .map(|(_, l)| l.clone())
                        .unwrap_or_default();
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for (k, label) in &q_options {
                                ui.selectable_value(&mut self.conv_kind, *k, label.clone());
                            }
                        });
                    if before != self.conv_kind {
                        let (f, t) = default_units_for_kind(self.conv_kind);
                        self.conv_from = f.to_string();
                        self.conv_to = t.to_string();
                    }
                    ui.end_row();

                    ui.label(txt("gui.unit.value", "Value"));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.unit.from", "From unit"));
                    unit_code_combo(ui, "conv_from", &mut self.conv_from, self.conv_kind);
                    ui.end_row();

                    ui.label(txt("gui.unit.to", "To unit"));
                    unit_code_combo(ui, "conv_to", &mut self.conv_to, self.conv_kind);
                    ui.end_row();
                });
            ui.add_space(8.0);
            if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                self.conv_result = match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => Some(format!("{v:.6} {}", self.conv_to.trim())),
                    Err(e) => Some(format!("{}: {e}", txt("gui.common.error_prefix", "Error"))),
                };
            }
            if let Some(res) = &self.conv_result {
                ui.label(res);
            }
        });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.settings.heading", "Settings"));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.settings.unit_system", "Unit system"));
                    let before = self.config.unit_system;
                    egui::ComboBox::from_id_source("unit_system")
                        .selected_text(format!("{:?}", self.config.unit_system))
                        .show_ui(ui, |ui| {
                            for sys in [UnitSystem::SIBar, UnitSystem::SI, UnitSystem::Field] {
                                ui.selectable_value(
                                    &mut self.config.unit_system,
                                    sys,
                                    format!("{sys:?}"),
                                );
                            }
                        });
                    if before != self.config.unit_system {
                        self.config.default_units = DefaultUnits::for_system(self.config.unit_system);
                    }
                    ui.end_row();

                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.horizontal(|ui| {
                        ui.selectable_value(
                            &mut self.theme,
                            ThemeChoice::System,
                            txt("gui.settings.theme_system", "System"),
                        );
                        ui.selectable_value(
                            &mut self.theme,
                            ThemeChoice::Light,
                            txt("gui.settings.theme_light", "Light"),
                        );
                        ui.selectable_value(
                            &mut self.theme,
                            ThemeChoice::Dark,
                            txt("gui.settings.theme_dark", "Dark"),
                        );
                    });
                    ui.end_row();

                    ui.label(txt("gui.settings.language", "Language (auto/ko/en-us)"));
                    ui.text_edit_singleline(&mut self.lang_input);
                    ui.end_row();

                    ui.label("");
                    ui.label(txt(
                        "gui.settings.language_hint",
                        "Language changes apply after restart.",
                    ));
                    ui.end_row();

                    ui.label(txt("gui.settings.font", "Custom font path (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.font_path_input);
                        if ui.button(txt("gui.settings.font_pick", "Browse font")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc"])
                                .pick_file()
                            {
                                self.font_path_input = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply font")).clicked() {
                            self.font_status =
                                Some(match load_custom_font(ctx, self.font_path_input.trim()) {
                                    Ok(()) => txt("gui.settings.saved", "Saved."),
                                    Err(e) => format!(
                                        "{}: {e}",
                                        txt("gui.common.error_prefix", "Error")
                                    ),
                                });
                        }
                    });
                    ui.end_row();
                });
            if let Some(status) = &self.font_status {
                ui.label(status);
            }
            ui.add_space(8.0);
            if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                self.config.language = self.lang_input.trim().to_string();
                self.settings_status = Some(match self.config.save() {
                    Ok(()) => txt("gui.settings.saved", "Saved."),
                    Err(e) => format!("{}: {e}", txt("gui.common.error_prefix", "Error")),
                });
            }
            if let Some(status) = &self.settings_status {
                ui.label(status);
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        match self.theme {
            ThemeChoice::System => {}
            ThemeChoice::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeChoice::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(190.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Co2Density => self.ui_co2_density(ui),
            Tab::Reservoir => self.ui_reservoir(ui),
            Tab::Compressibility => self.ui_compressibility(ui),
            Tab::Envelope => self.ui_envelope(ui),
            Tab::UnitConv => self.ui_unit_conv(ui),
            Tab::Settings => self.ui_settings(ui, ctx),
        });
    }
}

fn pressure_unit_combo(ui: &mut egui::Ui, id: &str, unit: &mut PressureUnit) {
    let options = [
        (PressureUnit::Bar, "bar"),
        (PressureUnit::KiloPascal, "kPa"),
        (PressureUnit::MegaPascal, "MPa"),
        (PressureUnit::Psi, "psi"),
        (PressureUnit::Atm, "atm"),
    ];
    let selected = options
        .iter()
        .find(|(u, _)| *u == *unit)
        .map(|(_, l)| *l)
        .unwrap_or("bar");
    egui::ComboBox::from_id_source(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for (u, label) in options {
                ui.selectable_value(unit, u, label);
            }
        });
}

fn temperature_unit_combo(ui: &mut egui::Ui, id: &str, unit: &mut TemperatureUnit) {
    let options = [
        (TemperatureUnit::Celsius, "°C"),
        (TemperatureUnit::Kelvin, "K"),
        (TemperatureUnit::Fahrenheit, "°F"),
        (TemperatureUnit::Rankine, "R"),
    ];
    let selected = options
        .iter()
        .find(|(u, _)| *u == *unit)
        .map(|(_, l)| *l)
        .unwrap_or("°C");
    egui::ComboBox::from_id_source(id)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for (u, label) in options {
                ui.selectable_value(unit, u, label);
            }
        });
}

fn unit_code_combo(ui: &mut egui::Ui, id: &str, code: &mut String, kind: QuantityKind) {
    egui::ComboBox::from_id_source(id)
        .selected_text(code.clone())
        .show_ui(ui, |ui| {
            for option in unit_options(kind) {
                ui.selectable_value(code, option.to_string(), *option);
            }
        });
}

fn unit_options(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Temperature => &["C", "K", "F", "R"],
        QuantityKind::Pressure => &["bar", "Pa", "kPa", "MPa", "psi", "atm"],
        QuantityKind::Depth => &["m", "km", "ft"],
        QuantityKind::Density => &["kg/m3", "g/cm3", "lb/ft3"],
        QuantityKind::Compressibility => &["1/bar", "1/MPa", "1/psi", "usip"],
    }
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Temperature => ("C", "F"),
        QuantityKind::Pressure => ("bar", "psi"),
        QuantityKind::Depth => ("m", "ft"),
        QuantityKind::Density => ("kg/m3", "lb/ft3"),
        QuantityKind::Compressibility => ("1/bar", "usip"),
    }
}

fn temperature_symbol(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Kelvin => "K",
        TemperatureUnit::Fahrenheit => "°F",
        TemperatureUnit::Rankine => "R",
    }
}

fn pressure_symbol(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Bar => "bar",
        PressureUnit::Pascal => "Pa",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::MegaPascal => "MPa",
        PressureUnit::Psi => "psi",
        PressureUnit::Atm => "atm",
    }
}

fn density_symbol(unit: DensityUnit) -> &'static str {
    match unit {
        DensityUnit::KgPerCubicMeter => "kg/m3",
        DensityUnit::GramPerCubicCentimeter => "g/cm3",
        DensityUnit::PoundPerCubicFoot => "lb/ft3",
    }
}

fn compressibility_symbol(unit: CompressibilityUnit) -> &'static str {
    match unit {
        CompressibilityUnit::PerBar => "1/bar",
        CompressibilityUnit::PerMegaPascal => "1/MPa",
        CompressibilityUnit::PerPsi => "1/psi",
        CompressibilityUnit::Microsip => "usip",
    }
}
