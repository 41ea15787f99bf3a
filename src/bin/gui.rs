#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use cap_recycling_calculator::{
    app,
    config::{self, ThemeChoice},
    form::{self, EstimateForm},
    i18n,
    recycling::{BottleKind, Period},
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};

#[derive(Parser)]
#[command(name = "cap_recycling_calculator")]
struct GuiArgs {
    /// 언어 코드 (auto, pt-br, en-us)
    #[arg(long, short = 'L')]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config error, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let title = app::translator_for(&app_cfg, None)
        .t(i18n::keys::APP_TITLE)
        .to_string();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(title.clone())
        .with_inner_size([600.0, 450.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
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

/// 바이너리 폰트 바이트를 egui 기본 글꼴 앞에 등록한다.
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

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Font file not found: {}", path.display()));
    }
    let bytes = fs::read(path).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    form: EstimateForm,
    lang_input: String,
    settings_status: Option<String>,
    show_settings_modal: bool,
    show_about_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let tr = app::translator_for(&config, None);
        eprintln!(
            "GUI language resolved: {}, overrides_loaded={}",
            tr.language_code(),
            tr.lookup("gui.button.calculate").is_some()
        );
        Self {
            form: EstimateForm::new(config.default_period),
            lang_input: config.language.clone(),
            config,
            tr,
            settings_status: None,
            show_settings_modal: false,
            show_about_modal: false,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.text(key, default)
    }

    fn period_label(&self, period: Period) -> String {
        self.tr.t(i18n::period_key(period)).to_string()
    }

    fn apply_theme(&self, ctx: &egui::Context, frame: &Frame) {
        let visuals = match self.config.theme {
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
            ThemeChoice::System => frame
                .info()
                .system_theme
                .map(|t| t.egui_visuals())
                .unwrap_or_else(egui::Visuals::dark),
        };
        ctx.set_visuals(visuals);
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.input.heading", "Bottles consumed in the period"));
        ui.label(self.tr.t(i18n::keys::HELP_CALCULATE));
        ui.add_space(8.0);

        let labels: Vec<(BottleKind, String)> = BottleKind::ALL
            .iter()
            .map(|k| (*k, self.tr.t(i18n::bottle_key(*k)).to_string()))
            .collect();
        let period_label = self.tr.t(i18n::keys::FIELD_PERIOD).to_string();
        let period_options: Vec<(Period, String)> = Period::ALL
            .iter()
            .map(|p| (*p, self.period_label(*p)))
            .collect();
        let selected = self.period_label(self.form.period);

        egui::Grid::new("bottle_inputs")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for (kind, label) in &labels {
                    label_with_tip(ui, label, "0, 1, 2, …");
                    ui.add(
                        egui::TextEdit::singleline(self.form.field_mut(*kind))
                            .desired_width(140.0),
                    );
                    ui.end_row();
                }
                ui.label(period_label.as_str());
                egui::ComboBox::from_id_source("period_choice")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (period, label) in &period_options {
                            ui.selectable_value(&mut self.form.period, *period, label.as_str());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui
            .button(self.txt("gui.button.calculate", "Calculate"))
            .clicked()
        {
            // 오류는 form에 남고 아래 오류 창으로 표시된다.
            let _ = self.form.calculate();
        }

        ui.add_space(8.0);
        ui.separator();
        ui.heading(self.txt("gui.result.heading", "Annual estimate"));
        let placeholder = self.txt("gui.result.placeholder", "—");
        let (weight, value) = self
            .form
            .formatted_result()
            .unwrap_or_else(|| (placeholder.clone(), placeholder));
        egui::Grid::new("results")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(i18n::keys::RESULT_ANNUAL_WEIGHT));
                ui.strong(weight);
                ui.end_row();
                ui.label(self.tr.t(i18n::keys::RESULT_ANNUAL_VALUE));
                ui.strong(value);
                ui.end_row();
            });
    }

    fn ui_error_window(&mut self, ctx: &egui::Context) {
        let Some(err) = self.form.error() else {
            return;
        };
        let message = form::describe_error(&self.tr, err);
        let mut dismiss = false;
        egui::Window::new(self.txt("gui.error.title", "Invalid input"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(6.0);
                if ui.button(self.txt("gui.button.close", "Close")).clicked() {
                    dismiss = true;
                }
            });
        if dismiss {
            self.form.dismiss_error();
        }
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new(self.txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.txt("gui.settings.language", "Language"));
                let auto_label = self.txt("gui.settings.lang.auto", "System");
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), auto_label);
                        ui.selectable_value(&mut self.lang_input, "pt-br".into(), "Português (BR)");
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                    });

                ui.separator();
                ui.label(self.txt("gui.settings.theme", "Theme"));
                let themes = [
                    (ThemeChoice::System, self.txt("gui.settings.theme.system", "System")),
                    (ThemeChoice::Light, self.txt("gui.settings.theme.light", "Light")),
                    (ThemeChoice::Dark, self.txt("gui.settings.theme.dark", "Dark")),
                ];
                ui.horizontal(|ui| {
                    for (theme, label) in themes {
                        ui.selectable_value(&mut self.config.theme, theme, label);
                    }
                });

                ui.separator();
                ui.label(self.txt("gui.settings.default_period", "Default period"));
                let periods: Vec<(Period, String)> = Period::ALL
                    .iter()
                    .map(|p| (*p, self.period_label(*p)))
                    .collect();
                ui.horizontal(|ui| {
                    for (period, label) in periods {
                        ui.selectable_value(&mut self.config.default_period, period, label);
                    }
                });

                ui.separator();
                ui.label(self.txt("gui.settings.font", "Custom font"));
                if ui
                    .button(self.txt("gui.button.pick_font", "Choose font file…"))
                    .clicked()
                {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Font", &["ttf", "otf", "ttc"])
                        .pick_file()
                    {
                        self.settings_status = Some(match load_custom_font(ctx, &path) {
                            Ok(()) => path.display().to_string(),
                            Err(e) => {
                                eprintln!("Font error: {e}");
                                e
                            }
                        });
                    }
                }

                ui.separator();
                if ui.button(self.txt("gui.button.save", "Save settings")).clicked() {
                    self.config.language = self.lang_input.clone();
                    self.tr = app::translator_for(&self.config, None);
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => self.txt("gui.settings.saved", "Saved."),
                        Err(e) => format!("{} {e}", self.txt("gui.settings.save_error", "Save error:")),
                    });
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg.as_str());
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_about_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_about_modal;
        egui::Window::new(self.txt("gui.about.title", "About"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading(self.txt("gui.about.app", "Offline calculator for PET bottle cap recycling"));
                ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(self.txt("gui.about.ratio_large", "2L and 1L bottle caps: 500 caps = 1 kg"));
                ui.label(self.txt("gui.about.ratio_water", "Mineral water bottle caps: 1000 caps = 1 kg"));
                ui.label(self.txt("gui.about.price", "Price: R$ 0.98 per kg"));
                ui.label(self.txt(
                    "gui.about.factors",
                    "Annualization: daily × 365, weekly × 52, monthly × 12, annual × 1",
                ));
            });
        self.show_about_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.apply_theme(ctx, frame);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("PescaViva");
                ui.separator();
                if ui
                    .button(self.txt("gui.button.settings", "Settings"))
                    .clicked()
                {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.button.about", "About")).clicked() {
                    self.show_about_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }
        if self.show_about_modal {
            self.ui_about_window(ctx);
        }

        // 오류 창이 떠 있는 동안 입력 화면은 잠근다.
        let blocking = self.form.error().is_some();
        self.ui_error_window(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocking, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.ui_form(ui));
            });
        });
    }
}
