use chrono::NaiveDate;

use crate::io::{self, IconMap};
use crate::model::{build_timeline, DisplayLocale, Profile, TimelineItem, TimelineViewport};
use crate::ui;

const DEFAULT_PROFILE: &str = include_str!("../assets/profile.json");
const COMPANY_ICONS: &str = include_str!("../assets/companies.json");
const TECH_ICONS: &str = include_str!("../assets/technologies.json");

/// Main application state.
pub struct TimelineApp {
    pub profile: Profile,
    /// Normalized items, rebuilt whenever the profile changes.
    pub items: Vec<TimelineItem>,
    pub viewport: TimelineViewport,
    pub search_query: String,
    pub selected_item: Option<String>,
    pub locale: DisplayLocale,
    pub company_icons: IconMap,
    pub tech_icons: IconMap,
    pub status_message: String,
}

impl TimelineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let profile = io::parse_profile(DEFAULT_PROFILE).unwrap_or_else(|e| {
            eprintln!("Bundled profile is invalid: {e}");
            Profile::default()
        });
        let company_icons = IconMap::from_json(COMPANY_ICONS).unwrap_or_default();
        let tech_icons = IconMap::from_json(TECH_ICONS).unwrap_or_default();

        let mut app = Self {
            profile,
            items: Vec::new(),
            viewport: TimelineViewport::new(),
            search_query: String::new(),
            selected_item: None,
            locale: DisplayLocale::default(),
            company_icons,
            tech_icons,
            status_message: "Ready".to_string(),
        };
        app.rebuild_items();
        app
    }

    /// The only wall-clock read; everything below takes the date as a value.
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Re-run normalization from the current profile. Skipped records are
    /// reported in the status bar rather than failing the whole load.
    pub fn rebuild_items(&mut self) {
        let today = self.today();
        let (items, warnings) = build_timeline(&self.profile, today);
        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }
        self.items = items;
        self.selected_item = None;
        self.status_message = if warnings.is_empty() {
            format!("Loaded {} timeline entries", self.items.len())
        } else {
            format!(
                "Loaded {} timeline entries ({} skipped)",
                self.items.len(),
                warnings.len()
            )
        };
    }

    pub fn open_profile(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Profile JSON", &["json"])
            .pick_file()
        {
            match io::load_profile(&path) {
                Ok(profile) => {
                    self.profile = profile;
                    self.viewport.reset_zoom();
                    self.search_query.clear();
                    self.rebuild_items();
                }
                Err(e) => {
                    self.status_message = format!("Error loading profile: {e}");
                }
            }
        }
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Keyboard zoom shortcuts
        let zoom_in = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Plus));
        let zoom_out = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Minus));
        let zoom_reset = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Num0));
        if zoom_in {
            self.viewport.zoom_in();
        }
        if zoom_out {
            self.viewport.zoom_out();
        }
        if zoom_reset {
            self.viewport.reset_zoom();
        }

        // Top panel: menu, identity banner, search
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui::header_bar::show_menu_bar(self, ui);
            ui.add_space(6.0);
            ui::header_bar::show_identity_banner(self, ui);
            ui.add_space(6.0);
            ui::search_bar::show_search_bar(&mut self.search_query, ui);
            ui.add_space(4.0);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_sub())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Zoom: {:.0}%",
                                self.viewport.zoom_percent()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(" · ")
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(format!("Entries: {}", self.items.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the timeline chart
        let today = self.today();
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default()
            .frame(chart_frame)
            .show(ctx, |ui| {
                ui::timeline_chart::show_timeline_chart(
                    &self.items,
                    &mut self.viewport,
                    &self.search_query,
                    self.locale,
                    &mut self.selected_item,
                    today,
                    ui,
                );
            });

        // Detail window for the selected item
        if let Some(id) = self.selected_item.clone() {
            if let Some(item) = self.items.iter().find(|i| i.id == id) {
                let keep_open = ui::detail_panel::show_detail_panel(
                    item,
                    &self.tech_icons,
                    &self.company_icons,
                    self.locale,
                    today,
                    ctx,
                );
                if !keep_open {
                    self.selected_item = None;
                }
            }
        }
    }
}
