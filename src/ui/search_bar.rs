use egui::{RichText, Ui};

use crate::ui::theme;

/// One-click query shortcuts, mirroring the most-searched technologies.
pub const QUICK_FILTERS: [&str; 3] = ["Kotlin", "Flutter", "Mobile"];

/// Render the search input and quick-filter toggles.
pub fn show_search_bar(query: &mut String, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                .color(theme::TEXT_SECONDARY),
        );
        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("Search missions, technologies, companies...")
                .desired_width(280.0),
        );
        if !query.is_empty()
            && ui
                .small_button(egui_phosphor::regular::X)
                .on_hover_text("Clear search")
                .clicked()
        {
            query.clear();
        }

        ui.separator();

        for name in QUICK_FILTERS {
            let active = query.eq_ignore_ascii_case(name);
            if ui.selectable_label(active, name).clicked() {
                if active {
                    query.clear();
                } else {
                    *query = name.to_lowercase();
                }
            }
        }
    });
}
