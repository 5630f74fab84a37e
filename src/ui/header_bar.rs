use egui::{menu, RichText, Ui};

use crate::app::TimelineApp;
use crate::model::DisplayLocale;
use crate::ui::theme;

/// Render the top menu bar.
pub fn show_menu_bar(app: &mut TimelineApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_header()), |ui| {
            if ui.button("  Open Profile...").clicked() {
                app.open_profile();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_header()), |ui| {
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.viewport.zoom_in();
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.viewport.zoom_out();
                ui.close_menu();
            }
            if ui.button("  Reset Zoom").clicked() {
                app.viewport.reset_zoom();
                ui.close_menu();
            }
            ui.separator();
            ui.label(RichText::new("Date Language").small().weak());
            if ui
                .radio_value(&mut app.locale, DisplayLocale::French, "Français")
                .clicked()
            {
                ui.close_menu();
            }
            if ui
                .radio_value(&mut app.locale, DisplayLocale::English, "English")
                .clicked()
            {
                ui.close_menu();
            }
        });

        // Right-aligned profile name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(&app.profile.name).size(11.0).weak());
        });
    });
}

/// Render the identity banner: name, role, and contact link buttons.
pub fn show_identity_banner(app: &TimelineApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&app.profile.name)
                    .font(theme::font_title())
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                RichText::new(&app.profile.role)
                    .font(theme::font_header())
                    .color(theme::TEXT_SECONDARY),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let contacts = &app.profile.contacts;
            if !contacts.github.is_empty()
                && ui
                    .button(format!("{} GitHub", egui_phosphor::regular::GITHUB_LOGO))
                    .clicked()
            {
                let _ = open::that(&contacts.github);
            }
            if !contacts.linkedin.is_empty()
                && ui
                    .button(format!("{} LinkedIn", egui_phosphor::regular::LINKEDIN_LOGO))
                    .clicked()
            {
                let _ = open::that(&contacts.linkedin);
            }
            if !contacts.phone.is_empty()
                && ui
                    .button(format!("{} {}", egui_phosphor::regular::PHONE, contacts.phone))
                    .clicked()
            {
                let _ = open::that(format!("tel:{}", contacts.phone));
            }
            if !contacts.email.is_empty()
                && ui
                    .button(format!(
                        "{} {}",
                        egui_phosphor::regular::ENVELOPE_SIMPLE,
                        contacts.email
                    ))
                    .clicked()
            {
                let _ = open::that(format!("mailto:{}", contacts.email));
            }
        });
    });
}
