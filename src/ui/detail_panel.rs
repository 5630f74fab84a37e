use chrono::NaiveDate;
use egui::{Context, RichText, Window};

use crate::io::IconMap;
use crate::model::date::{self, DisplayLocale};
use crate::model::item::{ItemPayload, TimelineItem};
use crate::ui::theme;

/// Render the detail window for the selected item. Returns false once the
/// user closes it.
pub fn show_detail_panel(
    item: &TimelineItem,
    tech_icons: &IconMap,
    company_icons: &IconMap,
    locale: DisplayLocale,
    today: NaiveDate,
    ctx: &Context,
) -> bool {
    let mut open = true;
    Window::new(RichText::new(&item.title).strong().size(14.0))
        .id(egui::Id::new(("item-detail", &item.id)))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 16.0])
        .default_width(340.0)
        .show(ctx, |ui| {
            if !item.subtitle.is_empty() {
                let subtitle = ui.label(
                    RichText::new(&item.subtitle)
                        .font(theme::font_header())
                        .color(theme::TEXT_SECONDARY),
                );
                if let Some(icon) = company_icons.lookup(&item.subtitle) {
                    let _ = subtitle.on_hover_text(icon);
                }
            }

            let period = match item.end {
                Some(end) if end == item.start => date::format_month_year(item.start, locale),
                Some(end) => format!(
                    "{} → {}",
                    date::format_month_year(item.start, locale),
                    date::format_month_year(end, locale)
                ),
                None => format!("{} → Present", date::format_month_year(item.start, locale)),
            };
            ui.label(RichText::new(period).color(theme::TEXT_DIM).size(11.0));
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            match &item.payload {
                ItemPayload::Mission(mission) => {
                    if !mission.context.is_empty() {
                        ui.label(&mission.context);
                        ui.add_space(6.0);
                    }
                    if !mission.technologies.is_empty() {
                        ui.label(
                            RichText::new("Technologies")
                                .small()
                                .weak()
                                .color(theme::TEXT_SECONDARY),
                        );
                        for tech in &mission.technologies {
                            ui.horizontal(|ui| {
                                let name = ui.label(RichText::new(&tech.name).strong().size(11.5));
                                if let Some(icon) = tech_icons.lookup(&tech.name) {
                                    let _ = name.on_hover_text(icon);
                                }
                                ui.label(
                                    RichText::new(tech.frequency.label())
                                        .size(10.5)
                                        .color(theme::TEXT_SECONDARY),
                                );
                            });
                            if !tech.comments.is_empty() {
                                ui.label(
                                    RichText::new(&tech.comments)
                                        .size(10.5)
                                        .color(theme::TEXT_DIM),
                                );
                            }
                        }
                        ui.add_space(6.0);
                    }
                    if !mission.tasks.is_empty() {
                        ui.label(
                            RichText::new("Tasks")
                                .small()
                                .weak()
                                .color(theme::TEXT_SECONDARY),
                        );
                        for task in &mission.tasks {
                            ui.label(format!("• {task}"));
                        }
                    }
                }
                ItemPayload::Company(company) => {
                    if !company.responsibilities.is_empty() {
                        ui.label(
                            RichText::new("Responsibilities")
                                .small()
                                .weak()
                                .color(theme::TEXT_SECONDARY),
                        );
                        for resp in &company.responsibilities {
                            ui.label(format!("• {resp}"));
                        }
                    }
                }
                ItemPayload::Education(edu) => {
                    ui.label(&edu.institution);
                }
                ItemPayload::Event(event) => {
                    if !event.kind.is_empty() {
                        ui.label(
                            RichText::new(&event.kind)
                                .small()
                                .weak()
                                .color(theme::TEXT_SECONDARY),
                        );
                    }
                    if !event.description.is_empty() {
                        ui.label(&event.description);
                    }
                }
            }

            let months = date::months_between(item.start, item.effective_end(today));
            if months > 1 {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("{months} months"))
                        .size(10.0)
                        .color(theme::TEXT_DIM),
                );
            }
        });
    open
}
