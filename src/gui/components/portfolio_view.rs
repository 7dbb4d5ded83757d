//! Portfolio carousel: project cards, arrows and pagination dots

use eframe::egui;

use crate::gui::constants::*;
use crate::portfolio::{Portfolio, ProjectItem, ProjectOrigin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    None,
    Previous,
    Next,
    GoTo(usize),
}

pub fn ui(ui: &mut egui::Ui, portfolio: &Portfolio) -> CarouselAction {
    let mut action = CarouselAction::None;
    let carousel = portfolio.carousel();
    let columns = carousel.page_size();

    if portfolio.is_loading() {
        ui.columns(columns, |cols| {
            for col in cols.iter_mut() {
                placeholder_card(col);
            }
        });
        return action;
    }

    if carousel.total_pages() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(SECTION_SPACING);
            ui.weak("No projects to show yet.");
        });
        return action;
    }

    ui.horizontal(|ui| {
        let controls = carousel.shows_controls();
        let arrow_width = if controls { 40.0 } else { 0.0 };

        if controls && ui.button("\u{25C0}").on_hover_text("Previous").clicked() {
            action = CarouselAction::Previous;
        }

        let width = (ui.available_width() - arrow_width).max(0.0);
        ui.allocate_ui(egui::vec2(width, CARD_MIN_HEIGHT), |ui| {
            ui.columns(columns, |cols| {
                for (slot, (col, item)) in cols.iter_mut().zip(carousel.current_slice()).enumerate() {
                    project_card(col, slot, item);
                }
            });
        });

        if controls && ui.button("\u{25B6}").on_hover_text("Next").clicked() {
            action = CarouselAction::Next;
        }
    });

    if carousel.shows_controls() {
        ui.add_space(ITEM_SPACING * 2.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for page in 0..carousel.total_pages() {
                    let selected = page == carousel.current_page();
                    let dot = if selected { "\u{25CF}" } else { "\u{25CB}" };
                    if ui
                        .selectable_label(selected, dot)
                        .on_hover_text(format!("Go to page {}", page + 1))
                        .clicked()
                    {
                        action = CarouselAction::GoTo(page);
                    }
                }
            });
            ui.weak(format!(
                "Page {} of {} \u{00B7} {} projects",
                carousel.current_page() + 1,
                carousel.total_pages(),
                carousel.items().len()
            ));
        });
    }

    action
}

/// Duplicate items may share a page, so the slot keeps the ids apart
fn impact_grid_id(slot: usize, item: &ProjectItem) -> egui::Id {
    egui::Id::new(("impact", slot, &item.title, &item.url))
}

fn accent_color(item: &ProjectItem) -> egui::Color32 {
    egui::Color32::from_hex(&item.color).unwrap_or(BRAND_TEAL)
}

fn accent_bar(ui: &mut egui::Ui, color: egui::Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ACCENT_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, 0.0, color);
    response
}

fn project_card(ui: &mut egui::Ui, slot: usize, item: &ProjectItem) {
    let accent = accent_color(item);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_height(CARD_MIN_HEIGHT);
        accent_bar(ui, accent).on_hover_text(&item.image);
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&item.segment).color(accent).small().strong());
            if item.origin == ProjectOrigin::Repository {
                ui.weak("\u{2387}");
            }
        });

        ui.label(egui::RichText::new(&item.title).heading());
        ui.weak(&item.client);
        ui.add_space(ITEM_SPACING);

        if !item.description.is_empty() {
            ui.label(&item.description);
        }
        if !item.problem.is_empty() {
            ui.label(egui::RichText::new(&item.problem).italics().small());
        }

        if !item.impact.is_empty() {
            ui.add_space(ITEM_SPACING);
            egui::Grid::new(impact_grid_id(slot, item))
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for metric in &item.impact {
                        ui.label(&metric.label);
                        ui.label(egui::RichText::new(&metric.value).monospace().color(accent));
                        ui.end_row();
                    }
                });
        }

        if !item.stack.is_empty() {
            ui.add_space(ITEM_SPACING);
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                for tech in &item.stack {
                    ui.code(tech);
                }
            });
        }

        if item.url != "#" {
            ui.add_space(ITEM_SPACING);
            ui.hyperlink_to("Open project \u{2197}", &item.url);
        }
    });
}

fn placeholder_card(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_height(CARD_MIN_HEIGHT);
        ui.vertical_centered(|ui| {
            ui.add_space(CARD_MIN_HEIGHT / 2.0 - PADDING);
            ui.spinner();
            ui.weak("Loading projects...");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::seed::seed_projects;

    #[test]
    fn test_duplicate_items_get_distinct_grid_ids() {
        let item = seed_projects().remove(0);
        assert_ne!(impact_grid_id(0, &item), impact_grid_id(1, &item));
        assert_eq!(impact_grid_id(2, &item), impact_grid_id(2, &item.clone()));
    }

    #[test]
    fn test_malformed_accent_falls_back_to_brand() {
        let mut item = seed_projects().remove(0);
        item.color = "teal".to_string();
        assert_eq!(accent_color(&item), BRAND_TEAL);
    }
}
