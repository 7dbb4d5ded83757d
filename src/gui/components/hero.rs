use eframe::egui;

use crate::gui::Section;
use crate::gui::constants::*;

/// Returns the section a call-to-action asked to scroll to
pub fn ui(ui: &mut egui::Ui) -> Option<Section> {
    let mut target = None;

    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_SPACING);
        ui.label(egui::RichText::new("Software engineer for small businesses").color(BRAND_TEAL));
        ui.add_space(ITEM_SPACING);
        ui.label(
            egui::RichText::new("Technology that turns routine into revenue")
                .size(34.0)
                .strong(),
        );
        ui.add_space(ITEM_SPACING);
        ui.label("Automation, dashboards and integrations with measurable impact on your numbers.");
        ui.add_space(SECTION_SPACING / 2.0);

        ui.horizontal(|ui| {
            if ui.button("See projects").clicked() {
                target = Some(Section::Portfolio);
            }
            if ui
                .add(egui::Button::new(egui::RichText::new("Talk to me").color(egui::Color32::WHITE)).fill(BRAND_CORAL))
                .clicked()
            {
                target = Some(Section::Contact);
            }
        });
    });

    target
}
