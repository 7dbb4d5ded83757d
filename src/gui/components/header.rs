use eframe::egui;

use crate::gui::Section;
use crate::gui::constants::*;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    ToggleTheme,
    ScrollTo(Section),
}

pub fn ui(ui: &mut egui::Ui, mode: ThemeMode) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.add_space(PADDING);
        if ui
            .add(egui::Button::new(egui::RichText::new("Emanuel Abreu").heading().strong()).frame(false))
            .clicked()
        {
            action = HeaderAction::ScrollTo(Section::Hero);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(PADDING);

            if ui
                .add(egui::Button::new(egui::RichText::new("Get a quote").color(egui::Color32::WHITE)).fill(BRAND_TEAL))
                .clicked()
            {
                action = HeaderAction::ScrollTo(Section::Contact);
            }

            // Icon shows the mode a click switches to
            let (icon, hint) = match mode {
                ThemeMode::Light => ("\u{1F319}", "Switch to dark theme"),
                ThemeMode::Dark => ("\u{2600}", "Switch to light theme"),
            };
            if ui.button(icon).on_hover_text(hint).clicked() {
                action = HeaderAction::ToggleTheme;
            }

            ui.add_space(ITEM_SPACING);

            // right_to_left: listed in reverse display order
            for section in Section::NAV.iter().rev() {
                if ui.add(egui::Button::new(section.label()).frame(false)).clicked() {
                    action = HeaderAction::ScrollTo(*section);
                }
            }
        });
    });

    action
}
