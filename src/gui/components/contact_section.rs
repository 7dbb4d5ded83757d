use eframe::egui;

use crate::config::site::ContactSettings;
use crate::contact::ContactForm;
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    None,
    SendEmail,
    OpenWhatsApp,
}

pub fn ui(ui: &mut egui::Ui, form: &mut ContactForm, settings: &ContactSettings) -> ContactAction {
    let mut action = ContactAction::None;

    ui.columns(2, |cols| {
        // Channels
        cols[0].group(|ui| {
            ui.label(egui::RichText::new("Contact details").strong());
            ui.add_space(ITEM_SPACING);

            if !settings.email.is_empty() {
                ui.horizontal(|ui| {
                    ui.label("\u{2709}");
                    ui.hyperlink_to(&settings.email, format!("mailto:{}", settings.email));
                });
            }
            if !settings.phone.is_empty() {
                ui.horizontal(|ui| {
                    ui.label("\u{260E}");
                    ui.label(&settings.phone);
                });
            }
            if !settings.location.is_empty() {
                ui.horizontal(|ui| {
                    ui.label("\u{1F4CD}");
                    ui.label(&settings.location);
                });
            }

            if !settings.whatsapp.is_empty() {
                ui.add_space(ITEM_SPACING);
                if ui
                    .add(egui::Button::new(egui::RichText::new("Chat on WhatsApp").color(egui::Color32::WHITE)).fill(STATUS_SUCCESS))
                    .clicked()
                {
                    action = ContactAction::OpenWhatsApp;
                }
            }
        });

        // Form
        cols[1].group(|ui| {
            ui.label(egui::RichText::new("Send a message").strong());
            ui.add_space(ITEM_SPACING);

            egui::Grid::new("contact_form")
                .num_columns(2)
                .spacing([ITEM_SPACING, ITEM_SPACING])
                .show(ui, |ui| {
                    ui.label("Name *");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Email *");
                    ui.text_edit_singleline(&mut form.email);
                    ui.end_row();

                    ui.label("Company");
                    ui.text_edit_singleline(&mut form.company);
                    ui.end_row();
                });

            ui.label("Message *");
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );

            ui.checkbox(&mut form.consent, "I agree to be contacted about my request");
            ui.add_space(ITEM_SPACING);

            if ui
                .add(egui::Button::new(egui::RichText::new("Send message").color(egui::Color32::WHITE)).fill(BRAND_TEAL))
                .clicked()
            {
                action = ContactAction::SendEmail;
            }
        });
    });

    action
}
