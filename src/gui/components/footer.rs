use eframe::egui;

use super::about::mailto_link;
use crate::config::site::ContactSettings;
use crate::constants::profile;
use crate::gui::Section;
use crate::gui::constants::*;

const SERVICE_LINKS: [&str; 6] = [
    "Automation & Integrations",
    "AI Agents",
    "Dashboards",
    "Websites & Landing Pages",
    "Backend APIs",
    "Consulting",
];

const TECHNOLOGIES: [&str; 6] = ["Node.js", "TypeScript", "Python", "React", "AWS", "Docker"];

/// Returns the section a quick link (or "back to top") asked to scroll to
pub fn ui(ui: &mut egui::Ui, contact: &ContactSettings) -> Option<Section> {
    let mut target = None;

    ui.columns(4, |cols| {
        let ui = &mut cols[0];
        ui.label(egui::RichText::new(profile::NAME).strong());
        ui.weak(
            "Software engineer specialised in backend and AI. I turn technology into practical \
             results for local businesses.",
        );
        ui.horizontal(|ui| {
            ui.hyperlink_to("GitHub", profile::GITHUB_URL);
            ui.hyperlink_to("LinkedIn", profile::LINKEDIN_URL);
            if let Some(link) = mailto_link(&contact.email) {
                ui.hyperlink_to("Email", link);
            }
        });
        for detail in [&contact.email, &contact.phone, &contact.location] {
            if !detail.is_empty() {
                ui.weak(detail.as_str());
            }
        }

        let ui = &mut cols[1];
        ui.label(egui::RichText::new("Navigation").strong());
        for section in Section::NAV {
            if ui.link(section.label()).clicked() {
                target = Some(section);
            }
        }

        let ui = &mut cols[2];
        ui.label(egui::RichText::new("Services").strong());
        for service in SERVICE_LINKS {
            ui.weak(service);
        }

        let ui = &mut cols[3];
        ui.label(egui::RichText::new("Technologies").strong());
        for tech in TECHNOLOGIES {
            ui.weak(tech);
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        ui.weak(format!("\u{00A9} {}. All rights reserved.", profile::NAME));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{2191} Back to top").clicked() {
                target = Some(Section::Hero);
            }
        });
    });
    ui.add_space(PADDING);

    target
}
