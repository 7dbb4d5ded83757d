use eframe::egui;

use crate::gui::Section;
use crate::gui::constants::*;

struct Service {
    title: &'static str,
    description: &'static str,
    metric: &'static str,
    color: egui::Color32,
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Automation & Integrations",
        description: "Cut manual work and connect WhatsApp, email and social networks.",
        metric: "20h saved per week",
        color: BRAND_TEAL,
    },
    Service {
        title: "AI Agents & Chatbots",
        description: "Automated 24/7 customer service powered by artificial intelligence.",
        metric: "+45% lead conversion",
        color: BRAND_CORAL,
    },
    Service {
        title: "Dashboards & Analytics",
        description: "Custom dashboards with actionable real-time metrics.",
        metric: "Data-driven decisions",
        color: BRAND_TEAL,
    },
    Service {
        title: "Websites & Landing Pages",
        description: "Responsive sites optimised for conversion and SEO.",
        metric: "High performance guaranteed",
        color: BRAND_CORAL,
    },
    Service {
        title: "APIs & Integrations",
        description: "Robust APIs and integration between different systems.",
        metric: "Scalable and secure",
        color: BRAND_TEAL,
    },
    Service {
        title: "Backend & Cloud",
        description: "Scalable backend solutions with Node.js, Python and AWS.",
        metric: "99.9% availability",
        color: BRAND_CORAL,
    },
];

const COLUMNS: usize = 3;

/// Returns the section the call-to-action asked to scroll to
pub fn ui(ui: &mut egui::Ui) -> Option<Section> {
    let mut target = None;

    for row in SERVICES.chunks(COLUMNS) {
        ui.columns(COLUMNS, |cols| {
            for (col, service) in cols.iter_mut().zip(row) {
                service_card(col, service);
            }
        });
        ui.add_space(ITEM_SPACING);
    }

    ui.add_space(ITEM_SPACING);
    ui.vertical_centered(|ui| {
        ui.weak("Every solution is tailored to the specific needs of your business");
        if ui
            .add(egui::Button::new(egui::RichText::new("See how I can help your business \u{2192}").color(BRAND_TEAL)).frame(false))
            .clicked()
        {
            target = Some(Section::Contact);
        }
    });

    target
}

fn service_card(ui: &mut egui::Ui, service: &Service) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(service.title).heading().color(service.color));
        ui.add_space(ITEM_SPACING / 2.0);
        ui.label(service.description);
        ui.separator();
        ui.label(egui::RichText::new(format!("\u{25CF} {}", service.metric)).monospace().color(service.color));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_accents_alternate() {
        for (index, service) in SERVICES.iter().enumerate() {
            let expected = if index % 2 == 0 { BRAND_TEAL } else { BRAND_CORAL };
            assert_eq!(service.color, expected, "{}", service.title);
        }
    }
}
