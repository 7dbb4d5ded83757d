use eframe::egui;

use crate::gui::constants::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    quote: &'static str,
    rating: u8,
    result: &'static str,
    avatar: &'static str,
    color: egui::Color32,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Carla Mendes",
        role: "Owner",
        company: "Beauty Studio",
        quote: "The automated booking system completely changed my routine. I used to lose hours answering messages. Now everything runs on its own and my clients love how easy it is.",
        rating: 5,
        result: "+45% conversion",
        avatar: "C",
        color: BRAND_TEAL,
    },
    Testimonial {
        name: "Dr. Ricardo Santos",
        role: "Dentist",
        company: "Dental Practice",
        quote: "Follow-up automation raised my patient return rate by 60%. Emanuel delivered exactly what he promised, with a surprising ROI in under 3 months.",
        rating: 5,
        result: "+60% returns",
        avatar: "R",
        color: BRAND_CORAL,
    },
    Testimonial {
        name: "Juliana Costa",
        role: "Manager",
        company: "Hair Salon",
        quote: "The dashboard gave me full visibility of the business. Now I know exactly which services are most profitable and how each professional is performing.",
        rating: 5,
        result: "+35% average ticket",
        avatar: "J",
        color: BRAND_TEAL,
    },
    Testimonial {
        name: "Marcos Oliveira",
        role: "Nutritionist",
        company: "Private Practice",
        quote: "Extremely competent and attentive. He understood my needs perfectly and built a tailor-made solution. I recommend him without hesitation!",
        rating: 5,
        result: "100% satisfaction",
        avatar: "M",
        color: BRAND_CORAL,
    },
];

const TRUST_INDICATORS: [(&str, &str); 4] = [
    ("100%", "Satisfied clients"),
    ("5.0", "Average rating"),
    ("20+", "Projects delivered"),
    ("24h", "Response time"),
];

const MAX_RATING: u8 = 5;

pub fn ui(ui: &mut egui::Ui) {
    for row in TESTIMONIALS.chunks(2) {
        ui.columns(2, |cols| {
            for (col, testimonial) in cols.iter_mut().zip(row) {
                testimonial_card(col, testimonial);
            }
        });
        ui.add_space(ITEM_SPACING);
    }

    ui.add_space(ITEM_SPACING);
    ui.columns(TRUST_INDICATORS.len(), |cols| {
        for (col, (value, label)) in cols.iter_mut().zip(TRUST_INDICATORS) {
            col.vertical_centered(|ui| {
                ui.label(egui::RichText::new(value).size(22.0).strong().color(BRAND_TEAL));
                ui.weak(label);
            });
        }
    });
}

fn testimonial_card(ui: &mut egui::Ui, testimonial: &Testimonial) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(star_row(testimonial.rating)).color(egui::Color32::GOLD));
        ui.add_space(ITEM_SPACING / 2.0);
        ui.label(egui::RichText::new(format!("\u{201C}{}\u{201D}", testimonial.quote)).italics());
        ui.add_space(ITEM_SPACING / 2.0);
        ui.label(egui::RichText::new(format!("\u{25CF} {}", testimonial.result)).monospace().color(testimonial.color));
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(testimonial.avatar).strong().color(testimonial.color));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(testimonial.name).strong());
                ui.weak(format!("{} - {}", testimonial.role, testimonial.company));
            });
        });
    });
}

fn star_row(rating: u8) -> String {
    "\u{2605}".repeat(usize::from(rating.min(MAX_RATING)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_row_is_clamped() {
        assert_eq!(star_row(0), "");
        assert_eq!(star_row(3).chars().count(), 3);
        assert_eq!(star_row(9).chars().count(), 5);
    }

    #[test]
    fn test_all_ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=MAX_RATING).contains(&t.rating)));
    }
}
