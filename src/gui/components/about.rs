use eframe::egui;

use crate::constants::profile;
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutAction {
    None,
    DownloadCv,
}

struct Experience {
    title: &'static str,
    period: &'static str,
    description: &'static str,
    color: egui::Color32,
}

const EXPERIENCE: [Experience; 3] = [
    Experience {
        title: "Software Engineer",
        period: "2019 - Present",
        description: "Scalable solutions in Node.js and Python. Microservices, REST APIs and cloud infrastructure.",
        color: BRAND_TEAL,
    },
    Experience {
        title: "Full Stack Developer",
        period: "2017 - 2019",
        description: "Complete web applications focused on performance, SEO and user experience.",
        color: BRAND_CORAL,
    },
    Experience {
        title: "Data Science & AI Student",
        period: "2023 - Present",
        description: "Machine learning, statistics and data analysis applied to business.",
        color: BRAND_TEAL,
    },
];

const SKILL_GROUPS: [(&str, &[&str]); 3] = [
    (
        "Backend & Cloud",
        &["Node.js", "TypeScript", "Python", "Express", "FastAPI", "AWS", "Docker"],
    ),
    ("Databases", &["PostgreSQL", "MongoDB", "Redis"]),
    ("AI & Integrations", &["OpenAI", "REST APIs", "GraphQL", "WhatsApp API"]),
];

const STUDY_AREAS: [&str; 3] = [
    "Data Science & Statistics",
    "Artificial Intelligence & Machine Learning",
    "Distributed Systems Architecture",
];

const STATS: [(&str, &str); 2] = [("5+", "Years of experience"), ("20+", "Completed projects")];

pub fn ui(ui: &mut egui::Ui, email: &str) -> AboutAction {
    let mut action = AboutAction::None;

    ui.columns(2, |cols| {
        cols[0].group(|ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(profile::NAME).heading().strong());
                ui.label(egui::RichText::new(profile::ROLE).color(BRAND_TEAL));
                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    ui.hyperlink_to("GitHub", profile::GITHUB_URL);
                    ui.hyperlink_to("LinkedIn", profile::LINKEDIN_URL);
                    if let Some(link) = mailto_link(email) {
                        ui.hyperlink_to("Email", link);
                    }
                });
                ui.add_space(ITEM_SPACING);

                if ui
                    .add(egui::Button::new(egui::RichText::new("\u{2B07} Download CV").color(egui::Color32::WHITE)).fill(BRAND_TEAL))
                    .clicked()
                {
                    action = AboutAction::DownloadCv;
                }

                ui.separator();
                ui.columns(STATS.len(), |stats| {
                    for (col, (value, label)) in stats.iter_mut().zip(STATS) {
                        col.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(value).strong().color(BRAND_TEAL));
                            ui.weak(label);
                        });
                    }
                });
            });
        });

        let ui = &mut cols[1];
        ui.label(
            "As a software engineer focused on backend and artificial intelligence, my mission is to \
             democratise access to cutting-edge technology for local businesses and content creators.",
        );
        ui.label(
            "Every company, whatever its size, deserves tools that automate processes, surface insights \
             and scale results. That is what I build: practical solutions that work.",
        );
        ui.add_space(ITEM_SPACING);

        ui.label(egui::RichText::new("Experience").strong());
        for entry in &EXPERIENCE {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new(entry.title).strong().color(entry.color));
                ui.label(egui::RichText::new(entry.period).color(BRAND_TEAL));
                ui.label(entry.description);
            });
        }
        ui.add_space(ITEM_SPACING);

        ui.group(|ui| {
            ui.label(egui::RichText::new("Technical expertise").strong());
            for (group, skills) in SKILL_GROUPS {
                ui.add_space(ITEM_SPACING / 2.0);
                ui.weak(group.to_uppercase());
                ui.horizontal_wrapped(|ui| {
                    for skill in skills {
                        ui.label(egui::RichText::new(*skill).monospace().color(BRAND_TEAL));
                    }
                });
            }
            ui.separator();
            ui.weak("CONTINUOUS STUDY");
            for area in STUDY_AREAS {
                ui.label(format!("\u{2022} {area}"));
            }
        });
    });

    action
}

/// `mailto:` link for a configured address; nothing for a blank one
pub fn mailto_link(email: &str) -> Option<String> {
    let email = email.trim();
    (!email.is_empty()).then(|| format!("mailto:{email}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_link() {
        assert_eq!(mailto_link(" me@example.com "), Some("mailto:me@example.com".to_string()));
        assert_eq!(mailto_link("  "), None);
    }
}
