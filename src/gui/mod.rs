//! Desktop front end built on egui/eframe

mod app;
pub mod components;
pub mod constants;

pub use app::{run_gui, LaunchOptions};

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    Portfolio,
    About,
    Testimonials,
    Contact,
}

impl Section {
    /// Sections listed in the header, in display order
    pub const NAV: [Section; 4] = [
        Section::Services,
        Section::Portfolio,
        Section::About,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::About => "About",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_lists_content_sections_in_page_order() {
        let labels: Vec<_> = Section::NAV.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Services", "Portfolio", "About", "Contact"]);
        assert!(!Section::NAV.contains(&Section::Hero));
    }
}
