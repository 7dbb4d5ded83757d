//! Showcase projects bundled with the application

use super::{ImpactMetric, ProjectItem, ProjectOrigin};
use crate::constants::accent;

fn metrics(pairs: &[(&str, &str)]) -> Vec<ImpactMetric> {
    pairs
        .iter()
        .map(|(label, value)| ImpactMetric::new(*label, *value))
        .collect()
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn seed_projects() -> Vec<ProjectItem> {
    vec![
        ProjectItem {
            title: "Automated Booking System".to_string(),
            client: "Aesthetics Clinic".to_string(),
            segment: "Health & Wellness".to_string(),
            description: "AI chatbot integrated with WhatsApp Business, automatic calendar and reminders."
                .to_string(),
            problem: "30% of bookings lost to slow replies. Receptionist overloaded.".to_string(),
            impact: metrics(&[("Conversion", "+45%"), ("Time saved", "20h/week"), ("Satisfaction", "92%")]),
            stack: tags(&["Node.js", "TypeScript", "PostgreSQL", "WhatsApp API", "OpenAI"]),
            color: accent::TEAL.to_string(),
            image: "https://images.unsplash.com/photo-1725798451557-fc60db3eb6a2?fit=max&fm=jpg&q=80&w=1080"
                .to_string(),
            url: "#".to_string(),
            origin: ProjectOrigin::Showcase,
        },
        ProjectItem {
            title: "Performance Dashboard".to_string(),
            client: "Beauty Salon".to_string(),
            segment: "Beauty & Aesthetics".to_string(),
            description: "Web dashboard with real-time metrics: revenue per service, average ticket, retention."
                .to_string(),
            problem: "Hard to tell which services were profitable or how each professional performed."
                .to_string(),
            impact: metrics(&[("Average ticket", "+35%"), ("Decisions", "Data-driven"), ("ROI", "280%")]),
            stack: tags(&["React", "Node.js", "Express", "MongoDB", "Recharts"]),
            color: accent::CORAL.to_string(),
            image: "https://images.unsplash.com/photo-1759752394755-1241472b589d?fit=max&fm=jpg&q=80&w=1080"
                .to_string(),
            url: "#".to_string(),
            origin: ProjectOrigin::Showcase,
        },
        ProjectItem {
            title: "Marketing Automation".to_string(),
            client: "Dental Office".to_string(),
            segment: "Health".to_string(),
            description: "Personalised e-mail and SMS automation driven by patient history.".to_string(),
            problem: "Low return rate after the first appointment. No structured follow-up.".to_string(),
            impact: metrics(&[("Return rate", "+60%"), ("No-show reduction", "85%"), ("3-month ROI", "320%")]),
            stack: tags(&["Python", "FastAPI", "PostgreSQL", "SendGrid", "Twilio"]),
            color: accent::TEAL.to_string(),
            image: "https://images.unsplash.com/photo-1566918621183-ff90d3e0553f?fit=max&fm=jpg&q=80&w=1080"
                .to_string(),
            url: "#".to_string(),
            origin: ProjectOrigin::Showcase,
        },
    ]
}
