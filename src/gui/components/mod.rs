pub mod about;
pub mod contact_section;
pub mod footer;
pub mod header;
pub mod hero;
pub mod portfolio_view;
pub mod services;
pub mod testimonials;
