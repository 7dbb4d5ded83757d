//! Site window implemented with egui/eframe
//!
//! The app is the composition root: it injects the egui context into the
//! theme controller as the rendering surface, starts the repository fetch and
//! owns the portfolio carousel for the lifetime of the window.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use super::components::{about, contact_section, footer, header, hero, portfolio_view, services, testimonials};
use super::components::about::AboutAction;
use super::components::contact_section::ContactAction;
use super::components::header::HeaderAction;
use super::components::portfolio_view::CarouselAction;
use super::constants::*;
use super::Section;
use crate::config::site::ContactSettings;
use crate::config::{JsonPreferenceStore, SiteConfig};
use crate::constants::contact::WHATSAPP_GREETING;
use crate::contact::{self, ContactForm};
use crate::portfolio::{seed, spawn_fetch, FetchHandle, GithubSource, Portfolio};
use crate::theme::ThemeController;

/// Everything `main` decides before the window opens
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: SiteConfig,
    /// Skip the repository fetch and show the showcase projects only
    pub offline: bool,
}

struct StatusMessage {
    text: String,
    color: egui::Color32,
    shown_at: Instant,
}

struct SiteApp {
    surface: egui::Context,
    theme: ThemeController<JsonPreferenceStore>,
    portfolio: Portfolio,
    fetch: Option<FetchHandle>,
    contact_form: ContactForm,
    contact_settings: ContactSettings,
    pending_scroll: Option<Section>,
    status_message: Option<StatusMessage>,
}

impl SiteApp {
    fn new(cc: &CreationContext<'_>, options: LaunchOptions) -> Self {
        info!("Initializing site window");

        // Host preference is read once; later system theme changes are not followed
        let host_prefers_dark = cc.egui_ctx.system_theme().map(|theme| theme == egui::Theme::Dark);
        let theme = ThemeController::new(JsonPreferenceStore::open_default(), host_prefers_dark);

        let mut surface = cc.egui_ctx.clone();
        theme.apply(&mut surface);

        let (mut portfolio, fetch) = start_portfolio(&options);
        portfolio.carousel_mut().activate(Instant::now());

        Self {
            surface,
            theme,
            portfolio,
            fetch,
            contact_form: ContactForm::default(),
            contact_settings: options.config.contact,
            pending_scroll: None,
            status_message: None,
        }
    }

    fn poll_fetch(&mut self, now: Instant) {
        let Some(handle) = self.fetch.as_mut() else {
            return;
        };
        if let Some(outcome) = handle.poll() {
            self.portfolio.apply_fetch(outcome, now);
            self.fetch = None;
        }
    }

    fn handle_header(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::None => {}
            HeaderAction::ToggleTheme => {
                self.theme.toggle(&mut self.surface);
            }
            HeaderAction::ScrollTo(section) => self.pending_scroll = Some(section),
        }
    }

    fn handle_carousel(&mut self, action: CarouselAction) {
        let carousel = self.portfolio.carousel_mut();
        match action {
            CarouselAction::None => {}
            CarouselAction::Previous => carousel.previous_page(),
            CarouselAction::Next => carousel.next_page(),
            CarouselAction::GoTo(page) => carousel.go_to_page(page),
        }
    }

    fn handle_contact(&mut self, ctx: &egui::Context, action: ContactAction) {
        match action {
            ContactAction::None => {}
            ContactAction::SendEmail => match self.contact_form.submit(&self.contact_settings.email) {
                Ok(url) => {
                    info!("Opening mail client for contact message");
                    ctx.open_url(egui::OpenUrl::same_tab(url));
                    self.set_status("Email client opened! Send the message from there.", STATUS_SUCCESS);
                }
                Err(err) => {
                    warn!(error = %err, "Contact form rejected");
                    self.set_status(format!("Could not send: {err}"), STATUS_ERROR);
                }
            },
            ContactAction::OpenWhatsApp => {
                match contact::whatsapp_url(&self.contact_settings.whatsapp, WHATSAPP_GREETING) {
                    Some(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
                    None => warn!("WhatsApp requested but no number is configured"),
                }
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, color: egui::Color32) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            color,
            shown_at: Instant::now(),
        });
    }

    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, title: &str, subtitle: &str) {
        let response = ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(section.label()).color(BRAND_CORAL));
            ui.label(egui::RichText::new(title).size(26.0).strong());
            ui.weak(subtitle);
        });
        if self.pending_scroll == Some(section) {
            response.response.scroll_to_me(Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
        ui.add_space(SECTION_SPACING / 2.0);
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let status_ttl = Duration::from_secs(STATUS_MESSAGE_SECS);
        let mut next = self.portfolio.carousel().time_until_advance(now);

        if self.portfolio.is_loading() {
            next = Some(Duration::from_millis(LOADING_REPAINT_MS));
        }
        if let Some(message) = &self.status_message {
            let remaining = status_ttl.saturating_sub(now.saturating_duration_since(message.shown_at));
            next = Some(next.map_or(remaining, |d| d.min(remaining)));
        }
        if let Some(delay) = next {
            ctx.request_repaint_after(delay);
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_fetch(now);
        self.portfolio.carousel_mut().tick(now);

        if self
            .status_message
            .as_ref()
            .is_some_and(|m| now.saturating_duration_since(m.shown_at) >= Duration::from_secs(STATUS_MESSAGE_SECS))
        {
            self.status_message = None;
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            let action = header::ui(ui, self.theme.mode());
            ui.add_space(ITEM_SPACING);
            self.handle_header(action);
        });

        if let Some(message) = &self.status_message {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.colored_label(message.color, &message.text);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let hero_response = ui.scope(|ui| hero::ui(ui));
                if self.pending_scroll == Some(Section::Hero) {
                    hero_response.response.scroll_to_me(Some(egui::Align::TOP));
                    self.pending_scroll = None;
                }
                if let Some(target) = hero_response.inner {
                    self.pending_scroll = Some(target);
                }

                ui.add_space(SECTION_SPACING);
                self.section_heading(
                    ui,
                    Section::Services,
                    "Complete technology solutions for your business",
                    "From backend to AI, I build systems that automate processes and deliver measurable results.",
                );
                if let Some(target) = services::ui(ui) {
                    self.pending_scroll = Some(target);
                }

                ui.add_space(SECTION_SPACING);
                self.section_heading(
                    ui,
                    Section::Portfolio,
                    "Projects that changed real businesses",
                    "Case studies with measurable results.",
                );
                let action = portfolio_view::ui(ui, &self.portfolio);
                self.handle_carousel(action);

                ui.add_space(SECTION_SPACING);
                self.section_heading(
                    ui,
                    Section::About,
                    "Emanuel Abreu",
                    "A software engineer who turns complex challenges into simple, effective solutions.",
                );
                if about::ui(ui, &self.contact_settings.email) == AboutAction::DownloadCv {
                    info!("CV download requested, no file is bundled");
                    self.set_status(
                        "CV download is not available yet. Please get in touch through the contact form.",
                        BRAND_CORAL,
                    );
                }

                ui.add_space(SECTION_SPACING);
                self.section_heading(
                    ui,
                    Section::Testimonials,
                    "What my clients say",
                    "Real feedback from professionals who transformed their business with technology.",
                );
                testimonials::ui(ui);

                ui.add_space(SECTION_SPACING);
                self.section_heading(
                    ui,
                    Section::Contact,
                    "Let's talk about your project",
                    "Tell me what you need and I'll get back to you.",
                );
                let action = contact_section::ui(ui, &mut self.contact_form, &self.contact_settings);
                self.handle_contact(ctx, action);

                ui.add_space(SECTION_SPACING);
                ui.separator();
                if let Some(target) = footer::ui(ui, &self.contact_settings) {
                    self.pending_scroll = Some(target);
                }
            });
        });

        self.schedule_repaint(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.portfolio.carousel_mut().deactivate();
        if self.fetch.take().is_some() {
            info!("Window closed before repository fetch finished, result will be discarded");
        }
        info!("Site window exiting");
    }
}

/// Build the portfolio and, when enabled, kick off the repository fetch
fn start_portfolio(options: &LaunchOptions) -> (Portfolio, Option<FetchHandle>) {
    let interval = Duration::from_millis(options.config.carousel.interval_ms);
    let github = &options.config.github;

    if options.offline || !github.enabled {
        info!(offline = options.offline, "Repository fetch disabled, showing showcase projects");
        return (Portfolio::seed_only(seed::seed_projects(), interval), None);
    }

    match GithubSource::new(github) {
        Ok(source) => {
            let handle = spawn_fetch(Arc::new(source));
            (Portfolio::loading(seed::seed_projects(), github.merge, interval), Some(handle))
        }
        Err(err) => {
            error!(error = %err, "Failed to build GitHub client");
            (Portfolio::seed_only(seed::seed_projects(), interval), None)
        }
    }
}

pub fn run_gui(options: LaunchOptions) -> Result<()> {
    let native = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Emanuel Abreu - Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "folio-showcase",
        native,
        Box::new(|cc| Ok(Box::new(SiteApp::new(cc, options)))),
    )
    .map_err(|err| anyhow!("Failed to launch site window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::FeedState;

    #[test]
    fn test_offline_launch_skips_fetch() {
        let options = LaunchOptions {
            config: SiteConfig::default(),
            offline: true,
        };
        let (portfolio, fetch) = start_portfolio(&options);
        assert!(fetch.is_none());
        assert_eq!(portfolio.state(), FeedState::Ready);
        assert_eq!(portfolio.carousel().items().len(), 3);
    }

    #[test]
    fn test_disabled_github_skips_fetch() {
        let mut config = SiteConfig::default();
        config.github.enabled = false;
        config.carousel.interval_ms = 8000;

        let (portfolio, fetch) = start_portfolio(&LaunchOptions { config, offline: false });
        assert!(fetch.is_none());
        assert_eq!(portfolio.carousel().interval(), Duration::from_millis(8000));
    }
}
