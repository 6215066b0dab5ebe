use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

use crate::config::{Config, Prefs, ThemeKind};
use crate::engine::reveal::{RevealAction, RevealCoordinator, RevealEffect, TargetId};
use crate::engine::typewriter::{Cadence, Typewriter};
use crate::engine::viewport::{ObserverConfig, Viewport};
use crate::mailer::{ContactMessage, MailOutcome, Mailer};
use crate::page::{compose, Catalog, Page, SectionId, SkillFilter};
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer};
use crate::ui::events::AppEvent;
use crate::ui::konami::KonamiTracker;
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;

const RAINBOW_DURATION: Duration = Duration::from_secs(4);
const FLASH_DURATION: Duration = Duration::from_secs(5);
/// Rows of scroll after which the footer shows the back-to-top hint
/// (the original shows its button past 500px).
const BACK_TO_TOP_AFTER: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTone {
    Info,
    Success,
    Error,
}

/// Transient status line, optionally expiring.
#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub tone: FlashTone,
    expires: Option<Instant>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: Config,
    theme: Theme,
    prefs_path: PathBuf,
    filter: SkillFilter,
    page: Page,
    body_width: u16,
    body_height: u16,
    scroll: u16,
    /// Hero tagline engine plus the deadline of its next step.
    typewriter: Typewriter,
    next_type_step: Instant,
    fade: RevealCoordinator,
    progress: RevealCoordinator,
    /// Fades already applied to the screen.
    revealed: HashSet<TargetId>,
    /// Current skill-bar fills, initialized to 0 before observation starts.
    fills: HashMap<TargetId, u8>,
    /// Scheduled one-shot effects (staggered fades) not yet due.
    scheduled: Vec<(Instant, RevealAction)>,
    contact: ContactFormState,
    flash: Option<Flash>,
    rainbow_until: Option<Instant>,
    konami: KonamiTracker,
    mailer: Mailer,
    events_tx: Sender<AppEvent>,
    started: Instant,
    last_section: SectionId,
}

impl App {
    pub fn new(
        config: Config,
        theme_kind: ThemeKind,
        prefs_path: PathBuf,
        events_tx: Sender<AppEvent>,
    ) -> Self {
        let now = Instant::now();
        let catalog = Catalog::new(&config);
        let mut fade = RevealCoordinator::new(
            ObserverConfig {
                threshold: config.reveal.fade_threshold,
                bottom_inset: config.reveal.fade_bottom_inset,
            },
            Duration::from_millis(config.reveal.stagger_ms),
        );
        for target in catalog.fade_targets(&config) {
            fade.observe(target);
        }

        let mut progress = RevealCoordinator::new(
            ObserverConfig {
                threshold: config.reveal.progress_threshold,
                bottom_inset: 0,
            },
            Duration::ZERO,
        );
        let mut fills = HashMap::new();
        for target in catalog.progress_targets(&config) {
            fills.insert(target.id, 0);
            progress.observe(target);
        }

        let typewriter = Typewriter::new(
            config.profile.phrases.clone(),
            Cadence::from(&config.cadence),
        );
        let mailer = Mailer::from_config(&config.contact);
        let page = compose(&config, &SkillFilter::All, 80);

        Self {
            should_quit: false,
            config,
            theme: Theme::from_kind(theme_kind),
            prefs_path,
            filter: SkillFilter::All,
            page,
            body_width: 80,
            body_height: 24,
            scroll: 0,
            typewriter,
            next_type_step: now,
            fade,
            progress,
            revealed: HashSet::new(),
            fills,
            scheduled: Vec::new(),
            contact: ContactFormState::default(),
            flash: None,
            rainbow_until: None,
            konami: KonamiTracker::new(),
            mailer,
            events_tx,
            started: now,
            last_section: SectionId::Hero,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn filter(&self) -> &SkillFilter {
        &self.filter
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn typed_text(&self) -> &str {
        self.typewriter.visible()
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn fill(&self, id: TargetId) -> u8 {
        self.fills.get(&id).copied().unwrap_or(0)
    }

    pub fn rainbow_active(&self) -> bool {
        matches!(self.rainbow_until, Some(until) if Instant::now() < until)
    }

    /// Phase for the rainbow color wheel, stepped every 150ms.
    pub fn rainbow_step(&self) -> u64 {
        (self.started.elapsed().as_millis() / 150) as u64
    }

    pub fn show_back_to_top(&self) -> bool {
        self.scroll > BACK_TO_TOP_AFTER
    }

    pub fn active_section(&self) -> SectionId {
        self.page.active_section(self.scroll)
    }

    // ----- sizing and scrolling -----

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.body_width = width.max(1);
        self.body_height = height.max(1);
        self.recompose();
    }

    fn recompose(&mut self) {
        self.page = compose(&self.config, &self.filter, self.body_width);
        let max = self.max_scroll();
        if self.scroll > max {
            self.scroll = max;
        }
        self.scan_viewport(Instant::now());
    }

    fn max_scroll(&self) -> u16 {
        self.page.total_rows().saturating_sub(self.body_height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let current = i32::from(self.scroll);
        let target = (current + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll_to(target as u16);
    }

    pub fn scroll_page(&mut self, direction: i32) {
        let step = i32::from(self.body_height.saturating_sub(2).max(1));
        self.scroll_by(direction * step);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    pub fn scroll_to_section(&mut self, id: SectionId) {
        self.scroll_to(self.page.section_top(id).min(self.max_scroll()));
    }

    fn scroll_to(&mut self, row: u16) {
        if row == self.scroll {
            return;
        }
        self.scroll = row;
        self.scan_viewport(Instant::now());
        let section = self.active_section();
        if section != self.last_section {
            self.last_section = section;
            debug!(section = section.label(), "viewed section");
        }
    }

    // ----- timed state -----

    /// Applies everything due at `now`: typewriter steps, scheduled reveal
    /// effects, flash and rainbow expiry. Called on every tick and after
    /// every event, with the event loop sleeping until [`Self::next_deadline`].
    pub fn advance(&mut self, now: Instant) {
        while now >= self.next_type_step {
            let delay = self.typewriter.step().max(Duration::from_millis(1));
            self.next_type_step += delay;
        }

        self.apply_due(now);

        if matches!(&self.flash, Some(flash) if flash.expired(now)) {
            self.flash = None;
        }
        if matches!(self.rainbow_until, Some(until) if now >= until) {
            self.rainbow_until = None;
        }
    }

    /// The soonest instant anything timed needs servicing.
    pub fn next_deadline(&self) -> Instant {
        let mut deadline = self.next_type_step;
        for (due, _) in &self.scheduled {
            deadline = deadline.min(*due);
        }
        if let Some(flash) = &self.flash {
            if let Some(expires) = flash.expires {
                deadline = deadline.min(expires);
            }
        }
        if let Some(until) = self.rainbow_until {
            deadline = deadline.min(until);
        }
        deadline
    }

    fn scan_viewport(&mut self, now: Instant) {
        let spans = self.page.target_spans();
        let view = Viewport::new(self.scroll, self.body_height);
        let mut actions = self.fade.scan(&spans, view);
        actions.extend(self.progress.scan(&spans, view));
        for action in actions {
            self.scheduled.push((now + action.delay, action));
        }
        self.apply_due(now);
    }

    fn apply_due(&mut self, now: Instant) {
        let mut idx = 0;
        while idx < self.scheduled.len() {
            if self.scheduled[idx].0 <= now {
                let (_, action) = self.scheduled.swap_remove(idx);
                match action.effect {
                    RevealEffect::FadeIn => {
                        self.revealed.insert(action.id);
                    }
                    RevealEffect::Fill { percent } => {
                        self.fills.insert(action.id, percent);
                    }
                }
            } else {
                idx += 1;
            }
        }
    }

    // ----- user actions -----

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let prefs = Prefs {
            theme: self.theme.kind,
        };
        if let Err(err) = prefs.store_to(&self.prefs_path) {
            warn!(error = %err, "failed to persist theme preference");
        } else {
            debug!(theme = ?self.theme.kind, "theme preference saved");
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next(&self.config.skill_categories());
        debug!(filter = self.filter.label(), "skills filter changed");
        self.recompose();
    }

    /// Feeds the easter-egg tracker; starts the rainbow on a full match.
    pub fn track_konami(&mut self, code: KeyCode) {
        if self.konami.record(code) {
            info!("konami code entered, enjoy the colors");
            self.rainbow_until = Some(Instant::now() + RAINBOW_DURATION);
        }
    }

    pub fn copy_email(&mut self) {
        let email = self.config.profile.email.clone();
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(email)) {
            Ok(()) => self.set_flash("Email address copied.", FlashTone::Info, None),
            Err(err) => {
                warn!(error = %err, "clipboard copy failed");
                self.set_flash("Could not reach the clipboard.", FlashTone::Error, None);
            }
        }
    }

    fn set_flash(&mut self, text: &str, tone: FlashTone, expires_in: Option<Duration>) {
        self.flash = Some(Flash {
            text: text.to_string(),
            tone,
            expires: expires_in.map(|d| Instant::now() + d),
        });
    }

    // ----- contact form -----

    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        dispatch_mvi!(self, contact, ContactReducer, intent);
    }

    /// Submits the draft; when validation passes the payload goes to the
    /// mail worker and the outcome comes back as an [`AppEvent::Mail`].
    pub fn submit_contact(&mut self) {
        let was_sending = self.contact.is_sending();
        self.dispatch_contact(ContactIntent::Submit);
        if was_sending || !self.contact.is_sending() {
            return;
        }
        if let ContactFormState::Sending { draft } = &self.contact {
            let message = ContactMessage {
                from_name: draft.name.clone(),
                from_email: draft.email.clone(),
                subject: draft.subject.clone(),
                message: draft.message.clone(),
                to_email: String::new(),
            };
            self.mailer.send_in_background(message, self.events_tx.clone());
        }
    }

    pub fn on_mail(&mut self, outcome: MailOutcome) {
        match outcome {
            MailOutcome::Sent => {
                self.dispatch_contact(ContactIntent::Sent);
                self.set_flash(
                    "Message sent! I'll get back to you soon.",
                    FlashTone::Success,
                    Some(FLASH_DURATION),
                );
            }
            MailOutcome::Failed(_) => {
                self.dispatch_contact(ContactIntent::Failed {
                    message: "Something went wrong. Please try again or email me directly."
                        .to_string(),
                });
            }
        }
    }

    pub fn on_focus_change(&self, gained: bool) {
        if gained {
            debug!("terminal focus gained");
        } else {
            debug!("terminal focus lost");
        }
    }
}

impl Flash {
    fn expired(&self, now: Instant) -> bool {
        matches!(self.expires, Some(at) if now >= at)
    }
}
