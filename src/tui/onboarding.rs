//! Onboarding Wizard
//!
//! A 3-step TUI onboarding wizard for configuring Moltbot: AI provider and
//! key, brand details, and social handles, followed by a summary screen.
//!
//! All state lives in [`OnboardingWizard`]. It changes only through
//! [`OnboardingWizard::advance`], [`OnboardingWizard::retreat`],
//! [`OnboardingWizard::restart`] and [`OnboardingWizard::update_field`];
//! key handling is a thin translation onto those operations.

use super::events::keys;
use super::form::{FieldKey, FieldKind, FormData, cycle_option};
use super::summary::ConfigSummary;
use crossterm::event::{KeyCode, KeyEvent};

/// One of the three input steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    ApiSetup,
    BrandInfo,
    Socials,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::ApiSetup, Self::BrandInfo, Self::Socials];

    /// Step number (1-based)
    pub fn number(&self) -> usize {
        match self {
            Self::ApiSetup => 1,
            Self::BrandInfo => 2,
            Self::Socials => 3,
        }
    }

    /// Total number of input steps
    pub fn total() -> usize {
        Self::ALL.len()
    }

    /// Short label for the step indicator
    pub fn label(&self) -> &'static str {
        match self {
            Self::ApiSetup => "API Setup",
            Self::BrandInfo => "Brand Info",
            Self::Socials => "Socials",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::ApiSetup => "Power your Moltbot with your preferred AI provider",
            Self::BrandInfo => "Tell us about your brand for personalized negotiations",
            Self::Socials => "Connect your social presence for integrated campaigns",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::ApiSetup => "🔑",
            Self::BrandInfo => "🏢",
            Self::Socials => "🌐",
        }
    }

    /// Fields collected on this step, in focus order
    pub fn fields(&self) -> &'static [FieldKey] {
        match self {
            Self::ApiSetup => &[FieldKey::ApiProvider, FieldKey::ApiKey],
            Self::BrandInfo => &[
                FieldKey::BrandName,
                FieldKey::BrandDescription,
                FieldKey::TargetAudience,
                FieldKey::BrandVoice,
            ],
            Self::Socials => &[
                FieldKey::Twitter,
                FieldKey::Instagram,
                FieldKey::Linkedin,
                FieldKey::Website,
            ],
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::ApiSetup => Some(Self::BrandInfo),
            Self::BrandInfo => Some(Self::Socials),
            Self::Socials => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::ApiSetup => None,
            Self::BrandInfo => Some(Self::ApiSetup),
            Self::Socials => Some(Self::BrandInfo),
        }
    }
}

/// Where the wizard is: on one of the input steps, or on the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    Step(WizardStep),
    Complete,
}

/// The two buttons on the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryButton {
    EditConfiguration,
    LaunchDashboard,
}

impl SummaryButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EditConfiguration => "Edit Configuration",
            Self::LaunchDashboard => "Launch Dashboard →",
        }
    }

    fn toggled(&self) -> Self {
        match self {
            Self::EditConfiguration => Self::LaunchDashboard,
            Self::LaunchDashboard => Self::EditConfiguration,
        }
    }
}

/// What the app should do after handling a wizard key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    /// Nothing special
    None,
    /// User left the wizard
    Quit,
    /// "Launch Dashboard" was pressed. Not wired to anything yet.
    LaunchDashboard,
}

/// Main onboarding wizard state
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    stage: WizardStage,
    form: FormData,

    // Navigation
    pub focused_field: usize,
    pub summary_button: SummaryButton,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Create a new wizard with default state
    pub fn new() -> Self {
        Self {
            stage: WizardStage::Step(WizardStep::ApiSetup),
            form: FormData::default(),
            focused_field: 0,
            summary_button: SummaryButton::EditConfiguration,
        }
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn is_complete(&self) -> bool {
        self.stage == WizardStage::Complete
    }

    /// The active input step. The summary is only reachable from the
    /// last step, so a completed wizard reports [`WizardStep::Socials`].
    pub fn current_step(&self) -> WizardStep {
        match self.stage {
            WizardStage::Step(step) => step,
            WizardStage::Complete => WizardStep::Socials,
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn field(&self, key: FieldKey) -> &str {
        self.form.get(key)
    }

    pub fn summary(&self) -> ConfigSummary<'_> {
        ConfigSummary::from_form(&self.form)
    }

    /// Continue: move to the next step, or finish from the last one.
    /// Nothing gates this; every field is optional.
    pub fn advance(&mut self) {
        let WizardStage::Step(step) = self.stage else {
            return;
        };

        self.focused_field = 0;
        match step.next() {
            Some(next) => {
                tracing::debug!("Onboarding step {} -> {}", step.number(), next.number());
                self.stage = WizardStage::Step(next);
            }
            None => {
                tracing::info!(
                    provider = %self.form.api_provider,
                    socials = %self.summary().socials_display(),
                    "Onboarding setup complete"
                );
                self.summary_button = SummaryButton::EditConfiguration;
                self.stage = WizardStage::Complete;
            }
        }
    }

    /// Back: move to the previous step. No-op on the first step and on the
    /// summary screen.
    pub fn retreat(&mut self) {
        let WizardStage::Step(step) = self.stage else {
            return;
        };

        if let Some(prev) = step.prev() {
            tracing::debug!("Onboarding step {} -> {}", step.number(), prev.number());
            self.stage = WizardStage::Step(prev);
            self.focused_field = 0;
        }
    }

    /// Edit Configuration: leave the summary and reopen step 1.
    /// Field values are kept so the user edits what they entered.
    pub fn restart(&mut self) {
        if self.stage != WizardStage::Complete {
            return;
        }

        tracing::debug!("Onboarding reopened for editing");
        self.stage = WizardStage::Step(WizardStep::ApiSetup);
        self.focused_field = 0;
    }

    /// Overwrite a field with `value` as given: no trimming, no limits.
    pub fn update_field(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(field = %key, len = value.len(), "Field updated");
        self.form.set(key, value);
    }

    /// Append typed or pasted text to a field
    fn append_to_field(&mut self, key: FieldKey, text: &str) {
        self.form.push_str(key, text);
        tracing::trace!(field = %key, len = self.form.get(key).len(), "Field edited");
    }

    /// Field that currently has keyboard focus, if on an input step
    pub fn focused_key(&self) -> Option<FieldKey> {
        match self.stage {
            WizardStage::Step(step) => step.fields().get(self.focused_field).copied(),
            WizardStage::Complete => None,
        }
    }

    fn focus_next(&mut self) {
        let count = self.current_step().fields().len();
        self.focused_field = (self.focused_field + 1) % count;
    }

    fn focus_prev(&mut self) {
        let count = self.current_step().fields().len();
        self.focused_field = (self.focused_field + count - 1) % count;
    }

    /// Handle key events for the current stage
    pub fn handle_key(&mut self, event: KeyEvent) -> WizardAction {
        match self.stage {
            WizardStage::Step(_) => self.handle_step_key(event),
            WizardStage::Complete => self.handle_summary_key(event),
        }
    }

    /// Insert pasted text into the focused text field
    pub fn handle_paste(&mut self, text: &str) {
        let Some(key) = self.focused_key() else {
            return;
        };

        let kind = key.kind();
        if !kind.is_text() {
            return;
        }

        let text = if kind == FieldKind::Multiline {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            // Single-line inputs drop line breaks from pasted text
            text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
        };
        self.append_to_field(key, &text);
    }

    // --- Stage-specific key handlers ---

    fn handle_step_key(&mut self, event: KeyEvent) -> WizardAction {
        let Some(key) = self.focused_key() else {
            return WizardAction::None;
        };
        let kind = key.kind();

        if keys::is_cancel(&event) {
            self.retreat();
        } else if kind == FieldKind::Multiline && keys::is_newline(&event) {
            self.append_to_field(key, "\n");
        } else if keys::is_submit(&event) {
            self.advance();
        } else if keys::is_next_field(&event) {
            self.focus_next();
        } else if keys::is_prev_field(&event) {
            self.focus_prev();
        } else if let FieldKind::Select(options) = kind {
            let forward = if keys::is_right(&event) || event.code == KeyCode::Char(' ') {
                Some(true)
            } else if keys::is_left(&event) {
                Some(false)
            } else {
                None
            };
            if let Some(forward) = forward {
                let value = cycle_option(options, self.field(key), forward);
                self.update_field(key, value);
            }
        } else if keys::is_clear_field(&event) {
            self.update_field(key, String::new());
        } else if event.code == KeyCode::Backspace {
            self.form.pop(key);
        } else if let Some(c) = keys::typed_char(&event) {
            self.append_to_field(key, c.encode_utf8(&mut [0; 4]));
        }

        WizardAction::None
    }

    fn handle_summary_key(&mut self, event: KeyEvent) -> WizardAction {
        match event.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.summary_button = self.summary_button.toggled();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.restart();
            }
            KeyCode::Enter => match self.summary_button {
                SummaryButton::EditConfiguration => self.restart(),
                SummaryButton::LaunchDashboard => return WizardAction::LaunchDashboard,
            },
            KeyCode::Char('q') | KeyCode::Esc => return WizardAction::Quit,
            _ => {}
        }
        WizardAction::None
    }
}
