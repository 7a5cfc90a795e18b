//! TUI Application State
//!
//! Owns the onboarding wizard and routes events into it.

use super::events::{EventHandler, TuiEvent, keys};
use super::onboarding::{OnboardingWizard, WizardAction};

/// Main application state
pub struct App {
    pub wizard: OnboardingWizard,
    pub should_quit: bool,

    event_handler: EventHandler,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            wizard: OnboardingWizard::new(),
            should_quit: false,
            event_handler: EventHandler::new(),
        }
    }

    /// Get the event handler
    pub fn event_handler(&self) -> &EventHandler {
        &self.event_handler
    }

    /// Get the event handler (mutable)
    pub fn event_handler_mut(&mut self) -> &mut EventHandler {
        &mut self.event_handler
    }

    /// Receive next event
    pub async fn next_event(&mut self) -> Option<TuiEvent> {
        self.event_handler.next().await
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) => self.handle_key_event(key_event),
            TuiEvent::Paste(text) => self.wizard.handle_paste(&text),
            TuiEvent::Quit => self.should_quit = true,
            TuiEvent::Resize(_, _) | TuiEvent::Tick => {
                // Handled by the render loop
            }
        }
    }

    fn handle_key_event(&mut self, event: crossterm::event::KeyEvent) {
        if keys::is_quit(&event) {
            self.should_quit = true;
            return;
        }

        match self.wizard.handle_key(event) {
            WizardAction::None => {}
            WizardAction::Quit => self.should_quit = true,
            WizardAction::LaunchDashboard => {
                tracing::info!("Launch Dashboard selected; no dashboard is available yet");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::form::FieldKey;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_ctrl_c_quits_from_any_step() {
        let mut app = App::new();
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(TuiEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_event() {
        let mut app = App::new();
        app.handle_event(TuiEvent::Tick);
        app.handle_event(TuiEvent::Resize(80, 24));
        assert!(!app.should_quit);
        app.handle_event(TuiEvent::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_launch_dashboard_is_a_noop() {
        let mut app = App::new();
        for _ in 0..3 {
            app.handle_event(key(KeyCode::Enter));
        }
        assert!(app.wizard.is_complete());

        app.handle_event(key(KeyCode::Right));
        app.handle_event(key(KeyCode::Enter));
        assert!(app.wizard.is_complete());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_paste_routes_to_wizard() {
        let mut app = App::new();
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(TuiEvent::Paste("sk-pasted".to_string()));
        assert_eq!(app.wizard.field(FieldKey::ApiKey), "sk-pasted");
    }

    #[test]
    fn test_events_flow_through_handler() {
        let mut app = App::new();
        let sender = app.event_handler().sender();
        sender.send(key(KeyCode::Enter)).unwrap();

        let event = tokio_test::block_on(app.next_event()).unwrap();
        app.handle_event(event);
        assert_eq!(app.wizard.current_step().number(), 2);
    }
}
