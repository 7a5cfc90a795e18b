//! Terminal User Interface
//!
//! Terminal setup/teardown and the main draw/event loop.

pub mod app;
pub mod events;
pub mod form;
pub mod onboarding;
pub mod onboarding_render;
pub mod summary;

pub use app::App;
pub use events::{EventHandler, TuiEvent};
pub use onboarding::{OnboardingWizard, WizardAction, WizardStage, WizardStep};

use crate::error::{MoltbotError, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(MoltbotError::Terminal)?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(MoltbotError::Terminal(e));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = disable_raw_mode();
        MoltbotError::Terminal(e)
    })
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(MoltbotError::Terminal)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .map_err(MoltbotError::Terminal)?;
    terminal.show_cursor().map_err(MoltbotError::Terminal)?;
    Ok(())
}

/// Run the TUI until the user quits. The terminal is restored on every exit
/// path, including when drawing fails.
pub async fn run(mut app: App, tick_interval: Duration) -> Result<App> {
    let mut terminal = setup_terminal()?;
    EventHandler::start_terminal_listener(app.event_handler().sender(), tick_interval);

    tracing::debug!("TUI started");
    let result = event_loop(&mut terminal, &mut app).await;
    let restored = restore_terminal(&mut terminal);
    tracing::debug!("TUI stopped");

    result?;
    restored?;
    Ok(app)
}

async fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| onboarding_render::render_onboarding(f, &app.wizard))
            .map_err(MoltbotError::Terminal)?;

        let Some(event) = app.next_event().await else {
            break;
        };
        app.handle_event(event);

        // Drain whatever else is queued before redrawing
        while let Some(event) = app.event_handler_mut().try_next() {
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
