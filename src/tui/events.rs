//! TUI Event System
//!
//! Handles user input and application events for the terminal interface.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// User pressed a key
    Key(KeyEvent),

    /// User pasted text
    Paste(String),

    /// Terminal was resized
    Resize(u16, u16),

    /// Request to quit
    Quit,

    /// Periodic redraw
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    /// Event sender
    tx: mpsc::UnboundedSender<TuiEvent>,

    /// Event receiver
    rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// Get a sender for sending events
    pub fn sender(&self) -> mpsc::UnboundedSender<TuiEvent> {
        self.tx.clone()
    }

    /// Receive the next event (blocks until available)
    pub async fn next(&mut self) -> Option<TuiEvent> {
        self.rx.recv().await
    }

    /// Try to receive the next event without blocking
    pub fn try_next(&mut self) -> Option<TuiEvent> {
        self.rx.try_recv().ok()
    }

    /// Start listening for terminal events
    ///
    /// Uses crossterm's async EventStream so the tokio runtime is never
    /// blocked on terminal reads.
    pub fn start_terminal_listener(tx: mpsc::UnboundedSender<TuiEvent>, tick_interval: Duration) {
        tokio::spawn(async move {
            forward_events(crossterm::event::EventStream::new(), tx, tick_interval).await;
            tracing::debug!("Terminal listener stopped");
        });
    }
}

/// Pump terminal events into `tx`, sending a `Tick` after every wake-up.
///
/// When the input stream ends a final `Quit` is sent, since the app holds
/// its own sender and would otherwise wait forever.
pub(crate) async fn forward_events<S>(
    mut reader: S,
    tx: mpsc::UnboundedSender<TuiEvent>,
    tick_interval: Duration,
) where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    loop {
        let event = tokio::select! {
            maybe_event = reader.next() => {
                match maybe_event {
                    Some(Ok(event)) => Some(event),
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                        None
                    }
                    None => {
                        tracing::debug!("Terminal input closed");
                        let _ = tx.send(TuiEvent::Quit);
                        return;
                    }
                }
            }
            _ = tokio::time::sleep(tick_interval) => None,
        };

        let forwarded = match event {
            // Only key presses, so repeats and releases don't double up
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
            Some(Event::Resize(w, h)) => Some(TuiEvent::Resize(w, h)),
            Some(Event::Paste(text)) => Some(TuiEvent::Paste(text)),
            _ => None,
        };
        if let Some(forwarded) = forwarded
            && tx.send(forwarded).is_err()
        {
            return;
        }

        if tx.send(TuiEvent::Tick).is_err() {
            return;
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to check if a key event matches
pub fn key_matches(event: &KeyEvent, code: KeyCode, modifiers: KeyModifiers) -> bool {
    event.code == code && event.modifiers == modifiers
}

/// Common key bindings
pub mod keys {
    use super::*;

    /// Ctrl+C - Quit
    pub fn is_quit(event: &KeyEvent) -> bool {
        key_matches(event, KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    /// Ctrl+U - Clear the focused field
    pub fn is_clear_field(event: &KeyEvent) -> bool {
        key_matches(event, KeyCode::Char('u'), KeyModifiers::CONTROL)
    }

    /// Enter - Submit (Continue / Complete Setup)
    /// Also accepts Ctrl+Enter
    pub fn is_submit(event: &KeyEvent) -> bool {
        event.code == KeyCode::Enter
            && (event.modifiers.is_empty() || event.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Alt+Enter or Shift+Enter - Insert newline
    pub fn is_newline(event: &KeyEvent) -> bool {
        event.code == KeyCode::Enter
            && (event.modifiers.contains(KeyModifiers::ALT)
                || event.modifiers.contains(KeyModifiers::SHIFT))
    }

    /// Escape - Back
    pub fn is_cancel(event: &KeyEvent) -> bool {
        event.code == KeyCode::Esc
    }

    /// Tab or Down - next field
    pub fn is_next_field(event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Tab | KeyCode::Down)
            && !event.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Shift+Tab or Up - previous field
    pub fn is_prev_field(event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::BackTab | KeyCode::Up)
            || (event.code == KeyCode::Tab && event.modifiers.contains(KeyModifiers::SHIFT))
    }

    /// Left arrow
    pub fn is_left(event: &KeyEvent) -> bool {
        event.code == KeyCode::Left && event.modifiers.is_empty()
    }

    /// Right arrow
    pub fn is_right(event: &KeyEvent) -> bool {
        event.code == KeyCode::Right && event.modifiers.is_empty()
    }

    /// Printable character typed without Ctrl/Alt
    pub fn typed_char(event: &KeyEvent) -> Option<char> {
        match event.code {
            KeyCode::Char(c)
                if !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_creation() {
        let mut handler = EventHandler::new();
        let sender = handler.sender();
        assert!(sender.send(TuiEvent::Quit).is_ok());
        assert_eq!(handler.try_next(), Some(TuiEvent::Quit));
        assert_eq!(handler.try_next(), None);
    }

    #[tokio::test]
    async fn test_forward_events_sends_quit_when_input_closes() {
        let events: Vec<std::io::Result<Event>> = vec![
            Ok(Event::Paste("acme".into())),
            Ok(Event::Key(KeyEvent::new_with_kind(
                KeyCode::Char('x'),
                KeyModifiers::empty(),
                KeyEventKind::Release,
            ))),
            Ok(Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty()))),
        ];
        let input = futures::stream::iter(events);
        let mut handler = EventHandler::new();
        forward_events(input, handler.sender(), Duration::from_secs(3600)).await;

        let mut received = Vec::new();
        while let Some(event) = handler.try_next() {
            received.push(event);
        }
        assert_eq!(
            received,
            vec![
                TuiEvent::Paste("acme".into()),
                TuiEvent::Tick,
                TuiEvent::Tick,
                TuiEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())),
                TuiEvent::Tick,
                TuiEvent::Quit,
            ]
        );
    }

    #[test]
    fn test_next_receives_in_order() {
        let mut handler = EventHandler::new();
        let sender = handler.sender();
        sender.send(TuiEvent::Tick).unwrap();
        sender.send(TuiEvent::Paste("acme".into())).unwrap();

        assert_eq!(tokio_test::block_on(handler.next()), Some(TuiEvent::Tick));
        assert_eq!(
            tokio_test::block_on(handler.next()),
            Some(TuiEvent::Paste("acme".into()))
        );
    }

    #[test]
    fn test_key_matches() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(key_matches(&event, KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!key_matches(&event, KeyCode::Char('c'), KeyModifiers::empty()));
    }

    #[test]
    fn test_quit_key() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(keys::is_quit(&event));

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty());
        assert!(!keys::is_quit(&event));
    }

    #[test]
    fn test_submit_key() {
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert!(keys::is_submit(&event));

        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL);
        assert!(keys::is_submit(&event));

        // Alt+Enter does NOT submit (it inserts newline)
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert!(!keys::is_submit(&event));
        assert!(keys::is_newline(&event));
    }

    #[test]
    fn test_field_navigation_keys() {
        assert!(keys::is_next_field(&KeyEvent::new(KeyCode::Tab, KeyModifiers::empty())));
        assert!(keys::is_next_field(&KeyEvent::new(KeyCode::Down, KeyModifiers::empty())));
        assert!(keys::is_prev_field(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(keys::is_prev_field(&KeyEvent::new(KeyCode::Up, KeyModifiers::empty())));
        assert!(!keys::is_next_field(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_typed_char() {
        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(keys::typed_char(&event), Some('A'));

        let event = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(keys::typed_char(&event), None);
        assert!(keys::is_clear_field(&event));
    }
}
