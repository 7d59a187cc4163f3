//! Event handling for the console

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Discrete input the console state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    /// Interrupt (Ctrl+C)
    Quit,
    Backspace,
    Tab,
    Char(char),
}

impl Key {
    /// Classify a terminal key event. Releases and unsupported keys yield `None`.
    pub fn from_crossterm(key: KeyEvent) -> Option<Key> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c') => Some(Key::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::Char(c) => Some(Key::Char(c)),
            _ => None,
        }
    }
}

/// Events that can occur in the console
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(Key),
    /// Tick for refreshing request counters
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Handles terminal events and produces Event stream
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn event polling task
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if tx_clone.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    _ = tokio::time::sleep(Duration::from_millis(50)) => {
                        // Drain everything crossterm has buffered
                        while event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            let Ok(evt) = event::read() else {
                                break;
                            };
                            let event = match evt {
                                CrosstermEvent::Key(key) => Key::from_crossterm(key).map(Event::Key),
                                CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(e) = event {
                                if tx_clone.send(e).is_err() {
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
