//! Quickmock console - interactive terminal editor for the live endpoint set
//!
//! The console runs next to the HTTP server and works directly on the same
//! [`EndpointRegistry`](quickmock_core::EndpointRegistry): endpoints created
//! here are served by the very next request, deleted ones stop matching.
//!
//! # Example
//!
//! ```no_run
//! use quickmock_core::{Endpoint, EndpointRegistry, RequestStats};
//! use quickmock_tui::Console;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = Arc::new(EndpointRegistry::new(Endpoint::default_set()));
//!     let console = Console::new(registry, Arc::new(RequestStats::new()), "0.0.0.0:8080");
//!     quickmock_tui::run(console).await
//! }
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::{Console, Flow, Screen};
pub use event::{Event, EventHandler, Key};
pub use theme::Theme;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How often the header counters are refreshed without input.
const TICK_RATE: Duration = Duration::from_millis(500);

/// Run the console until the operator exits.
///
/// This function handles terminal setup, runs the main event loop,
/// and restores the terminal on exit.
pub async fn run(mut console: Console) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    enter_alternate_screen(&mut stdout, disable_raw_mode)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e).context("Failed to initialize terminal");
        }
    };

    // Run the console
    let result = run_console(&mut terminal, &mut console).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Switch `out` to the alternate screen. On failure raw mode is left again
/// through `leave_raw_mode` so the shell is usable after the error.
fn enter_alternate_screen<W: io::Write>(
    out: &mut W,
    leave_raw_mode: fn() -> io::Result<()>,
) -> anyhow::Result<()> {
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        let _ = leave_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    Ok(())
}

/// Main event loop
async fn run_console(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    console: &mut Console,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|f| ui::draw(f, console))?;

        match events.next().await {
            Some(Event::Key(key)) => {
                if console.handle_key(key) == Flow::Exit {
                    break;
                }
            }
            // Redraw picks up new counters and the new size
            Some(Event::Tick) | Some(Event::Resize(_, _)) => {}
            None => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenTerminal;

    impl io::Write for BrokenTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    static LEFT_RAW_MODE: AtomicUsize = AtomicUsize::new(0);

    fn record_leave() -> io::Result<()> {
        LEFT_RAW_MODE.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_failed_alternate_screen_leaves_raw_mode() {
        let before = LEFT_RAW_MODE.load(Ordering::SeqCst);
        let result = enter_alternate_screen(&mut BrokenTerminal, record_leave);
        assert!(result.is_err());
        assert_eq!(LEFT_RAW_MODE.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_alternate_screen_keeps_raw_mode_on_success() {
        let mut out = Vec::new();
        fn never_called() -> io::Result<()> {
            panic!("raw mode must stay on");
        }
        enter_alternate_screen(&mut out, never_called).unwrap();
        assert!(!out.is_empty());
    }
}
