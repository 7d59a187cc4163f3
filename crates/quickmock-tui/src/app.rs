//! Console state and key handling.
//!
//! The console is a state machine over [`Screen`]. Each screen variant owns
//! exactly the data that screen needs, so an in-progress draft only exists
//! while one of the creation screens is active and never reaches the
//! registry until it is committed.

use crate::event::Key;
use crate::theme::Theme;
use quickmock_core::{
    parse_status_code, validate_path, Endpoint, EndpointRegistry, Method, RequestStats,
};
use std::sync::Arc;
use tracing::info;

/// Character that finishes multi-line response input.
pub const COMMIT_KEY: char = '`';

/// Shown when an entered path is rejected.
pub const INVALID_PATH_MESSAGE: &str = "Invalid path. It has to start with / and be a valid URL path";

/// Current screen together with its screen-local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Endpoint list with the selected row.
    List { cursor: usize },
    /// Read-only copy of the endpoint at `index` when it was opened.
    Detail { index: usize, endpoint: Endpoint },
    /// First creation step: pick a method.
    MethodSelect { cursor: usize },
    /// Second creation step: type the path.
    PathInput {
        method: Method,
        input: String,
        error: Option<String>,
    },
    /// Third creation step: type the status code.
    CodeInput {
        method: Method,
        path: String,
        input: String,
    },
    /// Last creation step: type the body, finished with [`COMMIT_KEY`].
    ResponseInput {
        method: Method,
        path: String,
        code: u16,
        input: String,
    },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::List { cursor: 0 }
    }
}

/// Whether the console keeps running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive console over the shared endpoint registry.
pub struct Console {
    screen: Screen,
    registry: Arc<EndpointRegistry>,
    stats: Arc<RequestStats>,
    listen_addr: String,
    pub theme: Theme,
}

impl Console {
    pub fn new(
        registry: Arc<EndpointRegistry>,
        stats: Arc<RequestStats>,
        listen_addr: impl Into<String>,
    ) -> Self {
        Self {
            screen: Screen::default(),
            registry,
            stats,
            listen_addr: listen_addr.into(),
            theme: Theme::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Process one key to completion.
    pub fn handle_key(&mut self, key: Key) -> Flow {
        let screen = std::mem::take(&mut self.screen);
        let (next, flow) = match screen {
            Screen::List { cursor } => self.handle_list_key(cursor, key),
            Screen::Detail { index, endpoint } => self.handle_detail_key(index, endpoint, key),
            Screen::MethodSelect { cursor } => handle_method_select_key(cursor, key),
            Screen::PathInput {
                method,
                input,
                error,
            } => handle_path_input_key(method, input, error, key),
            Screen::CodeInput {
                method,
                path,
                input,
            } => handle_code_input_key(method, path, input, key),
            Screen::ResponseInput {
                method,
                path,
                code,
                input,
            } => self.handle_response_input_key(method, path, code, input, key),
        };
        self.screen = next;
        flow
    }

    /// Keep a list cursor inside the registry, which may have shrunk.
    fn clamp_cursor(&self, cursor: usize) -> usize {
        cursor.min(self.registry.len().saturating_sub(1))
    }

    fn handle_list_key(&self, cursor: usize, key: Key) -> (Screen, Flow) {
        let cursor = self.clamp_cursor(cursor);
        let next = match key {
            Key::Escape | Key::Quit => return (Screen::List { cursor }, Flow::Exit),
            Key::Up | Key::Char('k') => Screen::List {
                cursor: cursor.saturating_sub(1),
            },
            Key::Down | Key::Char('j') => Screen::List {
                cursor: self.clamp_cursor(cursor + 1),
            },
            Key::Enter => match self.registry.get(cursor) {
                Some(endpoint) => Screen::Detail {
                    index: cursor,
                    endpoint,
                },
                None => Screen::List { cursor },
            },
            Key::Char('c') => Screen::MethodSelect { cursor: 0 },
            Key::Char('d') => {
                if self.registry.remove_at(cursor) {
                    info!("Endpoint at index {} deleted from console", cursor);
                }
                Screen::List {
                    cursor: self.clamp_cursor(cursor),
                }
            }
            _ => Screen::List { cursor },
        };
        (next, Flow::Continue)
    }

    fn handle_detail_key(&self, index: usize, endpoint: Endpoint, key: Key) -> (Screen, Flow) {
        match key {
            Key::Escape => (
                Screen::List {
                    cursor: self.clamp_cursor(index),
                },
                Flow::Continue,
            ),
            Key::Quit => (Screen::Detail { index, endpoint }, Flow::Exit),
            _ => (Screen::Detail { index, endpoint }, Flow::Continue),
        }
    }

    fn handle_response_input_key(
        &self,
        method: Method,
        path: String,
        code: u16,
        mut input: String,
        key: Key,
    ) -> (Screen, Flow) {
        match key {
            Key::Escape | Key::Quit => return (Screen::default(), Flow::Continue),
            Key::Char(COMMIT_KEY) => {
                let endpoint = Endpoint::new(method, path, code, input);
                info!(
                    "Endpoint {} {} -> {} created from console",
                    endpoint.method, endpoint.path, endpoint.response.code
                );
                self.registry.append(endpoint);
                let cursor = self.registry.len().saturating_sub(1);
                return (Screen::List { cursor }, Flow::Continue);
            }
            Key::Char(c) => input.push(c),
            Key::Enter => input.push('\n'),
            Key::Tab => input.push('\t'),
            Key::Backspace => {
                input.pop();
            }
            Key::Up | Key::Down => {}
        }
        (
            Screen::ResponseInput {
                method,
                path,
                code,
                input,
            },
            Flow::Continue,
        )
    }
}

fn handle_method_select_key(cursor: usize, key: Key) -> (Screen, Flow) {
    let next = match key {
        Key::Escape | Key::Quit => Screen::default(),
        Key::Up | Key::Char('k') => Screen::MethodSelect {
            cursor: cursor.saturating_sub(1),
        },
        Key::Down | Key::Char('j') => Screen::MethodSelect {
            cursor: (cursor + 1).min(Method::ALL.len() - 1),
        },
        Key::Enter => Screen::PathInput {
            method: Method::ALL[cursor.min(Method::ALL.len() - 1)],
            input: String::new(),
            error: None,
        },
        _ => Screen::MethodSelect { cursor },
    };
    (next, Flow::Continue)
}

fn handle_path_input_key(
    method: Method,
    mut input: String,
    mut error: Option<String>,
    key: Key,
) -> (Screen, Flow) {
    match key {
        Key::Escape | Key::Quit => return (Screen::default(), Flow::Continue),
        Key::Enter => {
            if validate_path(&input) {
                return (
                    Screen::CodeInput {
                        method,
                        path: input,
                        input: String::new(),
                    },
                    Flow::Continue,
                );
            }
            input.clear();
            error = Some(INVALID_PATH_MESSAGE.to_string());
        }
        Key::Char(c) => input.push(c),
        Key::Backspace => {
            input.pop();
        }
        Key::Up | Key::Down | Key::Tab => {}
    }
    (
        Screen::PathInput {
            method,
            input,
            error,
        },
        Flow::Continue,
    )
}

fn handle_code_input_key(
    method: Method,
    path: String,
    mut input: String,
    key: Key,
) -> (Screen, Flow) {
    match key {
        Key::Escape | Key::Quit => return (Screen::default(), Flow::Continue),
        Key::Enter => {
            return (
                Screen::ResponseInput {
                    method,
                    path,
                    code: parse_status_code(&input),
                    input: String::new(),
                },
                Flow::Continue,
            )
        }
        Key::Char(c) => input.push(c),
        Key::Backspace => {
            input.pop();
        }
        Key::Up | Key::Down | Key::Tab => {}
    }
    (
        Screen::CodeInput {
            method,
            path,
            input,
        },
        Flow::Continue,
    )
}
