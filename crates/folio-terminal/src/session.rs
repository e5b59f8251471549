//! The session engine: the sole owner and mutator of terminal state.
//!
//! A session is created when the hosting view becomes active and dropped when
//! it goes away. Every event runs to completion before the next one; no
//! transition can fail; bad input becomes an `Error` line.

use folio_types::config::TerminalConfig;
use folio_types::input::{Direction, SessionEvent};

use crate::catalog::SelectableItem;
use crate::history::{self, Recall};
use crate::output::{Line, OutputLog};
use crate::registry::{CommandOutput, CommandRegistry};

/// Error line for a bad choice while a listing is open.
pub const INVALID_SELECTION: &str = "Invalid project number. Please try again.";

/// How the next submitted line is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Lines are commands.
    #[default]
    Normal,
    /// Lines are numeric choices among the most recently listed items.
    AwaitingSelection(Vec<SelectableItem>),
}

/// Transcript, raw input history, recall cursor, and dialogue mode.
#[derive(Debug)]
pub struct Session {
    registry: CommandRegistry,
    prompt: String,
    log: OutputLog,
    history: Vec<String>,
    cursor: Option<usize>,
    mode: Mode,
}

impl Session {
    /// Start a session seeded with the configured welcome lines.
    pub fn new(registry: CommandRegistry, config: &TerminalConfig) -> Self {
        let mut transcript = OutputLog::new();
        for line in &config.welcome {
            transcript.push(Line::output(line.as_str()));
        }
        log::info!(
            "Session started ({} commands, {} projects)",
            registry.commands().len(),
            registry.catalog().len()
        );
        Self {
            registry,
            prompt: config.prompt.clone(),
            log: transcript,
            history: Vec::new(),
            cursor: None,
            mode: Mode::Normal,
        }
    }

    // -- Accessors --

    /// The transcript the view renders.
    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    /// Every submitted line, verbatim, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Recall position counted back from the newest entry; `None` when not
    /// navigating.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// How the next submitted line will be read.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// `true` while a project listing is waiting for a number.
    pub fn is_awaiting_selection(&self) -> bool {
        matches!(self.mode, Mode::AwaitingSelection(_))
    }

    /// The command registry this session dispatches against.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    // -- Transitions --

    /// Route one host event.
    ///
    /// Returns the new input-buffer text when the event changes it. Only
    /// navigation does; submissions leave clearing the buffer to the host.
    pub fn apply(&mut self, event: &SessionEvent) -> Option<String> {
        match event {
            SessionEvent::Submit { text } => {
                self.submit(text);
                None
            },
            SessionEvent::Quick { command } => {
                self.submit(command.command_text());
                None
            },
            SessionEvent::NavigateUp => self.navigate(Direction::Up),
            SessionEvent::NavigateDown => self.navigate(Direction::Down),
        }
    }

    /// Process a submitted line.
    ///
    /// A blank line is a complete no-op. Anything else is recorded in the
    /// history and echoed before it is interpreted, whatever the outcome.
    pub fn submit(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        self.history.push(raw.to_string());
        self.log.push(Line::input(format!("{}{raw}", self.prompt)));
        self.cursor = None;
        log::debug!("submit: {raw:?}");

        if self.is_awaiting_selection() {
            self.select(trimmed);
        } else {
            self.dispatch(raw);
        }
    }

    /// Move the recall cursor and return the new buffer text, if any.
    pub fn navigate(&mut self, direction: Direction) -> Option<String> {
        let Recall { cursor, text } = history::navigate(&self.history, self.cursor, direction);
        log::debug!("navigate {direction:?}: {:?} -> {cursor:?}", self.cursor);
        self.cursor = cursor;
        text
    }

    fn select(&mut self, choice: &str) {
        let Mode::AwaitingSelection(candidates) = &self.mode else {
            return;
        };
        let picked = leading_integer(choice)
            .and_then(|n| candidates.iter().find(|item| i64::from(item.id) == n))
            .map(|item| (item.id, item.selection_text()));

        match picked {
            Some((id, text)) => {
                log::debug!("selected project {id}");
                self.log.push(Line::success(text));
                self.mode = Mode::Normal;
            },
            None => {
                log::debug!("rejected selection {choice:?}");
                self.log.push(Line::error(INVALID_SELECTION));
            },
        }
    }

    fn dispatch(&mut self, raw: &str) {
        let Some(cmd) = self.registry.lookup(raw) else {
            log::debug!("unknown command: {raw:?}");
            self.log.push(Line::error(format!(
                "Command not found: {raw}. Type \"help\" for commands."
            )));
            return;
        };

        log::debug!("dispatch: {}", cmd.name());
        match self.registry.produce(cmd) {
            CommandOutput::Clear => self.log.clear(),
            CommandOutput::Text(text) => self.log.push(Line::success(text)),
            CommandOutput::ListAndAwait {
                listing,
                candidates,
            } => {
                self.log.push(Line::success(listing));
                self.mode = Mode::AwaitingSelection(candidates);
            },
        }
    }
}

/// Parse the longest leading `[+-]?digits` prefix, ignoring whatever follows.
///
/// `"2abc"`, `"2.5"` and `"+2"` all read as 2. No digits, or a prefix too
/// large for `i64`, gives `None`.
fn leading_integer(text: &str) -> Option<i64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let sign_len = text.len() - unsigned.len();
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CommandRegistry::default(), &TerminalConfig::default())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        log::info!(
            "Session discarded ({} lines, {} history entries)",
            self.log.len(),
            self.history.len()
        );
    }
}
