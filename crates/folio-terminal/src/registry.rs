//! Command registry: whole-line lookup and payload rendering.
//!
//! The registry is built once and never mutated. It has no access to the
//! session; it only tells the engine what a command produces.

use crate::catalog::{Catalog, SelectableItem};
use crate::commands::CommandSpec;

/// Width of the name column in `help` output.
const HELP_NAME_WIDTH: usize = 19;

/// What a command produces when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text for a single success line.
    Text(String),
    /// Signal to empty the transcript.
    Clear,
    /// A numbered listing, after which the next line is read as a choice.
    ListAndAwait {
        listing: String,
        candidates: Vec<SelectableItem>,
    },
}

/// Immutable mapping from command name to behaviour.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    catalog: Catalog,
}

impl CommandRegistry {
    /// The canonical vocabulary over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            commands: CommandSpec::ALL.to_vec(),
            catalog,
        }
    }

    /// Normalize a raw line the way lookup does: trimmed and lowercased.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Resolve a raw line to a command.
    ///
    /// The whole normalized line must equal a command name; nothing is
    /// tokenized. Empty and unmatched lines yield `None`.
    pub fn lookup(&self, raw: &str) -> Option<CommandSpec> {
        let key = Self::normalize(raw);
        if key.is_empty() {
            return None;
        }
        self.commands.iter().copied().find(|cmd| cmd.name() == key)
    }

    /// Render what `cmd` produces.
    pub fn produce(&self, cmd: CommandSpec) -> CommandOutput {
        match cmd {
            CommandSpec::Clear => CommandOutput::Clear,
            CommandSpec::Help => CommandOutput::Text(self.help_text()),
            CommandSpec::Projects => CommandOutput::ListAndAwait {
                listing: self.catalog.listing(),
                candidates: self.catalog.items().to_vec(),
            },
            CommandSpec::Skills
            | CommandSpec::Contact
            | CommandSpec::Whoami
            | CommandSpec::Deploy => {
                CommandOutput::Text(cmd.static_text().unwrap_or_default().to_string())
            },
        }
    }

    /// The `help` listing of every visible command.
    pub fn help_text(&self) -> String {
        let mut out = String::from("Available commands:\n");
        for cmd in self.commands.iter().filter(|c| !c.hidden()) {
            out.push_str(&format!(
                "{:<width$}- {}\n",
                cmd.name(),
                cmd.description(),
                width = HELP_NAME_WIDTH
            ));
        }
        out
    }

    /// The items behind the `projects` dialogue.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(Catalog::portfolio())
    }
}
