//! Input events delivered to the session by the hosting view.
//!
//! Every host (line-mode console, JSON bridge, a browser page) maps its
//! native input to these types. The session core never sees raw key codes.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// A discrete event from the hosting view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A typed line was submitted (Enter).
    Submit { text: String },
    /// A quick-command button was clicked.
    Quick { command: QuickCommand },
    /// Recall an older entry (arrow up).
    NavigateUp,
    /// Recall a newer entry (arrow down).
    NavigateDown,
}

impl SessionEvent {
    /// Shorthand for a `Submit` event.
    pub fn submit(text: impl Into<String>) -> Self {
        Self::Submit { text: text.into() }
    }

    /// Decode one JSON-encoded event, as sent by an embedding page.
    pub fn from_json(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(FolioError::Event("empty event".to_string()));
        }
        Ok(serde_json::from_str(line)?)
    }

    /// The recall direction, if this is a navigation event.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::NavigateUp => Some(Direction::Up),
            Self::NavigateDown => Some(Direction::Down),
            Self::Submit { .. } | Self::Quick { .. } => None,
        }
    }
}

/// Direction of history recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards older entries.
    Up,
    /// Towards newer entries, then back to an empty buffer.
    Down,
}

/// The fixed row of quick-command buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickCommand {
    Help,
    Projects,
    Skills,
    Contact,
    Whoami,
}

impl QuickCommand {
    /// All buttons, left to right.
    pub const ALL: [QuickCommand; 5] = [
        QuickCommand::Help,
        QuickCommand::Projects,
        QuickCommand::Skills,
        QuickCommand::Contact,
        QuickCommand::Whoami,
    ];

    /// The command text this button submits.
    pub fn command_text(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Whoami => "whoami",
        }
    }

    /// Button by 1-based position in the row.
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_shorthand() {
        assert_eq!(
            SessionEvent::submit("help"),
            SessionEvent::Submit {
                text: "help".to_string()
            }
        );
    }

    #[test]
    fn decode_submit_event() {
        let e = SessionEvent::from_json(r#"{"type":"submit","text":"  HELP "}"#).unwrap();
        assert_eq!(e, SessionEvent::submit("  HELP "));
    }

    #[test]
    fn decode_navigation_events() {
        let up = SessionEvent::from_json(r#"{"type":"navigate_up"}"#).unwrap();
        let down = SessionEvent::from_json(r#"{"type":"navigate_down"}"#).unwrap();
        assert_eq!(up.direction(), Some(Direction::Up));
        assert_eq!(down.direction(), Some(Direction::Down));
    }

    #[test]
    fn decode_quick_event() {
        let e = SessionEvent::from_json(r#"{"type":"quick","command":"projects"}"#).unwrap();
        assert_eq!(
            e,
            SessionEvent::Quick {
                command: QuickCommand::Projects
            }
        );
        assert_eq!(e.direction(), None);
    }

    #[test]
    fn decode_rejects_unknown_quick_command() {
        let err = SessionEvent::from_json(r#"{"type":"quick","command":"clear"}"#).unwrap_err();
        assert!(format!("{err}").contains("JSON error"));
    }

    #[test]
    fn decode_rejects_empty_line() {
        let err = SessionEvent::from_json("   ").unwrap_err();
        assert!(matches!(err, FolioError::Event(_)));
    }

    #[test]
    fn encode_uses_snake_case_tags() {
        let json = serde_json::to_string(&SessionEvent::NavigateDown).unwrap();
        assert_eq!(json, r#"{"type":"navigate_down"}"#);
    }

    #[test]
    fn quick_commands_in_button_order() {
        let names: Vec<_> = QuickCommand::ALL.iter().map(|q| q.command_text()).collect();
        assert_eq!(names, ["help", "projects", "skills", "contact", "whoami"]);
    }

    #[test]
    fn quick_command_positions_are_one_based() {
        assert_eq!(QuickCommand::from_position(0), None);
        assert_eq!(QuickCommand::from_position(1), Some(QuickCommand::Help));
        assert_eq!(QuickCommand::from_position(5), Some(QuickCommand::Whoami));
        assert_eq!(QuickCommand::from_position(6), None);
    }

    #[test]
    fn direction_hash_distinct() {
        use std::collections::HashSet;
        let set: HashSet<_> = [Direction::Up, Direction::Down, Direction::Up]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
