//! Recall of previously submitted lines with arrow-key navigation.
//!
//! The cursor counts back from the newest entry: `Some(0)` is the most recent
//! submission, `None` means the user is not navigating. Navigation clamps at
//! the oldest entry and never wraps.

use folio_types::input::Direction;

/// Result of one navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recall {
    /// Cursor to store back into the session.
    pub cursor: Option<usize>,
    /// New input-buffer text, or `None` if the buffer should be left alone.
    pub text: Option<String>,
}

/// Compute the next cursor and buffer text. Never touches `history`.
pub fn navigate(history: &[String], cursor: Option<usize>, direction: Direction) -> Recall {
    let newest = match history.len().checked_sub(1) {
        Some(last) => last,
        None => {
            return match direction {
                Direction::Up => Recall { cursor, text: None },
                Direction::Down => Recall {
                    cursor: None,
                    text: Some(String::new()),
                },
            };
        },
    };

    match (direction, cursor) {
        (Direction::Up, None) => recall_at(history, 0),
        (Direction::Up, Some(c)) => recall_at(history, (c + 1).min(newest)),
        (Direction::Down, Some(c)) if c > 0 => recall_at(history, (c - 1).min(newest)),
        (Direction::Down, _) => Recall {
            cursor: None,
            text: Some(String::new()),
        },
    }
}

fn recall_at(history: &[String], cursor: usize) -> Recall {
    Recall {
        cursor: Some(cursor),
        text: Some(history[history.len() - 1 - cursor].clone()),
    }
}
