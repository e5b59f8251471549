use serde::Serialize;

use folio_terminal::{CommandRegistry, Line, Session};
use folio_types::config::TerminalConfig;
use folio_types::input::SessionEvent;

/// A change the renderer has to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewUpdate {
    /// A line was appended to the transcript.
    Line(Line),
    /// The transcript was emptied.
    Cleared,
    /// The input buffer now holds `text`.
    Buffer { text: String },
    /// An event could not be decoded and was dropped.
    Rejected { error: String },
}

/// Everything the view owns: the session plus the not-yet-submitted buffer.
pub struct ViewState {
    pub session: Session,
    pub input_buf: String,
    pub host_label: String,
    rendered: usize,
}

impl ViewState {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            session: Session::new(CommandRegistry::default(), config),
            input_buf: String::new(),
            host_label: config.host_label.clone(),
            rendered: 0,
        }
    }

    /// Lines present before any event (the welcome banner).
    pub fn initial_updates(&mut self) -> Vec<ViewUpdate> {
        let lines = self.session.log().since(self.rendered);
        let updates = lines.iter().cloned().map(ViewUpdate::Line).collect();
        self.rendered = self.session.log().len();
        updates
    }

    /// Feed one event through the session and diff the result.
    pub fn handle(&mut self, event: &SessionEvent) -> Vec<ViewUpdate> {
        let mut updates = Vec::new();
        let before = self.rendered;

        let buffer = self.session.apply(event);
        if matches!(event, SessionEvent::Submit { .. }) {
            self.input_buf.clear();
        }

        let log = self.session.log();
        if log.len() < before {
            updates.push(ViewUpdate::Cleared);
        }
        let start = if log.len() < before { 0 } else { before };
        updates.extend(log.since(start).iter().cloned().map(ViewUpdate::Line));
        self.rendered = log.len();

        if let Some(text) = buffer {
            self.input_buf.clone_from(&text);
            updates.push(ViewUpdate::Buffer { text });
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_terminal::LineKind;

    fn view() -> ViewState {
        ViewState::new(&TerminalConfig::default())
    }

    #[test]
    fn initial_updates_are_welcome_lines() {
        let mut v = view();
        let updates = v.initial_updates();
        assert_eq!(updates.len(), 2);
        assert!(v.initial_updates().is_empty());
    }

    #[test]
    fn submit_yields_echo_and_result() {
        let mut v = view();
        v.initial_updates();
        v.input_buf = "help".to_string();
        let updates = v.handle(&SessionEvent::submit("help"));
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0], ViewUpdate::Line(Line::input("$ help")));
        assert!(matches!(&updates[1], ViewUpdate::Line(l) if l.kind == LineKind::Success));
        assert!(v.input_buf.is_empty());
    }

    #[test]
    fn clear_yields_cleared() {
        let mut v = view();
        v.initial_updates();
        let updates = v.handle(&SessionEvent::submit("clear"));
        assert_eq!(updates, [ViewUpdate::Cleared]);
        let updates = v.handle(&SessionEvent::submit("nope"));
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn navigation_updates_buffer() {
        let mut v = view();
        v.handle(&SessionEvent::submit("skills"));
        let updates = v.handle(&SessionEvent::NavigateUp);
        assert_eq!(
            updates,
            [ViewUpdate::Buffer {
                text: "skills".to_string()
            }]
        );
        assert_eq!(v.input_buf, "skills");
    }

    #[test]
    fn up_on_empty_history_changes_nothing() {
        let mut v = view();
        v.initial_updates();
        v.input_buf = "draft".to_string();
        assert!(v.handle(&SessionEvent::NavigateUp).is_empty());
        assert_eq!(v.input_buf, "draft");
    }

    #[test]
    fn update_serializes_flat() {
        let json = serde_json::to_string(&ViewUpdate::Line(Line::error("x"))).unwrap();
        assert_eq!(json, r#"{"type":"line","kind":"error","content":"x"}"#);
        let json = serde_json::to_string(&ViewUpdate::Cleared).unwrap();
        assert_eq!(json, r#"{"type":"cleared"}"#);
    }
}
