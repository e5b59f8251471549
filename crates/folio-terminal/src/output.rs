//! The transcript: an ordered, append-only log of tagged lines.

use serde::Serialize;

/// Styling tag of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted line.
    Input,
    /// Plain output (welcome banner).
    Output,
    Error,
    Success,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    pub content: String,
}

impl Line {
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn input(content: impl Into<String>) -> Self {
        Self::new(LineKind::Input, content)
    }

    pub fn output(content: impl Into<String>) -> Self {
        Self::new(LineKind::Output, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(LineKind::Error, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(LineKind::Success, content)
    }
}

/// Append-only sequence of lines. Only [`OutputLog::clear`] shrinks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputLog {
    lines: Vec<Line>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// The most recent line of the given kind.
    pub fn last_of(&self, kind: LineKind) -> Option<&Line> {
        self.lines.iter().rev().find(|l| l.kind == kind)
    }

    /// Lines appended after the first `rendered` ones.
    ///
    /// Renderers keep a count of what they have drawn and call this after
    /// each event. If the log shrank (cleared), everything is new.
    pub fn since(&self, rendered: usize) -> &[Line] {
        self.lines.get(rendered..).unwrap_or(&self.lines)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a OutputLog {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut log = OutputLog::new();
        log.push(Line::input("$ a"));
        log.push(Line::error("b"));
        let contents: Vec<_> = log.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(contents, ["$ a", "b"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = OutputLog::new();
        log.push(Line::output("welcome"));
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn last_of_kind() {
        let mut log = OutputLog::new();
        log.push(Line::success("first"));
        log.push(Line::error("oops"));
        log.push(Line::success("second"));
        log.push(Line::input("$ x"));
        assert_eq!(log.last_of(LineKind::Success).unwrap().content, "second");
        assert!(log.last_of(LineKind::Output).is_none());
    }

    #[test]
    fn since_returns_new_lines() {
        let mut log = OutputLog::new();
        log.push(Line::output("a"));
        log.push(Line::output("b"));
        log.push(Line::output("c"));
        assert_eq!(log.since(1).len(), 2);
        assert_eq!(log.since(3).len(), 0);
    }

    #[test]
    fn since_after_shrink_returns_everything() {
        let mut log = OutputLog::new();
        log.push(Line::output("a"));
        assert_eq!(log.since(5).len(), 1);
    }

    #[test]
    fn line_serializes_with_lowercase_kind() {
        let json = serde_json::to_string(&Line::success("ok")).unwrap();
        assert_eq!(json, r#"{"kind":"success","content":"ok"}"#);
    }

    #[test]
    fn log_serializes_as_array() {
        let mut log = OutputLog::new();
        log.push(Line::input("$ help"));
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"[{"kind":"input","content":"$ help"}]"#);
    }
}
