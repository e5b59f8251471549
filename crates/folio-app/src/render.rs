use folio_terminal::{Line, LineKind};

use crate::app_state::ViewUpdate;

const RESET: &str = "\x1b[0m";

/// ANSI style per line kind.
fn style(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Input => "\x1b[32m",
        LineKind::Output => "\x1b[2m",
        LineKind::Error => "\x1b[31m",
        LineKind::Success => "",
    }
}

/// Title bar drawn once when the view opens.
pub fn render_header(host_label: &str) -> String {
    format!("\x1b[1m● ● ●  {host_label}{RESET}")
}

/// Render one transcript line, keeping its embedded newlines.
pub fn render_line(line: &Line) -> String {
    let style = style(line.kind);
    if style.is_empty() {
        line.content.clone()
    } else {
        format!("{style}{}{RESET}", line.content)
    }
}

/// Render a view update for the console.
pub fn render_update(update: &ViewUpdate) -> String {
    match update {
        ViewUpdate::Line(line) => render_line(line),
        // Clear screen, cursor home.
        ViewUpdate::Cleared => "\x1b[2J\x1b[H".to_string(),
        ViewUpdate::Buffer { text } => {
            format!("{}[buffer] {text}{RESET}", style(LineKind::Output))
        },
        ViewUpdate::Rejected { error } => format!("{}{error}{RESET}", style(LineKind::Error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_unstyled() {
        assert_eq!(render_line(&Line::success("ok")), "ok");
    }

    #[test]
    fn error_is_red() {
        let out = render_line(&Line::error("bad"));
        assert!(out.starts_with("\x1b[31m"));
        assert!(out.ends_with(RESET));
        assert!(out.contains("bad"));
    }

    #[test]
    fn multiline_content_is_kept() {
        let out = render_line(&Line::success("a\nb"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn header_contains_label() {
        assert!(render_header("victory@portfolio:~").contains("victory@portfolio:~"));
    }

    #[test]
    fn buffer_update_shows_text() {
        let out = render_update(&ViewUpdate::Buffer {
            text: "help".to_string(),
        });
        assert!(out.contains("[buffer] help"));
    }
}
