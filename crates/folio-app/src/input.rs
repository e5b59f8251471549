use folio_types::input::{QuickCommand, SessionEvent};

/// What one console line asks the view to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Forward an event to the session.
    Event(SessionEvent),
    /// Submit whatever the buffer holds (Enter after recalling a line).
    SubmitBuffer,
    /// Close the view.
    Quit,
    /// A directive with bad arguments; the message says why.
    Invalid(String),
}

/// Result of handling a single console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Map a console line to view input.
///
/// Lines starting with `:` are view directives (`:up`, `:down`,
/// `:quick N`, `:buffer`, `:quit`). Everything else, including unknown
/// directives, is typed text.
pub fn parse_console_line(line: &str) -> ConsoleInput {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(":up") => ConsoleInput::Event(SessionEvent::NavigateUp),
        Some(":down") => ConsoleInput::Event(SessionEvent::NavigateDown),
        Some(":buffer") => ConsoleInput::SubmitBuffer,
        Some(":quit") => ConsoleInput::Quit,
        Some(":quick") => parse_quick(parts.next()),
        _ => ConsoleInput::Event(SessionEvent::submit(line)),
    }
}

fn parse_quick(arg: Option<&str>) -> ConsoleInput {
    let usage = || {
        let names: Vec<String> = QuickCommand::ALL
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}={}", i + 1, q.command_text()))
            .collect();
        ConsoleInput::Invalid(format!("usage: :quick N ({})", names.join(" ")))
    };
    match arg.and_then(|a| a.parse::<usize>().ok()) {
        Some(n) => match QuickCommand::from_position(n) {
            Some(command) => ConsoleInput::Event(SessionEvent::Quick { command }),
            None => usage(),
        },
        None => usage(),
    }
}
