//! Line-mode console front end.

use std::io::{BufRead, Write};

use folio_types::error::Result;
use folio_types::input::SessionEvent;

use crate::app_state::ViewState;
use crate::input::{ConsoleInput, InputResult, parse_console_line};
use crate::render;

/// Run the console until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W, state: &mut ViewState) -> Result<()> {
    writeln!(writer, "{}", render::render_header(&state.host_label))?;
    for update in state.initial_updates() {
        writeln!(writer, "{}", render::render_update(&update))?;
    }
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        if handle_line(&line, &mut writer, state)? == InputResult::Quit {
            break;
        }
        writer.flush()?;
    }
    log::info!("Console closed");
    Ok(())
}

fn handle_line<W: Write>(line: &str, writer: &mut W, state: &mut ViewState) -> Result<InputResult> {
    let event = match parse_console_line(line) {
        ConsoleInput::Quit => return Ok(InputResult::Quit),
        ConsoleInput::Invalid(msg) => {
            writeln!(writer, "{msg}")?;
            return Ok(InputResult::Continue);
        },
        ConsoleInput::SubmitBuffer => SessionEvent::submit(state.input_buf.clone()),
        ConsoleInput::Event(event) => event,
    };
    for update in state.handle(&event) {
        writeln!(writer, "{}", render::render_update(&update))?;
    }
    Ok(InputResult::Continue)
}
