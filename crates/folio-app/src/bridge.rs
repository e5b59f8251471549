//! JSON-lines bridge for an embedding page.
//!
//! One `SessionEvent` per input line, one `ViewUpdate` per output line.

use std::io::{BufRead, Write};

use folio_types::error::Result;
use folio_types::input::SessionEvent;

use crate::app_state::{ViewState, ViewUpdate};

/// Run the bridge until the input closes.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W, state: &mut ViewState) -> Result<()> {
    for update in state.initial_updates() {
        write_update(&mut writer, &update)?;
    }
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let updates = match SessionEvent::from_json(&line) {
            Ok(event) => state.handle(&event),
            Err(e) => {
                log::warn!("Rejected bridge event: {e}");
                vec![ViewUpdate::Rejected {
                    error: e.to_string(),
                }]
            },
        };
        for update in &updates {
            write_update(&mut writer, update)?;
        }
        writer.flush()?;
    }
    Ok(())
}

fn write_update<W: Write>(writer: &mut W, update: &ViewUpdate) -> Result<()> {
    serde_json::to_writer(&mut *writer, update)?;
    writer.write_all(b"\n")?;
    Ok(())
}
