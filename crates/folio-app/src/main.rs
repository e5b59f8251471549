//! folio terminal host.
//!
//! Stands in for the browser view: owns one session for its lifetime, feeds
//! it events and draws what it appends. By default it runs a line-mode
//! console (`:up`/`:down` recall history, `:quick N` clicks a quick-command
//! button, `:buffer` submits the recalled line, `:quit` exits). With `--json`
//! it speaks the JSON-lines bridge on stdin/stdout instead.
//!
//! Config is read from the first positional argument, then `FOLIO_CONFIG`.

mod app_state;
mod bridge;
mod console;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;

use app_state::ViewState;
use folio_types::config::TerminalConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json = false;
    let mut config_path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => config_path = Some(PathBuf::from(arg)),
        }
    }
    let config_path = config_path.or_else(|| std::env::var_os("FOLIO_CONFIG").map(PathBuf::from));

    let config = match config_path {
        Some(path) => TerminalConfig::load(&path)?,
        None => TerminalConfig::default(),
    };

    let mut state = ViewState::new(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if json {
        log::info!("Starting JSON bridge");
        bridge::run(stdin.lock(), stdout.lock(), &mut state)?;
    } else {
        console::run(stdin.lock(), stdout.lock(), &mut state)?;
    }
    Ok(())
}
