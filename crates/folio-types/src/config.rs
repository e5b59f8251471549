//! Session configuration (`folio.toml`).
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! canonical terminal.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Appearance of a fresh session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Seed lines of a new session, shown as plain output.
    pub welcome: Vec<String>,
    /// Prefix of echoed input lines.
    pub prompt: String,
    /// Title shown by the host above the transcript.
    pub host_label: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            welcome: vec![
                "Welcome to Victory's Interactive Terminal v2.0".to_string(),
                "Type \"help\" to see available commands.\n".to_string(),
            ],
            prompt: "$ ".to_string(),
            host_label: "victory@portfolio:~".to_string(),
        }
    }
}

impl TerminalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(FolioError::Config("prompt must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_canonical_banner() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.welcome.len(), 2);
        assert_eq!(cfg.welcome[0], "Welcome to Victory's Interactive Terminal v2.0");
        assert!(cfg.welcome[1].starts_with("Type \"help\""));
        assert_eq!(cfg.prompt, "$ ");
        assert_eq!(cfg.host_label, "victory@portfolio:~");
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(
            TerminalConfig::from_toml("").unwrap(),
            TerminalConfig::default()
        );
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = TerminalConfig::from_toml(r#"welcome = ["Terminal v1.0"]"#).unwrap();
        assert_eq!(cfg.welcome, ["Terminal v1.0"]);
        assert_eq!(cfg.prompt, "$ ");
    }

    #[test]
    fn full_document() {
        let cfg = TerminalConfig::from_toml(
            r#"
            welcome = []
            prompt = "> "
            host_label = "guest@folio"
            "#,
        )
        .unwrap();
        assert!(cfg.welcome.is_empty());
        assert_eq!(cfg.prompt, "> ");
        assert_eq!(cfg.host_label, "guest@folio");
    }

    #[test]
    fn empty_prompt_rejected() {
        let err = TerminalConfig::from_toml(r#"prompt = """#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = TerminalConfig::from_toml("welcome = 3").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TerminalConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
