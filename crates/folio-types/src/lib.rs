//! Foundation types for the folio terminal.
//!
//! This crate contains the types shared by the session core and its hosts:
//! input events delivered by the hosting view, session configuration, and
//! error types.

pub mod config;
pub mod error;
pub mod input;
