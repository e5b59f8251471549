//! Session core of the folio terminal.
//!
//! A [`Session`] receives discrete events from the hosting view (submitted
//! lines, history navigation, quick-command clicks) and maintains the
//! transcript the view renders. Command lookup goes through an immutable
//! [`CommandRegistry`]; the `projects` command opens a numeric selection
//! dialogue over the registry's [`Catalog`].

pub mod catalog;
pub mod commands;
pub mod history;
pub mod output;
pub mod registry;
pub mod session;

/// A numbered item reachable through `projects`.
pub use catalog::{Catalog, SelectableItem};
/// The closed command vocabulary.
pub use commands::CommandSpec;
/// Pure history recall.
pub use history::{Recall, navigate};
/// Tagged transcript lines.
pub use output::{Line, LineKind, OutputLog};
/// Command lookup and payload rendering.
pub use registry::{CommandOutput, CommandRegistry};
/// The stateful engine.
pub use session::{Mode, Session};
