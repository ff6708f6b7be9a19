//! # Plume Core
//!
//! Editor shell logic, independent of any GUI toolkit.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Editor                        │
//! │  ┌──────────┐ ┌──────────┐ ┌────────┐ ┌───────────┐  │
//! │  │ Document │ │StatusBar │ │ Keymap │ │  Config   │  │
//! │  └────┬─────┘ └──────────┘ └────────┘ └───────────┘  │
//! │       │                                              │
//! │  ┌────┴───────┐        ┌───────────────────────┐     │
//! │  │ TextBuffer │        │ &mut dyn Dialogs      │◄────┼── front end
//! │  └────────────┘        └───────────────────────┘     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Every command that needs the user (file choosers, the unsaved-changes
//! prompt, error boxes) receives a `&mut dyn Dialogs`. The iced front end
//! passes native dialogs; tests pass a scripted double.

pub mod command;
pub mod config;
pub mod dialogs;
pub mod document;
pub mod editor;
pub mod keymap;
pub mod status;

pub use command::Command;
pub use config::Config;
pub use dialogs::{Dialogs, FileFilter, UnsavedChoice};
pub use document::{Document, EditMode};
pub use editor::{Editor, APP_TITLE};
pub use keymap::{Key, KeyBinding, KeyPress, Keymap, Modifiers};
pub use plume_buffer::Position;
pub use status::StatusBar;

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
///
/// The `Display` text of `Open` and `Save` is what the user sees in the
/// error dialog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Could not open file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: plume_buffer::BufferError,
    },

    #[error("Could not save file: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: plume_buffer::BufferError,
    },
}
