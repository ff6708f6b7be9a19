//! The seam between the editor and modal dialogs.
//!
//! ## Learning: Trait Objects as Seams
//!
//! `Editor` never talks to a GUI toolkit directly. Anything that needs the
//! user goes through `&mut dyn Dialogs`, so the same command logic runs
//! against native dialogs in the app and against a scripted double in tests.
//!
//! Every method is modal: it returns only once the user dismissed the dialog.

use std::path::PathBuf;

/// A named group of file extensions for file choosers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the dot; `"*"` matches everything.
    pub extensions: &'static [&'static str],
}

/// Filters offered by the open and save choosers, default first.
pub const TEXT_FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Text Files",
        extensions: &["txt"],
    },
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
];

/// The user's answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    /// Save first, then continue.
    Save,
    /// Continue without saving.
    Discard,
    /// Abort the operation.
    Cancel,
}

/// Modal dialogs the editor can show.
pub trait Dialogs {
    /// Asks for a file to open. `None` when the user cancelled.
    fn pick_open_path(&mut self, title: &str, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Asks for a location to save to. `None` when the user cancelled.
    fn pick_save_path(
        &mut self,
        title: &str,
        filters: &[FileFilter],
        file_name: Option<&str>,
    ) -> Option<PathBuf>;

    /// Asks whether to save pending changes.
    fn confirm_unsaved_changes(&mut self, title: &str, message: &str) -> UnsavedChoice;

    /// Shows an error message.
    fn show_error(&mut self, title: &str, message: &str);
}
