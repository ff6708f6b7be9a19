//! Native dialogs through `rfd`.
//!
//! The synchronous `FileDialog` and `MessageDialog` block until the user
//! answers, which is what the editor's unsaved-changes guard needs: the
//! command that asked cannot continue until the dialog is gone.

use std::path::PathBuf;

use plume_core::{Dialogs, FileFilter, UnsavedChoice};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Dialogs shown by the operating system.
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    pub fn new() -> Self {
        Self
    }
}

fn file_dialog(title: &str, filters: &[FileFilter]) -> FileDialog {
    filters
        .iter()
        .fold(FileDialog::new().set_title(title), |dialog, filter| {
            dialog.add_filter(filter.name, filter.extensions)
        })
}

impl Dialogs for NativeDialogs {
    fn pick_open_path(&mut self, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        file_dialog(title, filters).pick_file()
    }

    fn pick_save_path(
        &mut self,
        title: &str,
        filters: &[FileFilter],
        file_name: Option<&str>,
    ) -> Option<PathBuf> {
        let mut dialog = file_dialog(title, filters);
        if let Some(name) = file_name {
            dialog = dialog.set_file_name(name);
        }
        dialog.save_file()
    }

    fn confirm_unsaved_changes(&mut self, title: &str, message: &str) -> UnsavedChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNoCancel)
            .show();

        match result {
            MessageDialogResult::Yes => UnsavedChoice::Save,
            MessageDialogResult::No => UnsavedChoice::Discard,
            // Closing the box counts as Cancel
            _ => UnsavedChoice::Cancel,
        }
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
