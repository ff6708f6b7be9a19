//! The editor shell.
//!
//! ## Learning: The Facade Pattern
//!
//! `Editor` is the one object the front end talks to. It owns the document,
//! the status bar, and the view flags, and every user-visible command is a
//! method on it. Methods that may need the user take `&mut dyn Dialogs`.
//!
//! ## Document lifecycle
//!
//! ```text
//!          edit                 save / New / Open (guarded)
//!  Clean ────────► Dirty ──────────────────────────────────► Clean
//!                    │   Exit (guarded)
//!                    └──────────────────► quit
//! ```

use std::path::{Path, PathBuf};

use plume_buffer::Position;

use crate::command::Command;
use crate::config::Config;
use crate::dialogs::{Dialogs, TEXT_FILE_FILTERS, UnsavedChoice};
use crate::document::Document;
use crate::keymap::{KeyPress, Keymap};
use crate::status::StatusBar;
use crate::CoreResult;

/// Window title when no file is associated.
pub const APP_TITLE: &str = "Simple Text Editor";

const UNSAVED_TITLE: &str = "Unsaved Changes";
const UNSAVED_MESSAGE: &str = "You have unsaved changes. Do you want to save before proceeding?";
const OPEN_TITLE: &str = "Select a File";
const SAVE_TITLE: &str = "Save As";
const ERROR_TITLE: &str = "Error";

/// The editor shell state.
///
/// Owned by the UI thread; every method runs to completion before the next
/// event is dispatched.
#[derive(Debug)]
pub struct Editor {
    /// The open document
    document: Document,

    /// Status bar text
    status: StatusBar,

    /// Whether lines wrap visually
    word_wrap: bool,

    /// Editor configuration
    config: Config,

    /// Key bindings
    keymap: Keymap,

    /// Bumped whenever the document is replaced wholesale
    revision: u64,

    /// Whether the application should quit
    should_quit: bool,
}

impl Editor {
    /// Creates an editor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an editor with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let keymap = Keymap::from_config(&config.keyboard);
        Self {
            document: Document::new(),
            status: StatusBar::new(),
            word_wrap: config.editor.word_wrap,
            config,
            keymap,
            revision: 0,
            should_quit: false,
        }
    }

    // ==================== Queries ====================

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Window title for the current document.
    pub fn title(&self) -> String {
        match self.document.path() {
            Some(path) => format!("{} - {}", path.display(), APP_TITLE),
            None => APP_TITLE.to_string(),
        }
    }

    /// Current status bar text.
    pub fn status_text(&self) -> &str {
        self.status.text()
    }

    /// Whether word wrap is on.
    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// The horizontal scrollbar is shown exactly when lines don't wrap.
    pub fn horizontal_scrollbar_visible(&self) -> bool {
        !self.word_wrap
    }

    /// Changes whenever the document content was replaced wholesale.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true once Exit went through.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the editor configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    // ==================== Commands ====================

    /// Runs a command.
    pub fn execute(&mut self, command: Command, dialogs: &mut dyn Dialogs) {
        tracing::debug!(guarded = command.is_guarded(), "Executing command: {:?}", command);
        match command {
            Command::New => self.new_file(dialogs),
            Command::Open => self.open_file(dialogs),
            Command::Save => {
                self.save(dialogs);
            }
            Command::Exit => {
                self.exit(dialogs);
            }
            Command::ToggleWordWrap => {
                self.toggle_word_wrap();
            }
            Command::ToggleCapsLock => {
                self.toggle_caps_lock();
            }
            Command::ToggleOverwrite => self.toggle_overwrite(),
        }
    }

    /// Runs the command bound to `key`, if any, and returns it.
    pub fn handle_key(&mut self, key: &KeyPress, dialogs: &mut dyn Dialogs) -> Option<Command> {
        let command = self.keymap.lookup(key)?;
        tracing::debug!("{} -> {:?}", key, command);
        self.execute(command, dialogs);
        Some(command)
    }

    /// Clears the document after the unsaved-changes guard.
    pub fn new_file(&mut self, dialogs: &mut dyn Dialogs) {
        if !self.check_unsaved_changes(dialogs) {
            return;
        }
        self.document.clear();
        self.revision += 1;
        self.refresh_status();
        tracing::info!("New document");
    }

    /// Asks for a file and opens it, after the unsaved-changes guard.
    pub fn open_file(&mut self, dialogs: &mut dyn Dialogs) {
        if !self.check_unsaved_changes(dialogs) {
            return;
        }
        let Some(path) = dialogs.pick_open_path(OPEN_TITLE, TEXT_FILE_FILTERS) else {
            tracing::debug!("Open cancelled");
            return;
        };
        if path.as_os_str().is_empty() {
            return;
        }
        self.open_path(&path, dialogs);
    }

    /// Opens `path` without prompting. Failures are shown as an error dialog
    /// and leave the current document untouched.
    pub fn open_path(&mut self, path: &Path, dialogs: &mut dyn Dialogs) -> bool {
        match self.document.load(path) {
            Ok(()) => {
                tracing::info!("Opened {}", path.display());
                self.revision += 1;
                self.refresh_status();
                true
            }
            Err(e) => {
                tracing::warn!("Open failed for {}: {}", path.display(), e);
                dialogs.show_error(ERROR_TITLE, &e.to_string());
                false
            }
        }
    }

    /// Asks for a location and saves there. Every save asks.
    ///
    /// Returns true when the document was written.
    pub fn save(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let file_name = self.document.file_name();
        let Some(path) = dialogs.pick_save_path(SAVE_TITLE, TEXT_FILE_FILTERS, file_name.as_deref())
        else {
            tracing::debug!("Save cancelled");
            return false;
        };
        if path.as_os_str().is_empty() {
            return false;
        }

        let path = with_default_extension(path, &self.config.files.default_extension);
        match self.save_to(&path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Save failed for {}: {}", path.display(), e);
                dialogs.show_error(ERROR_TITLE, &e.to_string());
                false
            }
        }
    }

    fn save_to(&mut self, path: &Path) -> CoreResult<()> {
        self.document.save_as(path)?;
        tracing::info!("Saved {} ({} bytes)", path.display(), self.document.len_bytes());
        Ok(())
    }

    /// Requests shutdown after the unsaved-changes guard.
    ///
    /// Returns true when the application should stop.
    pub fn exit(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if self.check_unsaved_changes(dialogs) {
            tracing::info!("Exiting");
            self.should_quit = true;
        }
        self.should_quit
    }

    /// Flips word wrap and returns the new state.
    pub fn toggle_word_wrap(&mut self) -> bool {
        self.word_wrap = !self.word_wrap;
        tracing::debug!("Word wrap: {}", self.word_wrap);
        self.word_wrap
    }

    /// Flips the caps-lock indicator. The status bar shows only the
    /// indicator until the next refresh.
    pub fn toggle_caps_lock(&mut self) -> bool {
        self.status.toggle_caps_lock()
    }

    /// Switches between insert and overwrite mode.
    pub fn toggle_overwrite(&mut self) {
        let mode = self.document.edit_mode().toggled();
        self.document.set_edit_mode(mode);
        self.refresh_status();
    }

    /// Returns true when it is safe to discard the current document.
    ///
    /// A clean document passes straight through. Otherwise the user picks
    /// Save (passes only if the save succeeded), Don't Save (passes), or
    /// Cancel (blocks).
    pub fn check_unsaved_changes(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if !self.document.is_modified() {
            return true;
        }
        match dialogs.confirm_unsaved_changes(UNSAVED_TITLE, UNSAVED_MESSAGE) {
            UnsavedChoice::Save => self.save(dialogs),
            UnsavedChoice::Discard => true,
            UnsavedChoice::Cancel => false,
        }
    }

    // ==================== Widget Events ====================

    /// Recomputes the status bar (key and mouse releases).
    pub fn refresh_status(&mut self) {
        self.status.refresh(&self.document);
    }

    /// Mirrors the widget after an edit.
    pub fn sync_from_widget(&mut self, text: &str, cursor: Position) {
        self.document.sync_from_widget(text, cursor);
    }

    /// Follows the widget's cursor after a movement.
    pub fn move_cursor_to(&mut self, cursor: Position) {
        self.document.move_cursor_to(cursor);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends `.{ext}` when the chosen file name has no extension.
fn with_default_extension(path: PathBuf, ext: &str) -> PathBuf {
    if path.extension().is_some() || ext.is_empty() {
        path
    } else {
        path.with_extension(ext)
    }
}
