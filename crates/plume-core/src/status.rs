//! Status bar text.
//!
//! The status bar normally shows mode, cursor, and size. A Caps Lock press
//! replaces the whole line with `CAPS ON` / `CAPS OFF`; the next refresh
//! (key or mouse release) brings the normal line back.

use plume_buffer::Position;

use crate::document::{Document, EditMode};

/// Formats the normal status line.
pub fn format_status(mode: EditMode, cursor: Position, bytes: usize) -> String {
    format!(
        "{} Mode | Line: {} Col: {} | Size: {} bytes",
        mode.label(),
        cursor.display_line(),
        cursor.display_column(),
        bytes
    )
}

/// State behind the status bar label.
#[derive(Debug, Clone)]
pub struct StatusBar {
    text: String,
    caps_lock: bool,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            text: format_status(EditMode::Insert, Position::ZERO, 0),
            caps_lock: false,
        }
    }

    /// Recomputes the status line from the document.
    pub fn refresh(&mut self, doc: &Document) {
        self.text = format_status(doc.edit_mode(), doc.cursor_position(), doc.len_bytes());
    }

    /// Flips the caps-lock indicator and shows only it.
    pub fn toggle_caps_lock(&mut self) -> bool {
        self.caps_lock = !self.caps_lock;
        self.text = if self.caps_lock { "CAPS ON" } else { "CAPS OFF" }.to_string();
        self.caps_lock
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_text() {
        assert_eq!(
            StatusBar::new().text(),
            "Insert Mode | Line: 1 Col: 1 | Size: 0 bytes"
        );
    }

    #[test]
    fn test_refresh_reports_cursor_and_bytes() {
        let mut doc = Document::new();
        doc.sync_from_widget("héllo\nwo", Position::new(1, 2));

        let mut status = StatusBar::new();
        status.refresh(&doc);
        assert_eq!(status.text(), "Insert Mode | Line: 2 Col: 3 | Size: 9 bytes");

        doc.set_edit_mode(EditMode::Overwrite);
        status.refresh(&doc);
        assert!(status.text().starts_with("Overwrite Mode |"));
    }

    #[test]
    fn test_caps_lock_clobbers_until_refresh() {
        let doc = Document::new();
        let mut status = StatusBar::new();

        assert!(status.toggle_caps_lock());
        assert_eq!(status.text(), "CAPS ON");
        assert!(!status.toggle_caps_lock());
        assert_eq!(status.text(), "CAPS OFF");

        status.refresh(&doc);
        assert_eq!(status.text(), "Insert Mode | Line: 1 Col: 1 | Size: 0 bytes");
        assert!(!status.caps_lock());
    }
}
