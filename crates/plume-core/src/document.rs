//! The open document: buffer, cursor, file path, and edit mode.
//!
//! ## Learning: Composition over Inheritance
//!
//! Rust doesn't have inheritance. `Document` composes a `TextBuffer` and
//! adds what only matters to the editor: where the cursor is, which file
//! the text belongs to, and whether typing inserts or overwrites.

use plume_buffer::{Position, TextBuffer};
use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// Whether typed characters are inserted or written over existing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Insert,
    Overwrite,
}

impl EditMode {
    /// Label used in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            EditMode::Insert => "Insert",
            EditMode::Overwrite => "Overwrite",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Insert => EditMode::Overwrite,
            EditMode::Overwrite => EditMode::Insert,
        }
    }

    /// Whether typing `typed` first removes `next`, the character after the
    /// cursor on the same line (`None` at a line or buffer end).
    ///
    /// Only overwrite mode replaces, and only within a line: line breaks are
    /// always inserted and never written over.
    pub fn replaces_next(self, typed: char, next: Option<char>) -> bool {
        self == EditMode::Overwrite
            && !is_line_break(typed)
            && next.is_some_and(|c| !is_line_break(c))
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// A single text document.
#[derive(Debug, Default)]
pub struct Document {
    /// The underlying text buffer
    buffer: TextBuffer,

    /// Cursor position (0-indexed)
    cursor: Position,

    /// File path (None for untitled documents)
    path: Option<PathBuf>,

    /// Insert or overwrite
    edit_mode: EditMode,
}

impl Document {
    /// Creates a new empty, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    /// Returns the file path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the file name, if the document has a path.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    /// Returns the text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns all text.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        self.buffer.text()
    }

    /// Size of the content encoded as UTF-8.
    pub fn len_bytes(&self) -> usize {
        self.buffer.len_bytes()
    }

    /// Returns the cursor position (0-indexed).
    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Returns the current edit mode.
    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    // ==================== File Operations ====================

    /// Replaces the content with the file at `path`.
    ///
    /// On failure the document is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let buffer = TextBuffer::from_file(path).map_err(|source| CoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.buffer = buffer;
        self.path = Some(path.to_path_buf());
        self.cursor = Position::ZERO;
        Ok(())
    }

    /// Writes the content to `path` and adopts it as the document's path.
    ///
    /// On failure the path and modified flag are unchanged.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        self.buffer
            .write_to(path)
            .map_err(|source| CoreError::Save {
                path: path.to_path_buf(),
                source,
            })?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Empties the document and forgets its path.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.path = None;
        self.cursor = Position::ZERO;
    }

    // ==================== Text Editing ====================

    /// Mirrors the widget's content after an edit.
    ///
    /// The buffer only counts as modified when the text actually changed, so
    /// a backspace at the start of the document leaves a clean document
    /// clean.
    pub fn sync_from_widget(&mut self, text: &str, cursor: Position) {
        if self.buffer.text() != text {
            self.buffer.set_text(text);
        }
        self.move_cursor_to(cursor);
    }

    // ==================== Cursor & Mode ====================

    /// Moves the cursor, clamped to the content.
    pub fn move_cursor_to(&mut self, pos: Position) {
        self.cursor = self.buffer.clamp_position(pos);
    }

    /// Sets the edit mode.
    pub fn set_edit_mode(&mut self, mode: EditMode) {
        self.edit_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new();
        assert!(doc.path().is_none());
        assert!(!doc.is_modified());
        assert_eq!(doc.cursor_position(), Position::ZERO);
        assert_eq!(doc.edit_mode(), EditMode::Insert);
    }

    #[test]
    fn test_insert_mode_never_replaces() {
        assert!(!EditMode::Insert.replaces_next('a', Some('b')));
        assert!(!EditMode::Insert.replaces_next('a', None));
    }

    #[test]
    fn test_overwrite_replaces_within_line() {
        assert!(EditMode::Overwrite.replaces_next('a', Some('b')));
        assert!(EditMode::Overwrite.replaces_next(' ', Some('\t')));
    }

    #[test]
    fn test_overwrite_inserts_at_line_end() {
        assert!(!EditMode::Overwrite.replaces_next('a', None));
        assert!(!EditMode::Overwrite.replaces_next('a', Some('\n')));
        assert!(!EditMode::Overwrite.replaces_next('a', Some('\r')));
    }

    #[test]
    fn test_overwrite_inserts_line_breaks() {
        assert!(!EditMode::Overwrite.replaces_next('\n', Some('b')));
        assert!(!EditMode::Overwrite.replaces_next('\r', Some('b')));
    }

    #[test]
    fn test_sync_from_widget_only_marks_real_changes() {
        let mut doc = Document::new();
        doc.sync_from_widget("", Position::ZERO);
        assert!(!doc.is_modified());

        doc.sync_from_widget("ab\ncd", Position::new(1, 2));
        assert!(doc.is_modified());
        assert_eq!(doc.text(), "ab\ncd");
        assert_eq!(doc.cursor_position(), Position::new(1, 2));
    }

    #[test]
    fn test_crlf_file_stays_clean_after_unchanged_sync() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "a\r\nb").unwrap();

        let mut doc = Document::new();
        doc.load(&path).unwrap();
        // the widget reports lines without terminators; they come back joined by \n
        doc.sync_from_widget("a\nb", Position::new(1, 1));

        assert!(!doc.is_modified());
        assert_eq!(doc.len_bytes(), 3);
    }

    #[test]
    fn test_sync_clamps_cursor() {
        let mut doc = Document::new();
        doc.sync_from_widget("ab", Position::new(4, 10));
        assert_eq!(doc.cursor_position(), Position::new(0, 2));
    }

    #[test]
    fn test_failed_load_leaves_document_untouched() {
        let mut doc = Document::new();
        doc.sync_from_widget("keep me", Position::new(0, 7));

        let err = doc.load("/no/such/file.txt").unwrap_err();
        assert!(matches!(err, CoreError::Open { .. }));
        assert!(err.to_string().starts_with("Could not open file: "));
        assert_eq!(doc.text(), "keep me");
        assert!(doc.is_modified());
        assert!(doc.path().is_none());
    }

    #[test]
    fn test_save_as_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");

        let mut doc = Document::new();
        doc.sync_from_widget("line one\nline two", Position::new(1, 8));
        doc.save_as(&path).unwrap();
        assert!(!doc.is_modified());
        assert_eq!(doc.path(), Some(path.as_path()));
        assert_eq!(doc.file_name().as_deref(), Some("doc.txt"));

        let mut reopened = Document::new();
        reopened.load(&path).unwrap();
        assert_eq!(reopened.text(), "line one\nline two");
        assert!(!reopened.is_modified());
    }

    #[test]
    fn test_clear() {
        let mut doc = Document::new();
        doc.sync_from_widget("text", Position::new(0, 4));
        doc.clear();
        assert!(doc.text().is_empty());
        assert!(!doc.is_modified());
        assert_eq!(doc.cursor_position(), Position::ZERO);
    }
}
