//! Core text buffer implementation using a rope.
//!
//! ## Why Rope?
//!
//! The widget hands us the whole document after every edit, and the status
//! bar asks for the byte length and line/column on every key release. A rope
//! keeps those queries cheap (`len_bytes` is O(1), line lookups are
//! O(log n)) even for large files.
//!
//! ## Learning: Ownership in Action
//!
//! ```rust,ignore
//! let mut buffer = TextBuffer::new();  // buffer OWNS the rope
//! let text = buffer.text();            // text BORROWS from buffer
//! // buffer.set_text("x");             // ERROR! Can't mutate while borrowed
//! drop(text);                          // Release borrow
//! buffer.set_text("x");                // Now OK!
//! ```

use ropey::Rope;
use std::borrow::Cow;
use std::path::Path;
use unicode_width::UnicodeWidthChar;

use crate::{BufferError, BufferResult, Position};

/// Rewrites `\r\n` and lone `\r` as `\n`. Borrows when there is nothing to do.
fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Columns a tab advances when measuring line width.
const TAB_WIDTH: usize = 4;

/// A text buffer backed by a rope data structure.
///
/// The buffer tracks whether it has been modified since it was last loaded,
/// saved, or cleared. It does not remember where it came from; the owning
/// document keeps the path.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// The rope holding our text content
    rope: Rope,

    /// Whether the buffer has unsaved changes
    modified: bool,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use plume_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
        }
    }

    /// Loads a buffer from a UTF-8 text file.
    ///
    /// # Learning: Error Handling with `?`
    ///
    /// `read_to_string` fails with `InvalidData` when the file is not valid
    /// UTF-8; the `?` converts that `io::Error` into `BufferError::Io`.
    ///
    /// `\r\n` and lone `\r` line breaks are read as `\n`, the form the text
    /// widget hands back after an edit.
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self {
            rope: Rope::from_str(&normalize_line_breaks(&content)),
            modified: false,
        })
    }

    /// Writes the whole buffer to `path` and clears the modified flag.
    ///
    /// The file is written in place, so symlinks are followed and the
    /// target keeps its permissions. On failure the flag stays set.
    pub fn write_to(&mut self, path: impl AsRef<Path>) -> BufferResult<()> {
        std::fs::write(path.as_ref(), self.text().as_bytes())?;
        self.modified = false;
        Ok(())
    }

    // ==================== Text Access ====================

    /// Returns the entire text content as a `Cow<str>`.
    ///
    /// # Learning: Cow (Clone-on-Write)
    ///
    /// For small buffers, this returns a borrowed reference (cheap).
    /// For large buffers spanning multiple rope chunks, it allocates.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed).
    ///
    /// Line includes the trailing newline if present.
    pub fn line(&self, line_idx: usize) -> BufferResult<Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: line_idx,
                column: 0,
            });
        }
        Ok(self.rope.line(line_idx).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters (Unicode scalar values).
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the size of the content encoded as UTF-8.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the length of a line in characters, excluding its line break.
    pub fn line_len(&self, line_idx: usize) -> BufferResult<usize> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::PositionOutOfBounds {
                line: line_idx,
                column: 0,
            });
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
        Ok(len)
    }

    /// Display width of the widest line, in terminal-style columns.
    ///
    /// Wide (CJK) characters count as two columns, tabs as four.
    pub fn max_line_width(&self) -> usize {
        self.rope
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| *c != '\n' && *c != '\r')
                    .map(|c| {
                        if c == '\t' {
                            TAB_WIDTH
                        } else {
                            c.width().unwrap_or(0)
                        }
                    })
                    .sum::<usize>()
            })
            .max()
            .unwrap_or(0)
    }

    // ==================== Mutations ====================

    /// Replaces the whole content. Marks the buffer modified.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.modified = true;
    }

    /// Empties the buffer and clears the modified flag.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.modified = false;
    }

    // ==================== Positions ====================

    /// Pulls a position back inside the buffer.
    ///
    /// Lines past the end land on the last line; columns past a line's end
    /// land on that line's end.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.len_lines().saturating_sub(1));
        let max_col = self.line_len(line).unwrap_or(0);
        Position::new(line, pos.column.min(max_col))
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            modified: false,
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_write_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let mut buffer = TextBuffer::from("héllo\nwörld ✓");
        buffer.set_text(">héllo\nwörld ✓");
        assert!(buffer.is_modified());

        buffer.write_to(&path).unwrap();
        assert!(!buffer.is_modified());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">héllo\nwörld ✓");

        let loaded = TextBuffer::from_file(&path).unwrap();
        assert_eq!(loaded.text(), buffer.text());
        assert!(!loaded.is_modified());
    }

    #[test]
    fn test_load_normalizes_line_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "a\r\nb\rc\n").unwrap();

        let buffer = TextBuffer::from_file(&path).unwrap();
        assert_eq!(buffer.text(), "a\nb\nc\n");
        assert_eq!(buffer.len_bytes(), 6);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_normalize_line_breaks_borrows_unix_text() {
        assert!(matches!(normalize_line_breaks("a\nb"), Cow::Borrowed("a\nb")));
        assert_eq!(normalize_line_breaks("\r\n\r"), "\n\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "a much longer old content").unwrap();

        TextBuffer::from("new").write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_follows_symlink() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        std::fs::write(&real, "old").unwrap();
        std::fs::set_permissions(&real, std::fs::Permissions::from_mode(0o640)).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        TextBuffer::from("new").write_to(&link).unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&real).unwrap(), "new");
        let mode = std::fs::metadata(&real).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_failed_write_keeps_modified() {
        let mut buffer = TextBuffer::new();
        buffer.set_text("data");
        let result = buffer.write_to("/nonexistent-dir/plume/out.txt");
        assert!(result.is_err());
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
        assert!(matches!(TextBuffer::from_file(&path), Err(BufferError::Io(_))));
    }

    #[test]
    fn test_len_bytes_counts_utf8() {
        let buffer = TextBuffer::from("aé€😀");
        assert_eq!(buffer.len_chars(), 4);
        assert_eq!(buffer.len_bytes(), 1 + 2 + 3 + 4);
    }

    #[test]
    fn test_line_len_excludes_line_break() {
        let buffer = TextBuffer::from("abc\r\nde\nf");
        assert_eq!(buffer.line_len(0).unwrap(), 3);
        assert_eq!(buffer.line_len(1).unwrap(), 2);
        assert_eq!(buffer.line_len(2).unwrap(), 1);
        assert!(buffer.line_len(3).is_err());
    }

    #[test]
    fn test_clamp_position() {
        let buffer = TextBuffer::from("ab\ncde");
        assert_eq!(buffer.clamp_position(Position::new(9, 9)), Position::new(1, 3));
        assert_eq!(buffer.clamp_position(Position::new(0, 7)), Position::new(0, 2));
    }

    #[test]
    fn test_clear_resets_modified() {
        let mut buffer = TextBuffer::from("text");
        buffer.set_text("other");
        assert!(buffer.is_modified());
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_max_line_width() {
        assert_eq!(TextBuffer::new().max_line_width(), 0);
        let buffer = TextBuffer::from("short\na much longer line\n\tx\n日本");
        assert_eq!(buffer.max_line_width(), 18);
        assert_eq!(TextBuffer::from("日本語").max_line_width(), 6);
        assert_eq!(TextBuffer::from("\tab").max_line_width(), 6);
    }

    proptest! {
        #[test]
        fn prop_len_bytes_matches_utf8_encoding(s in "\\PC{0,64}", extra in "\\PC{0,16}") {
            let mut buffer = TextBuffer::from(s.as_str());
            prop_assert_eq!(buffer.len_bytes(), s.len());
            buffer.set_text(&format!("{s}{extra}"));
            prop_assert_eq!(buffer.len_bytes(), s.len() + extra.len());
            prop_assert_eq!(buffer.len_bytes(), buffer.text().len());
        }
    }
}
