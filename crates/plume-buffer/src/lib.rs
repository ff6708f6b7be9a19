//! # Plume Buffer
//!
//! Text storage for the editor, backed by a rope.
//!
//! ## Key Concepts
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns the rope and the modified flag
//! - Methods like `text()` return borrowed data (`Cow<str>`)
//! - Mutations require `&mut self` (exclusive access)
//!
//! ### Modified Tracking
//! - Replacing the text sets the modified flag
//! - Only loading, saving, or clearing resets it
//!
//! ### Line Breaks
//! - Files are read with `\r\n` and `\r` turned into `\n`

mod buffer;
mod cursor;

pub use buffer::TextBuffer;
pub use cursor::Position;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Position {line}:{column} is out of bounds")]
    PositionOutOfBounds { line: usize, column: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert!(!buffer.is_modified());
        assert_eq!(buffer.len_chars(), 0);
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from("Hello, World!");
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.text(), "Hello, World!");
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_set_text_marks_modified() {
        let mut buffer = TextBuffer::new();
        buffer.set_text("Hello, World!");
        assert_eq!(buffer.text(), "Hello, World!");
        assert_eq!(buffer.len_lines(), 1);
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_line_operations() {
        let buffer = TextBuffer::from("Line 1\nLine 2\nLine 3");
        assert_eq!(buffer.len_lines(), 3);
        assert_eq!(buffer.line(0).unwrap(), "Line 1\n");
        assert_eq!(buffer.line(1).unwrap(), "Line 2\n");
        assert_eq!(buffer.line(2).unwrap(), "Line 3");
    }

    #[test]
    fn test_io_error_message_is_the_system_message() {
        let err = TextBuffer::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, BufferError::Io(_)));
        assert!(!err.to_string().is_empty());
    }
}
