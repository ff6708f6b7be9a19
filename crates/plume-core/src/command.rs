//! Command system for editor actions.
//!
//! ## Learning: The Command Pattern
//!
//! Commands encapsulate actions as values:
//! - Menus, shortcuts, and config bindings all produce a `Command`
//! - `Editor::execute` is the single place that interprets them
//! - Ids like `"file.save"` let the config file refer to commands

/// User-visible editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File menu
    New,
    Open,
    Save,
    Exit,

    // Format menu
    ToggleWordWrap,

    // Keyboard state
    ToggleCapsLock,
    ToggleOverwrite,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 7] = [
        Command::Open,
        Command::Save,
        Command::Exit,
        Command::New,
        Command::ToggleWordWrap,
        Command::ToggleCapsLock,
        Command::ToggleOverwrite,
    ];

    /// Returns the label shown in menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open ...",
            Command::Save => "Save ...",
            Command::Exit => "Exit",
            Command::ToggleWordWrap => "Word Wrap",
            Command::ToggleCapsLock => "Caps Lock",
            Command::ToggleOverwrite => "Toggle Overwrite",
        }
    }

    /// Returns the stable id used in config key bindings.
    pub fn id(&self) -> &'static str {
        match self {
            Command::New => "file.new",
            Command::Open => "file.open",
            Command::Save => "file.save",
            Command::Exit => "file.exit",
            Command::ToggleWordWrap => "format.word_wrap",
            Command::ToggleCapsLock => "keyboard.caps_lock",
            Command::ToggleOverwrite => "edit.toggle_overwrite",
        }
    }

    /// Parses a command id such as `"file.save"`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.id() == id)
    }

    /// True for commands that may throw away or replace the document and
    /// therefore run behind the unsaved-changes guard.
    pub fn is_guarded(&self) -> bool {
        matches!(self, Command::New | Command::Open | Command::Exit)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display_name() {
        assert_eq!(Command::Save.display_name(), "Save ...");
        assert_eq!(Command::ToggleWordWrap.to_string(), "Word Wrap");
    }

    #[test]
    fn test_ids_roundtrip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_id(cmd.id()), Some(cmd));
        }
        assert_eq!(Command::from_id("editor.undo"), None);
    }

    #[test]
    fn test_guarded_commands() {
        assert!(Command::New.is_guarded());
        assert!(Command::Open.is_guarded());
        assert!(Command::Exit.is_guarded());
        assert!(!Command::Save.is_guarded());
        assert!(!Command::ToggleWordWrap.is_guarded());
    }
}
