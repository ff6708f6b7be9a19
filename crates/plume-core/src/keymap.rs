//! Keyboard shortcuts.
//!
//! The front end translates toolkit key events into [`KeyPress`] values and
//! asks the [`Keymap`] which [`Command`] (if any) they trigger. Defaults
//! mirror the menu accelerators; the config file can add or replace
//! bindings with strings like `"ctrl+shift+s" = "file.save"`.

use crate::command::Command;
use crate::config::KeyboardConfig;
use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl+Shift.
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }

    /// Parses modifiers from a string like "ctrl+shift".
    pub fn parse(s: &str) -> Self {
        let mut mods = Modifiers::NONE;
        for part in s.split('+').map(|p| p.trim().to_lowercase()) {
            match part.as_str() {
                "ctrl" | "control" => mods.ctrl = true,
                "alt" | "option" => mods.alt = true,
                "shift" => mods.shift = true,
                "meta" | "cmd" | "win" | "super" => mods.meta = true,
                _ => {}
            }
        }
        mods
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Win");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
///
/// Character keys are always stored lowercase so that Ctrl+S matches
/// whether or not Caps Lock is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    CapsLock,
    Insert,
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    F(u8), // F1-F12
}

impl Key {
    /// Builds a character key, folding case.
    pub fn char(c: char) -> Self {
        Key::Char(c.to_lowercase().next().unwrap_or(c))
    }

    /// Parses a key from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "capslock" | "caps_lock" | "caps" => Some(Key::CapsLock),
            "insert" | "ins" => Some(Key::Insert),
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "backspace" | "bs" => Some(Key::Backspace),
            "delete" | "del" => Some(Key::Delete),
            "escape" | "esc" => Some(Key::Escape),
            _ if lower.starts_with('f') && lower.len() > 1 && lower.len() <= 3 => {
                lower[1..].parse().ok().map(Key::F)
            }
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Caps Lock acts the same whichever modifiers are held.
    fn ignores_modifiers(&self) -> bool {
        matches!(self, Key::CapsLock)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::CapsLock => write!(f, "Caps Lock"),
            Key::Insert => write!(f, "Insert"),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Escape => write!(f, "Escape"),
            Key::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parses a key binding string like "ctrl+s".
    pub fn parse(s: &str) -> Option<Self> {
        let (mod_str, key_str) = match s.trim().rsplit_once('+') {
            // "ctrl++" binds the plus key
            Some((mods, "")) => (mods.strip_suffix('+')?, "+"),
            Some((mods, key)) => (mods, key),
            None => ("", s),
        };
        let key = Key::parse(key_str)?;
        Some(Self {
            key,
            modifiers: Modifiers::parse(mod_str),
        })
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// A key binding maps a key press to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyPress,
    pub command: Command,
}

impl KeyBinding {
    pub fn new(key: KeyPress, command: Command) -> Self {
        Self { key, command }
    }
}

/// Keyboard mapping.
#[derive(Debug, Clone)]
pub struct Keymap {
    /// All key bindings, later ones win.
    bindings: Vec<KeyBinding>,
    /// Index from key press to binding.
    by_key: HashMap<KeyPress, usize>,
}

impl Keymap {
    /// Creates a keymap with the default bindings.
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: Vec::new(),
            by_key: HashMap::new(),
        };
        keymap.add_default_bindings();
        keymap.rebuild_index();
        keymap
    }

    /// Creates a keymap from configuration.
    ///
    /// Unknown keys or command ids are skipped with a warning.
    pub fn from_config(config: &KeyboardConfig) -> Self {
        let mut keymap = Self::new();

        for (key_str, cmd_str) in &config.bindings {
            match (KeyPress::parse(key_str), Command::from_id(cmd_str)) {
                (Some(key), Some(cmd)) => keymap.bindings.push(KeyBinding::new(key, cmd)),
                _ => tracing::warn!("Ignoring key binding {:?} = {:?}", key_str, cmd_str),
            }
        }

        keymap.rebuild_index();
        keymap
    }

    /// Adds default key bindings.
    fn add_default_bindings(&mut self) {
        use crate::command::Command::*;

        let bindings = [
            (Key::Char('o'), Modifiers::CTRL, Open),
            (Key::Char('s'), Modifiers::CTRL, Save),
            (Key::Char('w'), Modifiers::CTRL, ToggleWordWrap),
            (Key::Char('q'), Modifiers::CTRL, Exit),
            (Key::Char('n'), Modifiers::CTRL, New),
            (Key::CapsLock, Modifiers::NONE, ToggleCapsLock),
            (Key::Insert, Modifiers::NONE, ToggleOverwrite),
        ];

        for (key, modifiers, cmd) in bindings {
            self.bindings
                .push(KeyBinding::new(KeyPress::new(key, modifiers), cmd));
        }
    }

    /// Rebuilds the key index.
    fn rebuild_index(&mut self) {
        self.by_key.clear();
        for (i, binding) in self.bindings.iter().enumerate() {
            self.by_key.insert(binding.key, i);
        }
    }

    /// Looks up the command bound to a key press.
    pub fn lookup(&self, key: &KeyPress) -> Option<Command> {
        let idx = self.by_key.get(key).or_else(|| {
            key.key
                .ignores_modifiers()
                .then(|| self.by_key.get(&KeyPress::new(key.key, Modifiers::NONE)))
                .flatten()
        })?;
        Some(self.bindings[*idx].command)
    }

    /// Label of the key currently bound to `command`, e.g. `"Ctrl+S"`.
    pub fn accelerator(&self, command: Command) -> Option<String> {
        // A binding only counts while no later binding took over its key.
        let live = |b: &KeyBinding| {
            self.by_key
                .get(&b.key)
                .is_some_and(|&i| self.bindings[i].command == b.command)
        };
        self.bindings
            .iter()
            .rev()
            .find(|b| b.command == command && live(b))
            .map(|b| b.key.to_string())
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyPress {
        KeyPress::new(Key::char(c), Modifiers::CTRL)
    }

    #[test]
    fn test_keypress_parse() {
        let kp = KeyPress::parse("ctrl+s").unwrap();
        assert_eq!(kp.key, Key::Char('s'));
        assert!(kp.modifiers.ctrl);

        let kp = KeyPress::parse("Ctrl+Shift+S").unwrap();
        assert_eq!(kp, KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT));

        assert_eq!(KeyPress::parse("insert").unwrap().key, Key::Insert);
        assert_eq!(KeyPress::parse("ctrl++").unwrap().key, Key::Char('+'));
        assert!(KeyPress::parse("ctrl+nope").is_none());
    }

    #[test]
    fn test_default_shortcuts() {
        let keymap = Keymap::new();
        assert_eq!(keymap.lookup(&ctrl('o')), Some(Command::Open));
        assert_eq!(keymap.lookup(&ctrl('s')), Some(Command::Save));
        assert_eq!(keymap.lookup(&ctrl('w')), Some(Command::ToggleWordWrap));
        assert_eq!(keymap.lookup(&ctrl('q')), Some(Command::Exit));
        assert_eq!(keymap.lookup(&ctrl('n')), Some(Command::New));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        let keymap = Keymap::new();
        assert_eq!(keymap.lookup(&ctrl('S')), Some(Command::Save));
        let shifted = KeyPress::new(Key::char('S'), Modifiers::CTRL_SHIFT);
        assert_eq!(keymap.lookup(&shifted), None);
    }

    #[test]
    fn test_plain_letters_are_not_bound() {
        let keymap = Keymap::new();
        assert_eq!(keymap.lookup(&KeyPress::new(Key::char('s'), Modifiers::NONE)), None);
    }

    #[test]
    fn test_caps_lock_ignores_modifiers() {
        let keymap = Keymap::new();
        let caps = KeyPress::new(Key::CapsLock, Modifiers::CTRL);
        assert_eq!(keymap.lookup(&caps), Some(Command::ToggleCapsLock));

        let ctrl_insert = KeyPress::new(Key::Insert, Modifiers::CTRL);
        assert_eq!(keymap.lookup(&ctrl_insert), None);
    }

    #[test]
    fn test_config_bindings_override_defaults() {
        let mut config = KeyboardConfig::default();
        config
            .bindings
            .insert("ctrl+s".to_string(), "file.new".to_string());
        config
            .bindings
            .insert("ctrl+shift+s".to_string(), "file.save".to_string());
        config
            .bindings
            .insert("ctrl+x".to_string(), "no.such.command".to_string());

        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.lookup(&ctrl('s')), Some(Command::New));
        assert_eq!(
            keymap.lookup(&KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT)),
            Some(Command::Save)
        );
        assert_eq!(keymap.lookup(&ctrl('x')), None);
        assert_eq!(keymap.accelerator(Command::Save).as_deref(), Some("Ctrl+Shift+S"));
    }

    #[test]
    fn test_accelerator_labels() {
        let keymap = Keymap::new();
        assert_eq!(keymap.accelerator(Command::Open).as_deref(), Some("Ctrl+O"));
        assert_eq!(keymap.accelerator(Command::ToggleWordWrap).as_deref(), Some("Ctrl+W"));
        assert_eq!(keymap.accelerator(Command::ToggleOverwrite).as_deref(), Some("Insert"));
    }
}
