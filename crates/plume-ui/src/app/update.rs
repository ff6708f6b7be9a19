use iced::keyboard::{self, key::Named};
use iced::widget::text_editor::{self, Action, Edit, Motion};
use iced::Task;

use plume_core::{Command, EditMode, Key, KeyPress, Modifiers, Position};

use super::{App, Message, NativeDialogs};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => {
                self.active_menu = None;
                return self.run_command(command);
            }

            Message::EditorAction(action) => {
                self.active_menu = None;
                self.perform_action(action);
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::KeyReleased(key) => {
                // Releasing Caps Lock would wipe the indicator it just set
                if !is_caps_lock(&key) {
                    self.editor.refresh_status();
                }
            }

            Message::MouseReleased => {
                self.editor.refresh_status();
            }

            Message::ToggleTopMenu(menu) => {
                self.active_menu = if self.active_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::CloseRequested => {
                self.active_menu = None;
                return self.run_command(Command::Exit);
            }
        }
        Task::none()
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        let Some(press) = key_press(&key, modifiers) else {
            return Task::none();
        };

        if self
            .editor
            .handle_key(&press, &mut NativeDialogs::new())
            .is_some()
        {
            self.active_menu = None;
            return self.after_command();
        }

        Task::none()
    }

    fn run_command(&mut self, command: Command) -> Task<Message> {
        self.editor.execute(command, &mut NativeDialogs::new());
        self.after_command()
    }

    /// Rebuilds the widget when the document was replaced and leaves once
    /// Exit went through.
    fn after_command(&mut self) -> Task<Message> {
        if self.content_revision != self.editor.revision() {
            self.content = text_editor::Content::with_text(&self.editor.document().text());
            self.content_revision = self.editor.revision();
        }

        if self.editor.should_quit() {
            iced::exit()
        } else {
            Task::none()
        }
    }

    /// Applies a widget action and mirrors the result into the editor.
    fn perform_action(&mut self, action: Action) {
        let is_edit = action.is_edit();

        // An insert over a selection replaces the selected character
        if selects_next(
            self.editor.document().edit_mode(),
            &action,
            self.content.selection().is_some(),
            self.char_after_cursor(),
        ) {
            self.content.perform(Action::Select(Motion::Right));
        }
        self.content.perform(action);

        let cursor = self.widget_cursor();
        if is_edit {
            let text = join_lines(self.content.lines());
            self.editor.sync_from_widget(&text, cursor);
        } else {
            self.editor.move_cursor_to(cursor);
        }
    }

    fn char_after_cursor(&self) -> Option<char> {
        let (line, index) = self.content.cursor_position();
        self.content.line(line).and_then(|text| char_at(&text, index))
    }

    fn widget_cursor(&self) -> Position {
        let (line, index) = self.content.cursor_position();
        let column = self
            .content
            .line(line)
            .map_or(0, |text| char_column(&text, index));
        Position::new(line, column)
    }
}

/// Whether the widget should select the character after the cursor before
/// applying `action`, so that typing writes over it.
///
/// Only a typed character can replace; Enter and paste always insert.
pub fn selects_next(
    mode: EditMode,
    action: &Action,
    has_selection: bool,
    next: Option<char>,
) -> bool {
    match action {
        Action::Edit(Edit::Insert(c)) => !has_selection && mode.replaces_next(*c, next),
        _ => false,
    }
}

/// Translates an iced key event into the editor's key type.
pub fn key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyPress> {
    let key = match key.as_ref() {
        keyboard::Key::Character(c) => Key::char(c.chars().next()?),
        keyboard::Key::Named(named) => match named {
            Named::CapsLock => Key::CapsLock,
            Named::Insert => Key::Insert,
            Named::Enter => Key::Enter,
            Named::Tab => Key::Tab,
            Named::Backspace => Key::Backspace,
            Named::Delete => Key::Delete,
            Named::Escape => Key::Escape,
            Named::F1 => Key::F(1),
            Named::F2 => Key::F(2),
            Named::F3 => Key::F(3),
            Named::F4 => Key::F(4),
            Named::F5 => Key::F(5),
            Named::F6 => Key::F(6),
            Named::F7 => Key::F(7),
            Named::F8 => Key::F(8),
            Named::F9 => Key::F(9),
            Named::F10 => Key::F(10),
            Named::F11 => Key::F(11),
            Named::F12 => Key::F(12),
            _ => return None,
        },
        _ => return None,
    };

    Some(KeyPress::new(
        key,
        Modifiers {
            ctrl: modifiers.control(),
            alt: modifiers.alt(),
            shift: modifiers.shift(),
            meta: modifiers.logo(),
        },
    ))
}

pub fn is_caps_lock(key: &keyboard::Key) -> bool {
    matches!(key, keyboard::Key::Named(Named::CapsLock))
}

/// Joins widget lines with `\n`.
pub fn join_lines<L>(lines: impl Iterator<Item = L>) -> String
where
    L: std::ops::Deref<Target = str>,
{
    let mut text = String::new();
    for (i, line) in lines.enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&line);
    }
    text
}

/// Character starting at a byte offset within a line.
pub fn char_at(line: &str, byte_index: usize) -> Option<char> {
    line.get(byte_index..).and_then(|rest| rest.chars().next())
}

/// Character column of a byte offset within a line.
pub fn char_column(line: &str, byte_index: usize) -> usize {
    let mut end = byte_index.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line[..end].chars().count()
}
