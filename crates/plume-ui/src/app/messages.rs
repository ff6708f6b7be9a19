use iced::keyboard;
use iced::widget::text_editor;

use plume_core::Command;

use crate::app::types::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    // Menu items and shortcuts
    Command(Command),

    // Editor
    EditorAction(text_editor::Action),

    // Input events the status bar follows
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    KeyReleased(keyboard::Key),
    MouseReleased,

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Window close button
    CloseRequested,
}
