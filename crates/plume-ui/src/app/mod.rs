use iced::widget::text_editor;
use iced::{Event, Subscription, Task, event, keyboard, mouse, window};

use plume_core::Editor;

pub mod dialogs;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use dialogs::NativeDialogs;
pub use messages::*;
pub use types::*;

use crate::theme::Theme;

pub struct App {
    /// Editor state; the source of truth for everything but pixels
    pub editor: Editor,
    /// Widget-side copy of the document text
    pub content: text_editor::Content,
    /// Editor revision `content` was last rebuilt from
    pub content_revision: u64,
    pub active_menu: Option<TopMenu>,
    pub theme: Theme,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let theme = Theme::from_dark_flag(flags.config.ui.dark);
        let mut editor = Editor::with_config(flags.config);

        if let Some(path) = &flags.file {
            editor.open_path(path, &mut NativeDialogs::new());
        }

        let app = Self {
            content: text_editor::Content::with_text(&editor.document().text()),
            content_revision: editor.revision(),
            editor,
            active_menu: None,
            theme,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.editor.title()
    }

    pub fn theme(&self) -> iced::Theme {
        self.theme.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let key_press = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });
        let key_release = keyboard::on_key_release(|key, _modifiers| {
            Some(Message::KeyReleased(key))
        });
        let mouse_release = event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::ButtonReleased(_)) => Some(Message::MouseReleased),
            _ => None,
        });

        Subscription::batch([
            key_press,
            key_release,
            mouse_release,
            window::close_requests().map(|_| Message::CloseRequested),
        ])
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let ui = flags.config.ui.clone();

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(ui.window_width, ui.window_height))
        .exit_on_close_request(false)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
