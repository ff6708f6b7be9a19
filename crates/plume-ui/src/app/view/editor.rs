use iced::widget::text::Wrapping;
use iced::widget::{container, responsive, scrollable, text_editor};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};

use crate::app::{App, Message};

/// Advance of one monospace cell, in ems.
const CHAR_WIDTH_EM: f32 = 0.6;
const EDITOR_PADDING: f32 = 12.0;

impl App {
    /// The text area. Lines wrap at word boundaries when word wrap is on;
    /// otherwise the area sits in a horizontal scrollable as wide as the
    /// longest line.
    pub fn view_editor(&self) -> Element<'_, Message> {
        if !self.editor.horizontal_scrollbar_visible() {
            return self.text_area(Wrapping::Word);
        }

        let content_width = self.unwrapped_width();
        responsive(move |size| {
            let area = container(self.text_area(Wrapping::None))
                .width(Length::Fixed(size.width.max(content_width)))
                .height(Length::Fill);

            scrollable(area)
                .direction(scrollable::Direction::Horizontal(
                    scrollable::Scrollbar::default(),
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        })
        .into()
    }

    fn text_area(&self, wrapping: Wrapping) -> Element<'_, Message> {
        let editor_bg = self.theme.background.primary.to_iced();
        let selection = self.theme.background.selection.to_iced();
        let value = self.theme.foreground.primary.to_iced();
        let muted = self.theme.foreground.muted.to_iced();

        text_editor(&self.content)
            .height(Length::Fill)
            .padding(Padding::new(EDITOR_PADDING))
            .font(Font::MONOSPACE)
            .size(self.editor.config().ui.font_size)
            .wrapping(wrapping)
            .style(move |_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(editor_bg),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: muted,
                placeholder: muted,
                value,
                selection,
            })
            .on_action(Message::EditorAction)
            .into()
    }

    /// Width needed to show the longest line without wrapping.
    fn unwrapped_width(&self) -> f32 {
        let columns = self.editor.document().buffer().max_line_width() as f32;
        let font_size = self.editor.config().ui.font_size;
        // One extra cell keeps the cursor visible at the end of the line
        (columns + 1.0) * font_size * CHAR_WIDTH_EM + 2.0 * EDITOR_PADDING
    }
}
