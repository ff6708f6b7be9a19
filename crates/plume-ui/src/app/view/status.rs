use iced::widget::{container, row, text};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::{App, Message};

impl App {
    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let bar_bg = self.theme.background.secondary.to_iced();
        let border = self.theme.ui.border.to_iced();

        let status_content = row![
            text(self.editor.status_text())
                .size(12)
                .color(self.theme.foreground.secondary.to_iced()),
        ]
        .padding(Padding::from([4, 10]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(24)
            .style(move |_| container::Style {
                background: Some(Background::Color(bar_bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
