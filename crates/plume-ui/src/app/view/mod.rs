pub mod editor;
pub mod status;

use iced::widget::{
    Column, Row, Space, button, checkbox, column, container, horizontal_space, mouse_area, row,
    stack, text,
};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use plume_core::Command;

use crate::app::{App, Message, TopMenu};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        let bg = self.theme.background.primary.to_iced();
        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(bg)),
                ..Default::default()
            })
            .into();

        if self.active_menu.is_some() {
            stack![
                main_view,
                mouse_area(Space::new(Length::Fill, Length::Fill)).on_press(Message::CloseTopMenu),
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }

    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let colors = &self.theme;
        let (active_bg, hover_bg, bar_bg) = (
            colors.background.active.to_iced(),
            colors.background.hover.to_iced(),
            colors.background.secondary.to_iced(),
        );
        let (text_primary, text_secondary) = (
            colors.foreground.primary.to_iced(),
            colors.foreground.secondary.to_iced(),
        );

        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for menu in TopMenu::ALL {
            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(text(menu.label()).size(12).color(if is_active {
                text_primary
            } else {
                text_secondary
            }))
            .padding(Padding::from([4, 8]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    active_bg
                } else {
                    match status {
                        button::Status::Hovered => hover_bg,
                        _ => bar_bg,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: text_primary,
                    border: Border {
                        radius: 3.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleTopMenu(menu));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let border = colors.ui.border.to_iced();
        container(
            Row::with_children(menu_items)
                .spacing(2)
                .padding(Padding::from([2, 4]))
                .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
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

    /// Label and accelerator for a command's menu entry.
    fn menu_labels(&self, command: Command) -> (&'static str, String) {
        let shortcut = self.editor.keymap().accelerator(command).unwrap_or_default();
        (command.display_name(), shortcut)
    }

    /// Build a single dropdown menu item with label, shortcut, and action.
    fn menu_item(&self, command: Command) -> Element<'_, Message> {
        let (label, shortcut) = self.menu_labels(command);
        let hover_bg = self.theme.background.hover.to_iced();
        let text_primary = self.theme.foreground.primary.to_iced();

        button(
            row![
                text(label).size(12).color(text_primary),
                horizontal_space(),
                text(shortcut).size(11).color(self.theme.foreground.muted.to_iced()),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(move |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => hover_bg,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: text_primary,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(Message::Command(command))
        .into()
    }

    /// Word Wrap entry: a checkbox bound to the current wrap state.
    fn word_wrap_item(&self) -> Element<'_, Message> {
        let (label, shortcut) = self.menu_labels(Command::ToggleWordWrap);

        row![
            checkbox(label, self.editor.word_wrap())
                .size(14)
                .text_size(12)
                .on_toggle(|_| Message::Command(Command::ToggleWordWrap)),
            horizontal_space(),
            text(shortcut).size(11).color(self.theme.foreground.muted.to_iced()),
        ]
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .align_y(iced::Alignment::Center)
        .into()
    }

    fn menu_separator(&self) -> Element<'_, Message> {
        let divider = self.theme.ui.divider.to_iced();
        container(Space::new(Length::Fill, 1))
            .style(move |_| container::Style {
                background: Some(Background::Color(divider)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let Some(menu) = self.active_menu else {
            return Space::new(0, 0).into();
        };

        let items: Vec<Element<'_, Message>> = match menu {
            TopMenu::File => vec![
                self.menu_item(Command::Open),
                self.menu_item(Command::Save),
                self.menu_separator(),
                self.menu_item(Command::Exit),
                self.menu_item(Command::New),
            ],
            TopMenu::Format => vec![self.word_wrap_item()],
        };

        let menu_bg = self.theme.background.secondary.to_iced();
        let border = self.theme.ui.border.to_iced();
        let menu_box = container(
            Column::with_children(items)
                .width(Length::Fixed(220.0))
                .padding(4),
        )
        .style(move |_| container::Style {
            background: Some(Background::Color(menu_bg)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

        column![
            Space::with_height(Length::Fixed(28.0)),
            row![
                Space::with_width(Length::Fixed(menu.dropdown_offset())),
                menu_box,
            ],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
