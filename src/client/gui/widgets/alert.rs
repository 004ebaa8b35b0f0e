// Dismissible error bar shown above the form
use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Container, Row, Text};

use crate::client::models::messages::Message;

const ERROR_BG: Color = Color::from_rgb(0.72, 0.16, 0.16);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(18).style(Color::WHITE))
            .push(Text::new("Error:").font(BOLD_FONT).size(15).style(Color::WHITE))
            .push(Text::new(msg).size(15).style(Color::WHITE).width(Length::Fill))
            .push(
                Button::new(Text::new("×").size(18).style(Color::WHITE))
                    .on_press(Message::DismissError)
                    .style(iced::theme::Button::Text)
                    .padding([2, 10]),
            ),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(ERROR_BG)),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            },
        },
    )))
    .into()
}
