use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text};

use crate::client::models::app_state::AdvisorState;
use crate::client::models::messages::Message;

// Consistent color palette with the form view
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const SECTION_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn section_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(SECTION_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn section_header(icon: &'static str, title: &'static str) -> Row<'static, Message> {
    Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(icon).font(EMOJI_FONT).size(18))
        .push(Text::new(title).font(BOLD_FONT).size(18).style(TEXT_PRIMARY))
}

/// The result view shown once advice arrived: the user's context on top, the
/// generated recommendations below, with close and copy actions.
pub fn view(state: &AdvisorState) -> Element<Message> {
    let prompt = state.prompt.as_deref().unwrap_or_default();
    let advice = state.advice.as_deref().unwrap_or_default();

    let header = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("🎯").font(EMOJI_FONT).size(24))
        .push(
            Text::new("Your AI-Generated Networking Advice")
                .size(24)
                .font(BOLD_FONT)
                .style(TEXT_PRIMARY),
        );

    // One paragraph per prompt line
    let mut context_lines = Column::new().spacing(6);
    for line in prompt.lines() {
        context_lines = context_lines.push(Text::new(line).size(13).style(TEXT_SECONDARY));
    }

    let context_section = Container::new(
        Column::new()
            .spacing(10)
            .push(section_header("📋", "Your Context:"))
            .push(context_lines),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(section_appearance)));

    // One paragraph per non-blank advice line
    let mut advice_lines = Column::new().spacing(8);
    for paragraph in advice.lines().filter(|p| !p.trim().is_empty()) {
        advice_lines = advice_lines.push(Text::new(paragraph).size(14).style(TEXT_PRIMARY));
    }

    let advice_section = Container::new(
        Column::new()
            .spacing(10)
            .push(section_header("💡", "AI Recommendations:"))
            .push(advice_lines),
    )
    .width(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(section_appearance)));

    let close_button = Button::new(
        Text::new("Close")
            .size(15)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .on_press(Message::CloseAdvice)
    .style(iced::theme::Button::Secondary)
    .padding([12, 24]);

    let copy_button = Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("📋").font(EMOJI_FONT).size(15))
            .push(Text::new("Copy Advice").size(15).style(TEXT_PRIMARY)),
    )
    .on_press(Message::CopyAdvice)
    .style(iced::theme::Button::Primary)
    .padding([12, 24]);

    let footer = Row::new()
        .spacing(12)
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(close_button)
        .push(copy_button);

    let card_content = Column::new()
        .width(Length::Fixed(640.0))
        .spacing(20)
        .padding(32)
        .push(header)
        .push(context_section)
        .push(advice_section)
        .push(footer);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .center_x();

    let hint = Text::new(format!("Advice style: {}", advice_style_hint(state)))
        .size(12)
        .style(ACCENT_COLOR);

    let main_content = Scrollable::new(
        Column::new()
            .width(Length::Fill)
            .align_items(Alignment::Center)
            .padding(24)
            .spacing(8)
            .push(card)
            .push(hint),
    );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}

fn advice_style_hint(state: &AdvisorState) -> &'static str {
    use crate::client::services::prompt::AdviceKind;
    match AdviceKind::classify(&state.form.help) {
        AdviceKind::InterviewPrep => "interview preparation",
        AdviceKind::EmailDraft => "email drafting",
        AdviceKind::NetworkingPrep => "networking preparation",
    }
}
