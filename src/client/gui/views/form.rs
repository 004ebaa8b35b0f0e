use iced::{Alignment, Color, Element, Font, Length};
use iced::widget::{Button, Column, Container, PickList, Row, Space, Text, TextInput};

use crate::client::gui::widgets::alert;
use crate::client::models::app_state::{AdvisorState, SubmissionPhase};
use crate::client::models::form::{FormField, PriorInteraction, Tone};
use crate::client::models::messages::Message;

// Consistent color palette with the advice view
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for the form card
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26); // Input background
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.7, 0.3); // Green accent
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

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// A labeled free-text field: question on top, text input below.
fn text_field<'a>(
    field: FormField,
    value: &'a str,
    placeholder: &'a str,
    icon: &'static str,
) -> Element<'a, Message> {
    Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new(icon).font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new(field.label()).size(14).style(TEXT_SECONDARY)),
        )
        .push(
            Container::new(
                TextInput::new(placeholder, value)
                    .on_input(move |v| Message::FieldChanged(field, v))
                    .on_submit(Message::SubmitPressed)
                    .width(Length::Fill)
                    .padding(12)
                    .size(14),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        )
        .into()
}

pub fn view(state: &AdvisorState) -> Element<Message> {
    let values = &state.form;
    let loading = state.phase == SubmissionPhase::Loading;
    let missing = values.missing_fields();
    let submit_enabled = missing.is_empty() && !loading;

    // Error bar on top (validation hints and failed submissions)
    let error_bar: Element<Message> = if let Some(msg) = &state.error_message {
        Container::new(alert::view(msg))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let title = Text::new("AI Networking Assistant")
        .size(42)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Get personalized networking advice powered by AI")
        .size(16)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let background_field = text_field(
        FormField::Background,
        &values.background,
        "E.g. I'm a junior business major with an interest in marketing and brand strategy...",
        "👤",
    );

    let goal_field = text_field(
        FormField::Goal,
        &values.goal,
        "E.g. I want to build connections and find internship opportunities in tech companies...",
        "🎯",
    );

    let audience_field = text_field(
        FormField::Audience,
        &values.audience,
        "E.g. Tech recruiters, software engineers, hiring managers...",
        "👥",
    );

    let platform_field = text_field(
        FormField::Platform,
        &values.platform,
        "E.g. Career Fair, LinkedIn, email, coffee chat...",
        "📍",
    );

    let tone_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🎨").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new(FormField::Tone.label()).size(14).style(TEXT_SECONDARY)),
        )
        .push(
            PickList::new(Tone::all(), Some(values.tone), Message::ToneSelected)
                .placeholder("Select tone")
                .width(Length::Fill)
                .padding(12),
        );

    let prior_field = Column::new()
        .spacing(8)
        .push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🤝").font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
                .push(Text::new(FormField::Prior.label()).size(14).style(TEXT_SECONDARY)),
        )
        .push(
            PickList::new(
                PriorInteraction::all(),
                Some(values.prior),
                Message::PriorSelected,
            )
            .width(Length::Fill)
            .padding(12),
        );

    let help_field = Column::new()
        .spacing(8)
        .push(text_field(
            FormField::Help,
            &values.help,
            "E.g. Elevator pitch, conversation starters, follow-up email templates, interview preparation...",
            "💬",
        ))
        .push(
            Text::new("💡 Tip: Mention \"interview\" for interview prep, \"email\" for email drafts, or describe your networking needs")
                .font(EMOJI_FONT)
                .size(12)
                .style(TEXT_SECONDARY),
        );

    // One indicator row per required field
    let mut validation_indicators = Column::new().spacing(4);
    for field in [
        FormField::Background,
        FormField::Goal,
        FormField::Audience,
        FormField::Platform,
        FormField::Help,
    ] {
        let filled = !missing.contains(&field);
        validation_indicators = validation_indicators.push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(
                    Text::new(if filled { "✅" } else { "❌" })
                        .font(EMOJI_FONT)
                        .size(12),
                )
                .push(
                    Text::new(field.name())
                        .size(12)
                        .style(if filled { ACCENT_COLOR } else { TEXT_SECONDARY }),
                ),
        );
    }

    let submit_button = if submit_enabled {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("✨").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new("Generate AI Networking Advice")
                            .font(BOLD_FONT)
                            .size(16)
                            .style(TEXT_PRIMARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::SubmitPressed)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(
                        Text::new(if loading {
                            "Generating AI Advice..."
                        } else {
                            "Generate AI Networking Advice"
                        })
                        .size(16)
                        .style(TEXT_SECONDARY),
                    ),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    };

    let loading_element: Element<Message> = if loading {
        Container::new(
            Column::new()
                .spacing(4)
                .align_items(Alignment::Center)
                .push(
                    Row::new()
                        .spacing(8)
                        .align_items(Alignment::Center)
                        .push(Text::new("🤖").font(EMOJI_FONT).size(16))
                        .push(
                            Text::new("AI is analyzing your information and generating personalized advice...")
                                .size(14)
                                .style(ACCENT_COLOR),
                        ),
                )
                .push(
                    Text::new("This may take a few seconds")
                        .size(12)
                        .style(TEXT_SECONDARY),
                ),
        )
        .width(Length::Fill)
        .center_x()
        .padding(8)
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let card_content = Column::new()
        .width(Length::Fixed(560.0))
        .spacing(20)
        .padding(32)
        .push(
            Column::new()
                .spacing(8)
                .width(Length::Fill)
                .align_items(Alignment::Center)
                .push(title)
                .push(subtitle),
        )
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(background_field)
        .push(goal_field)
        .push(audience_field)
        .push(platform_field)
        .push(tone_field)
        .push(prior_field)
        .push(help_field)
        .push(Space::new(Length::Fill, Length::Fixed(8.0)))
        .push(validation_indicators)
        .push(submit_button)
        .push(loading_element);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .center_x();

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(error_bar)
        .push(
            Container::new(iced::widget::Scrollable::new(
                Container::new(card).width(Length::Fill).center_x().padding(24),
            ))
            .width(Length::Fill)
            .height(Length::Fill),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
