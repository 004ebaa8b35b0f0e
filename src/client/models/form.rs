use std::fmt;

/// Addresses one of the seven form fields for the single update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Background,
    Goal,
    Audience,
    Platform,
    Tone,
    Prior,
    Help,
}

impl FormField {
    /// The question shown above the input widget.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Background => "Who are you?",
            FormField::Goal => "What do you want to achieve?",
            FormField::Audience => "Who are you talking to?",
            FormField::Platform => "Where is this happening?",
            FormField::Tone => "Preferred tone/style?",
            FormField::Prior => "Have you interacted before?",
            FormField::Help => "What do you need help with?",
        }
    }

    /// Short name used in validation messages and in the prompt template.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Background => "Background",
            FormField::Goal => "Goal",
            FormField::Audience => "Audience",
            FormField::Platform => "Platform",
            FormField::Tone => "Tone",
            FormField::Prior => "Prior Interaction",
            FormField::Help => "Help Needed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Confident,
    Friendly,
    Casual,
}

const ALL_TONES: [Tone; 4] = [
    Tone::Professional,
    Tone::Confident,
    Tone::Friendly,
    Tone::Casual,
];

impl Tone {
    pub fn all() -> &'static [Tone] {
        &ALL_TONES
    }

    /// Lowercase key used on the wire and in the formatted prompt.
    pub fn key(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Confident => "confident",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
        }
    }

    fn from_key(key: &str) -> Option<Tone> {
        ALL_TONES.iter().copied().find(|t| t.key() == key)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Professional => "Professional",
            Tone::Confident => "Confident",
            Tone::Friendly => "Friendly",
            Tone::Casual => "Casual",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorInteraction {
    #[default]
    No,
    Yes,
}

const ALL_PRIOR: [PriorInteraction; 2] = [PriorInteraction::No, PriorInteraction::Yes];

impl PriorInteraction {
    pub fn all() -> &'static [PriorInteraction] {
        &ALL_PRIOR
    }

    pub fn key(&self) -> &'static str {
        match self {
            PriorInteraction::No => "no",
            PriorInteraction::Yes => "yes",
        }
    }

    fn from_key(key: &str) -> Option<PriorInteraction> {
        ALL_PRIOR.iter().copied().find(|p| p.key() == key)
    }
}

impl fmt::Display for PriorInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriorInteraction::No => "No, these are new connections",
            PriorInteraction::Yes => "Yes, I've interacted before",
        };
        write!(f, "{}", s)
    }
}

/// The seven user-entered answers. Created once at startup with the defaults
/// below and mutated only through [`FormValues::update`].
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub background: String,
    pub goal: String,
    pub audience: String,
    pub platform: String,
    pub tone: Tone,
    pub prior: PriorInteraction,
    pub help: String,
}

impl FormValues {
    /// Sets the addressed field. No validation happens here; for the two
    /// enumerated fields an unrecognized key leaves the field unchanged.
    pub fn update(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Background => self.background = value.to_string(),
            FormField::Goal => self.goal = value.to_string(),
            FormField::Audience => self.audience = value.to_string(),
            FormField::Platform => self.platform = value.to_string(),
            FormField::Help => self.help = value.to_string(),
            FormField::Tone => {
                if let Some(tone) = Tone::from_key(value) {
                    self.tone = tone;
                }
            }
            FormField::Prior => {
                if let Some(prior) = PriorInteraction::from_key(value) {
                    self.prior = prior;
                }
            }
        }
    }

    /// The required free-text fields that are still empty, in form order.
    /// Tone and prior interaction always carry a value and never appear here.
    pub fn missing_fields(&self) -> Vec<FormField> {
        [
            (FormField::Background, &self.background),
            (FormField::Goal, &self.goal),
            (FormField::Audience, &self.audience),
            (FormField::Platform, &self.platform),
            (FormField::Help, &self.help),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form() {
        let values = FormValues::default();
        assert_eq!(values.tone, Tone::Professional);
        assert_eq!(values.prior, PriorInteraction::No);
        assert!(values.background.is_empty());
        assert!(values.help.is_empty());
    }

    #[test]
    fn update_addresses_every_field() {
        let mut values = FormValues::default();
        values.update(FormField::Background, "marketing student");
        values.update(FormField::Goal, "find an internship");
        values.update(FormField::Audience, "recruiters");
        values.update(FormField::Platform, "career fair");
        values.update(FormField::Tone, "friendly");
        values.update(FormField::Prior, "yes");
        values.update(FormField::Help, "elevator pitch");

        assert_eq!(values.background, "marketing student");
        assert_eq!(values.goal, "find an internship");
        assert_eq!(values.audience, "recruiters");
        assert_eq!(values.platform, "career fair");
        assert_eq!(values.tone, Tone::Friendly);
        assert_eq!(values.prior, PriorInteraction::Yes);
        assert_eq!(values.help, "elevator pitch");
    }

    #[test]
    fn unknown_enum_keys_are_ignored() {
        let mut values = FormValues::default();
        values.update(FormField::Tone, "sarcastic");
        values.update(FormField::Prior, "maybe");
        assert_eq!(values.tone, Tone::Professional);
        assert_eq!(values.prior, PriorInteraction::No);
    }

    #[test]
    fn missing_fields_reports_empty_text_in_form_order() {
        let mut values = FormValues::default();
        values.update(FormField::Goal, "meet people");
        values.update(FormField::Platform, "   "); // whitespace only
        let missing = values.missing_fields();
        assert_eq!(
            missing,
            vec![
                FormField::Background,
                FormField::Audience,
                FormField::Platform,
                FormField::Help,
            ]
        );
        assert!(!values.is_complete());
    }

    #[test]
    fn complete_form_has_no_missing_fields() {
        let mut values = FormValues::default();
        for field in [
            FormField::Background,
            FormField::Goal,
            FormField::Audience,
            FormField::Platform,
            FormField::Help,
        ] {
            values.update(field, "filled");
        }
        assert!(values.is_complete());
    }
}
