use serde::Serialize;

use crate::client::models::form::FormValues;

/// Classification of the user's stated need, sent alongside the prompt so the
/// backend can pick the matching coaching style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    InterviewPrep,
    EmailDraft,
    NetworkingPrep,
}

impl AdviceKind {
    /// Classifies the "help needed" answer. Case-insensitive substring match,
    /// first rule wins: interview prep, then email drafting, then the general
    /// networking default.
    pub fn classify(help: &str) -> AdviceKind {
        let help = help.to_lowercase();
        if help.contains("interview") {
            AdviceKind::InterviewPrep
        } else if help.contains("email") || help.contains("follow-up") {
            AdviceKind::EmailDraft
        } else {
            AdviceKind::NetworkingPrep
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AdviceKind::InterviewPrep => "interview_prep",
            AdviceKind::EmailDraft => "email_draft",
            AdviceKind::NetworkingPrep => "networking_prep",
        }
    }
}

/// Renders the form answers into the prompt sent to the backend, one line per
/// field, in form order. The output is deterministic for given answers.
pub fn format_prompt(values: &FormValues) -> String {
    format!(
        "Who are you? - Background: {}.\n\
         What do you want to achieve? - Goal: {}.\n\
         Who are you talking to? - Audience: {}.\n\
         Where is this happening? - Platform: {}.\n\
         Preferred tone/style? - Tone: {}.\n\
         Have you interacted before? - Prior Interaction: {}.\n\
         What do you need help with? - Help Needed: {}.",
        values.background,
        values.goal,
        values.audience,
        values.platform,
        values.tone.key(),
        values.prior.key(),
        values.help,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::form::{FormField, FormValues};

    fn sample_values() -> FormValues {
        let mut values = FormValues::default();
        values.update(FormField::Background, "junior business major");
        values.update(FormField::Goal, "find internship opportunities");
        values.update(FormField::Audience, "tech recruiters");
        values.update(FormField::Platform, "LinkedIn");
        values.update(FormField::Tone, "confident");
        values.update(FormField::Prior, "no");
        values.update(FormField::Help, "conversation starters");
        values
    }

    #[test]
    fn prompt_matches_template_exactly() {
        let expected = "Who are you? - Background: junior business major.\n\
                        What do you want to achieve? - Goal: find internship opportunities.\n\
                        Who are you talking to? - Audience: tech recruiters.\n\
                        Where is this happening? - Platform: LinkedIn.\n\
                        Preferred tone/style? - Tone: confident.\n\
                        Have you interacted before? - Prior Interaction: no.\n\
                        What do you need help with? - Help Needed: conversation starters.";
        assert_eq!(format_prompt(&sample_values()), expected);
    }

    #[test]
    fn prompt_is_deterministic() {
        let values = sample_values();
        assert_eq!(format_prompt(&values), format_prompt(&values));
    }

    #[test]
    fn classify_interview_wins_first() {
        assert_eq!(
            AdviceKind::classify("Need interview tips"),
            AdviceKind::InterviewPrep
        );
        // interview outranks email when both appear
        assert_eq!(
            AdviceKind::classify("email me interview questions"),
            AdviceKind::InterviewPrep
        );
    }

    #[test]
    fn classify_email_and_follow_up() {
        assert_eq!(
            AdviceKind::classify("draft a follow-up email"),
            AdviceKind::EmailDraft
        );
        assert_eq!(
            AdviceKind::classify("need a Follow-Up message"),
            AdviceKind::EmailDraft
        );
    }

    #[test]
    fn classify_defaults_to_networking() {
        assert_eq!(
            AdviceKind::classify("how do I start a conversation"),
            AdviceKind::NetworkingPrep
        );
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(
            AdviceKind::classify("INTERVIEW preparation"),
            AdviceKind::InterviewPrep
        );
    }

    #[test]
    fn kind_serializes_to_wire_keys() {
        for kind in [
            AdviceKind::InterviewPrep,
            AdviceKind::EmailDraft,
            AdviceKind::NetworkingPrep,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.key().to_string()));
        }
    }
}
