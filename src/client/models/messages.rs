use crate::client::models::form::{FormField, PriorInteraction, Tone};
use crate::client::services::advice::AdviceError;

/// Every event the app reacts to. All transitions of the submission lifecycle
/// run through `AdvisorState::update` with one of these.
#[derive(Debug, Clone)]
pub enum Message {
    // Form edits
    FieldChanged(FormField, String),
    ToneSelected(Tone),
    PriorSelected(PriorInteraction),
    // Submission lifecycle
    SubmitPressed,
    AdviceReceived(Result<String, AdviceError>),
    // Dismissals
    CloseAdvice,
    DismissError,
    // Result view extras
    CopyAdvice,
}
