use std::sync::Arc;

use iced::Command;

use crate::client::models::form::{FormField, FormValues};
use crate::client::models::messages::Message;
use crate::client::services::advice::AdviceService;
use crate::client::services::prompt::{self, AdviceKind};

/// Stage of the submission lifecycle. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The whole mutable state of the app: the form answers plus the submission
/// lifecycle. Advice is only ever stored together with the prompt that
/// produced it.
#[derive(Default)]
pub struct AdvisorState {
    pub form: FormValues,
    pub phase: SubmissionPhase,
    pub prompt: Option<String>,
    pub advice: Option<String>,
    pub error_message: Option<String>,
}

impl AdvisorState {
    pub fn update(
        &mut self,
        message: Message,
        advice_service: &Arc<AdviceService>,
    ) -> Command<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.update(field, &value);
            }
            Message::ToneSelected(tone) => {
                self.form.update(FormField::Tone, tone.key());
            }
            Message::PriorSelected(prior) => {
                self.form.update(FormField::Prior, prior.key());
            }
            Message::SubmitPressed => {
                // One request in flight at a time; repeated submits are no-ops
                // until the first completes.
                if self.phase == SubmissionPhase::Loading {
                    return Command::none();
                }
                let missing = self.form.missing_fields();
                if !missing.is_empty() {
                    let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
                    self.error_message =
                        Some(format!("Please fill in: {}", names.join(", ")));
                    return Command::none();
                }

                self.error_message = None;
                self.advice = None;
                let prompt = prompt::format_prompt(&self.form);
                let kind = AdviceKind::classify(&self.form.help);
                self.prompt = Some(prompt.clone());
                self.phase = SubmissionPhase::Loading;
                log::info!("submitting {} request", kind.key());

                let svc = advice_service.clone();
                return Command::perform(
                    async move { Message::AdviceReceived(svc.request_advice(prompt, kind).await) },
                    |msg| msg,
                );
            }
            Message::AdviceReceived(result) => match result {
                Ok(advice) => {
                    self.phase = SubmissionPhase::Success;
                    self.advice = Some(advice);
                }
                Err(e) => {
                    log::error!("advice request failed: {}", e);
                    self.phase = SubmissionPhase::Error;
                    self.error_message = Some(e.to_string());
                }
            },
            Message::CloseAdvice => {
                // Form values survive dismissal.
                self.advice = None;
                self.phase = SubmissionPhase::Idle;
            }
            Message::DismissError => {
                self.error_message = None;
                if self.phase == SubmissionPhase::Error {
                    self.phase = SubmissionPhase::Idle;
                }
            }
            Message::CopyAdvice => {
                if let Some(advice) = &self.advice {
                    return iced::clipboard::write(advice.clone());
                }
            }
        }
        Command::none()
    }
}
