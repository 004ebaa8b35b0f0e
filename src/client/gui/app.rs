use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

use crate::client::config::ClientConfig;
use crate::client::models::app_state::{AdvisorState, SubmissionPhase};
use crate::client::models::messages::Message;
use crate::client::services::advice::AdviceService;

pub struct AdvisorApp {
    pub state: AdvisorState,
    pub advice_service: Arc<AdviceService>,
}

impl Application for AdvisorApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let cfg = ClientConfig::from_env();
        let endpoint = cfg.advice_endpoint();
        log::info!("advice endpoint: {}", endpoint);
        let app = AdvisorApp {
            state: AdvisorState::default(),
            advice_service: Arc::new(AdviceService::new(endpoint)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "AI Networking Assistant".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.advice_service)
    }

    fn view(&self) -> Element<Message> {
        match self.state.phase {
            SubmissionPhase::Success => crate::client::gui::views::advice::view(&self.state),
            _ => crate::client::gui::views::form::view(&self.state),
        }
    }
}
