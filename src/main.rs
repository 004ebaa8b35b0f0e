use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    netmentor::client::gui::app::AdvisorApp::run(iced::Settings::default())
}
