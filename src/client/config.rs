use std::env;

/// Where the advice backend lives. Read once from the environment (a local
/// `.env` file is honored) with defaults matching a locally run backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub advice_host: String,
    pub advice_port: u16,
    pub advice_path: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            advice_host: env::var("ADVICE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            advice_port: env::var("ADVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            advice_path: env::var("ADVICE_PATH")
                .unwrap_or_else(|_| "/generate-advice".to_string()),
        }
    }

    pub fn advice_endpoint(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.advice_host, self.advice_port, self.advice_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_combines_host_port_and_path() {
        let cfg = ClientConfig {
            advice_host: "127.0.0.1".to_string(),
            advice_port: 5000,
            advice_path: "/generate-advice".to_string(),
        };
        assert_eq!(cfg.advice_endpoint(), "http://127.0.0.1:5000/generate-advice");
    }
}
