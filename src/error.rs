use thiserror::Error;

/// The only message a player ever sees when a game fails to start.
pub const STARTUP_FAILED_MESSAGE: &str =
    "An error has occurred. Please wait 30 seconds and try again.";

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Trivia service returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("Category pool exhausted: found {found} of {wanted} categories after {draws} draws")]
    CategoryPoolExhausted {
        wanted: usize,
        found: usize,
        draws: u32,
    },
    #[error("Cannot render board: {0}")]
    Render(String),
    #[error("Startup cancelled")]
    Cancelled,
}

impl GameError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GameError::Cancelled)
    }
}

impl From<reqwest::Error> for GameError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => GameError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => GameError::Network(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Malformed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
