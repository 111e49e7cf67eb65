use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Indodax API error: {0}")]
    IndodaxApi(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Telegram API error: {0}")]
    TelegramApi(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, AppError>;
