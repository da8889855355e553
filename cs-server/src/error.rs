use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cs_config::ConfigError),

    #[error("Webhook verifier error: {0}")]
    Verifier(#[from] cs_webhook::VerifyError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
