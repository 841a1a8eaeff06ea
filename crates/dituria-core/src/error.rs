use thiserror::Error;

#[derive(Debug, Error)]
pub enum DituriaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
