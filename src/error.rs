use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corrupt model: {0}")]
    Corrupt(String),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
