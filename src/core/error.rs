use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Input ended inside {0}")]
    UnexpectedEof(String),

    #[error("Malformed {context} line: {line:?}")]
    MalformedLine { context: String, line: String },

    #[error("Unknown unit kind: {0:?}")]
    UnknownUnitKind(String),

    #[error("Unknown hero class: {0:?}")]
    UnknownHeroClass(String),

    #[error("Doctrine error: {0}")]
    DoctrineError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
