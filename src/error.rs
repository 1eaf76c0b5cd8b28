use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollError {
    #[error("required element as argument")]
    MissingElement,

    #[error("element has no offset parent to scroll")]
    NoContainer,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Frame scheduling error: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, ScrollError>;
