use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid email: {0:?}")]
    InvalidEmail(String),
    #[cfg(feature = "serde")]
    #[error("config error: {0}")]
    Config(String),
}
