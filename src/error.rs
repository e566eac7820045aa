// src/error.rs
use thiserror::Error;

/// Startup configuration failures. Fatal: the process does not start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set (add it to the environment or a .env file)")]
    MissingVar(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Anything that can go wrong during a single call to the generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to generation service failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode generation response: {0}")]
    MalformedResponse(String),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("generation response contained no text")]
    EmptyResponse,
}
