//! Unified error handling for ghreport-core

use thiserror::Error;

/// Core error type for ghreport-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("devi impostare la variabile d'ambiente GITHUB_TOKEN o passare il token con --token")]
    MissingToken,

    #[error("Rate limit raggiunto o permessi insufficienti (status {status})")]
    RateLimited { status: u16, body: String },

    #[error("Errore nella chiamata alla Search API: status {status}, risposta: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for ghreport-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Map a failed search response to its error kind
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        if status == 403 {
            Error::RateLimited { status, body }
        } else {
            Error::Api { status, body }
        }
    }

    /// True when a 403 body says the rate limit was hit, so waiting helps
    pub fn suggests_retry(&self) -> bool {
        match self {
            Error::RateLimited { body, .. } => body.to_lowercase().contains("rate limit"),
            _ => false,
        }
    }
}
