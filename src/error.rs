//! Error types for the TPF client

use thiserror::Error;

/// Errors that can occur when querying a Triple Pattern Fragments server
#[derive(Error, Debug)]
pub enum TpfError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Fragment request to {url} returned status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Failure raised by a non-HTTP transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server kept advertising a next page past the configured limit
    #[error("Pagination for {url} exceeded {pages} pages")]
    PageLimit {
        /// URL of the first page
        url: String,
        /// Configured page limit
        pages: usize,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML configuration could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Compact name used an unregistered prefix
    #[error("Unknown prefix: {0}")]
    Prefix(String),
}

pub type TpfResult<T> = Result<T, TpfError>;
