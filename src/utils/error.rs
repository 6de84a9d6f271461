//! Error types used across the crate.

use std::io;

use thiserror::Error;

/// Errors produced by the server lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound. Fatal to startup and
    /// propagated to the caller; there is no retry.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// `serve` was called before a successful `listen`.
    #[error("server is not listening")]
    NotListening,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors produced by the protocol client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The server went away before terminating a reply with `OK`.
    #[error("connection closed before reply terminator")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors produced by the LLM suggestion client.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// `OPENAI_API_KEY` is not set.
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion body did not contain a usable suggestion.
    #[error("no suggestion in completion response")]
    EmptyCompletion,
}
