//! Error types for the collection server.

use std::net::SocketAddr;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServeError>;

/// Errors that can occur while exposing a collection over HTTP.
#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    /// The collection document could not be serialized.
    #[error("Failed to encode the collection document: {source}")]
    Encode {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// The listener could not be bound to the requested address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ServeError {
    /// Returns `true` if the error came from serializing the document.
    #[must_use]
    pub const fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }

    /// Returns `true` if the error came from binding the listener.
    #[must_use]
    pub const fn is_bind(&self) -> bool {
        matches!(self, Self::Bind { .. })
    }
}
