//! Operation error taxonomy.

use statcounter_types::InvalidParameterError;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, StatCounterError>;

/// Errors that can occur while performing an API operation.
///
/// No failure is retried or recovered locally; every operation either
/// returns its full record sequence or fails with one of these variants.
#[derive(Error, Debug)]
pub enum StatCounterError {
    /// A parameter failed local validation; no request was sent.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// The remote service rejected the credentials.
    #[error("{message}")]
    Authentication {
        /// Fixed message for the endpoint category.
        message: &'static str,
        /// Raw `status` attribute from the response root.
        status: String,
    },

    /// The remote service reported a non-ok status for a statistics request.
    #[error("{message}")]
    RemoteService {
        /// Fixed message for the endpoint category.
        message: &'static str,
        /// Raw `status` attribute from the response root.
        status: String,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Response parsed but is missing required structure.
    #[error("Malformed response: {0}")]
    MalformedResponse(&'static str),
}
