//! Error types for fetching records

use kurs_core::Collection;
use thiserror::Error;

/// Result type alias for fetch operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Reasons a collection could not be fetched
///
/// All variants mean the same thing to callers: the snapshot is unavailable.
/// They differ only in the message they log.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the data service
    #[error("Data service returned {status} for {collection}")]
    UnexpectedStatus {
        /// Requested collection
        collection: Collection,
        /// HTTP status code
        status: u16,
    },

    /// Body that is neither a record map nor a record list
    #[error("Failed to decode {collection} records: {source}")]
    Decode {
        /// Requested collection
        collection: Collection,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Client cannot be built from the given settings
    #[error("Invalid data service configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Failure injected or reported by a non-HTTP source
    #[error("Data source unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

impl ClientError {
    /// Create an unexpected status error
    pub const fn unexpected_status(collection: Collection, status: u16) -> Self {
        Self::UnexpectedStatus { collection, status }
    }

    /// Create a decode error
    pub const fn decode(collection: Collection, source: serde_json::Error) -> Self {
        Self::Decode { collection, source }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<ClientError> for kurs_core::Error {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Configuration { message } => Self::Configuration { message },
            other => Self::DataService(other.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::unexpected_status(Collection::Courses, 503).to_string(),
            "Data service returned 503 for kurse"
        );
        assert_eq!(
            ClientError::configuration("no app id for raeume").to_string(),
            "Invalid data service configuration: no app id for raeume"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let err = ClientError::decode(Collection::Enrollments, source);

        assert!(err.to_string().starts_with("Failed to decode anmeldungen records"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_conversion_into_core_error() {
        let core: kurs_core::Error = ClientError::unavailable("offline").into();
        assert!(matches!(core, kurs_core::Error::DataService(ref msg) if msg.contains("offline")));

        let core: kurs_core::Error = ClientError::configuration("missing").into();
        assert!(matches!(core, kurs_core::Error::Configuration { .. }));
    }
}
