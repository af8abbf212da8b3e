//! Error types for the analytics SDK.

use thiserror::Error;

/// SDK operation errors
///
/// Transport and decode failures keep their underlying error as `source()`
/// so callers can render the full cause chain.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Endpoint URL could not be used
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection error (network, DNS, refused, etc.)
    #[error("Failed to connect to analytics service at {url}")]
    ConnectionError {
        /// Target URL
        url: String,
        /// Underlying transport failure
        #[source]
        source: reqwest::Error,
    },

    /// The channel's timeout elapsed before a response arrived
    #[error("Request to analytics service at {url} timed out")]
    Timeout {
        /// Target URL
        url: String,
        /// Underlying transport failure
        #[source]
        source: reqwest::Error,
    },

    /// Any other failure while sending or reading the request
    #[error("Request to analytics service at {url} failed")]
    Request {
        /// Target URL
        url: String,
        /// Underlying transport failure
        #[source]
        source: reqwest::Error,
    },

    /// The analytics service answered with a non-success status
    #[error("Analytics service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The response body was not a valid message batch
    #[error("Malformed analytics response")]
    Decode(#[from] serde_json::Error),

    /// Failure reported by a non-HTTP channel implementation
    #[error("Channel error: {0}")]
    Channel(String),

    /// Failed to read a configuration file
    #[error("Failed to read channel config")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse a configuration file
    #[error("Failed to parse channel config TOML")]
    ConfigParse(#[from] toml::de::Error),
}

impl SdkError {
    /// Classify a transport failure for the given target URL
    pub(crate) fn transport(url: &str, e: reqwest::Error) -> Self {
        let url = url.to_string();
        if e.is_timeout() {
            SdkError::Timeout { url, source: e }
        } else if e.is_connect() {
            SdkError::ConnectionError { url, source: e }
        } else {
            SdkError::Request { url, source: e }
        }
    }
}
