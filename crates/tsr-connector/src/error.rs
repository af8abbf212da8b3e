//! Connector error types

use std::error::Error as StdError;
use thiserror::Error;
use tsr_domain::{KeyParseError, Relation};
use tsr_sdk::SdkError;

/// Outcome of one fetch cycle
pub type RelationResult = Result<Vec<Relation>, FetchError>;

/// Failures folded into the error row of a fetch cycle
#[derive(Error, Debug)]
pub enum FetchError {
    /// The parameter argument was not a valid key
    #[error("Invalid parameter argument")]
    InvalidParameterKey(#[from] KeyParseError),

    /// The remote call failed
    #[error(transparent)]
    Remote(#[from] SdkError),
}

/// Lifecycle misuse by the host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// A fetch was requested before a channel was bound
    #[error("Data source not initialized - on_init must be called before fetching")]
    NotInitialized,
}

/// Render an error followed by every cause in its chain, joined by `": "`
pub fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }

    description
}
