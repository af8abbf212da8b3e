//! Validated relation query

use crate::ParameterKey;
use chrono::{DateTime, Utc};

/// A validated request for the relations of one parameter over a time window
///
/// The window is passed to the analytics service as given; ordering of
/// `start` and `end` is the service's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationQuery {
    /// Parameter whose relations are requested
    pub parameter: ParameterKey,

    /// Window start (inclusive)
    pub start: DateTime<Utc>,

    /// Window end
    pub end: DateTime<Utc>,
}

impl RelationQuery {
    /// Create a new query
    pub fn new(parameter: ParameterKey, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            parameter,
            start,
            end,
        }
    }
}
