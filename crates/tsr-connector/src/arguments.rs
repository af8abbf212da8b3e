//! Argument validation
//!
//! All three arguments are declared optional so that dashboards feeding them
//! from other components do not fail while those components are still empty.
//! A missing value therefore means "not ready yet", never an error.

use chrono::{DateTime, Utc};
use tsr_domain::{KeyParseError, ParameterKey, RelationQuery};

use crate::host::{ArgumentDefinition, ArgumentValues};

/// Key of the parameter whose relations are requested
pub const PARAMETER: ArgumentDefinition = ArgumentDefinition::optional_string("Parameter");

/// Start of the time window
pub const START_TIME: ArgumentDefinition = ArgumentDefinition::optional_datetime("Start Time");

/// End of the time window
pub const END_TIME: ArgumentDefinition = ArgumentDefinition::optional_datetime("End Time");

/// Every input argument, in declaration order
pub const INPUT_ARGUMENTS: [ArgumentDefinition; 3] = [PARAMETER, START_TIME, END_TIME];

/// Argument values as received, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArguments {
    /// Parameter key text
    pub parameter: Option<String>,
    /// Window start
    pub start: Option<DateTime<Utc>>,
    /// Window end
    pub end: Option<DateTime<Utc>>,
}

impl RawArguments {
    /// Extract the raw arguments from host-supplied values
    pub fn from_values(values: &ArgumentValues) -> Self {
        Self {
            parameter: values.try_get_string(&PARAMETER).map(str::to_string),
            start: values.try_get_datetime(&START_TIME),
            end: values.try_get_datetime(&END_TIME),
        }
    }
}

/// Result of validating raw arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// All arguments present and well-formed
    Ready(RelationQuery),

    /// Some arguments are still missing
    NotReady {
        /// Names of the missing arguments
        missing: Vec<&'static str>,
    },
}

/// Turns raw arguments into a [`RelationQuery`]
pub struct ArgumentValidator;

impl ArgumentValidator {
    /// Validate raw arguments
    ///
    /// Missing or blank values yield [`Validation::NotReady`]. A non-blank
    /// parameter key that fails to parse is an error.
    pub fn validate(raw: &RawArguments) -> Result<Validation, KeyParseError> {
        let mut missing = Vec::new();

        let parameter = match raw.parameter.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Some(ParameterKey::parse(key)?),
            _ => {
                missing.push(PARAMETER.name);
                None
            }
        };

        if raw.start.is_none() {
            missing.push(START_TIME.name);
        }
        if raw.end.is_none() {
            missing.push(END_TIME.name);
        }

        match (parameter, raw.start, raw.end) {
            (Some(parameter), Some(start), Some(end)) => {
                Ok(Validation::Ready(RelationQuery::new(parameter, start, end)))
            }
            _ => Ok(Validation::NotReady { missing }),
        }
    }
}
