//! The `TimeScopedRelations` data source

use tsr_domain::{KeyParseError, RelationQuery};
use tsr_sdk::{MessageChannel, RelationQueryClient};

use crate::arguments::{ArgumentValidator, RawArguments, Validation, INPUT_ARGUMENTS};
use crate::error::{describe_error, FetchError, LifecycleError, RelationResult};
use crate::host::{ArgumentDefinition, ArgumentValues, ColumnDefinition, DataSource, Page};
use crate::projector::{project, COLUMNS};

/// Name the data source is registered under
pub const SOURCE_NAME: &str = "TimeScopedRelations";

/// Where an instance is in its fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, no channel bound yet
    Initialized,
    /// Channel bound, waiting for argument values
    AwaitingArguments,
    /// A valid query is ready to be fetched
    ArgumentsReady,
    /// Some arguments are missing; the cycle yields no rows
    ArgumentsIncomplete,
    /// The parameter argument could not be parsed; the cycle yields an error row
    ArgumentsRejected,
    /// The result for this cycle is stored
    Fetched,
    /// At least one page has been handed to the host
    Emitting,
}

/// What argument processing decided for the current cycle
#[derive(Debug)]
enum Arguments {
    Unset,
    Incomplete,
    Ready(RelationQuery),
    Rejected(KeyParseError),
}

/// Data source answering "what was related to parameter A during [start, end]?"
///
/// One instance serves any number of fetch cycles. Each prepare step replaces
/// the stored result of the previous cycle.
pub struct TimeScopedRelations<C> {
    client: Option<RelationQueryClient<C>>,
    phase: Phase,
    arguments: Arguments,
    result: Option<RelationResult>,
}

impl<C: MessageChannel> TimeScopedRelations<C> {
    /// Create an instance with no channel bound
    pub fn new() -> Self {
        Self {
            client: None,
            phase: Phase::Initialized,
            arguments: Arguments::Unset,
            result: None,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The query of the current cycle, if the arguments were complete
    pub fn query(&self) -> Option<&RelationQuery> {
        match &self.arguments {
            Arguments::Ready(query) => Some(query),
            _ => None,
        }
    }

    /// The stored result of the last prepare step, if one produced a result
    pub fn result(&self) -> Option<&RelationResult> {
        self.result.as_ref()
    }

    /// The bound client
    pub fn client(&self) -> Option<&RelationQueryClient<C>> {
        self.client.as_ref()
    }

    fn fetch(&self, query: &RelationQuery) -> Result<RelationResult, LifecycleError> {
        let client = self.client.as_ref().ok_or(LifecycleError::NotInitialized)?;

        let result = client.fetch_relations(query).map_err(FetchError::from);
        if let Err(e) = &result {
            tracing::warn!("Relation query for {} failed: {}", query.parameter, describe_error(e));
        }

        Ok(result)
    }
}

impl<C: MessageChannel> Default for TimeScopedRelations<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MessageChannel> DataSource for TimeScopedRelations<C> {
    type Channel = C;

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn input_arguments(&self) -> &'static [ArgumentDefinition] {
        &INPUT_ARGUMENTS
    }

    fn on_init(&mut self, channel: C) {
        self.client = Some(RelationQueryClient::new(channel));
        self.phase = Phase::AwaitingArguments;
    }

    fn on_arguments_processed(&mut self, values: &ArgumentValues) {
        let raw = RawArguments::from_values(values);

        (self.arguments, self.phase) = match ArgumentValidator::validate(&raw) {
            Ok(Validation::Ready(query)) => {
                tracing::debug!(
                    "Arguments ready: {} from {} to {}",
                    query.parameter,
                    query.start,
                    query.end
                );
                (Arguments::Ready(query), Phase::ArgumentsReady)
            }
            Ok(Validation::NotReady { missing }) => {
                tracing::debug!("Arguments incomplete, missing: {}", missing.join(", "));
                (Arguments::Incomplete, Phase::ArgumentsIncomplete)
            }
            Err(e) => {
                tracing::warn!("Rejected parameter argument: {}", e);
                (Arguments::Rejected(e), Phase::ArgumentsRejected)
            }
        };
    }

    fn on_prepare_fetch(&mut self) -> Result<(), LifecycleError> {
        // Nothing from the previous cycle survives a failed step
        self.result = None;

        let result = match &self.arguments {
            Arguments::Ready(query) => Some(self.fetch(query)?),
            Arguments::Rejected(e) => Some(Err(FetchError::InvalidParameterKey(e.clone()))),
            Arguments::Incomplete | Arguments::Unset => None,
        };

        self.result = result;
        self.phase = Phase::Fetched;
        Ok(())
    }

    fn columns(&self) -> &'static [ColumnDefinition] {
        &COLUMNS
    }

    fn next_page(&mut self) -> Page {
        let rows = self.result.as_ref().map(project).unwrap_or_default();

        if self.phase == Phase::Fetched {
            self.phase = Phase::Emitting;
        }

        Page::last(rows)
    }
}
