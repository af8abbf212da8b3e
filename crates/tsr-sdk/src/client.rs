//! Time-scoped relation query client.

use crate::channel::MessageChannel;
use crate::error::SdkError;
use crate::messages::{GetTimeScopedRelations, RequestMessage, ResponseMessage};
use tsr_domain::{Relation, RelationQuery};

/// Queries the analytics service for the relations of one parameter
///
/// Every call to [`fetch_relations`](Self::fetch_relations) sends exactly one
/// request and keeps no state between calls, so retrying is safe.
pub struct RelationQueryClient<C> {
    channel: C,
}

impl<C: MessageChannel> RelationQueryClient<C> {
    /// Create a client over the given channel
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// The underlying channel
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Build the request message for a query
    pub fn build_request(query: &RelationQuery) -> RequestMessage {
        RequestMessage::GetTimeScopedRelations(GetTimeScopedRelations::from(query))
    }

    /// Fetch the relations for `query`
    ///
    /// Fragments are concatenated in the order the service returned them.
    /// A response without any relation fragment yields an empty list.
    pub fn fetch_relations(&self, query: &RelationQuery) -> Result<Vec<Relation>, SdkError> {
        let request = Self::build_request(query);

        tracing::debug!(
            "Requesting relations of {} between {} and {}",
            query.parameter,
            query.start,
            query.end
        );

        let responses = self
            .channel
            .send_messages(std::slice::from_ref(&request))?;
        let relations = collect_relations(responses);

        tracing::info!(
            "Fetched {} relation(s) for {}",
            relations.len(),
            query.parameter
        );

        Ok(relations)
    }
}

/// Flatten every relation fragment of a response batch, skipping other kinds
pub fn collect_relations(responses: Vec<ResponseMessage>) -> Vec<Relation> {
    let mut relations = Vec::new();
    let mut ignored = 0usize;

    for message in responses {
        match message {
            ResponseMessage::TimeScopedRelations(fragment) => {
                relations.extend(fragment.relations.into_iter().map(Relation::from));
            }
            ResponseMessage::Other => ignored += 1,
        }
    }

    if ignored > 0 {
        tracing::debug!("Ignored {} unrelated response message(s)", ignored);
    }

    relations
}
