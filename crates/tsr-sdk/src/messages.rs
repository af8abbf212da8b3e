//! Wire messages exchanged with the analytics service.
//!
//! Messages travel as JSON batches and are internally tagged by `type`.
//! Response kinds this crate does not know decode to
//! [`ResponseMessage::Other`] instead of failing the whole batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tsr_domain::{ParameterKey, Relation, RelationQuery};

/// Parameter key as carried on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireParameterKey {
    /// Management-system identifier
    pub system_id: u32,
    /// Element identifier
    pub element_id: u32,
    /// Parameter identifier
    pub parameter_id: u32,
    /// Table-instance index, empty when not a table cell
    #[serde(default, deserialize_with = "null_as_empty")]
    pub table_index: String,
}

/// Non-table parameters may carry an explicit `null` index
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&ParameterKey> for WireParameterKey {
    fn from(key: &ParameterKey) -> Self {
        Self {
            system_id: key.system_id(),
            element_id: key.element_id(),
            parameter_id: key.parameter_id(),
            table_index: key.table_index_or_empty().to_string(),
        }
    }
}

impl From<WireParameterKey> for ParameterKey {
    fn from(key: WireParameterKey) -> Self {
        ParameterKey::with_table_index(
            key.system_id,
            key.element_id,
            key.parameter_id,
            key.table_index,
        )
    }
}

/// Request for the relations of one parameter within a time window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTimeScopedRelations {
    /// Source parameter
    pub parameter: WireParameterKey,
    /// Window start
    pub start: DateTime<Utc>,
    /// Window end
    pub end: DateTime<Utc>,
}

impl From<&RelationQuery> for GetTimeScopedRelations {
    fn from(query: &RelationQuery) -> Self {
        Self {
            parameter: WireParameterKey::from(&query.parameter),
            start: query.start,
            end: query.end,
        }
    }
}

/// One relation as reported by the analytics service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRelation {
    /// Source parameter
    pub parameter_a: WireParameterKey,
    /// Related parameter
    pub parameter_b: WireParameterKey,
    /// Relation confidence
    pub confidence: f64,
}

impl From<WireRelation> for Relation {
    fn from(relation: WireRelation) -> Self {
        Relation::new(
            relation.parameter_a.into(),
            relation.parameter_b.into(),
            relation.confidence,
        )
    }
}

/// Relations answering a [`GetTimeScopedRelations`] request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeScopedRelationsResponse {
    /// Relations in the order the service reported them
    #[serde(default)]
    pub relations: Vec<WireRelation>,
}

/// Messages sent to the analytics service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestMessage {
    /// Ask for time-scoped relations
    GetTimeScopedRelations(GetTimeScopedRelations),
}

/// Messages received from the analytics service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseMessage {
    /// A fragment of time-scoped relations
    TimeScopedRelations(TimeScopedRelationsResponse),

    /// Any message kind not consumed by this crate
    #[serde(other)]
    Other,
}

/// Request body: a batch of messages
#[derive(Debug, Serialize)]
pub struct RequestBatch<'a> {
    /// Messages to deliver, in order
    pub messages: &'a [RequestMessage],
}

/// Response body: a batch of messages
#[derive(Debug, Deserialize)]
pub struct ResponseBatch {
    /// Messages returned, in order
    #[serde(default)]
    pub messages: Vec<ResponseMessage>,
}
