//! Row projection
//!
//! Every page uses the same four columns. A failed cycle becomes a single row
//! carrying the error description; a successful one becomes one row per
//! relation, in the order the relations were received.

use std::error::Error as StdError;
use tsr_domain::Relation;

use crate::error::{describe_error, RelationResult};
use crate::host::{Cell, ColumnDefinition, ObjectRef, Row, RowMetadata};

/// Element hosting the related parameter
pub const RELATED_ELEMENT: ColumnDefinition = ColumnDefinition::string("Related Element");

/// Canonical key of the related parameter
pub const RELATED_PARAMETER: ColumnDefinition = ColumnDefinition::string("Related Parameter");

/// Table index of the related parameter
pub const RELATED_TABLE_KEY: ColumnDefinition = ColumnDefinition::string("Related TableKey");

/// Relation confidence
pub const CONFIDENCE: ColumnDefinition = ColumnDefinition::double("Confidence");

/// Output columns, in order
pub const COLUMNS: [ColumnDefinition; 4] =
    [RELATED_ELEMENT, RELATED_PARAMETER, RELATED_TABLE_KEY, CONFIDENCE];

/// Project a fetch result into rows
pub fn project(result: &RelationResult) -> Vec<Row> {
    match result {
        Ok(relations) => relations.iter().map(relation_row).collect(),
        Err(e) => vec![error_row(e)],
    }
}

/// The single row reporting a failed cycle
pub fn error_row(err: &(dyn StdError + 'static)) -> Row {
    Row {
        cells: vec![
            Cell::String(describe_error(err)),
            Cell::String(String::new()),
            Cell::String(String::new()),
            Cell::Double(0.0),
        ],
        metadata: None,
    }
}

/// The row describing one relation
pub fn relation_row(relation: &Relation) -> Row {
    let element = relation.hosting_element();

    Row {
        cells: vec![
            Cell::String(element.to_string()),
            Cell::String(relation.related.to_string()),
            Cell::String(relation.related.table_index_or_empty().to_string()),
            Cell::Double(relation.confidence),
        ],
        metadata: Some(RowMetadata {
            element: ObjectRef::Element(element),
            parameter: ObjectRef::Parameter(relation.related.clone()),
        }),
    }
}
