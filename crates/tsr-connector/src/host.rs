//! Host-facing contract
//!
//! The query engine hosting a data source declares arguments and columns,
//! supplies argument values, drives the lifecycle and pulls pages of rows.
//! These types model that contract.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use tsr_domain::{ElementKey, ParameterKey};

use crate::error::LifecycleError;

/// Value type of an input argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Free text
    String,
    /// UTC instant
    DateTime,
}

/// An input argument declared by a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentDefinition {
    /// Display name, also the lookup key for values
    pub name: &'static str,
    /// Value type
    pub kind: ArgumentKind,
    /// Whether the host must refuse to run without a value
    pub required: bool,
}

impl ArgumentDefinition {
    /// Optional string argument
    pub const fn optional_string(name: &'static str) -> Self {
        Self {
            name,
            kind: ArgumentKind::String,
            required: false,
        }
    }

    /// Optional date-time argument
    pub const fn optional_datetime(name: &'static str) -> Self {
        Self {
            name,
            kind: ArgumentKind::DateTime,
            required: false,
        }
    }
}

/// A raw argument value supplied by the host
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    /// Text value
    String(String),
    /// Instant value
    DateTime(DateTime<Utc>),
}

/// Argument values supplied by the host, keyed by argument name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentValues {
    values: HashMap<String, ArgumentValue>,
}

impl ArgumentValues {
    /// Create an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of an argument, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: ArgumentValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style string value
    pub fn with_string(mut self, argument: &ArgumentDefinition, value: impl Into<String>) -> Self {
        self.set(argument.name, ArgumentValue::String(value.into()));
        self
    }

    /// Builder-style instant value
    pub fn with_datetime(mut self, argument: &ArgumentDefinition, value: DateTime<Utc>) -> Self {
        self.set(argument.name, ArgumentValue::DateTime(value));
        self
    }

    /// String value of `argument`, if present and of the right kind
    pub fn try_get_string(&self, argument: &ArgumentDefinition) -> Option<&str> {
        match self.values.get(argument.name) {
            Some(ArgumentValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Instant value of `argument`, if present and of the right kind
    pub fn try_get_datetime(&self, argument: &ArgumentDefinition) -> Option<DateTime<Utc>> {
        match self.values.get(argument.name) {
            Some(ArgumentValue::DateTime(value)) => Some(*value),
            _ => None,
        }
    }
}

/// Value type of an output column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Text cells
    String,
    /// Floating-point cells
    Double,
}

/// An output column declared by a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Header shown by the host
    pub name: &'static str,
    /// Cell type
    pub kind: ColumnKind,
}

impl ColumnDefinition {
    /// String column
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::String,
        }
    }

    /// Floating-point column
    pub const fn double(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Double,
        }
    }
}

/// One cell of a row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text cell
    String(String),
    /// Floating-point cell
    Double(f64),
}

impl Cell {
    /// Text content, if this is a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::String(value) => Some(value),
            Cell::Double(_) => None,
        }
    }

    /// Numeric content, if this is a double cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Double(value) => Some(*value),
            Cell::String(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::String(value) => f.write_str(value),
            Cell::Double(value) => write!(f, "{}", value),
        }
    }
}

/// Opaque reference to an object the host can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    /// A monitored element
    Element(ElementKey),
    /// A monitored parameter
    Parameter(ParameterKey),
}

/// Cross-reference metadata attached to a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMetadata {
    /// Element hosting the related parameter
    pub element: ObjectRef,
    /// The related parameter itself
    pub parameter: ObjectRef,
}

/// One output row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cells, in column order
    pub cells: Vec<Cell>,
    /// Navigation metadata, absent on error rows
    pub metadata: Option<RowMetadata>,
}

/// A page of rows
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Rows in emission order
    pub rows: Vec<Row>,
    /// Whether the host should ask for another page
    pub has_next_page: bool,
}

impl Page {
    /// A final page holding `rows`
    pub fn last(rows: Vec<Row>) -> Self {
        Self {
            rows,
            has_next_page: false,
        }
    }
}

/// Lifecycle driven by the host
///
/// The host calls, in order: [`on_init`](Self::on_init),
/// [`on_arguments_processed`](Self::on_arguments_processed),
/// [`on_prepare_fetch`](Self::on_prepare_fetch), then
/// [`next_page`](Self::next_page) until a page reports no successor.
/// Calls for one instance are never concurrent.
pub trait DataSource {
    /// Remote-call channel bound at initialization
    type Channel;

    /// Name the data source is registered under
    fn name(&self) -> &'static str;

    /// Arguments the host should collect
    fn input_arguments(&self) -> &'static [ArgumentDefinition];

    /// Bind the remote-call channel
    fn on_init(&mut self, channel: Self::Channel);

    /// Receive the argument values for the next fetch cycle
    fn on_arguments_processed(&mut self, arguments: &ArgumentValues);

    /// Perform the fetch for the current cycle
    fn on_prepare_fetch(&mut self) -> Result<(), LifecycleError>;

    /// Output columns, in order
    fn columns(&self) -> &'static [ColumnDefinition];

    /// Produce the next page of rows
    fn next_page(&mut self) -> Page;
}
