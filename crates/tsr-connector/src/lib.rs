//! Time-Scoped Relations Connector
//!
//! A data source for a generic query engine that lists the parameters related
//! to a given parameter during a time window, as reported by the analytics
//! service.
//!
//! The connector is a three-stage pipeline:
//! - Argument validation (parameter key + time window → query, or "not ready")
//! - One remote call per fetch cycle through [`tsr_sdk::RelationQueryClient`]
//! - Projection of the relations, or of the failure, into four-column rows
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use tsr_connector::arguments::{END_TIME, PARAMETER, START_TIME};
//! use tsr_connector::{ArgumentValues, DataSource, TimeScopedRelations};
//! use tsr_sdk::{ChannelConfig, HttpChannel};
//!
//! let channel = HttpChannel::new(&ChannelConfig::new("http://localhost:8004")).unwrap();
//! let mut source = TimeScopedRelations::new();
//! source.on_init(channel);
//!
//! source.on_arguments_processed(
//!     &ArgumentValues::new()
//!         .with_string(&PARAMETER, "100/5/3")
//!         .with_datetime(&START_TIME, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
//!         .with_datetime(&END_TIME, Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap()),
//! );
//! source.on_prepare_fetch().unwrap();
//! let page = source.next_page();
//! ```

#![warn(missing_docs)]

pub mod arguments;
mod connector;
mod error;
pub mod host;
pub mod projector;

pub use arguments::{ArgumentValidator, RawArguments, Validation};
pub use connector::{Phase, TimeScopedRelations, SOURCE_NAME};
pub use error::{describe_error, FetchError, LifecycleError, RelationResult};
pub use host::{
    ArgumentDefinition, ArgumentKind, ArgumentValue, ArgumentValues, Cell, ColumnDefinition,
    ColumnKind, DataSource, ObjectRef, Page, Row, RowMetadata,
};
