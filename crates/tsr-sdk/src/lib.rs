//! Time-Scoped Relations SDK
//!
//! Client library for asking the analytics service which parameters were
//! related to a given parameter during a time window.
//!
//! # Example
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use tsr_domain::{ParameterKey, RelationQuery};
//! use tsr_sdk::{ChannelConfig, HttpChannel, RelationQueryClient};
//!
//! let channel = HttpChannel::new(&ChannelConfig::new("http://localhost:8004"))
//!     .expect("Failed to build channel");
//! let client = RelationQueryClient::new(channel);
//!
//! let query = RelationQuery::new(
//!     ParameterKey::parse("100/5/3").unwrap(),
//!     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
//! );
//! let relations = client.fetch_relations(&query).expect("Query failed");
//! ```

#![warn(missing_docs)]

mod channel;
mod client;
mod config;
mod error;
pub mod messages;

pub use channel::{HttpChannel, MessageChannel};
pub use client::{collect_relations, RelationQueryClient};
pub use config::ChannelConfig;
pub use error::SdkError;
