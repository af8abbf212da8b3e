//! Command implementations.

pub mod columns;
pub mod config;
pub mod query;

pub use self::columns::execute_columns;
pub use self::config::execute_config;
pub use self::query::execute_query;
