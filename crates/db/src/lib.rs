//! In-memory dialogue tables, their CSV storage, and the repositories that
//! query and extend them.

pub mod dataset;
pub mod error;
pub mod models;
pub mod repositories;
pub mod storage;

pub use dataset::{Dataset, TableCounts};
pub use error::DbError;
pub use storage::CsvStorage;
