use std::sync::Arc;

use scriptline_db::{CsvStorage, Dataset};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The dialogue tables. Reads share the lock; appends hold the write
    /// half from validation through persistence so id assignment is
    /// serialized.
    pub dataset: Arc<RwLock<Dataset>>,
    /// CSV storage the dataset was loaded from and appends are written to.
    pub storage: Arc<CsvStorage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(dataset: Dataset, storage: CsvStorage, config: ServerConfig) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
            storage: Arc::new(storage),
            config: Arc::new(config),
        }
    }
}
