use std::path::PathBuf;

/// Failures reading or writing the CSV tables.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed row in {file}: {source}")]
    Csv {
        file: &'static str,
        source: csv::Error,
    },
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
