//! CSV-backed storage for the dialogue tables.
//!
//! All four tables are read from one data directory at startup. Appends
//! rewrite `conversations.csv` and `lines.csv` together:
//!
//! 1. both tables are encoded and written to `.csv.tmp` siblings,
//! 2. the live `conversations.csv` is copied to `.csv.bak`,
//! 3. both temporaries are renamed over the live files,
//! 4. the backup is removed.
//!
//! If the second rename fails the backup is renamed back, so the two live
//! files never disagree. Temporaries are removed on every failure path.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::DbError;
use crate::models::conversation::NewConversation;

pub const MOVIES_FILE: &str = "movies.csv";
pub const CHARACTERS_FILE: &str = "characters.csv";
pub const CONVERSATIONS_FILE: &str = "conversations.csv";
pub const LINES_FILE: &str = "lines.csv";

/// The data directory holding the four CSV tables.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    dir: PathBuf,
}

impl CsvStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read all four tables and build the indexed [`Dataset`].
    pub async fn load(&self) -> Result<Dataset, DbError> {
        let movies = self.read_table(MOVIES_FILE).await?;
        let characters = self.read_table(CHARACTERS_FILE).await?;
        let conversations = self.read_table(CONVERSATIONS_FILE).await?;
        let lines = self.read_table(LINES_FILE).await?;

        let data = Dataset::from_rows(movies, characters, conversations, lines);
        let counts = data.counts();
        tracing::info!(
            dir = %self.dir.display(),
            movies = counts.movies,
            characters = counts.characters,
            conversations = counts.conversations,
            lines = counts.lines,
            "Dataset loaded"
        );
        Ok(data)
    }

    /// Write the conversation and line tables as they will be once
    /// `pending` is applied to `data`.
    ///
    /// Rows skipped at load are written back as they were. Nothing in
    /// `data` is touched. On error the live files are unchanged and no
    /// temporary or backup file is left behind.
    pub async fn persist_conversation(
        &self,
        data: &Dataset,
        pending: &NewConversation,
    ) -> Result<(), DbError> {
        let mut conversation_rows = data.conversation_rows();
        conversation_rows.push(&pending.conversation);
        let conversations = encode_table(CONVERSATIONS_FILE, conversation_rows)?;

        let mut line_rows = data.line_rows();
        line_rows.extend(pending.lines.iter());
        let lines = encode_table(LINES_FILE, line_rows)?;

        let conversations_path = self.dir.join(CONVERSATIONS_FILE);
        let lines_path = self.dir.join(LINES_FILE);
        let conversations_tmp = sibling(&conversations_path, "csv.tmp");
        let lines_tmp = sibling(&lines_path, "csv.tmp");
        let conversations_bak = sibling(&conversations_path, "csv.bak");

        let staged = async {
            write_file(&conversations_tmp, conversations).await?;
            write_file(&lines_tmp, lines).await?;
            copy_file(&conversations_path, &conversations_bak).await
        }
        .await;
        if let Err(e) = staged {
            discard(&conversations_tmp).await;
            discard(&lines_tmp).await;
            discard(&conversations_bak).await;
            return Err(e);
        }

        if let Err(e) = rename_file(&conversations_tmp, &conversations_path).await {
            discard(&conversations_tmp).await;
            discard(&lines_tmp).await;
            discard(&conversations_bak).await;
            return Err(e);
        }

        if let Err(e) = rename_file(&lines_tmp, &lines_path).await {
            discard(&lines_tmp).await;
            if let Err(restore) = rename_file(&conversations_bak, &conversations_path).await {
                tracing::error!(
                    error = %restore,
                    backup = %conversations_bak.display(),
                    "Failed to restore conversations table after a failed append"
                );
            }
            return Err(e);
        }

        discard(&conversations_bak).await;

        tracing::debug!(
            conversation_id = pending.conversation.id,
            lines = pending.lines.len(),
            "Conversation and line tables written"
        );
        Ok(())
    }

    async fn read_table<T: DeserializeOwned>(
        &self,
        file: &'static str,
    ) -> Result<Vec<T>, DbError> {
        let path = self.dir.join(file);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| DbError::io(&path, e))?;
        decode_table(file, &bytes)
    }
}

/// Parse a headed CSV table, matching columns by name.
pub fn decode_table<T: DeserializeOwned>(
    file: &'static str,
    bytes: &[u8],
) -> Result<Vec<T>, DbError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DbError::Csv { file, source })
}

/// Encode rows as a headed CSV table.
pub fn encode_table<'a, T, I>(file: &'static str, rows: I) -> Result<Vec<u8>, DbError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| DbError::Csv { file, source })?;
    }
    writer
        .into_inner()
        .map_err(|e| DbError::io(file, e.into_error()))
}

fn sibling(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

async fn write_file(path: &Path, bytes: Vec<u8>) -> Result<(), DbError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| DbError::io(path, e))
}

async fn copy_file(from: &Path, to: &Path) -> Result<(), DbError> {
    tokio::fs::copy(from, to)
        .await
        .map(|_| ())
        .map_err(|e| DbError::io(from, e))
}

async fn rename_file(from: &Path, to: &Path) -> Result<(), DbError> {
    tokio::fs::rename(from, to)
        .await
        .map_err(|e| DbError::io(to, e))
}

async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove temporary file");
        }
    }
}
