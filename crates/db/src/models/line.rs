//! Line entity model and response shapes.

use scriptline_core::sort::LineSort;
use scriptline_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A row from `lines.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "line_id")]
    pub id: DbId,
    pub character_id: DbId,
    pub movie_id: DbId,
    pub conversation_id: DbId,
    /// 1-based position within the conversation.
    pub line_sort: i64,
    pub line_text: String,
}

/// Query parameters for `GET /lines`.
#[derive(Debug, Default, Deserialize)]
pub struct LineListParams {
    pub movie_id: Option<DbId>,
    pub conversation_id: Option<DbId>,
    /// Case-insensitive substring filter on the speaking character's name.
    pub character: Option<String>,
    /// Case-insensitive substring filter on the line text.
    pub text: Option<String>,
    #[serde(default)]
    pub sort: LineSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /lines/{line_id}` and each entry of `GET /lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDetail {
    pub line_id: DbId,
    pub movie_title: String,
    pub conversation_id: DbId,
    pub line_sort: i64,
    pub character: String,
    pub line_text: String,
}
