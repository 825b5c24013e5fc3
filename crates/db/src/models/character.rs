//! Character entity model and response shapes.

use scriptline_core::sort::CharacterSort;
use scriptline_core::types::{DbId, LineCount};
use serde::{Deserialize, Serialize};

/// A row from `characters.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(rename = "character_id")]
    pub id: DbId,
    pub name: String,
    pub movie_id: DbId,
    pub gender: Option<String>,
    /// Unparsable ages (the dataset uses `?` in places) load as `None`.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub age: Option<u32>,
    /// Derived from the lines table at load and bumped on every append.
    #[serde(skip)]
    pub line_count: LineCount,
}

/// Query parameters for `GET /characters`.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterListParams {
    /// Case-insensitive substring filter on the character name.
    pub name: Option<String>,
    #[serde(default)]
    pub sort: CharacterSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One entry of `GET /characters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterListItem {
    pub character_id: DbId,
    pub character: String,
    pub movie: String,
    pub number_of_lines: LineCount,
}

/// `GET /characters/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterDetail {
    pub character_id: DbId,
    pub character: String,
    pub movie: String,
    pub gender: Option<String>,
    pub age: Option<u32>,
    pub number_of_lines: LineCount,
    pub top_conversations: Vec<TopPartner>,
}

/// A conversation partner ranked by lines exchanged with the queried
/// character (both sides counted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopPartner {
    pub character_id: DbId,
    pub character: String,
    pub gender: Option<String>,
    pub number_of_lines_together: LineCount,
}
