//! Movie entity model and response shapes.

use scriptline_core::sort::MovieSort;
use scriptline_core::types::{DbId, LineCount};
use serde::{Deserialize, Serialize};

/// A row from `movies.csv`. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movie_id")]
    pub id: DbId,
    pub title: String,
    /// Kept as text; some releases carry suffixes such as `1990/I`.
    pub year: String,
    pub imdb_rating: f64,
    pub imdb_votes: i64,
    pub raw_script_url: String,
}

/// Query parameters for `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    /// Case-insensitive substring filter on the title.
    pub name: Option<String>,
    #[serde(default)]
    pub sort: MovieSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One entry of `GET /movies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieListItem {
    pub movie_id: DbId,
    pub movie_title: String,
    pub year: String,
    pub imdb_rating: f64,
    pub imdb_votes: i64,
}

/// `GET /movies/{movie_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetail {
    pub movie_id: DbId,
    pub title: String,
    pub top_characters: Vec<TopCharacter>,
}

/// A character ranked by the number of lines they speak in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCharacter {
    pub character_id: DbId,
    pub character: String,
    pub num_lines: LineCount,
}

/// One entry of `GET /movies/{movie_id}/conversations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieConversation {
    pub conversation_id: DbId,
    pub character_1_id: DbId,
    pub character_1: String,
    pub character_2_id: DbId,
    pub character_2: String,
    pub number_of_lines: LineCount,
}
