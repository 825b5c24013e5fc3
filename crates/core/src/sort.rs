//! Sort keys accepted by the list endpoints.
//!
//! Each enum deserializes from its snake_case query value. The comparison
//! itself is implemented next to the row types in `scriptline-db`; the
//! tie-break chain for every key ends on the entity id so that ordering is
//! total.

use serde::{Deserialize, Serialize};

/// `GET /characters?sort=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSort {
    /// Name ascending, then id.
    #[default]
    Character,
    /// Movie title ascending, then name, then id.
    Movie,
    /// Line count descending, then name, then id.
    NumberOfLines,
}

/// `GET /movies?sort=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieSort {
    /// Title ascending, then id.
    #[default]
    MovieTitle,
    /// Release year ascending, then title, then id.
    Year,
    /// IMDb rating descending, then title, then id.
    Rating,
}

/// `GET /lines?sort=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSort {
    /// Conversation id, then position within the conversation.
    #[default]
    Conversation,
    /// Speaking character's name, then line id.
    Character,
    /// Movie title, then conversation id, then position.
    MovieTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Params {
        sort: Option<CharacterSort>,
    }

    #[test]
    fn sort_keys_use_snake_case() {
        let json = r#"{"sort":"number_of_lines"}"#;
        let params: Params = serde_json::from_str(json).unwrap();
        assert_eq!(params.sort, Some(CharacterSort::NumberOfLines));
    }

    #[test]
    fn defaults_match_first_variant() {
        assert_eq!(CharacterSort::default(), CharacterSort::Character);
        assert_eq!(MovieSort::default(), MovieSort::MovieTitle);
        assert_eq!(LineSort::default(), LineSort::Conversation);
    }
}
