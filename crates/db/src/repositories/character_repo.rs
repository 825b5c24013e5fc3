//! Queries over the `characters` table.

use std::cmp::Ordering;
use std::collections::HashMap;

use scriptline_core::error::CoreError;
use scriptline_core::ranking::{self, Tally};
use scriptline_core::search::{Page, TextFilter};
use scriptline_core::sort::CharacterSort;
use scriptline_core::types::{DbId, LineCount};

use crate::dataset::Dataset;
use crate::models::character::{
    Character, CharacterDetail, CharacterListItem, CharacterListParams, TopPartner,
};

/// Provides lookup, listing, and partner ranking for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Find a character by id.
    pub fn find_by_id(data: &Dataset, id: DbId) -> Option<&Character> {
        data.character(id)
    }

    /// Build the detail view of a character, including its top
    /// conversation partners.
    pub fn detail(data: &Dataset, id: DbId) -> Result<CharacterDetail, CoreError> {
        let character = Self::find_by_id(data, id).ok_or(CoreError::NotFound {
            entity: "Character",
            id,
        })?;
        let top_conversations = Self::top_conversations(data, id)?;

        Ok(CharacterDetail {
            character_id: character.id,
            character: character.name.clone(),
            movie: data.movie_title(character.movie_id).to_string(),
            gender: character.gender.clone(),
            age: character.age,
            number_of_lines: character.line_count,
            top_conversations,
        })
    }

    /// Rank the characters `id` has talked to by the total number of lines
    /// exchanged, both sides counted, across all shared conversations.
    ///
    /// Ordered by count descending, then name and id ascending. Partners
    /// whose shared conversations contain no lines are left out.
    pub fn top_conversations(data: &Dataset, id: DbId) -> Result<Vec<TopPartner>, CoreError> {
        if Self::find_by_id(data, id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Character",
                id,
            });
        }

        let mut together: HashMap<DbId, LineCount> = HashMap::new();
        for conversation in data.conversations_of(id) {
            let Some(other) = conversation.other_participant(id) else {
                continue;
            };
            if other == id {
                continue;
            }
            let shared =
                data.lines_spoken(conversation.id, id) + data.lines_spoken(conversation.id, other);
            *together.entry(other).or_default() += shared;
        }

        let tallies = together
            .into_iter()
            .filter_map(|(other, count)| {
                data.character(other).map(|c| Tally {
                    id: other,
                    name: c.name.clone(),
                    count,
                })
            })
            .collect();

        Ok(ranking::rank(tallies, None)
            .into_iter()
            .map(|t| TopPartner {
                character_id: t.id,
                gender: data.character(t.id).and_then(|c| c.gender.clone()),
                character: t.name,
                number_of_lines_together: t.count,
            })
            .collect())
    }

    /// List characters matching `params.name`, sorted and paginated.
    pub fn list(
        data: &Dataset,
        params: &CharacterListParams,
        page: Page,
    ) -> Vec<CharacterListItem> {
        let filter = TextFilter::new(params.name.as_deref());

        let mut items: Vec<CharacterListItem> = data
            .characters()
            .filter(|c| filter.matches(&c.name))
            .map(|c| CharacterListItem {
                character_id: c.id,
                character: c.name.clone(),
                movie: data.movie_title(c.movie_id).to_string(),
                number_of_lines: c.line_count,
            })
            .collect();

        items.sort_by(|a, b| compare(params.sort, a, b));
        page.apply(items)
    }
}

fn compare(sort: CharacterSort, a: &CharacterListItem, b: &CharacterListItem) -> Ordering {
    let by_name = || {
        a.character
            .cmp(&b.character)
            .then_with(|| a.character_id.cmp(&b.character_id))
    };
    match sort {
        CharacterSort::Character => by_name(),
        CharacterSort::Movie => a.movie.cmp(&b.movie).then_with(by_name),
        CharacterSort::NumberOfLines => b
            .number_of_lines
            .cmp(&a.number_of_lines)
            .then_with(by_name),
    }
}
