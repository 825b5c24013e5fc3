//! Queries over the `movies` table.

use std::cmp::Ordering;

use scriptline_core::error::CoreError;
use scriptline_core::ranking::{self, Tally, TOP_CHARACTERS_LIMIT};
use scriptline_core::search::{Page, TextFilter};
use scriptline_core::sort::MovieSort;
use scriptline_core::types::{DbId, LineCount};

use crate::dataset::Dataset;
use crate::models::movie::{
    Movie, MovieConversation, MovieDetail, MovieListItem, MovieListParams, TopCharacter,
};

/// Provides lookup, listing, and per-movie aggregation for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Find a movie by id.
    pub fn find_by_id(data: &Dataset, id: DbId) -> Option<&Movie> {
        data.movie(id)
    }

    fn require(data: &Dataset, id: DbId) -> Result<&Movie, CoreError> {
        Self::find_by_id(data, id).ok_or(CoreError::NotFound {
            entity: "Movie",
            id,
        })
    }

    /// Build the detail view of a movie with its top five characters.
    pub fn detail(data: &Dataset, id: DbId) -> Result<MovieDetail, CoreError> {
        let movie = Self::require(data, id)?;
        Ok(MovieDetail {
            movie_id: movie.id,
            title: movie.title.clone(),
            top_characters: Self::top_characters(data, id)?,
        })
    }

    /// The characters with the most lines across the movie's conversations,
    /// at most [`TOP_CHARACTERS_LIMIT`] of them.
    pub fn top_characters(data: &Dataset, id: DbId) -> Result<Vec<TopCharacter>, CoreError> {
        Self::require(data, id)?;

        let tallies = data
            .characters_in_movie(id)
            .map(|character| {
                let count: LineCount = data
                    .conversations_of(character.id)
                    .filter(|c| c.movie_id == id)
                    .map(|c| data.lines_spoken(c.id, character.id))
                    .sum();
                Tally {
                    id: character.id,
                    name: character.name.clone(),
                    count,
                }
            })
            .collect();

        Ok(ranking::rank(tallies, Some(TOP_CHARACTERS_LIMIT))
            .into_iter()
            .map(|t| TopCharacter {
                character_id: t.id,
                character: t.name,
                num_lines: t.count,
            })
            .collect())
    }

    /// List a movie's conversations in id order with their participants
    /// and line counts.
    pub fn conversations(data: &Dataset, id: DbId) -> Result<Vec<MovieConversation>, CoreError> {
        Self::require(data, id)?;

        let mut items: Vec<MovieConversation> = data
            .conversations_in_movie(id)
            .map(|c| MovieConversation {
                conversation_id: c.id,
                character_1_id: c.character_1_id,
                character_1: data.character_name(c.character_1_id).to_string(),
                character_2_id: c.character_2_id,
                character_2: data.character_name(c.character_2_id).to_string(),
                number_of_lines: c.line_ids.len() as LineCount,
            })
            .collect();
        items.sort_by_key(|c| c.conversation_id);
        Ok(items)
    }

    /// List movies whose title matches `params.name`, sorted and paginated.
    pub fn list(data: &Dataset, params: &MovieListParams, page: Page) -> Vec<MovieListItem> {
        let filter = TextFilter::new(params.name.as_deref());

        let mut items: Vec<MovieListItem> = data
            .movies()
            .filter(|m| filter.matches(&m.title))
            .map(|m| MovieListItem {
                movie_id: m.id,
                movie_title: m.title.clone(),
                year: m.year.clone(),
                imdb_rating: m.imdb_rating,
                imdb_votes: m.imdb_votes,
            })
            .collect();

        items.sort_by(|a, b| compare(params.sort, a, b));
        page.apply(items)
    }
}

fn compare(sort: MovieSort, a: &MovieListItem, b: &MovieListItem) -> Ordering {
    let by_title = || {
        a.movie_title
            .cmp(&b.movie_title)
            .then_with(|| a.movie_id.cmp(&b.movie_id))
    };
    match sort {
        MovieSort::MovieTitle => by_title(),
        MovieSort::Year => a.year.cmp(&b.year).then_with(by_title),
        MovieSort::Rating => b.imdb_rating.total_cmp(&a.imdb_rating).then_with(by_title),
    }
}
