//! The owned, indexed in-memory copy of the dialogue tables.
//!
//! A [`Dataset`] is built once at startup from the four CSV tables and then
//! shared behind a single writer lock. Besides the id-keyed tables it keeps
//! the indices every query needs:
//!
//! - characters per movie,
//! - conversations per movie and per participant,
//! - lines spoken per `(conversation, character)` pair.
//!
//! The only mutation is [`Dataset::apply`], which adds a conversation that
//! was validated against this same dataset.

use std::collections::{BTreeMap, HashMap};

use scriptline_core::types::{DbId, LineCount};
use serde::Serialize;

use crate::models::character::Character;
use crate::models::conversation::{Conversation, NewConversation};
use crate::models::line::Line;
use crate::models::movie::Movie;

/// Composite key of the line tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeakerKey {
    pub conversation_id: DbId,
    pub character_id: DbId,
}

/// Row counts per table, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub movies: usize,
    pub characters: usize,
    pub conversations: usize,
    pub lines: usize,
}

#[derive(Debug, Default)]
pub struct Dataset {
    movies: BTreeMap<DbId, Movie>,
    characters: BTreeMap<DbId, Character>,
    conversations: BTreeMap<DbId, Conversation>,
    lines: BTreeMap<DbId, Line>,
    characters_by_movie: HashMap<DbId, Vec<DbId>>,
    conversations_by_movie: HashMap<DbId, Vec<DbId>>,
    conversations_by_character: HashMap<DbId, Vec<DbId>>,
    tally: HashMap<SpeakerKey, LineCount>,
    /// Rows left out of the tables at load. They are written back
    /// untouched on every persist and still reserve their ids.
    skipped_conversations: Vec<Conversation>,
    skipped_lines: Vec<Line>,
}

impl Dataset {
    /// Build the tables and indices from raw rows.
    ///
    /// Rows that reference a missing parent are skipped with a warning:
    /// characters of an unknown movie, conversations whose movie or
    /// participants are unknown, and lines of an unknown conversation.
    /// Skipped conversations and lines are retained for
    /// [`Dataset::conversation_rows`] and [`Dataset::line_rows`].
    pub fn from_rows(
        movies: Vec<Movie>,
        characters: Vec<Character>,
        conversations: Vec<Conversation>,
        lines: Vec<Line>,
    ) -> Self {
        let mut data = Self::default();

        for movie in movies {
            data.movies.insert(movie.id, movie);
        }

        for mut character in characters {
            if !data.movies.contains_key(&character.movie_id) {
                tracing::warn!(
                    character_id = character.id,
                    movie_id = character.movie_id,
                    "Skipping character of unknown movie"
                );
                continue;
            }
            character.line_count = 0;
            data.characters_by_movie
                .entry(character.movie_id)
                .or_default()
                .push(character.id);
            data.characters.insert(character.id, character);
        }

        for mut conversation in conversations {
            let known = data.movies.contains_key(&conversation.movie_id)
                && data.characters.contains_key(&conversation.character_1_id)
                && data.characters.contains_key(&conversation.character_2_id);
            if !known {
                tracing::warn!(
                    conversation_id = conversation.id,
                    movie_id = conversation.movie_id,
                    "Skipping conversation with unknown movie or participant"
                );
                data.skipped_conversations.push(conversation);
                continue;
            }
            conversation.line_ids.clear();
            data.index_conversation(&conversation);
            data.conversations.insert(conversation.id, conversation);
        }

        for line in lines {
            if !data.conversations.contains_key(&line.conversation_id) {
                tracing::warn!(
                    line_id = line.id,
                    conversation_id = line.conversation_id,
                    "Skipping line of unknown conversation"
                );
                data.skipped_lines.push(line);
                continue;
            }
            data.index_line(&line);
            data.lines.insert(line.id, line);
        }

        let lines = &data.lines;
        for conversation in data.conversations.values_mut() {
            conversation
                .line_ids
                .sort_by_key(|id| lines.get(id).map(|l| (l.line_sort, l.id)));
        }

        data
    }

    // -- lookups -------------------------------------------------------------

    pub fn movie(&self, id: DbId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn character(&self, id: DbId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn conversation(&self, id: DbId) -> Option<&Conversation> {
        self.conversations.get(&id)
    }

    pub fn line(&self, id: DbId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Title of a movie, or an empty string if it is unknown.
    pub fn movie_title(&self, id: DbId) -> &str {
        self.movie(id).map_or("", |m| m.title.as_str())
    }

    /// Name of a character, or an empty string if it is unknown.
    pub fn character_name(&self, id: DbId) -> &str {
        self.character(id).map_or("", |c| c.name.as_str())
    }

    // -- table scans (ascending id) ------------------------------------------

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn conversations(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.values()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    // -- index lookups -------------------------------------------------------

    pub fn characters_in_movie(&self, movie_id: DbId) -> impl Iterator<Item = &Character> {
        self.characters_by_movie
            .get(&movie_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.characters.get(id))
    }

    pub fn conversations_in_movie(&self, movie_id: DbId) -> impl Iterator<Item = &Conversation> {
        self.conversations_by_movie
            .get(&movie_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.conversations.get(id))
    }

    /// Conversations in which `character_id` is either participant.
    pub fn conversations_of(&self, character_id: DbId) -> impl Iterator<Item = &Conversation> {
        self.conversations_by_character
            .get(&character_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.conversations.get(id))
    }

    /// Lines of a conversation in the order spoken.
    pub fn lines_of<'a>(
        &'a self,
        conversation: &'a Conversation,
    ) -> impl Iterator<Item = &'a Line> + 'a {
        conversation
            .line_ids
            .iter()
            .filter_map(|id| self.lines.get(id))
    }

    /// Number of lines `character_id` speaks in `conversation_id`.
    pub fn lines_spoken(&self, conversation_id: DbId, character_id: DbId) -> LineCount {
        self.tally
            .get(&SpeakerKey {
                conversation_id,
                character_id,
            })
            .copied()
            .unwrap_or(0)
    }

    /// Highest conversation id in use, counting skipped rows and the
    /// conversation ids that skipped lines point at.
    pub fn max_conversation_id(&self) -> Option<DbId> {
        let kept = self.conversations.last_key_value().map(|(id, _)| *id);
        let skipped = self
            .skipped_conversations
            .iter()
            .map(|c| c.id)
            .chain(self.skipped_lines.iter().map(|l| l.conversation_id))
            .max();
        kept.max(skipped)
    }

    /// Highest line id in use, counting skipped rows.
    pub fn max_line_id(&self) -> Option<DbId> {
        let kept = self.lines.last_key_value().map(|(id, _)| *id);
        kept.max(self.skipped_lines.iter().map(|l| l.id).max())
    }

    /// Every conversation row as stored, kept and skipped, in id order.
    pub fn conversation_rows(&self) -> Vec<&Conversation> {
        let mut rows: Vec<&Conversation> = self
            .conversations
            .values()
            .chain(&self.skipped_conversations)
            .collect();
        rows.sort_by_key(|c| c.id);
        rows
    }

    /// Every line row as stored, kept and skipped, in id order.
    pub fn line_rows(&self) -> Vec<&Line> {
        let mut rows: Vec<&Line> = self.lines.values().chain(&self.skipped_lines).collect();
        rows.sort_by_key(|l| l.id);
        rows
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            movies: self.movies.len(),
            characters: self.characters.len(),
            conversations: self.conversations.len(),
            lines: self.lines.len(),
        }
    }

    // -- mutation ------------------------------------------------------------

    /// Add a validated conversation and its lines.
    ///
    /// `pending` must come from `ConversationRepo::prepare` against this
    /// dataset with no other `apply` in between; ids are not rechecked.
    pub fn apply(&mut self, pending: NewConversation) {
        let NewConversation {
            mut conversation,
            lines,
        } = pending;

        conversation.line_ids = lines.iter().map(|l| l.id).collect();
        self.index_conversation(&conversation);
        self.conversations.insert(conversation.id, conversation);

        for line in lines {
            self.index_line(&line);
            self.lines.insert(line.id, line);
        }
    }

    fn index_conversation(&mut self, conversation: &Conversation) {
        self.conversations_by_movie
            .entry(conversation.movie_id)
            .or_default()
            .push(conversation.id);

        self.conversations_by_character
            .entry(conversation.character_1_id)
            .or_default()
            .push(conversation.id);
        if conversation.character_2_id != conversation.character_1_id {
            self.conversations_by_character
                .entry(conversation.character_2_id)
                .or_default()
                .push(conversation.id);
        }
    }

    /// Count a line towards its speaker. The owning conversation must
    /// already be in the table.
    fn index_line(&mut self, line: &Line) {
        *self
            .tally
            .entry(SpeakerKey {
                conversation_id: line.conversation_id,
                character_id: line.character_id,
            })
            .or_default() += 1;

        if let Some(character) = self.characters.get_mut(&line.character_id) {
            character.line_count += 1;
        }

        if let Some(conversation) = self.conversations.get_mut(&line.conversation_id) {
            if !conversation.line_ids.contains(&line.id) {
                conversation.line_ids.push(line.id);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn indices_are_built_from_rows() {
        let data = sample();
        assert_eq!(
            data.counts(),
            TableCounts {
                movies: 3,
                characters: 6,
                conversations: 5,
                lines: 10,
            }
        );
        assert_eq!(data.conversations_of(1).count(), 3);
        assert_eq!(data.conversations_in_movie(2).count(), 1);
        assert_eq!(data.characters_in_movie(1).count(), 4);
    }

    #[test]
    fn line_counts_are_derived() {
        let data = sample();
        assert_eq!(data.character(1).map(|c| c.line_count), Some(3));
        assert_eq!(data.character(3).map(|c| c.line_count), Some(3));
        assert_eq!(data.character(4).map(|c| c.line_count), Some(0));
        assert_eq!(data.lines_spoken(101, 3), 3);
        assert_eq!(data.lines_spoken(101, 1), 1);
        assert_eq!(data.lines_spoken(103, 4), 0);
    }

    #[test]
    fn conversation_lines_follow_position() {
        let data = sample();
        let conversation = data.conversation(101).cloned().unwrap();
        assert_eq!(conversation.line_ids, vec![1003, 1004, 1005, 1006]);
    }

    #[test]
    fn orphan_rows_are_skipped() {
        let data = Dataset::from_rows(
            vec![movie(1, "Alien", "1979", 8.5)],
            vec![character(1, "RIPLEY", 1), character(2, "GHOST", 9)],
            vec![conversation(100, 1, 2, 1)],
            vec![line(1000, 1, 1, 100, 1)],
        );
        assert!(data.character(2).is_none());
        assert!(data.conversation(100).is_none());
        assert!(data.line(1000).is_none());
        assert_eq!(data.counts().conversations, 0);
    }

    #[test]
    fn skipped_rows_are_retained_and_reserve_ids() {
        let data = Dataset::from_rows(
            vec![movie(1, "Alien", "1979", 8.5)],
            vec![character(1, "RIPLEY", 1), character(2, "DALLAS", 1)],
            vec![conversation(10, 1, 2, 1), conversation(50, 1, 9, 1)],
            vec![
                line(100, 1, 1, 10, 1),
                line(500, 1, 1, 50, 1),
                line(120, 2, 1, 77, 1),
            ],
        );

        let conversation_ids: Vec<DbId> = data.conversation_rows().iter().map(|c| c.id).collect();
        assert_eq!(conversation_ids, vec![10, 50]);
        let line_ids: Vec<DbId> = data.line_rows().iter().map(|l| l.id).collect();
        assert_eq!(line_ids, vec![100, 120, 500]);

        // Line 120 points at conversation 77, which must not be handed out.
        assert_eq!(data.max_conversation_id(), Some(77));
        assert_eq!(data.max_line_id(), Some(500));
    }

    #[test]
    fn max_ids_track_tables() {
        let data = sample();
        assert_eq!(data.max_conversation_id(), Some(200));
        assert_eq!(data.max_line_id(), Some(2001));
        assert_eq!(Dataset::default().max_line_id(), None);
    }

    #[test]
    fn apply_updates_tables_and_indices() {
        let mut data = sample();
        let pending = NewConversation {
            conversation: conversation(201, 10, 11, 2),
            lines: vec![line(2002, 11, 2, 201, 1), line(2003, 11, 2, 201, 2)],
        };

        data.apply(pending);

        assert_eq!(
            data.conversation(201).map(|c| c.line_ids.clone()),
            Some(vec![2002, 2003])
        );
        assert_eq!(data.character(11).map(|c| c.line_count), Some(3));
        assert_eq!(data.character(10).map(|c| c.line_count), Some(1));
        assert_eq!(data.lines_spoken(201, 11), 2);
        assert_eq!(data.conversations_of(10).count(), 2);
        assert_eq!(data.max_line_id(), Some(2003));
    }
}
