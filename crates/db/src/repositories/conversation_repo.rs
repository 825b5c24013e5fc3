//! Queries over the `conversations` table and the append path.
//!
//! Appending is split in two so that nothing is mutated before every check
//! has passed: [`ConversationRepo::prepare`] validates the request and
//! assigns ids against a shared borrow of the dataset, the caller persists
//! the result, and only then is it handed to [`Dataset::apply`].

use scriptline_core::dialogue;
use scriptline_core::error::CoreError;
use scriptline_core::types::DbId;

use crate::dataset::Dataset;
use crate::models::conversation::{
    Conversation, ConversationLine, ConversationLines, CreateConversation, NewConversation,
};
use crate::models::line::Line;

/// Provides lookup and append preparation for conversations.
pub struct ConversationRepo;

impl ConversationRepo {
    /// Find a conversation by id.
    pub fn find_by_id(data: &Dataset, id: DbId) -> Option<&Conversation> {
        data.conversation(id)
    }

    /// All lines of a conversation in the order spoken, with speaker names.
    pub fn lines(data: &Dataset, id: DbId) -> Result<ConversationLines, CoreError> {
        let conversation = Self::find_by_id(data, id).ok_or(CoreError::NotFound {
            entity: "Conversation",
            id,
        })?;

        let lines = data
            .lines_of(conversation)
            .map(|l| ConversationLine {
                line_id: l.id,
                line_sort: l.line_sort,
                character_id: l.character_id,
                character: data.character_name(l.character_id).to_string(),
                line_text: l.line_text.clone(),
            })
            .collect();

        Ok(ConversationLines {
            conversation_id: conversation.id,
            movie_id: conversation.movie_id,
            movie_title: data.movie_title(conversation.movie_id).to_string(),
            lines,
        })
    }

    /// Validate a new conversation for `movie_id` and assign its ids.
    ///
    /// - The movie must exist (`NotFound` otherwise).
    /// - Both characters must exist, belong to the movie, and differ.
    /// - There must be at least one line, each spoken by a participant.
    ///
    /// The conversation id and the line ids continue from the current
    /// maxima; line positions follow submission order starting at 1.
    pub fn prepare(
        data: &Dataset,
        movie_id: DbId,
        input: &CreateConversation,
    ) -> Result<NewConversation, CoreError> {
        if data.movie(movie_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: movie_id,
            });
        }

        let (c1, c2) = (input.character_1_id, input.character_2_id);
        dialogue::validate_distinct_participants(c1, c2)?;
        for character_id in [c1, c2] {
            let owner = data.character(character_id).map(|c| c.movie_id);
            dialogue::validate_membership(character_id, owner, movie_id)?;
        }
        let speakers: Vec<DbId> = input.lines.iter().map(|l| l.character_id).collect();
        dialogue::validate_speakers(&speakers, c1, c2)?;

        let conversation_id = dialogue::next_id(data.max_conversation_id());
        let first_line_id = dialogue::next_id(data.max_line_id());

        let lines: Vec<Line> = input
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| Line {
                id: first_line_id + index as DbId,
                character_id: line.character_id,
                movie_id,
                conversation_id,
                line_sort: dialogue::line_position(index),
                line_text: line.line_text.clone(),
            })
            .collect();

        let conversation = Conversation {
            id: conversation_id,
            character_1_id: c1,
            character_2_id: c2,
            movie_id,
            line_ids: lines.iter().map(|l| l.id).collect(),
        };

        Ok(NewConversation {
            conversation,
            lines,
        })
    }
}
