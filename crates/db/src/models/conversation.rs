//! Conversation entity model, append DTOs, and response shapes.

use scriptline_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::models::line::Line;

/// A row from `conversations.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "conversation_id")]
    pub id: DbId,
    #[serde(rename = "character1_id")]
    pub character_1_id: DbId,
    #[serde(rename = "character2_id")]
    pub character_2_id: DbId,
    pub movie_id: DbId,
    /// Line ids ordered by position. Derived; not stored in the CSV.
    #[serde(skip)]
    pub line_ids: Vec<DbId>,
}

impl Conversation {
    pub fn involves(&self, character_id: DbId) -> bool {
        self.character_1_id == character_id || self.character_2_id == character_id
    }

    /// The participant that is not `character_id`, if `character_id` takes
    /// part at all.
    pub fn other_participant(&self, character_id: DbId) -> Option<DbId> {
        if self.character_1_id == character_id {
            Some(self.character_2_id)
        } else if self.character_2_id == character_id {
            Some(self.character_1_id)
        } else {
            None
        }
    }
}

/// Body of `POST /movies/{movie_id}/conversations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversation {
    pub character_1_id: DbId,
    pub character_2_id: DbId,
    pub lines: Vec<CreateLine>,
}

/// One submitted line; its position is its index in `lines`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLine {
    pub character_id: DbId,
    pub line_text: String,
}

/// A validated conversation with ids and positions assigned, not yet
/// applied to the dataset.
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub conversation: Conversation,
    pub lines: Vec<Line>,
}

/// Response of a successful append.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationCreated {
    pub conversation_id: DbId,
}

/// `GET /conversations/{conversation_id}/lines`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationLines {
    pub conversation_id: DbId,
    pub movie_id: DbId,
    pub movie_title: String,
    pub lines: Vec<ConversationLine>,
}

/// A line as spoken within its conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationLine {
    pub line_id: DbId,
    pub line_sort: i64,
    pub character_id: DbId,
    pub character: String,
    pub line_text: String,
}
