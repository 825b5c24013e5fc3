//! Repository layer.
//!
//! Each repository is a zero-sized struct providing query methods that
//! accept `&Dataset` as the first argument. Lookups by id return
//! `Option`; detail views return [`CoreError::NotFound`] for unknown ids.
//!
//! [`CoreError::NotFound`]: scriptline_core::error::CoreError::NotFound

pub mod character_repo;
pub mod conversation_repo;
pub mod line_repo;
pub mod movie_repo;

pub use character_repo::CharacterRepo;
pub use conversation_repo::ConversationRepo;
pub use line_repo::LineRepo;
pub use movie_repo::MovieRepo;
