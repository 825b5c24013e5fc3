//! Validation and id assignment rules for appending a conversation.
//!
//! These checks run against values the caller has already looked up, so
//! they never touch the dataset. Every check here must pass before the
//! caller mutates anything.

use crate::error::CoreError;
use crate::types::DbId;

/// Validate that the two participants of a conversation differ.
pub fn validate_distinct_participants(
    character_1_id: DbId,
    character_2_id: DbId,
) -> Result<(), CoreError> {
    if character_1_id == character_2_id {
        return Err(CoreError::Validation(format!(
            "A conversation needs two different characters, got {character_1_id} twice"
        )));
    }
    Ok(())
}

/// Validate that a participant exists and belongs to the target movie.
///
/// `owner_movie_id` is the movie of the character with `character_id`, or
/// `None` if no such character exists.
pub fn validate_membership(
    character_id: DbId,
    owner_movie_id: Option<DbId>,
    movie_id: DbId,
) -> Result<(), CoreError> {
    match owner_movie_id {
        None => Err(CoreError::Validation(format!(
            "Character {character_id} does not exist"
        ))),
        Some(owner) if owner != movie_id => Err(CoreError::Validation(format!(
            "Character {character_id} belongs to movie {owner}, not movie {movie_id}"
        ))),
        Some(_) => Ok(()),
    }
}

/// Validate that there is at least one line and that every line is spoken
/// by one of the two participants.
pub fn validate_speakers(
    speakers: &[DbId],
    character_1_id: DbId,
    character_2_id: DbId,
) -> Result<(), CoreError> {
    if speakers.is_empty() {
        return Err(CoreError::Validation(
            "A conversation must contain at least one line".to_string(),
        ));
    }
    for (index, &speaker) in speakers.iter().enumerate() {
        if speaker != character_1_id && speaker != character_2_id {
            return Err(CoreError::Validation(format!(
                "Line {} is spoken by character {speaker}, who is not part of the conversation",
                index + 1
            )));
        }
    }
    Ok(())
}

/// Next id after the current maximum; `1` for an empty table.
pub fn next_id(current_max: Option<DbId>) -> DbId {
    current_max.map_or(1, |max| max + 1)
}

/// 1-based position of the line at `index` in submission order.
pub fn line_position(index: usize) -> i64 {
    index as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn same_character_twice_is_rejected() {
        assert_matches!(
            validate_distinct_participants(10, 10),
            Err(CoreError::Validation(_))
        );
        assert!(validate_distinct_participants(10, 20).is_ok());
    }

    #[test]
    fn unknown_character_is_rejected() {
        let err = validate_membership(42, None, 5).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("42"));
    }

    #[test]
    fn character_from_other_movie_is_rejected() {
        assert_matches!(
            validate_membership(42, Some(6), 5),
            Err(CoreError::Validation(_))
        );
        assert!(validate_membership(42, Some(5), 5).is_ok());
    }

    #[test]
    fn empty_line_list_is_rejected() {
        assert_matches!(validate_speakers(&[], 1, 2), Err(CoreError::Validation(_)));
    }

    #[test]
    fn outside_speaker_is_rejected() {
        let err = validate_speakers(&[1, 2, 3], 1, 2).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Line 3"));
        assert!(validate_speakers(&[1, 2, 2, 1], 1, 2).is_ok());
    }

    #[test]
    fn ids_continue_from_maximum() {
        assert_eq!(next_id(Some(99)), 100);
        assert_eq!(next_id(None), 1);
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(line_position(0), 1);
        assert_eq!(line_position(2), 3);
    }
}
