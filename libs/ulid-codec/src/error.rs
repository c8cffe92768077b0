//! Error types for ULID decoding and typed ID parsing.

use thiserror::Error;

/// Errors that can occur when decoding ULID text.
///
/// Every check runs against the input before any arithmetic, so a decode
/// either yields a complete identifier or one of these errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not exactly 26 characters long.
    #[error("invalid ULID length: expected 26 characters, got {actual}")]
    InvalidLength { actual: usize },

    /// The input contains a character outside the Crockford alphabet.
    #[error("invalid ULID character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// The timestamp field does not fit in 48 bits.
    #[error("ULID timestamp overflows 48 bits")]
    Overflow,
}

impl DecodeError {
    /// Returns true if this error indicates a length mismatch.
    pub fn is_length_error(&self) -> bool {
        matches!(self, DecodeError::InvalidLength { .. })
    }

    /// Returns true if this error indicates a character outside the alphabet.
    pub fn is_character_error(&self) -> bool {
        matches!(self, DecodeError::InvalidCharacter { .. })
    }
}

/// Errors that can occur when parsing prefixed IDs built with
/// [`define_id!`](crate::define_id).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ID has the wrong prefix for its type.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The ULID portion of the ID failed to decode.
    #[error("invalid ULID: {0}")]
    InvalidUlid(#[from] DecodeError),
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::InvalidPrefix { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(
            DecodeError::InvalidLength { actual: 25 }.to_string(),
            "invalid ULID length: expected 26 characters, got 25"
        );
        assert_eq!(
            DecodeError::InvalidCharacter {
                position: 3,
                character: 'U'
            }
            .to_string(),
            "invalid ULID character 'U' at position 3"
        );
    }

    #[test]
    fn test_decode_error_predicates() {
        assert!(DecodeError::InvalidLength { actual: 0 }.is_length_error());
        assert!(!DecodeError::Overflow.is_length_error());
        assert!(DecodeError::InvalidCharacter {
            position: 0,
            character: 'L'
        }
        .is_character_error());
    }

    #[test]
    fn test_id_error_wraps_decode_error() {
        let err: IdError = DecodeError::Overflow.into();
        assert_eq!(err.to_string(), "invalid ULID: ULID timestamp overflows 48 bits");
        assert!(!err.is_prefix_error());
    }
}
