//! Decode configuration.
//!
//! Encoding has no knobs: output is always uppercase Crockford. Decoding can
//! be told how to treat lowercase input. Options deserialize with serde so a
//! host service can carry them in its own configuration file.

use serde::{Deserialize, Serialize};

/// How decode treats ASCII letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasePolicy {
    /// Fold lowercase letters to uppercase before alphabet lookup.
    #[default]
    Insensitive,
    /// Accept only the uppercase Crockford symbols.
    Strict,
}

impl CasePolicy {
    /// Maps an input character to the byte looked up in the Crockford table.
    ///
    /// Returns `None` for non-ASCII characters, which can never be symbols.
    pub(crate) fn fold(self, character: char) -> Option<u8> {
        let byte = u8::try_from(character).ok().filter(u8::is_ascii)?;
        match self {
            CasePolicy::Insensitive => Some(byte.to_ascii_uppercase()),
            CasePolicy::Strict => Some(byte),
        }
    }
}

/// Options for [`decode_with`](crate::decode_with) and
/// [`Ulid::parse_with`](crate::Ulid::parse_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Letter case handling.
    pub case: CasePolicy,
}

impl DecodeOptions {
    /// Options that reject lowercase input.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            case: CasePolicy::Strict,
        }
    }

    /// Returns a copy with the given case policy.
    #[must_use]
    pub const fn with_case(mut self, case: CasePolicy) -> Self {
        self.case = case;
        self
    }
}
