//! # ulid-codec
//!
//! ULID values and their 26-character Crockford Base32 text form.
//!
//! ## Layout
//!
//! A ULID is a 128-bit value: a 48-bit millisecond timestamp followed by 80
//! bits of randomness. It is held as two `u64` halves laid out like a UUID
//! (`high` = most significant bits, `low` = least significant bits), and
//! written as 26 characters from `0123456789ABCDEFGHJKMNPQRSTVWXYZ`:
//!
//! ```text
//! 01ARZ3NDEK TSV4RRFFQ69G5FAV
//! |--------| |--------------|
//!  timestamp    randomness
//!  10 chars      16 chars
//! ```
//!
//! ## Guarantees
//!
//! - Encoding is total: every 128-bit value has exactly one text form.
//! - Decoding either returns the exact value or a [`DecodeError`]; it never
//!   returns a value derived from malformed input.
//! - Text order matches numeric order, so the first 10 characters sort by
//!   timestamp.
//! - Decoding accepts lowercase by default; see [`DecodeOptions`].
//!
//! ```
//! use ulid_codec::Ulid;
//!
//! let ulid = Ulid::from_halves(0x0156_3E3A_B5D3_D676, 0x4C61_EFB9_9302_BD5B);
//! assert_eq!(ulid.to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
//!
//! let parsed: Ulid = "01ARZ3NDEKTSV4RRFFQ69G5FAV".parse()?;
//! assert_eq!(parsed.to_halves(), ulid.to_halves());
//! # Ok::<(), ulid_codec::DecodeError>(())
//! ```

pub mod alphabet;
mod codec;
mod error;
pub mod generator;
mod macros;
mod options;
mod ulid;

pub use codec::{decode, decode_with, encode, encode_to_bytes, ENCODED_LEN, TIMESTAMP_MAX};
pub use error::{DecodeError, IdError};
pub use generator::Generator;
pub use options::{CasePolicy, DecodeOptions};
pub use crate::ulid::{Ulid, RANDOM_MAX};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
