//! Conversion between the two 64-bit halves of a ULID and its 26-character
//! Crockford Base32 text.
//!
//! The 128-bit value is handled as three numeric fields:
//!
//! ```text
//!  bits 127..80        bits 79..40          bits 39..0
//! +------------------+--------------------+--------------------+
//! | time (48 bits)   | random1 (40 bits)  | random2 (40 bits)  |
//! | 10 characters    | 8 characters       | 8 characters       |
//! +------------------+--------------------+--------------------+
//! ```
//!
//! Each field is rendered as unsigned radix-32 digits left-padded with zeros
//! to its fixed width, then transliterated from the numeric alphabet to the
//! Crockford alphabet. Decoding runs the same steps backwards.

use crate::alphabet::{transliterate, CROCKFORD, NUMERIC};
use crate::error::DecodeError;
use crate::options::DecodeOptions;

/// Length of the ULID text form.
pub const ENCODED_LEN: usize = 26;

const TIME_LEN: usize = 10;
const RANDOM_LEN: usize = 8;

const TIME_END: usize = TIME_LEN;
const RANDOM1_END: usize = TIME_END + RANDOM_LEN;

/// Largest millisecond timestamp a ULID can carry.
pub const TIMESTAMP_MAX: u64 = (1 << 48) - 1;

const RANDOM_HALF_MASK: u64 = (1 << 40) - 1;

/// Splits the halves into `(time, random1, random2)`.
const fn split(high: u64, low: u64) -> (u64, u64, u64) {
    let time = high >> 16;
    let random1 = ((high & 0xFFFF) << 24) | (low >> 40);
    let random2 = low & RANDOM_HALF_MASK;
    (time, random1, random2)
}

/// Inverse of [`split`].
const fn join(time: u64, random1: u64, random2: u64) -> (u64, u64) {
    let high = (time << 16) | (random1 >> 24);
    let low = (random1 << 40) | (random2 & RANDOM_HALF_MASK);
    (high, low)
}

/// Writes `value` as radix-32 numeric digits filling all of `out`, most
/// significant digit first. Unused leading positions become `'0'`.
fn write_radix32(mut value: u64, out: &mut [u8]) {
    debug_assert!(out.len() * 5 >= 64 || value >> (out.len() * 5) == 0);
    for slot in out.iter_mut().rev() {
        *slot = NUMERIC.symbol((value & 0x1F) as u8);
        value >>= 5;
    }
}

/// Reads numeric radix-32 digits. `offset` locates `digits` within the full
/// text for error reporting.
fn read_radix32(digits: &[u8], offset: usize) -> Result<u64, DecodeError> {
    digits
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (i, &symbol)| match NUMERIC.digit(symbol) {
            Some(digit) => Ok((acc << 5) | u64::from(digit)),
            None => Err(DecodeError::InvalidCharacter {
                position: offset + i,
                character: char::from(symbol),
            }),
        })
}

/// Encodes the halves into the 26 ASCII bytes of the text form.
#[must_use]
pub fn encode_to_bytes(high: u64, low: u64) -> [u8; ENCODED_LEN] {
    let (time, random1, random2) = split(high, low);

    let mut buf = [b'0'; ENCODED_LEN];
    write_radix32(time, &mut buf[..TIME_END]);
    write_radix32(random1, &mut buf[TIME_END..RANDOM1_END]);
    write_radix32(random2, &mut buf[RANDOM1_END..]);

    let mapped = transliterate(&mut buf, &NUMERIC, &CROCKFORD);
    debug_assert!(mapped.is_ok(), "radix-32 digits are numeric symbols");

    buf
}

/// Encodes a ULID given as its high and low halves.
///
/// Total and deterministic: every 128-bit value has exactly one 26-character
/// uppercase representation.
#[must_use]
pub fn encode(high: u64, low: u64) -> String {
    encode_to_bytes(high, low)
        .iter()
        .map(|&byte| char::from(byte))
        .collect()
}

/// Decodes ULID text into its high and low halves using default options.
pub fn decode(text: &str) -> Result<(u64, u64), DecodeError> {
    decode_with(text, DecodeOptions::default())
}

/// Decodes ULID text into its high and low halves.
///
/// Length is checked first, then every character against the Crockford
/// alphabet under `options.case`, then the timestamp field width.
pub fn decode_with(text: &str, options: DecodeOptions) -> Result<(u64, u64), DecodeError> {
    let buf = validate(text, options).inspect_err(|err| {
        tracing::debug!(error = %err, "rejected ULID text");
    })?;

    let (time, random1, random2) = decode_fields(buf)?;
    if time > TIMESTAMP_MAX {
        tracing::debug!(time, "rejected ULID text with oversized timestamp");
        return Err(DecodeError::Overflow);
    }

    Ok(join(time, random1, random2))
}

/// Checks length and alphabet membership, returning the case-folded bytes.
fn validate(text: &str, options: DecodeOptions) -> Result<[u8; ENCODED_LEN], DecodeError> {
    let actual = text.chars().count();
    if actual != ENCODED_LEN {
        return Err(DecodeError::InvalidLength { actual });
    }

    let mut buf = [0u8; ENCODED_LEN];
    for (position, (slot, character)) in buf.iter_mut().zip(text.chars()).enumerate() {
        *slot = options
            .case
            .fold(character)
            .filter(|&byte| CROCKFORD.contains(byte))
            .ok_or(DecodeError::InvalidCharacter {
                position,
                character,
            })?;
    }
    Ok(buf)
}

/// Maps validated text back to numeric digits and parses each fixed-offset
/// field.
fn decode_fields(mut buf: [u8; ENCODED_LEN]) -> Result<(u64, u64, u64), DecodeError> {
    transliterate(&mut buf, &CROCKFORD, &NUMERIC).map_err(|unknown| {
        DecodeError::InvalidCharacter {
            position: unknown.position,
            character: char::from(unknown.byte),
        }
    })?;

    let time = read_radix32(&buf[..TIME_END], 0)?;
    let random1 = read_radix32(&buf[TIME_END..RANDOM1_END], TIME_END)?;
    let random2 = read_radix32(&buf[RANDOM1_END..], RANDOM1_END)?;
    Ok((time, random1, random2))
}
