//! The ULID value type.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use uuid::Uuid;

use crate::codec::{self, TIMESTAMP_MAX};
use crate::error::DecodeError;
use crate::generator;
use crate::options::DecodeOptions;

const RANDOM_BITS: u32 = 80;

/// Mask of the 80-bit randomness field.
pub const RANDOM_MAX: u128 = (1 << RANDOM_BITS) - 1;

/// A 128-bit ULID held as two 64-bit halves.
///
/// `high` carries bits 127..64 and `low` bits 63..0, matching the most and
/// least significant halves of a UUID. Field order makes the derived `Ord`
/// agree with numeric order, which is also the order of the text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ulid {
    high: u64,
    low: u64,
}

impl Ulid {
    /// The all-zero ULID.
    pub const NIL: Self = Self::from_halves(0, 0);

    /// The largest ULID, `7ZZZZZZZZZZZZZZZZZZZZZZZZZ`.
    pub const MAX: Self = Self::from_halves(u64::MAX, u64::MAX);

    /// Generates a fresh ULID from the process-wide monotonic generator.
    #[must_use]
    pub fn new() -> Self {
        generator::global().generate()
    }

    /// Wraps a 128-bit value given as its two halves.
    #[must_use]
    pub const fn from_halves(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Returns the `(high, low)` halves.
    #[must_use]
    pub const fn to_halves(&self) -> (u64, u64) {
        (self.high, self.low)
    }

    /// Builds a ULID from a millisecond timestamp and randomness.
    ///
    /// The timestamp is truncated to 48 bits and the randomness to 80 bits.
    #[must_use]
    pub const fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        let timestamp = (timestamp_ms & TIMESTAMP_MAX) as u128;
        Self::from_u128((timestamp << RANDOM_BITS) | (random & RANDOM_MAX))
    }

    const fn from_u128(value: u128) -> Self {
        Self::from_halves((value >> 64) as u64, value as u64)
    }

    const fn to_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    /// Returns the timestamp field in milliseconds since the UNIX epoch.
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        self.high >> 16
    }

    /// Returns the 80-bit randomness field.
    #[must_use]
    pub const fn random(&self) -> u128 {
        self.to_u128() & RANDOM_MAX
    }

    /// Returns the timestamp as a [`SystemTime`].
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(self.timestamp_ms())
    }

    /// Returns true if this is [`Ulid::NIL`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Parses the 26-character text form. Lowercase letters are accepted.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        Self::parse_with(text, DecodeOptions::default())
    }

    /// Parses the 26-character text form with explicit options.
    pub fn parse_with(text: &str, options: DecodeOptions) -> Result<Self, DecodeError> {
        let (high, low) = codec::decode_with(text, options)?;
        Ok(Self::from_halves(high, low))
    }

    /// Formats the 26-character uppercase text form.
    #[must_use]
    pub fn format(&self) -> String {
        codec::encode(self.high, self.low)
    }

    /// Returns the UUID with the same 128 bits.
    #[must_use]
    pub const fn to_uuid(&self) -> Uuid {
        Uuid::from_u64_pair(self.high, self.low)
    }

    /// Returns the value incremented by one, or `None` at [`Ulid::MAX`].
    ///
    /// Overflow of the randomness field carries into the timestamp.
    #[must_use]
    pub const fn increment(&self) -> Option<Self> {
        match self.to_u128().checked_add(1) {
            Some(value) => Some(Self::from_u128(value)),
            None => None,
        }
    }
}

impl Default for Ulid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = codec::encode_to_bytes(self.high, self.low);
        let text = std::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

impl FromStr for Ulid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for Ulid {
    fn from(uuid: Uuid) -> Self {
        let (high, low) = uuid.as_u64_pair();
        Self::from_halves(high, low)
    }
}

impl From<Ulid> for Uuid {
    fn from(ulid: Ulid) -> Self {
        ulid.to_uuid()
    }
}

impl From<u128> for Ulid {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Ulid> for u128 {
    fn from(ulid: Ulid) -> Self {
        ulid.to_u128()
    }
}

impl From<(u64, u64)> for Ulid {
    fn from((high, low): (u64, u64)) -> Self {
        Self::from_halves(high, low)
    }
}

impl serde::Serialize for Ulid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let buf = codec::encode_to_bytes(self.high, self.low);
        let text = std::str::from_utf8(&buf).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(text)
    }
}

impl<'de> serde::Deserialize<'de> for Ulid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
