//! Base32 symbol tables and character transliteration.
//!
//! Two parallel 32-symbol alphabets are used by the codec:
//!
//! - [`NUMERIC`]: the generic radix-32 digits `0-9a-v`, used when rendering
//!   or reading an unsigned integer one 5-bit digit at a time.
//! - [`CROCKFORD`]: the public ULID alphabet, which drops `I`, `L`, `O` and
//!   `U` to avoid visually ambiguous characters.
//!
//! The symbol at index `i` in one alphabet corresponds to the symbol at index
//! `i` in the other, so converting between them is a per-character table
//! lookup rather than a numeric re-encoding.

/// Marker stored in the inverse table for bytes outside the alphabet.
const ABSENT: u8 = 0xFF;

/// A 32-symbol alphabet with an O(1) inverse lookup.
#[derive(Debug)]
pub struct Alphabet {
    symbols: [u8; 32],
    indices: [u8; 256],
}

impl Alphabet {
    /// Builds an alphabet from 32 distinct ASCII symbols.
    pub const fn new(symbols: &[u8; 32]) -> Self {
        let mut indices = [ABSENT; 256];
        let mut i = 0;
        while i < symbols.len() {
            indices[symbols[i] as usize] = i as u8;
            i += 1;
        }

        Self {
            symbols: *symbols,
            indices,
        }
    }

    /// Returns the symbol for a 5-bit digit. Higher bits are ignored.
    #[must_use]
    pub const fn symbol(&self, digit: u8) -> u8 {
        self.symbols[(digit & 0x1F) as usize]
    }

    /// Returns the digit value of `symbol`, if it belongs to this alphabet.
    #[must_use]
    pub const fn digit(&self, symbol: u8) -> Option<u8> {
        match self.indices[symbol as usize] {
            ABSENT => None,
            digit => Some(digit),
        }
    }

    /// Returns true if `symbol` belongs to this alphabet.
    #[must_use]
    pub const fn contains(&self, symbol: u8) -> bool {
        self.indices[symbol as usize] != ABSENT
    }

    /// The 32 symbols in digit order.
    #[must_use]
    pub const fn symbols(&self) -> &[u8; 32] {
        &self.symbols
    }
}

/// Generic radix-32 digits, as produced by unsigned base-32 integer rendering.
pub static NUMERIC: Alphabet = Alphabet::new(b"0123456789abcdefghijklmnopqrstuv");

/// Crockford's Base32 alphabet, used for the ULID text form.
pub static CROCKFORD: Alphabet = Alphabet::new(b"0123456789ABCDEFGHJKMNPQRSTVWXYZ");

/// A byte that was not found in the source alphabet during transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSymbol {
    /// Offset of the byte within the transliterated slice.
    pub position: usize,
    /// The offending byte.
    pub byte: u8,
}

/// Replaces every byte of `buf` in place with the symbol of `to` at the same
/// index the byte occupies in `from`.
///
/// The mapping is direction-agnostic: encoding passes `(NUMERIC, CROCKFORD)`
/// and decoding passes `(CROCKFORD, NUMERIC)`. On error the contents of `buf`
/// are unspecified.
pub fn transliterate(
    buf: &mut [u8],
    from: &Alphabet,
    to: &Alphabet,
) -> Result<(), UnknownSymbol> {
    for (position, byte) in buf.iter_mut().enumerate() {
        let digit = from.digit(*byte).ok_or(UnknownSymbol {
            position,
            byte: *byte,
        })?;
        *byte = to.symbol(digit);
    }
    Ok(())
}
