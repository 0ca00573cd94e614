//! Defines the [`State`] struct, the 16-byte working buffer transformed by each round.
//! States are built from text, from raw bytes, or randomly.

use std::ffi::OsStr;
use std::fmt;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::simple_aes::core::constants::BLOCK_SIZE;
use crate::simple_aes::error::{Error, Result};

/// Transposes a 4x4 byte grid: `out[4 * i + j] = input[4 * j + i]`.
/// Converts row-major input into the column-major working layout, and back again.
#[inline(always)]
pub fn to_column_major(input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..4 {
        for j in 0..4 {
            out[4 * i + j] = input[4 * j + i];
        }
    }
    out
}

/// A 16-byte state arranged as a 4x4 matrix. Row `r` occupies bytes `4r..4r + 4`.
///
/// Input is ingested once through [`to_column_major`]; every round then produces a new
/// `State` from the previous one.
///
/// ## Examples
/// ```
/// # fn main() -> simpleaes::Result<()> {
/// use simpleaes::State;
///
/// let state = State::from_text("abcdefghijklmnop")?;
/// // first row holds the first byte of every 4-byte group
/// assert_eq!(state.row(0), *b"aeim");
/// assert_eq!(state.column(0), *b"abcd");
///
/// // anything that is not exactly 16 bytes is rejected
/// assert!(State::from_text("too short").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct State {
    bytes: [u8; BLOCK_SIZE],
}

impl State {
    /// Builds a state from row-major input bytes (the text byte order).
    /// Returns `InvalidStateLength` unless the slice is exactly 16 bytes long.
    pub fn try_from_slice(input: &[u8]) -> Result<Self> {
        let row_major: &[u8; BLOCK_SIZE] = input
            .try_into()
            .map_err(|_| Error::InvalidStateLength { len: input.len() })?;
        tracing::debug!(len = input.len(), "ingesting state");
        Ok(Self::from_row_major(row_major))
    }

    /// Builds a state from the UTF-8 encoding of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::try_from_slice(text.as_bytes())
    }

    /// Builds a state from an OS string, which must be valid UTF-8.
    pub fn try_from_os_str(text: &OsStr) -> Result<Self> {
        let text = text.to_str().ok_or_else(|| Error::InvalidEncoding {
            lossy: text.to_string_lossy().into_owned(),
        })?;
        Self::from_text(text)
    }

    /// Converts row-major bytes into the working layout.
    pub fn from_row_major(bytes: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            bytes: to_column_major(bytes),
        }
    }

    /// Generates a random state. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut bytes = [0u8; BLOCK_SIZE];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Internal bytes in working layout.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.bytes
    }

    pub fn into_bytes(self) -> [u8; BLOCK_SIZE] {
        self.bytes
    }

    /// Row `r` of the matrix. Panics if `r >= 4`.
    pub fn row(&self, r: usize) -> [u8; 4] {
        [
            self.bytes[4 * r],
            self.bytes[4 * r + 1],
            self.bytes[4 * r + 2],
            self.bytes[4 * r + 3],
        ]
    }

    /// Column `c` of the matrix. Panics if `c >= 4`.
    pub fn column(&self, c: usize) -> [u8; 4] {
        [
            self.bytes[c],
            self.bytes[4 + c],
            self.bytes[8 + c],
            self.bytes[12 + c],
        ]
    }

    /// Hex line walking the matrix column by column, which recovers the input byte order.
    /// Each byte is followed by a space.
    pub fn column_hex(&self) -> String {
        let mut out = String::with_capacity(3 * BLOCK_SIZE);
        for c in 0..4 {
            for b in self.column(c) {
                out.push_str(&format!("{b:02X} "));
            }
        }
        out
    }
}

impl From<[u8; BLOCK_SIZE]> for State {
    /// Wraps bytes that are already in working layout.
    fn from(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self { bytes }
    }
}

impl From<State> for [u8; BLOCK_SIZE] {
    fn from(state: State) -> Self {
        state.bytes
    }
}

/// Four lines of four uppercase hex bytes, each byte followed by a space.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..4 {
            for b in self.row(r) {
                write!(f, "{b:02X} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_to_column_major() {
        let input: [u8; 16] = std::array::from_fn(|i| i as u8);
        let expected: [u8; 16] = [
            0, 4, 8, 12, //
            1, 5, 9, 13, //
            2, 6, 10, 14, //
            3, 7, 11, 15, //
        ];
        assert_eq!(to_column_major(&input), expected);
    }

    #[test]
    fn test_to_column_major_involution() {
        let mut rng = rand::rng();
        for _ in 0..256 {
            let mut input = [0u8; 16];
            rng.fill(&mut input);
            assert_eq!(to_column_major(&to_column_major(&input)), input);
        }
    }

    #[test]
    fn test_from_text() -> Result<()> {
        let state = State::from_text("abcdefghijklmnop")?;
        assert_eq!(state.as_bytes(), b"aeimbfjncgkodhlp");
        assert_eq!(state.row(3), *b"dhlp");
        assert_eq!(state.column(2), *b"ijkl");
        Ok(())
    }

    #[test]
    fn test_invalid_length() {
        for text in ["", "abc", "abcdefghijklmno", "abcdefghijklmnopq"] {
            match State::from_text(text) {
                Err(Error::InvalidStateLength { len }) => assert_eq!(len, text.len()),
                other => panic!("expected InvalidStateLength for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_multibyte_length_counts_bytes() -> Result<()> {
        // 15 characters but 16 bytes
        let text = "é".to_string() + "abcdefghijklmn";
        assert_eq!(text.chars().count(), 15);
        let state = State::from_text(&text)?;
        assert_eq!(state.column(0), [0xc3, 0xa9, b'a', b'b']);

        // 16 characters but 17 bytes
        let text = "é".to_string() + "abcdefghijklmno";
        assert!(matches!(
            State::from_text(&text),
            Err(Error::InvalidStateLength { len: 17 })
        ));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_encoding() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"abcdefghijklmno\xff");
        assert!(matches!(
            State::try_from_os_str(raw),
            Err(Error::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_column_hex_restores_input_order() -> Result<()> {
        let state = State::from_text("abcdefghijklmnop")?;
        assert_eq!(
            state.column_hex(),
            "61 62 63 64 65 66 67 68 69 6A 6B 6C 6D 6E 6F 70 "
        );
        Ok(())
    }

    #[test]
    fn test_display() {
        let state = State::from([
            0x00, 0x01, 0x02, 0x03, //
            0x0a, 0x0b, 0x0c, 0x0d, //
            0xa0, 0xb0, 0xc0, 0xd0, //
            0xfa, 0xfb, 0xfc, 0xff, //
        ]);
        assert_eq!(
            state.to_string(),
            "00 01 02 03 \n0A 0B 0C 0D \nA0 B0 C0 D0 \nFA FB FC FF \n"
        );
    }

    #[test]
    fn test_random() -> Result<()> {
        let a = State::random()?;
        let b = State::random()?;
        // 2^-128 chance of a false failure
        assert_ne!(a, b);
        Ok(())
    }
}
