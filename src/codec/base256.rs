use super::Codec;
use crate::Error;

/// First code point of the Braille Patterns block (U+2800..=U+28FF).
const FIRST: u32 = 0x2800;

/// Byte-oriented codec mapping each byte to one symbol of a 256-symbol alphabet.
///
/// The alphabet is the Braille Patterns block, which is contiguous, printable, and free of
/// whitespace or quoting characters. A UUID becomes 16 characters, the densest form in the
/// registry when measured in characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Base256;

impl Codec for Base256 {
    fn encode(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .filter_map(|&e| char::from_u32(FIRST + e as u32))
            .collect()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        text.chars()
            .map(|c| {
                u32::from(c)
                    .checked_sub(FIRST)
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| Error::format(format!("base256 symbol out of range: {c:?}")))
            })
            .collect()
    }
}
