use super::Codec;
use crate::Error;

/// Hexadecimal codec: two digits per byte.
///
/// The output case is configurable; decoding accepts either case and requires an even number of
/// hexadecimal digits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Base16 {
    uppercase: bool,
}

impl Base16 {
    /// Emits `0-9a-f`.
    pub const LOWER: Self = Self { uppercase: false };

    /// Emits `0-9A-F`.
    pub const UPPER: Self = Self { uppercase: true };

    /// Returns true if this instance emits uppercase digits.
    pub const fn is_uppercase(&self) -> bool {
        self.uppercase
    }
}

impl Codec for Base16 {
    fn encode(&self, bytes: &[u8]) -> String {
        if self.uppercase {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        hex::decode(text).map_err(|err| Error::format(format!("base16: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{Base16, Codec};

    /// Encodes in the configured case and decodes either case
    #[test]
    fn encodes_in_the_configured_case_and_decodes_either_case() {
        assert_eq!(Base16::LOWER.encode(&[0x00, 0xff]), "00ff");
        assert_eq!(Base16::UPPER.encode(&[0x00, 0xff]), "00FF");
        assert_eq!(Base16::LOWER.decode("00FF"), Ok(vec![0x00, 0xff]));
        assert_eq!(Base16::UPPER.decode("0aFf"), Ok(vec![0x0a, 0xff]));
        assert_eq!(Base16::LOWER.decode(""), Ok(vec![]));
    }

    /// Rejects odd lengths and non-hex characters
    #[test]
    fn rejects_odd_lengths_and_non_hex_characters() {
        for e in ["0", "abc", "0g", "zz", "-1", "00 f"] {
            assert!(Base16::LOWER.decode(e).is_err(), "{e}");
        }
    }
}
