//! Binary-to-text codecs and the closed registry that names them.
//!
//! Every codec is a stateless strategy implementing [`Codec`]. Callers that select a codec by
//! name go through [`BaseType`], which maps a fixed set of identifiers to static codec instances.
//!
//! ```rust
//! use uuidkit::codec::{BaseType, Codec};
//!
//! let text = BaseType::Base91.codec().encode(b"test");
//! assert_eq!(text, "fPNKd");
//! assert_eq!(BaseType::Base91.codec().decode(&text)?, b"test");
//! # Ok::<(), uuidkit::Error>(())
//! ```

use std::{fmt, str};

use crate::Error;

mod base10;
mod base16;
mod base2;
mod base256;
mod base64;
mod base91;

pub use base10::Base10;
pub use base16::Base16;
pub use base2::Base2;
pub use base256::Base256;
pub use base64::Base64;
pub use base91::Base91;

/// A stateless conversion between raw bytes and a textual encoding.
///
/// `decode(encode(b)) == b` holds for every implementation except [`Base10`], which treats the
/// input as an unsigned integer and therefore drops leading zero bytes.
pub trait Codec: Send + Sync {
    /// Encodes `bytes` into text.
    fn encode(&self, bytes: &[u8]) -> String;

    /// Decodes `text` back into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `text` is not valid for this codec.
    fn decode(&self, text: &str) -> Result<Vec<u8>, Error>;
}

/// Codec instances shared by the registry.
pub static BASE2: Base2 = Base2;
pub static BASE10: Base10 = Base10;
pub static BASE16: Base16 = Base16::LOWER;
pub static BASE64: Base64 = Base64;
pub static BASE91: Base91 = Base91;
pub static BASE256: Base256 = Base256;

/// The closed set of named codecs.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum BaseType {
    /// Eight `0`/`1` characters per byte.
    Base2,
    /// Decimal rendering of the bytes as an unsigned big-endian integer.
    Base10,
    /// Two lowercase hexadecimal digits per byte.
    Base16,
    /// Standard alphabet, unpadded on output, padding optional on input.
    Base64,
    /// basE91 with the classic 91-symbol alphabet.
    Base91,
    /// One symbol per byte taken from the Braille Patterns block.
    Base256,
}

impl BaseType {
    /// Every registered codec, in ascending radix order.
    pub const ALL: [Self; 6] = [
        Self::Base2,
        Self::Base10,
        Self::Base16,
        Self::Base64,
        Self::Base91,
        Self::Base256,
    ];

    /// Returns the codec instance registered under this identifier.
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Self::Base2 => &BASE2,
            Self::Base10 => &BASE10,
            Self::Base16 => &BASE16,
            Self::Base64 => &BASE64,
            Self::Base91 => &BASE91,
            Self::Base256 => &BASE256,
        }
    }

    /// Returns the stable identifier of this codec.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base2 => "base2",
            Self::Base10 => "base10",
            Self::Base16 => "base16",
            Self::Base64 => "base64",
            Self::Base91 => "base91",
            Self::Base256 => "base256",
        }
    }

    /// Shorthand for `self.codec().encode(bytes)`.
    pub fn encode(self, bytes: &[u8]) -> String {
        self.codec().encode(bytes)
    }

    /// Shorthand for `self.codec().decode(text)`.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, Error> {
        self.codec().decode(text)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for BaseType {
    type Err = Error;

    /// Looks up a codec by its identifier, ignoring ASCII case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(src))
            .ok_or_else(|| Error::format(format!("unknown codec '{src}'")))
    }
}
