use std::{fmt, str};

use fstr::FStr;

use crate::codec::BaseType;
use crate::Error;

/// Represents a Universally Unique IDentifier.
///
/// The value is exactly 16 bytes; ordering, equality, and hashing follow the raw bytes. Every
/// other property (the two 64-bit words, the version, the variant) is derived from them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Uuid([u8; 16]);

/// Character offsets of the hyphens in the 8-4-4-4-12 form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Size`] for any other length.
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::Size(src.len()))
    }

    /// Creates an object from the most and least significant 64-bit words.
    pub const fn from_u64_pair(msb: u64, lsb: u64) -> Self {
        let (hi, lo) = (msb.to_be_bytes(), lsb.to_be_bytes());
        Self([
            hi[0], hi[1], hi[2], hi[3], hi[4], hi[5], hi[6], hi[7], lo[0], lo[1], lo[2], lo[3],
            lo[4], lo[5], lo[6], lo[7],
        ])
    }

    /// Returns the first eight bytes as a big-endian integer.
    pub const fn most_significant_bits(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Returns the last eight bytes as a big-endian integer.
    pub const fn least_significant_bits(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Returns `(most_significant_bits, least_significant_bits)`.
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        (self.most_significant_bits(), self.least_significant_bits())
    }

    /// Returns the 4-bit version field at bit offset 12 of the most significant word.
    ///
    /// Any value is reported as is, including `0` for [`Uuid::NIL`].
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Var0,
            0b100..=0b101 => Variant::Var10,
            0b110 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Overwrites the version nibble and the `10` variant bits of a raw byte array.
    pub(crate) const fn from_bytes_with_version(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// `timestamp` counts 100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` exceeds 60 bits, `clock_seq` exceeds 14 bits, or `node` exceeds 48
    /// bits.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: u64) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        let time_low = timestamp & 0xffff_ffff;
        let time_mid = (timestamp >> 32) & 0xffff;
        let time_hi = timestamp >> 48;
        Self::from_u64_pair(
            time_low << 32 | time_mid << 16 | 0x1000 | time_hi,
            0x8000_0000_0000_0000 | (clock_seq as u64) << 48 | node,
        )
    }

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// The fields are those of [`Uuid::from_fields_v1`], with the timestamp laid out from the most
    /// significant bits down so that byte order follows creation time.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Uuid::from_fields_v1`].
    pub const fn from_fields_v6(timestamp: u64, clock_seq: u16, node: u64) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self::from_u64_pair(
            (timestamp >> 12) << 16 | 0x6000 | (timestamp & 0xfff),
            0x8000_0000_0000_0000 | (clock_seq as u64) << 48 | node,
        )
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` exceeds 48 bits, `rand_a` exceeds 12 bits, or `rand_b` exceeds 62
    /// bits.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self::from_u64_pair(
            unix_ts_ms << 16 | 0x7000 | rand_a as u64,
            0x8000_0000_0000_0000 | rand_b,
        )
    }

    /// Returns the 8-4-4-4-12 lowercase hexadecimal string representation stored in a
    /// stack-allocated string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = "C232AB00-9414-11EC-B3C8-9F6BDECED846".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(y.as_str(), "c232ab00-9414-11ec-b3c8-9f6bdeced846");
    /// assert_eq!(format!("{}", y), "c232ab00-9414-11ec-b3c8-9f6bdeced846");
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let mut offset = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[offset] = DIGITS[(e >> 4) as usize];
            buffer[offset + 1] = DIGITS[(e & 15) as usize];
            offset += if i == 3 || i == 5 || i == 7 || i == 9 {
                3
            } else {
                2
            };
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written above is ASCII
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Encodes the 16 raw bytes with the codec registered under `base`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::{codec::BaseType, Uuid};
    ///
    /// let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(x.to_base(BaseType::Base64), "wjKrAJQUEeyzyJ9r3s7YRg");
    /// assert_eq!(Uuid::from_base("wjKrAJQUEeyzyJ9r3s7YRg", BaseType::Base64)?, x);
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    pub fn to_base(&self, base: BaseType) -> String {
        base.encode(&self.0)
    }

    /// Decodes a short form produced by [`Uuid::to_base`].
    ///
    /// The decoded bytes must number exactly 16. [`BaseType::Base10`] is read as an unsigned
    /// 128-bit integer instead, so its missing leading zero bytes are restored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the codec rejects `src` and [`Error::Size`] if it decodes to
    /// the wrong number of bytes.
    pub fn from_base(src: &str, base: BaseType) -> Result<Self, Error> {
        let bytes = base.decode(src)?;
        if base == BaseType::Base10 && bytes.len() < 16 {
            let mut padded = [0u8; 16];
            padded[16 - bytes.len()..].copy_from_slice(&bytes);
            return Ok(Self(padded));
        }
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 or the 32-digit hexadecimal string representation,
    /// ignoring case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let hyphenated = match src.len() {
            36 => true,
            32 => false,
            n => {
                return Err(Error::format(format!(
                    "expected 32 or 36 characters, found {n}"
                )))
            }
        };

        let bytes = src.as_bytes();
        if hyphenated {
            if let Some(&pos) = HYPHENS.iter().find(|&&pos| bytes[pos] != b'-') {
                return Err(Error::format(format!("expected '-' at offset {pos}")));
            }
        }

        let mut digits = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| !(hyphenated && HYPHENS.contains(i)));
        let mut next_digit = || -> Result<u8, Error> {
            let (pos, &c) = digits
                .next()
                .ok_or_else(|| Error::format("unexpected end of input"))?;
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| Error::format(format!("invalid hex digit at offset {pos}")))
        };

        let mut dst = [0u8; 16];
        for e in dst.iter_mut() {
            *e = next_digit()? << 4 | next_digit()?;
        }
        Ok(Self(dst))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl TryFrom<Vec<u8>> for Uuid {
    type Error = Error;

    fn try_from(src: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(&src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// UUID variant field values.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Var0,
    /// `10x`: the layout every generator in this crate produces.
    Var10,
    /// `110`: reserved for Microsoft backward compatibility.
    Var110,
    /// `111`: reserved for future definition.
    VarReserved,
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}
