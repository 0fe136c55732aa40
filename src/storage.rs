//! Byte order used when persisting UUIDs in a fixed 16-byte binary column.
//!
//! The forward transform moves bytes `4..8` to the front, followed by `2..4`, then `0..2`, and
//! leaves `8..16` in place:
//!
//! ```text
//! canonical: 00 01 02 03 | 04 05 | 06 07 | 08 .. 15
//! storage:   04 05 06 07 | 02 03 | 00 01 | 08 .. 15
//! ```
//!
//! A writer applies [`to_storage_order`] and a reader applies [`from_storage_order`]; the two are
//! exact inverses for every 16-byte input.

use crate::{Error, Uuid};

/// Permutes canonical bytes into storage order.
pub const fn to_storage_order(b: [u8; 16]) -> [u8; 16] {
    [
        b[4], b[5], b[6], b[7], b[2], b[3], b[0], b[1], b[8], b[9], b[10], b[11], b[12], b[13],
        b[14], b[15],
    ]
}

/// Restores canonical bytes from storage order.
pub const fn from_storage_order(s: [u8; 16]) -> [u8; 16] {
    [
        s[6], s[7], s[4], s[5], s[0], s[1], s[2], s[3], s[8], s[9], s[10], s[11], s[12], s[13],
        s[14], s[15],
    ]
}

impl Uuid {
    /// Returns the bytes of this value in storage order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// let stored = x.to_storage_bytes();
    /// assert_eq!(hex::encode(stored), "941411ecab00c232b3c89f6bdeced846");
    /// assert_eq!(Uuid::from_storage_bytes(&stored)?, x);
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    pub const fn to_storage_bytes(&self) -> [u8; 16] {
        to_storage_order(*self.as_bytes())
    }

    /// Creates an object from bytes read back in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Size`] unless `src` is exactly 16 bytes long.
    pub fn from_storage_bytes(src: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; 16]>::try_from(src).map_err(|_| Error::Size(src.len()))?;
        Ok(Self::from(from_storage_order(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::{from_storage_order, to_storage_order};
    use crate::{Error, Uuid};

    /// Moves the time-low and time-mid groups as documented
    #[test]
    fn moves_the_time_low_and_time_mid_groups_as_documented() {
        let identity: [u8; 16] = core::array::from_fn(|i| i as u8);
        assert_eq!(
            to_storage_order(identity),
            [4, 5, 6, 7, 2, 3, 0, 1, 8, 9, 10, 11, 12, 13, 14, 15]
        );
        assert_eq!(from_storage_order(to_storage_order(identity)), identity);
    }

    /// Inverts the permutation for fixed and random inputs
    #[test]
    fn inverts_the_permutation_for_fixed_and_random_inputs() {
        let mut cases = vec![[0x00u8; 16], [0xffu8; 16]];
        cases.extend((0..1_000).map(|_| rand::random::<[u8; 16]>()));
        for x in cases {
            assert_eq!(from_storage_order(to_storage_order(x)), x);
            assert_eq!(to_storage_order(from_storage_order(x)), x);
        }
    }

    /// Round-trips values through the storage representation
    #[test]
    fn round_trips_values_through_the_storage_representation() {
        for _ in 0..1_000 {
            let e = Uuid::from(rand::random::<u128>());
            assert_eq!(Uuid::from_storage_bytes(&e.to_storage_bytes()), Ok(e));
        }
        assert_eq!(Uuid::from_storage_bytes(&[0u8; 15]), Err(Error::Size(15)));
        assert_eq!(Uuid::from_storage_bytes(&[0u8; 17]), Err(Error::Size(17)));
    }
}
