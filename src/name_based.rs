//! Deterministic name-based UUIDs (versions 3 and 5).

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::Uuid;

/// A UUID of the namespace of fully-qualified domain names
pub const NAMESPACE_DNS: Uuid = Uuid::from_u64_pair(0x6ba7_b810_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

/// A UUID of the namespace of URLs
pub const NAMESPACE_URL: Uuid = Uuid::from_u64_pair(0x6ba7_b811_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

/// A UUID of the namespace of ISO OIDs
pub const NAMESPACE_OID: Uuid = Uuid::from_u64_pair(0x6ba7_b812_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

/// A UUID of the namespace of X.500 DNs (in DER or a text output format)
pub const NAMESPACE_X500: Uuid = Uuid::from_u64_pair(0x6ba7_b814_9dad_11d1, 0x80b4_00c0_4fd4_30c8);

impl Uuid {
    /// Creates a version 3 UUID from the MD5 digest of `namespace ‖ name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::{Uuid, NAMESPACE_DNS};
    ///
    /// let x = Uuid::new_v3(&NAMESPACE_DNS, "python.org");
    /// assert_eq!(x.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    /// ```
    pub fn new_v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        hash_based::<Md5>(namespace, name.as_ref(), 3)
    }

    /// Creates a version 5 UUID from the first 16 bytes of the SHA-1 digest of
    /// `namespace ‖ name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::{Uuid, NAMESPACE_DNS};
    ///
    /// let x = Uuid::new_v5(&NAMESPACE_DNS, "python.org");
    /// assert_eq!(x.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        hash_based::<Sha1>(namespace, name.as_ref(), 5)
    }
}

/// Shorthand for [`Uuid::new_v3`].
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Uuid::new_v3(namespace, name)
}

/// Shorthand for [`Uuid::new_v5`].
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    Uuid::new_v5(namespace, name)
}

fn hash_based<D: Digest>(namespace: &Uuid, name: &[u8], version: u8) -> Uuid {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes_with_version(bytes, version)
}

#[cfg(test)]
mod tests {
    use super::{uuid3, uuid5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};
    use crate::{id::Variant, Uuid};

    /// Returns `(namespace, name, v3, v5)` fixtures
    fn prepare_cases() -> &'static [(Uuid, &'static str, &'static str, &'static str)] {
        &[
            (
                NAMESPACE_DNS,
                "python.org",
                "6fa459ea-ee8a-3ca4-894e-db77e160355e",
                "886313e1-3b8a-5372-9b90-0c9aee199e5d",
            ),
            (
                NAMESPACE_DNS,
                "example.org",
                "04738bdf-b25a-3829-a801-b21a1d25095b",
                "aad03681-8b63-5304-89e0-8ca8f49461b5",
            ),
            (
                NAMESPACE_DNS,
                "rust-lang.org",
                "c6db027c-615c-3b4d-959e-1a917747ca5a",
                "c66bbb60-d62e-5f17-a399-3a0bd237c503",
            ),
            (
                NAMESPACE_DNS,
                "",
                "c87ee674-4ddc-3efe-a74e-dfe25da5d7b3",
                "4ebd0208-8328-5d69-8c44-ec50939c0967",
            ),
            (
                NAMESPACE_URL,
                "42",
                "08998a0c-fcf4-34a9-b444-f2bfc15731dc",
                "5c2b23de-4bad-58ee-a4b3-f22f3b9cfd7d",
            ),
            (
                NAMESPACE_URL,
                "https://example.com/",
                "b9dcdff8-af4a-365d-8043-0f8361942709",
                "dd2c1780-811a-5296-81c5-178a0ef488bc",
            ),
            (
                NAMESPACE_OID,
                "lorem ipsum",
                "5dd8654f-76ba-3d47-bc2e-4d6d3a78cb09",
                "6485290d-f79e-5380-9e64-cb4312c7b4a6",
            ),
            (
                NAMESPACE_X500,
                "example.org",
                "64606f3f-bd63-363e-b946-fca13611b6f7",
                "e3635e86-f82b-5bbc-a54a-da97923e5c76",
            ),
        ]
    }

    /// Generates the published fixtures
    #[test]
    fn generates_the_published_fixtures() {
        for (namespace, name, v3, v5) in prepare_cases() {
            let x = Uuid::new_v3(namespace, name);
            assert_eq!(x.to_string(), *v3, "{name}");
            assert_eq!(x.version(), 3);
            assert_eq!(x.variant(), Variant::Var10);

            let y = Uuid::new_v5(namespace, name);
            assert_eq!(y.to_string(), *v5, "{name}");
            assert_eq!(y.version(), 5);
            assert_eq!(y.variant(), Variant::Var10);
        }
    }

    /// Returns byte-identical values for identical inputs
    #[test]
    fn returns_byte_identical_values_for_identical_inputs() {
        let names = ["", "a", "uuidkit", "https://例え.jp/", "lorem ipsum dolor sit amet"];
        for name in names {
            for namespace in [NAMESPACE_DNS, NAMESPACE_URL, NAMESPACE_OID, NAMESPACE_X500] {
                assert_eq!(uuid3(&namespace, name), uuid3(&namespace, name));
                assert_eq!(uuid5(&namespace, name), uuid5(&namespace, name));
                assert_eq!(uuid5(&namespace, name), Uuid::new_v5(&namespace, name.as_bytes()));
            }
        }
        assert_eq!(
            uuid5(&NAMESPACE_URL, "https://例え.jp/").to_string(),
            "eccf5197-3987-5080-845b-82d9b4c8af77"
        );
    }

    /// Separates identical names by namespace
    #[test]
    fn separates_identical_names_by_namespace() {
        assert_ne!(uuid3(&NAMESPACE_DNS, "x"), uuid3(&NAMESPACE_URL, "x"));
        assert_ne!(uuid5(&NAMESPACE_DNS, "x"), uuid5(&NAMESPACE_URL, "x"));
        assert_ne!(uuid3(&NAMESPACE_DNS, "x"), uuid5(&NAMESPACE_DNS, "x"));
    }
}
