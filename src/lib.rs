//! Multi-version UUID engine with pluggable binary-to-text codecs
//!
//! ```rust
//! use uuidkit::{codec::BaseType, uuid7, Uuid};
//!
//! let uuid = uuid7();
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid); // with the embedded timestamp
//!
//! let short = uuid.to_base(BaseType::Base91);
//! assert_eq!(Uuid::from_base(&short, BaseType::Base91)?, uuid);
//! # Ok::<(), uuidkit::Error>(())
//! ```
//!
//! # Versions
//!
//! | Version | Source of bits                                  | Entry point               |
//! | ------- | ----------------------------------------------- | ------------------------- |
//! | 1       | Gregorian 100 ns ticks, clock sequence, node id | [`uuid1`]                 |
//! | 3       | MD5 of namespace and name                       | [`Uuid::new_v3`]          |
//! | 4       | random                                          | [`uuid4`]                 |
//! | 5       | SHA-1 of namespace and name                     | [`Uuid::new_v5`]          |
//! | 6       | version 1 fields reordered for sorting          | [`uuid6`]                 |
//! | 7       | Unix milliseconds followed by random bits       | [`uuid7`]                 |
//!
//! Every generated value carries its version nibble in the top four bits of byte 6 and the `10`
//! variant in the top two bits of byte 8. The `uuidN` functions share a process-wide generator
//! seeded from the operating system; [`generator::Generator`] accepts explicit random, clock, and
//! node id sources instead.
//!
//! ```rust
//! use uuidkit::{Uuid, NAMESPACE_DNS};
//!
//! let uuid = Uuid::new_v5(&NAMESPACE_DNS, "python.org");
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! assert!(uuid.timestamp().is_err());
//! ```
//!
//! # Text forms
//!
//! Besides the canonical 8-4-4-4-12 form ([`UuidFormat`] covers case and hyphens), a UUID
//! round-trips through every codec in [`codec::BaseType`]: Base2, Base10, Base16, Base64 (22
//! characters), Base91 (20 to 22 characters), and Base256 (16 characters).
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide generator behind [`uuid1`], [`uuid4`], [`uuid6`], and
//!   [`uuid7`].
//! - `mac_address`: lets version 1 UUIDs carry the host's hardware address. Without it the node id
//!   is random.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables the conversion between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

pub mod codec;

mod id;
pub use id::{Uuid, Variant};

mod format;
pub use format::{Formatted, UuidFormat};

mod meta;

mod name_based;
pub use name_based::{uuid3, uuid5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

pub mod generator;
pub mod storage;

#[cfg(feature = "global_gen")]
mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4, uuid6, uuid7};
