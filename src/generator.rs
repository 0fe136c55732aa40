//! Time-based and random UUID generators with injectable environment sources.

use std::time;

use crate::Uuid;

pub mod node;
pub mod with_rand08;

#[cfg(test)]
mod tests;

pub use node::{HardwareNode, RandomNode};

/// Number of 100-nanosecond ticks between 1582-10-15 and 1970-01-01.
const GREGORIAN_OFFSET: u64 = crate::meta::GREGORIAN_OFFSET;

const MAX_TICKS: u64 = (1 << 60) - 1;
const MAX_NODE: u64 = (1 << 48) - 1;
const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the wall clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the time elapsed since the Unix epoch.
    fn now(&mut self) -> time::Duration;
}

/// A trait that defines the node id provider for version 1 UUIDs.
pub trait NodeSource {
    /// Returns a 48-bit node id, or `None` to let the generator pick a random one.
    fn node_id(&mut self) -> Option<[u8; 6]>;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now(&mut self) -> time::Duration {
        // a clock set before 1970 collapses to the epoch
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Converts a duration since the Unix epoch into 100-nanosecond ticks since 1582-10-15.
pub const fn gregorian_ticks(since_unix_epoch: time::Duration) -> u64 {
    let ticks = since_unix_epoch.as_secs() * 10_000_000
        + since_unix_epoch.subsec_nanos() as u64 / 100
        + GREGORIAN_OFFSET;
    ticks & MAX_TICKS
}

/// Represents a UUID generator bound to a random source, a clock, and a node id provider.
///
/// Every method is a single synchronous call with no state carried between calls; the generator
/// holds nothing but its three sources. Replacing any of them with a fake makes the output
/// deterministic, which is how the `_core` variants and the unit tests drive it.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuidkit::generator::{Generator, RandomNode, StdSystemTime};
///
/// let mut g = Generator::with_rand08(OsRng);
/// assert_eq!(g.generate_v4().version(), 4);
/// assert_eq!(g.generate_v7().version(), 7);
///
/// // opt out of publishing the hardware address in version 1 UUIDs
/// let mut g = Generator::with_sources(
///     uuidkit::generator::with_rand08::Adapter(OsRng),
///     StdSystemTime,
///     RandomNode,
/// );
/// assert_eq!(g.generate_v1().version(), 1);
/// ```
///
/// # Generator functions
///
/// | Version | Timestamp now     | Timestamp argument     |
/// | ------- | ----------------- | ---------------------- |
/// | 1       | [`generate_v1`]   | [`generate_v1_core`]   |
/// | 4       | [`generate_v4`]   | n/a                    |
/// | 6       | [`generate_v6`]   | [`generate_v6_core`]   |
/// | 7       | [`generate_v7`]   | [`generate_v7_core`]   |
///
/// [`generate_v1`]: Generator::generate_v1
/// [`generate_v1_core`]: Generator::generate_v1_core
/// [`generate_v4`]: Generator::generate_v4
/// [`generate_v6`]: Generator::generate_v6
/// [`generate_v6_core`]: Generator::generate_v6_core
/// [`generate_v7`]: Generator::generate_v7
/// [`generate_v7_core`]: Generator::generate_v7_core
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime, N = HardwareNode> {
    rand_source: R,
    time_source: T,
    node_source: N,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator with the system clock and the hardware node id provider.
    pub const fn new(rand_source: R) -> Self {
        Self::with_sources(rand_source, StdSystemTime, HardwareNode)
    }
}

impl<R, T, N> Generator<R, T, N> {
    /// Creates a generator from explicitly supplied environment sources.
    pub const fn with_sources(rand_source: R, time_source: T, node_source: N) -> Self {
        Self {
            rand_source,
            time_source,
            node_source,
        }
    }
}

impl<R: RandSource, T: TimeSource, N: NodeSource> Generator<R, T, N> {
    /// Generates a version 1 UUID from the current time and the node id.
    pub fn generate_v1(&mut self) -> Uuid {
        let ticks = gregorian_ticks(self.time_source.now());
        self.generate_v1_core(ticks)
    }

    /// Generates a version 1 UUID from `ticks`, the count of 100-nanosecond intervals since
    /// 1582-10-15. Bits above the low 60 are ignored.
    ///
    /// The node id comes from the node source, or from the random source when it has none.
    pub fn generate_v1_core(&mut self, ticks: u64) -> Uuid {
        let node = match self.node_source.node_id() {
            Some(bytes) => {
                let mut buffer = [0u8; 8];
                buffer[2..].copy_from_slice(&bytes);
                u64::from_be_bytes(buffer)
            }
            None => self.rand_source.next_u64() & MAX_NODE,
        };
        let clock_seq = self.rand_source.next_u32() as u16 & MAX_CLOCK_SEQ;
        Uuid::from_fields_v1(ticks & MAX_TICKS, clock_seq, node)
    }

    /// Generates a version 4 UUID from 122 random bits.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rand_source.fill_bytes(&mut bytes);
        Uuid::from_bytes_with_version(bytes, 4)
    }

    /// Generates a version 6 UUID from the current time.
    pub fn generate_v6(&mut self) -> Uuid {
        let ticks = gregorian_ticks(self.time_source.now());
        self.generate_v6_core(ticks)
    }

    /// Generates a version 6 UUID from `ticks` with a random clock sequence and node id. Bits
    /// above the low 60 are ignored.
    pub fn generate_v6_core(&mut self, ticks: u64) -> Uuid {
        let node = self.rand_source.next_u64() & MAX_NODE;
        let clock_seq = self.rand_source.next_u32() as u16 & MAX_CLOCK_SEQ;
        Uuid::from_fields_v6(ticks & MAX_TICKS, clock_seq, node)
    }

    /// Generates a version 7 UUID from the current time.
    pub fn generate_v7(&mut self) -> Uuid {
        let unix_ts_ms = self.time_source.now().as_millis() as u64;
        self.generate_v7_core(unix_ts_ms)
    }

    /// Generates a version 7 UUID from `unix_ts_ms` followed by random bits. Bits above the low
    /// 48 are ignored.
    pub fn generate_v7_core(&mut self, unix_ts_ms: u64) -> Uuid {
        let rand_a = self.rand_source.next_u32() as u16 & 0xfff;
        let rand_b = self.rand_source.next_u64() & ((1 << 62) - 1);
        Uuid::from_fields_v7(unix_ts_ms & ((1 << 48) - 1), rand_a, rand_b)
    }
}
