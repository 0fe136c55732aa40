//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(|| sync::Mutex::new(GlobalGenInner::new()))
        .lock()
        .expect("uuidkit: could not lock global generator")
}

/// Generates a UUIDv1 object from the current time and the host's hardware address.
///
/// A random node id is used when no hardware address is available.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid1();
/// println!("{}", uuid); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// assert_eq!(uuid.version(), 1);
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().generate_v1()
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

/// Generates a UUIDv6 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid6();
/// println!("{}", uuid); // e.g., "1ec9414c-232a-6b00-b3c8-9e6bdeced846"
/// ```
pub fn uuid6() -> Uuid {
    lock_global_gen().get_mut().generate_v6()
}

/// Generates a UUIDv7 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid7();
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidkit::uuid7().to_string();
/// ```
pub fn uuid7() -> Uuid {
    lock_global_gen().get_mut().generate_v7()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, HardwareNode, RandSource, StdSystemTime};

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }

        fn next_u64(&mut self) -> u64 {
            rand::RngCore::next_u64(&mut self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    type GlobalGen = Generator<GlobalGenRng, StdSystemTime, HardwareNode>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: GlobalGen,
    }

    impl GlobalGenInner {
        pub fn new() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("uuidkit: could not initialize global generator");
            tracing::trace!(pid = std::process::id(), "initialized global generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::new(GlobalGenRng(ReseedingRng::new(
                    core,
                    1024 * 64,
                    OsRng,
                ))),
            }
        }

        /// Returns a mutable reference to the inner [`Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut GlobalGen {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::trace!(
                    previous = self.pid,
                    current = std::process::id(),
                    "process id changed; reseeding global generator"
                );
                *self = Self::new();
            }
            &mut self.generator
        }
    }
}
