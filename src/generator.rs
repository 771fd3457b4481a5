//! Random and time-based UUID generator and related types.

use std::time;

use crate::{Uuid, Variant};

pub mod with_rand08;

/// Seconds from 1582-10-15T00:00:00Z (Gregorian reform) to 1970-01-01T00:00:00Z.
const GREGORIAN_TO_UNIX_SECS: i64 = 12_219_292_800;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a UUID generator that encapsulates a random number generator together with the
/// clock sequence and node ID embedded in time-based UUIDs.
///
/// The process-wide entry functions ([`uuid1`](crate::uuid1), [`uuid4`](crate::uuid4)) share a
/// single clock sequence and node ID for the whole process. This type helps when a separate (or
/// reproducible) set of those values is needed.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use uuid4122::Generator;
///
/// let mut g = Generator::with_rand08(StdRng::seed_from_u64(42));
/// println!("{}", g.generate_v4());
/// println!("{}", g.generate_v1());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Generator<R> {
    clock_seq: u16,
    node: u64,

    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance, drawing a clock sequence and a 48-bit node ID from `rng`.
    pub fn new(mut rng: R) -> Self {
        let clock_seq = rng.next_u64() as u16;
        let mut node = [0u8; 8];
        rng.fill_bytes(&mut node[2..]);
        Self::with_node(rng, clock_seq, u64::from_be_bytes(node))
    }

    /// Creates a generator instance with a fixed clock sequence and node ID.
    ///
    /// Bits of `node` above bit 47 are ignored.
    pub const fn with_node(rng: R, clock_seq: u16, node: u64) -> Self {
        Self {
            clock_seq,
            node: node & 0xffff_ffff_ffff,
            rng,
        }
    }

    /// Returns the clock sequence embedded in time-based UUIDs.
    pub const fn clock_sequence(&self) -> u16 {
        self.clock_seq
    }

    /// Returns the 48-bit node ID embedded in time-based UUIDs.
    pub const fn node(&self) -> u64 {
        self.node
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from_bytes_with_variant(Variant::Rfc4122, 4, bytes)
    }

    /// Generates a new UUIDv1 object from the current system time.
    pub fn generate_v1(&self) -> Uuid {
        self.generate_v1_at(time::SystemTime::now())
    }

    /// Generates a new UUIDv1 object from the time passed.
    ///
    /// See [`gregorian_ticks()`] for how `instant` is turned into a timestamp.
    pub fn generate_v1_at(&self, instant: time::SystemTime) -> Uuid {
        Uuid::from_fields_v1(gregorian_ticks(instant), self.clock_seq, self.node)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource> Iterator for Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for Generator<R> {}

/// Converts `instant` into the timestamp of a time-based UUID.
///
/// The elapsed time since 1582-10-15T00:00:00Z is split into whole seconds (rounded toward
/// negative infinity) and the remaining nanoseconds, and combined as
/// `seconds * 10_000 + nanoseconds / 100`. Arithmetic wraps around instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
/// use uuid4122::gregorian_ticks;
///
/// let time = UNIX_EPOCH + Duration::new(1_577_872_805, 500);
/// assert_eq!(gregorian_ticks(time), 137_971_656_050_005);
/// ```
pub fn gregorian_ticks(instant: time::SystemTime) -> u64 {
    let (unix_secs, nanos) = match instant.duration_since(time::UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() as i64, elapsed.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = -(before.as_secs() as i64);
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs - 1, 1_000_000_000 - n),
            }
        }
    };
    unix_secs
        .wrapping_add(GREGORIAN_TO_UNIX_SECS)
        .wrapping_mul(10_000)
        .wrapping_add((nanos / 100) as i64) as u64
}
