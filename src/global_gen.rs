//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{cell::RefCell, sync, time};

use crate::Uuid;
use inner::{GlobalGenInner, NodeState};

/// Returns the process-wide clock sequence and node ID, choosing them at random on first use.
fn node_state() -> &'static NodeState {
    static STATE: sync::OnceLock<NodeState> = sync::OnceLock::new();
    STATE.get_or_init(NodeState::from_os_rng)
}

thread_local! {
    static DEFAULT_GENERATOR: RefCell<GlobalGenInner> =
        RefCell::new(GlobalGenInner::new(node_state()));
}

/// Generates a UUIDv1 object from the current system time.
///
/// The clock sequence and node ID are chosen at random once per process and shared by all
/// threads.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid1();
/// println!("{}", uuid); // e.g., "5fb31cd5-2cd4-11ea-9234-3a7c21e0d9f4"
/// assert_eq!(uuid.version(), 1);
/// ```
pub fn uuid1() -> Uuid {
    uuid1_at(time::SystemTime::now())
}

/// Generates a UUIDv1 object from the time passed, which may lie anywhere in the past or future.
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let uuid = uuid4122::uuid1_at(UNIX_EPOCH + Duration::new(1_577_872_805, 500));
/// assert_eq!(uuid.timestamp(), 137_971_656_050_005);
/// ```
pub fn uuid1_at(instant: time::SystemTime) -> Uuid {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().get_mut().generate_v1_at(instant))
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().get_mut().generate_v4())
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, RandSource};

    /// The random number generator of the default generators.
    ///
    /// Employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the strategy used by
    /// [`rand::rngs::ThreadRng`].
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        fn new() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("uuid4122: could not initialize random number generator");
            Self(ReseedingRng::new(core, 1024 * 64, OsRng))
        }
    }

    impl RandSource for GlobalGenRng {
        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }
    }

    /// The clock sequence and node ID shared by every time-based UUID of the process.
    #[derive(Debug)]
    pub struct NodeState {
        pub clock_seq: u16,
        pub node: u64,
    }

    impl NodeState {
        pub fn from_os_rng() -> Self {
            let g = Generator::with_rand08(OsRng);
            log::debug!(
                "uuid4122: chose clock sequence {:#06x} and node {:012x}",
                g.clock_sequence(),
                g.node()
            );
            Self {
                clock_seq: g.clock_sequence(),
                node: g.node(),
            }
        }
    }

    /// A per-thread generator bound to the process-wide [`NodeState`] that resets its random
    /// number generator when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        #[cfg_attr(not(unix), allow(dead_code))]
        state: &'static NodeState,
        generator: Generator<GlobalGenRng>,
    }

    impl GlobalGenInner {
        pub fn new(state: &'static NodeState) -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                state,
                generator: Generator::with_node(GlobalGenRng::new(), state.clock_seq, state.node),
            }
        }

        /// Returns a mutable reference to the inner [`Generator`] instance, reseeding the
        /// random number generator on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::debug!("uuid4122: process ID changed; reseeding random number generator");
                *self = Self::new(self.state);
            }
            &mut self.generator
        }
    }
}


#[cfg(test)]
mod tests_v4 {
    use super::uuid4;
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid4().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid4();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 4);
        }
    }

    /// Generates no duplicates under multithreading
    #[test]
    fn generates_no_duplicates_under_multithreading() -> Result<(), Box<dyn std::error::Error>> {
        use std::{collections::HashSet, sync::mpsc, thread};

        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::Builder::new()
                .spawn(move || {
                    for _ in 0..10_000 {
                        tx.send(uuid4()).unwrap();
                    }
                })
                .map_err(|err| format!("failed to spawn thread: {:?}", err))?;
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(e) = rx.recv() {
            s.insert(e);
        }

        assert_eq!(s.len(), 4 * 10_000);
        Ok(())
    }
}
