//! An implementation of RFC 4122 Universally Unique IDentifiers
//!
//! ```rust
//! use uuid4122::{uuid1, uuid3, uuid4, uuid5, Uuid};
//!
//! println!("{}", uuid1()); // time-based, e.g. "5fb31cd5-2cd4-11ea-9234-3a7c21e0d9f4"
//! println!("{}", uuid4()); // random, e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//!
//! let md5 = uuid3(&Uuid::NAMESPACE_URL, "https://cloudonix.io/uuid-test");
//! assert_eq!(md5.to_string(), "78b27cd6-ae27-3e33-919d-83a7e1d235f5");
//!
//! let sha1 = uuid5(&Uuid::NAMESPACE_URL, "https://cloudonix.io/uuid-test");
//! assert_eq!(sha1.to_string(), "9f15406f-3afd-555d-85b7-ad3a6ff0b2e2");
//!
//! let parsed: Uuid = "078532d8-053f-4f95-9380-9f63d15e1d28".parse()?;
//! assert_eq!(parsed.high(), 0x078532d8053f4f95);
//! assert_eq!(parsed.low(), 0x93809f63d15e1d28);
//! # Ok::<(), uuid4122::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq                |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The `var` field takes one to three bits depending on the [`Variant`], and the clock sequence
//! takes the rest of the first two bytes of the low half.
//!
//! - Version 1 UUIDs store a count of 100-nanosecond ticks since 1582-10-15T00:00:00Z in the
//!   `time_*` fields. The clock sequence and node ID are chosen at random once per process.
//! - Version 3 and 5 UUIDs store the MD5 or SHA-1 hash of a namespace UUID followed by a name.
//! - Version 4 UUIDs store cryptographically strong random bits.
//!
//! # Crate features
//!
//! - `global_gen` (default): process-wide generator state and the [`uuid1()`], [`uuid1_at()`]
//!   and [`uuid4()`] functions.
//! - `serde`: serialization as a string or as 16 bytes, depending on the format.
//! - `uuid`: conversions to and from [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

mod parse;
pub use parse::{ParseError, ParseErrorKind};

mod name;
pub use name::{uuid3, uuid3_bytes, uuid5, uuid5_bytes};

pub mod generator;
#[doc(inline)]
pub use generator::{gregorian_ticks, Generator, RandSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid1_at, uuid4};
