//! Parser for the hyphenated textual representation

use std::{num::ParseIntError, str};

use crate::Uuid;

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("invalid UUID string: {input}")]
pub struct ParseError {
    input: String,
    #[source]
    kind: ParseErrorKind,
}

/// The reason a string was rejected by the parser.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Fewer than four hyphens were found.
    #[error("missing hyphens")]
    MissingHyphen,

    /// The first hyphen precedes the end of an 8-digit `time_low` group.
    #[error("first hyphen at index {index}, expected 8 or later")]
    MisplacedHyphen {
        /// Byte index of the first hyphen.
        index: usize,
    },

    /// A hyphen-delimited group is not a hexadecimal number that fits in a signed 64-bit integer.
    #[error("invalid hexadecimal group")]
    InvalidGroup(#[from] ParseIntError),
}

impl ParseError {
    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the reason the string was rejected.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Group widths are not checked beyond what the hyphen positions imply: each group only has
    /// to be a hexadecimal number that fits in a signed 64-bit integer, and bits shifted past the
    /// boundary of their half are discarded when the groups are reassembled. A negative node
    /// group is taken in two's complement.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        parse_groups(src)
            .map(|[time_low, time_mid, time_hi_and_version, clock_seq, node]| {
                Self::from_high_low(
                    time_low << 32 | time_mid << 16 | time_hi_and_version,
                    clock_seq << 48 | node,
                )
            })
            .map_err(|kind| ParseError {
                input: src.to_owned(),
                kind,
            })
    }
}

/// Splits `src` at four hyphens and reads each of the five groups as a signed hexadecimal number.
fn parse_groups(src: &str) -> Result<[u64; 5], ParseErrorKind> {
    let mut groups = [0u64; 5];
    let mut start = 0;
    for (i, group) in groups.iter_mut().enumerate() {
        let end = if i == 4 {
            src.len()
        } else {
            let dash = src[start..]
                .find('-')
                .map(|offset| start + offset)
                .ok_or(ParseErrorKind::MissingHyphen)?;
            if i == 0 && dash < 8 {
                return Err(ParseErrorKind::MisplacedHyphen { index: dash });
            }
            dash
        };
        *group = i64::from_str_radix(&src[start..end], 16)? as u64;
        start = end + 1;
    }
    Ok(groups)
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}
