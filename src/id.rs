use std::{fmt, hash, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The value is stored as a 16-byte big-endian array, which is equivalent to a pair of 64-bit
/// halves where byte 0 is the most significant byte of [`high()`](Uuid::high) and byte 15 is
/// the least significant byte of [`low()`](Uuid::low). The derived ordering therefore compares
/// the high halves first and the low halves second, both as unsigned integers.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The variant of a UUID, encoded in the most significant bits of byte 8.
///
/// The discriminants are the tag bit patterns written into byte 8 by
/// [`Uuid::from_bytes_with_variant()`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Variant {
    /// `0xxxxxxx`: reserved for NCS backward compatibility.
    Ncs = 0x00,

    /// `10xxxxxx`: the layout specified by RFC 4122.
    Rfc4122 = 0x80,

    /// `110xxxxx`: reserved for Microsoft mixed-endian GUIDs.
    Microsoft = 0xc0,

    /// `111xxxxx`: reserved for future definition.
    Future = 0xe0,
}

impl Variant {
    /// Returns the tag bit pattern of this variant as it appears in byte 8.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Mask over the clock sequence bits left free by the variant tag.
    const fn clock_seq_mask(self) -> u16 {
        match self {
            Self::Ncs => 0x7fff,
            Self::Rfc4122 => 0x3fff,
            Self::Microsoft | Self::Future => 0x1fff,
        }
    }
}

impl From<Variant> for u8 {
    fn from(src: Variant) -> Self {
        src.tag()
    }
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_high_low(0x6ba7b8109dad11d1, 0x80b400c04fd430c8);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_high_low(0x6ba7b8119dad11d1, 0x80b400c04fd430c8);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_high_low(0x6ba7b8129dad11d1, 0x80b400c04fd430c8);

    /// Namespace for X.500 DNs in DER or a text output format
    /// (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_high_low(0x6ba7b8149dad11d1, 0x80b400c04fd430c8);

    /// Creates a UUID from a 16-byte big-endian array, as is.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID from a byte slice, as is.
    ///
    /// # Panics
    ///
    /// Panics if `data` is not exactly 16 bytes long.
    pub fn from_slice(data: &[u8]) -> Self {
        match <[u8; 16]>::try_from(data) {
            Ok(bytes) => Self(bytes),
            Err(_) => panic!("data must be 16 bytes in length, got {}", data.len()),
        }
    }

    /// Creates a UUID from a 16-byte big-endian array after overwriting the variant bits of byte
    /// 8 and the version bits of byte 6.
    ///
    /// The [`Variant::Future`] tag is OR-ed into byte 8 without clearing the bits below it first;
    /// the other variants replace their tag bits. Only the low four bits of `version` are used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{Uuid, Variant};
    ///
    /// let uuid = Uuid::from_bytes_with_variant(Variant::Rfc4122, 4, [0xff; 16]);
    /// assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// ```
    pub const fn from_bytes_with_variant(variant: Variant, version: u8, bytes: [u8; 16]) -> Self {
        let mut bytes = bytes;
        bytes[8] = match variant {
            Variant::Ncs => bytes[8] & 0x7f,
            Variant::Rfc4122 => (bytes[8] & 0x3f) | 0x80,
            Variant::Microsoft => (bytes[8] & 0x1f) | 0xc0,
            Variant::Future => bytes[8] | 0xe0,
        };
        bytes[6] = (bytes[6] & 0x0f) | ((version & 0x0f) << 4);
        Self(bytes)
    }

    /// Creates a UUID from the first 16 bytes of `data`, overwriting the variant and version bits
    /// as [`from_bytes_with_variant()`](Uuid::from_bytes_with_variant) does.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than 16 bytes.
    pub fn from_slice_with_variant(variant: Variant, version: u8, data: &[u8]) -> Self {
        assert!(
            data.len() >= 16,
            "data must be at least 16 bytes in length, got {}",
            data.len()
        );
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&data[..16]);
        Self::from_bytes_with_variant(variant, version, bytes)
    }

    /// Creates a UUID from its most and least significant 64 bits, as is.
    pub const fn from_high_low(high: u64, low: u64) -> Self {
        let h = high.to_be_bytes();
        let l = low.to_be_bytes();
        Self([
            h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], l[0], l[1], l[2], l[3], l[4], l[5],
            l[6], l[7],
        ])
    }

    /// Creates a version 1 UUID from a 60-bit count of 100-nanosecond ticks since
    /// 1582-10-15T00:00:00Z, a clock sequence, and a 48-bit node ID.
    ///
    /// Bits of `timestamp` above bit 59 and bits of `node` above bit 47 are ignored. The top two
    /// bits of `clock_seq` are replaced by the RFC 4122 variant tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{Uuid, Variant};
    ///
    /// let uuid = Uuid::from_fields_v1(0x1ea_2cd4_5fb3_1cd5, 0x1234, 0x0123_4567_89ab);
    /// assert_eq!(uuid.to_string(), "5fb31cd5-2cd4-11ea-9234-0123456789ab");
    /// assert_eq!(uuid.timestamp(), 0x1ea_2cd4_5fb3_1cd5);
    /// assert_eq!(uuid.variant(), Variant::Rfc4122);
    /// ```
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: u64) -> Self {
        let time_low = timestamp & 0xffff_ffff;
        let time_mid = (timestamp >> 32) & 0xffff;
        let time_hi = (timestamp >> 48) & 0x0fff;
        let raw = Self::from_high_low(
            time_low << 32 | time_mid << 16 | time_hi,
            (clock_seq as u64) << 48 | (node & 0xffff_ffff_ffff),
        );
        Self::from_bytes_with_variant(Variant::Rfc4122, 1, raw.0)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 16-byte big-endian encoding.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the most significant 64 bits.
    pub const fn high(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Returns the least significant 64 bits.
    pub const fn low(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Returns the variant encoded in byte 8.
    ///
    /// Byte 8 is read as a signed integer and only strictly positive values are classified as
    /// [`Variant::Ncs`]; a zero byte falls through the remaining checks and is reported as
    /// [`Variant::Future`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{Uuid, Variant};
    ///
    /// assert_eq!(Uuid::NAMESPACE_DNS.variant(), Variant::Rfc4122);
    /// assert_eq!(Uuid::NIL.variant(), Variant::Future);
    /// ```
    pub const fn variant(&self) -> Variant {
        let octet = self.0[8];
        if (octet as i8) > 0 {
            Variant::Ncs
        } else if octet & 0xc0 == 0x80 {
            Variant::Rfc4122
        } else if octet & 0xe0 == 0xc0 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Returns the 4-bit version field, whatever the variant is.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the `time_low` field (bits 0 through 31).
    pub const fn time_low(&self) -> u32 {
        (self.high() >> 32) as u32
    }

    /// Returns the `time_mid` field (bits 32 through 47).
    pub const fn time_mid(&self) -> u16 {
        (self.high() >> 16) as u16
    }

    /// Returns the `time_hi` field (bits 52 through 63), excluding the version.
    pub const fn time_hi(&self) -> u16 {
        (self.high() & 0x0fff) as u16
    }

    /// Returns the 60-bit timestamp reassembled from `time_hi`, `time_mid` and `time_low`.
    ///
    /// The value counts 100-nanosecond ticks since 1582-10-15T00:00:00Z and is meaningful for
    /// version 1 UUIDs only; no check is made against the version.
    pub const fn timestamp(&self) -> u64 {
        (self.time_hi() as u64) << 48 | (self.time_mid() as u64) << 32 | self.time_low() as u64
    }

    /// Returns the clock sequence, i.e. the bits of bytes 8 and 9 not taken by the variant tag.
    ///
    /// Meaningful for version 1 UUIDs only.
    pub const fn clock_sequence(&self) -> u16 {
        u16::from_be_bytes([self.0[8], self.0[9]]) & self.variant().clock_seq_mask()
    }

    /// Returns the 48-bit node field. Meaningful for version 1 UUIDs only.
    pub const fn node(&self) -> u64 {
        self.low() & 0xffff_ffff_ffff
    }

    /// Returns the 32-bit hash code obtained by folding `high ^ low` onto itself.
    ///
    /// This is the value fed into [`Hash`](hash::Hash).
    pub const fn hash_code(&self) -> u32 {
        let hilo = self.high() ^ self.low();
        ((hilo >> 32) ^ (hilo & 0xffff_ffff)) as u32
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "078532d8-053f-4f95-9380-9f63d15e1d28".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "078532d8-053f-4f95-9380-9f63d15e1d28");
    /// assert_eq!(format!("{}", y), "078532d8-053f-4f95-9380-9f63d15e1d28");
    /// # Ok::<(), uuid4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                buffer[pos] = b'-';
                pos += 1;
            }
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
        }
        debug_assert!(pos == buffer.len() && buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl hash::Hash for Uuid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
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

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
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
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}
