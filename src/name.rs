//! Name-based UUID generation (versions 3 and 5)

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::{Uuid, Variant};

/// Generates a UUIDv3 object from the MD5 hash of `namespace` followed by `name` in UTF-8.
///
/// The result is a pure function of its arguments: the same namespace and name always produce
/// the same UUID.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NAMESPACE_URL, "https://cloudonix.io/uuid-test");
/// assert_eq!(uuid.to_string(), "78b27cd6-ae27-3e33-919d-83a7e1d235f5");
/// ```
pub fn uuid3(namespace: &Uuid, name: &str) -> Uuid {
    uuid3_bytes(namespace, name.as_bytes())
}

/// Generates a UUIDv3 object from the MD5 hash of `namespace` followed by raw `name` bytes.
pub fn uuid3_bytes(namespace: &Uuid, name: &[u8]) -> Uuid {
    hash_name::<Md5>(namespace, name, 3)
}

/// Generates a UUIDv5 object from the SHA-1 hash of `namespace` followed by `name` in UTF-8.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_URL, "https://cloudonix.io/uuid-test");
/// assert_eq!(uuid.to_string(), "9f15406f-3afd-555d-85b7-ad3a6ff0b2e2");
/// ```
pub fn uuid5(namespace: &Uuid, name: &str) -> Uuid {
    uuid5_bytes(namespace, name.as_bytes())
}

/// Generates a UUIDv5 object from the SHA-1 hash of `namespace` followed by raw `name` bytes.
///
/// The 20-byte digest is truncated to its first 16 bytes.
pub fn uuid5_bytes(namespace: &Uuid, name: &[u8]) -> Uuid {
    hash_name::<Sha1>(namespace, name, 5)
}

fn hash_name<D: Digest>(namespace: &Uuid, name: &[u8], version: u8) -> Uuid {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize();
    Uuid::from_slice_with_variant(Variant::Rfc4122, version, &digest)
}
