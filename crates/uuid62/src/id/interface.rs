use crate::{Error, Result, UUID_SIZE, decode, encode, uuid_from_bytes, uuid_to_bytes};
use alloc::string::String;
use uuid::Uuid;

/// Encodes a UUID as Base62 via its 16-byte big-endian form.
///
/// # Example
///
/// ```
/// use uuid62::{Uuid, uuid_to_base62};
///
/// let id = Uuid::parse_str("86559453-e224-4921-baee-6fb5c0252e85").unwrap();
/// assert_eq!(uuid_to_base62(id), "GWFlTJOJJFiuuftaBuEXKE");
/// ```
#[must_use]
pub fn uuid_to_base62(id: Uuid) -> String {
    encode(&uuid_to_bytes(id))
}

/// Decodes a Base62 string into a UUID.
///
/// # Errors
///
/// - [`Error::Base62`] if the input contains a character outside the
///   alphabet.
/// - [`Error::InvalidLength`] if the input does not decode to exactly
///   [`UUID_SIZE`] bytes.
pub fn uuid_from_base62(encoded: &str) -> Result<Uuid> {
    let bytes = decode(encoded)?;
    if bytes.len() != UUID_SIZE {
        return Err(Error::InvalidLength { len: bytes.len() });
    }
    uuid_from_bytes(&bytes)
}

/// Extension trait for Base62 encoding and decoding of [`Uuid`].
///
/// This is a thin method-style wrapper over [`uuid_to_base62`],
/// [`uuid_from_base62`], [`uuid_to_bytes`] and [`uuid_from_bytes`].
///
/// # Example
///
/// ```
/// use uuid62::{Base62UuidExt, Uuid};
///
/// let id = Uuid::parse_str("6c92fb91-d151-47d9-82ee-029373cf013e").unwrap();
/// let encoded = id.to_base62();
/// assert_eq!(encoded, "sJ5ejM6oOKbBdXgJn75A8B");
/// assert_eq!(Uuid::from_base62(&encoded).unwrap(), id);
/// ```
pub trait Base62UuidExt: Sized {
    /// Encodes this UUID as a Base62 string.
    fn to_base62(&self) -> String;

    /// Decodes a Base62 string into a UUID.
    ///
    /// # Errors
    ///
    /// See [`uuid_from_base62`].
    fn from_base62(encoded: &str) -> Result<Self>;

    /// Returns the 16-byte big-endian form, high half first.
    fn to_be_bytes16(&self) -> [u8; UUID_SIZE];

    /// Reads a UUID from an exactly 16-byte big-endian buffer.
    ///
    /// # Errors
    ///
    /// See [`uuid_from_bytes`].
    fn try_from_be_slice(bytes: &[u8]) -> Result<Self>;
}

impl Base62UuidExt for Uuid {
    fn to_base62(&self) -> String {
        uuid_to_base62(*self)
    }

    fn from_base62(encoded: &str) -> Result<Self> {
        uuid_from_base62(encoded)
    }

    fn to_be_bytes16(&self) -> [u8; UUID_SIZE] {
        uuid_to_bytes(*self)
    }

    fn try_from_be_slice(bytes: &[u8]) -> Result<Self> {
        uuid_from_bytes(bytes)
    }
}
