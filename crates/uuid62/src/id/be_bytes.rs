use crate::{Error, Result};
use uuid::Uuid;

/// Number of bytes in a UUID buffer.
pub const UUID_SIZE: usize = 16;

/// Writes the high 64 bits then the low 64 bits of `id`, both big-endian,
/// into a 16-byte buffer.
#[must_use]
pub fn uuid_to_bytes(id: Uuid) -> [u8; UUID_SIZE] {
    let (high, low) = id.as_u64_pair();
    (u128::from(high) << 64 | u128::from(low)).to_be_bytes()
}

/// Reads a UUID from a big-endian buffer: the first 8 bytes are the high
/// half, the next 8 the low half.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless `bytes` is exactly
/// [`UUID_SIZE`] bytes long. Longer buffers are rejected rather than
/// truncated, so trailing data is never silently dropped.
#[allow(clippy::cast_possible_truncation)]
pub fn uuid_from_bytes(bytes: &[u8]) -> Result<Uuid> {
    let buf: [u8; UUID_SIZE] = bytes
        .try_into()
        .map_err(|_| Error::InvalidLength { len: bytes.len() })?;
    let raw = u128::from_be_bytes(buf);
    Ok(Uuid::from_u64_pair((raw >> 64) as u64, raw as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "86559453-e224-4921-baee-6fb5c0252e85";
    const SAMPLE_BYTES: [u8; UUID_SIZE] = [
        0x86, 0x55, 0x94, 0x53, 0xE2, 0x24, 0x49, 0x21, 0xBA, 0xEE, 0x6F, 0xB5, 0xC0, 0x25, 0x2E,
        0x85,
    ];

    #[test]
    fn uuid_to_bytes_is_big_endian_high_then_low() {
        let id = Uuid::parse_str(SAMPLE).unwrap();
        assert_eq!(uuid_to_bytes(id), SAMPLE_BYTES);
        assert_eq!(uuid_to_bytes(id), *id.as_bytes());
    }

    #[test]
    fn uuid_from_bytes_reads_high_then_low() {
        let id = uuid_from_bytes(&SAMPLE_BYTES).unwrap();
        assert_eq!(id, Uuid::parse_str(SAMPLE).unwrap());
        assert_eq!(id.as_u64_pair(), (0x8655_9453_E224_4921, 0xBAEE_6FB5_C025_2E85));
    }

    #[test]
    fn uuid_from_bytes_rejects_short_buffer() {
        assert_eq!(
            uuid_from_bytes(&SAMPLE_BYTES[..15]),
            Err(Error::InvalidLength { len: 15 })
        );
        assert_eq!(uuid_from_bytes(&[]), Err(Error::InvalidLength { len: 0 }));
    }

    #[test]
    fn uuid_from_bytes_rejects_long_buffer() {
        let mut long = [0_u8; UUID_SIZE + 1];
        long[..UUID_SIZE].copy_from_slice(&SAMPLE_BYTES);
        assert_eq!(
            uuid_from_bytes(&long),
            Err(Error::InvalidLength { len: 17 })
        );
    }

    #[test]
    fn extreme_values_survive_byte_roundtrip() {
        for id in [Uuid::nil(), Uuid::from_u128(u128::MAX)] {
            assert_eq!(uuid_from_bytes(&uuid_to_bytes(id)).unwrap(), id);
        }
    }
}
