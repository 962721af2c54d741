use crate::{Base62Error, BitReader, BitWriter, Result};
use alloc::{string::String, vec::Vec};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The Base62 alphabet: the RFC 2045 Base64 alphabet minus `+` and `/`.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: u8 = 6;
const COMPACT_BITS: u8 = 5;

/// Symbols matching this mask (`0b011110`) cannot be written with 6 bits
/// because 62 and 63 have no alphabet entry.
const COMPACT_MASK: u8 = 0x1E;
const MASK_5BITS: u8 = 0x1F;

/// Lookup table for Base62 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 62 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

#[inline(always)]
const fn is_compact(value: u8) -> bool {
    value & COMPACT_MASK == COMPACT_MASK
}

/// Returns `true` if `byte` is one of the 62 alphabet characters.
#[must_use]
pub const fn is_base62_symbol(byte: u8) -> bool {
    LOOKUP[byte as usize] != NO_VALUE
}

/// Encodes arbitrary bytes as Base62.
///
/// The input is consumed six bits at a time. Whenever a 6-bit group matches
/// `0b?1111?` (30, 31, 62 or 63) only its low five bits are emitted and the
/// cursor steps back one bit, so the sixth bit leads the next group. The
/// output length therefore depends on the data: a 16-byte UUID encodes to
/// 22 to 26 characters.
///
/// # Example
///
/// ```
/// use uuid62::encode;
///
/// assert_eq!(encode(&[64, 0xDE, 123]), "A59eA");
/// assert_eq!(encode(&[]), "");
/// ```
#[must_use]
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = input.len())))]
pub fn encode(input: &[u8]) -> String {
    // Worst case every symbol is a compact 5-bit one.
    let mut out = String::with_capacity(input.len() * 8 / usize::from(COMPACT_BITS) + 1);
    let mut reader = BitReader::new(input);
    while reader.has_more() {
        let symbol = next_symbol(&mut reader)
            .unwrap_or_else(|err| unreachable!("base62 encoder invariant violated: {err}"));
        out.push(char::from(ALPHABET[usize::from(symbol)]));
    }
    out
}

/// Pulls the next alphabet index (0..=61) off the reader. Only called while
/// `reader.has_more()`, and only rewinds right after a 6-bit read.
fn next_symbol(reader: &mut BitReader<'_>) -> Result<u8, Base62Error> {
    let raw = reader.read_bits(BITS_PER_CHAR)?;
    if is_compact(raw) {
        reader.seek_back_one()?;
        Ok(raw & MASK_5BITS)
    } else {
        Ok(raw)
    }
}

/// Decodes a Base62 string produced by [`encode`] back into bytes.
///
/// Compact symbols (`e` and `f`, i.e. 30 and 31) contribute five bits, the
/// final symbol contributes only what is needed to finish the current byte,
/// and every other symbol contributes six bits. Trailing bits that do not
/// complete a byte are dropped, so no spurious zero byte is ever emitted.
///
/// # Errors
///
/// Returns [`Base62Error::InvalidSymbol`] on the first byte outside the
/// alphabet.
///
/// # Example
///
/// ```
/// use uuid62::{Base62Error, decode};
///
/// assert_eq!(decode("A59eA").unwrap(), [64, 0xDE, 123]);
/// assert_eq!(
///     decode("A+B"),
///     Err(Base62Error::InvalidSymbol { byte: b'+', index: 1 })
/// );
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(len = encoded.len()), err))]
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base62Error> {
    let symbols = encoded.as_bytes();
    let mut writer = BitWriter::with_capacity(symbols.len() * usize::from(BITS_PER_CHAR));
    let last = symbols.len().saturating_sub(1);

    for (index, &byte) in symbols.iter().enumerate() {
        let value = LOOKUP[usize::from(byte)];
        if value == NO_VALUE {
            return Err(Base62Error::InvalidSymbol { byte, index });
        }

        let count = if is_compact(value) {
            COMPACT_BITS
        } else if index == last {
            writer.bits_to_byte_boundary()
        } else {
            BITS_PER_CHAR
        };
        writer.write_bits(count, value)?;
    }

    Ok(writer.into_bytes())
}
