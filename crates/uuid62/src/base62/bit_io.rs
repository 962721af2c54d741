use crate::{Base62Error, Result};
use alloc::vec::Vec;

/// Widest group [`BitReader::read_bits`] will hand out.
pub const MAX_READ_BITS: u8 = 6;

/// Widest group [`BitWriter::write_bits`] will accept.
///
/// The final Base62 symbol may be asked to top up a partial byte, which can
/// need up to 7 bits, so this is one wider than [`MAX_READ_BITS`].
pub const MAX_WRITE_BITS: u8 = 7;

/// Returns a mask covering the low `count` bits of a byte. `count` must be
/// at most 7.
#[inline(always)]
const fn low_mask(count: usize) -> u8 {
    (1_u8 << count) - 1
}

/// Sequential reader of small bit groups over a byte slice.
///
/// Bits are numbered least-significant first within each byte. A group that
/// straddles a byte boundary takes its low bits from the current byte and its
/// high bits from the bottom of the next one.
///
/// # Example
///
/// ```
/// use uuid62::BitReader;
///
/// let mut reader = BitReader::new(&[0b1100_0001, 0b0000_0010]);
/// assert_eq!(reader.read_bits(6).unwrap(), 0b00_0001);
/// // Straddles the boundary: two bits from the first byte, four from the
/// // second.
/// assert_eq!(reader.read_bits(6).unwrap(), 0b0010_11);
/// reader.seek_back_one().unwrap();
/// assert_eq!(reader.position(), 11);
/// ```
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit of `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Total number of bits in the underlying buffer.
    #[must_use]
    pub const fn total_bits(&self) -> usize {
        self.buf.len() * 8
    }

    /// Current cursor position in bits.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Returns `true` while the cursor has not consumed every bit.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.offset < self.total_bits()
    }

    /// Reads the next `count` bits (1 to [`MAX_READ_BITS`]) as an unsigned
    /// value and advances the cursor by `count`.
    ///
    /// A group running past the end of the buffer is zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`Base62Error::BitCursorOutOfBounds`] if `count` is out of
    /// range or the cursor has already consumed every bit.
    pub fn read_bits(&mut self, count: u8) -> Result<u8, Base62Error> {
        if count == 0 || count > MAX_READ_BITS {
            return Err(self.out_of_bounds(count));
        }
        let byte_idx = self.offset / 8;
        let bit_idx = self.offset % 8;
        let Some(&current) = self.buf.get(byte_idx) else {
            return Err(self.out_of_bounds(count));
        };

        let first = (8 - bit_idx).min(usize::from(count));
        let second = usize::from(count) - first;

        let mut value = (current >> bit_idx) & low_mask(first);
        if second > 0 {
            if let Some(&next) = self.buf.get(byte_idx + 1) {
                value |= (next & low_mask(second)) << first;
            }
        }

        self.offset += usize::from(count);
        Ok(value)
    }

    /// Rewinds the cursor by exactly one bit.
    ///
    /// # Errors
    ///
    /// Returns [`Base62Error::BitCursorOutOfBounds`] if the cursor is at the
    /// start of the buffer, or would still sit past its end after rewinding.
    pub fn seek_back_one(&mut self) -> Result<(), Base62Error> {
        match self.offset.checked_sub(1) {
            Some(offset) if offset <= self.total_bits() => {
                self.offset = offset;
                Ok(())
            }
            _ => Err(self.out_of_bounds(1)),
        }
    }

    const fn out_of_bounds(&self, count: u8) -> Base62Error {
        Base62Error::BitCursorOutOfBounds {
            offset: self.offset,
            total_bits: self.total_bits(),
            count,
        }
    }
}

/// Sequential writer of small bit groups into a growing byte buffer.
///
/// Uses the same least-significant-first bit numbering as [`BitReader`].
/// Only whole bytes are ever returned; trailing bits that do not complete a
/// byte are dropped by [`BitWriter::into_bytes`].
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    offset: usize,
}

impl BitWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            offset: 0,
        }
    }

    /// Creates an empty writer with room for roughly `bits` bits.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bits.div_ceil(8)),
            offset: 0,
        }
    }

    /// Current cursor position in bits.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Number of bits still needed to complete the current partial byte, or
    /// `0` when the cursor sits on a byte boundary.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn bits_to_byte_boundary(&self) -> u8 {
        match self.offset % 8 {
            0 => 0,
            used => (8 - used) as u8,
        }
    }

    /// ORs the low `count` bits (0 to [`MAX_WRITE_BITS`]) of `value` into the
    /// buffer at the cursor and advances the cursor by `count`.
    ///
    /// # Errors
    ///
    /// Returns [`Base62Error::BitCursorOutOfBounds`] if `count` exceeds
    /// [`MAX_WRITE_BITS`].
    pub fn write_bits(&mut self, count: u8, value: u8) -> Result<(), Base62Error> {
        if count > MAX_WRITE_BITS {
            return Err(Base62Error::BitCursorOutOfBounds {
                offset: self.offset,
                total_bits: self.buf.len() * 8,
                count,
            });
        }
        if count == 0 {
            return Ok(());
        }

        let count = usize::from(count);
        let byte_idx = self.offset / 8;
        let bit_idx = self.offset % 8;
        let last_byte = (self.offset + count - 1) / 8;
        if self.buf.len() <= last_byte {
            self.buf.resize(last_byte + 1, 0);
        }

        let first = (8 - bit_idx).min(count);
        let second = count - first;
        self.buf[byte_idx] |= (value & low_mask(first)) << bit_idx;
        if second > 0 {
            self.buf[byte_idx + 1] |= (value >> first) & low_mask(second);
        }

        self.offset += count;
        Ok(())
    }

    /// Consumes the writer, returning exactly `position() / 8` whole bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.offset / 8);
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn reader_reads_least_significant_bits_first() {
        let mut reader = BitReader::new(&[0b1010_0101]);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        assert_eq!(reader.read_bits(5).unwrap(), 0b10100);
        assert!(!reader.has_more());
    }

    #[test]
    fn reader_combines_bits_across_byte_boundary() {
        // Low 2 bits of the group come from the top of byte 0, the high 4 from
        // the bottom of byte 1.
        let mut reader = BitReader::new(&[0b1100_0000, 0b1111_1010]);
        reader.read_bits(6).unwrap();
        assert_eq!(reader.read_bits(6).unwrap(), 0b1010_11);
        assert_eq!(reader.position(), 12);
    }

    #[test]
    fn reader_zero_fills_past_end_of_buffer() {
        let mut reader = BitReader::new(&[0xFF]);
        reader.read_bits(6).unwrap();
        assert_eq!(reader.read_bits(6).unwrap(), 0b0000_11);
        assert_eq!(reader.position(), 12);
        assert!(!reader.has_more());
    }

    #[test]
    fn reader_rejects_read_when_exhausted() {
        let mut reader = BitReader::new(&[]);
        assert!(!reader.has_more());
        assert_eq!(
            reader.read_bits(6),
            Err(Base62Error::BitCursorOutOfBounds {
                offset: 0,
                total_bits: 0,
                count: 6,
            })
        );
    }

    #[test]
    fn reader_rejects_unsupported_group_width() {
        let mut reader = BitReader::new(&[0xFF, 0xFF]);
        assert!(reader.read_bits(0).is_err());
        assert!(reader.read_bits(7).is_err());
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn reader_seek_back_rewinds_one_bit() {
        let mut reader = BitReader::new(&[0b0011_1110]);
        assert_eq!(reader.read_bits(6).unwrap(), 0b11_1110);
        reader.seek_back_one().unwrap();
        assert_eq!(reader.position(), 5);
        assert_eq!(reader.read_bits(3).unwrap(), 0b001);
    }

    #[test]
    fn reader_seek_back_fails_at_start() {
        let mut reader = BitReader::new(&[0xAB]);
        assert_eq!(
            reader.seek_back_one(),
            Err(Base62Error::BitCursorOutOfBounds {
                offset: 0,
                total_bits: 8,
                count: 1,
            })
        );
    }

    #[test]
    fn reader_seek_back_fails_when_still_past_end() {
        let mut reader = BitReader::new(&[0xAB]);
        reader.read_bits(6).unwrap();
        reader.read_bits(6).unwrap();
        // Cursor at 12 of 8 bits; one step back leaves it at 11.
        assert!(reader.seek_back_one().is_err());
        assert_eq!(reader.position(), 12);
    }

    #[test]
    fn writer_packs_least_significant_bits_first() {
        let mut writer = BitWriter::new();
        writer.write_bits(1, 1).unwrap();
        writer.write_bits(2, 0b10).unwrap();
        writer.write_bits(5, 0b10100).unwrap();
        assert_eq!(writer.into_bytes(), vec![0b1010_0101]);
    }

    #[test]
    fn writer_splits_group_across_byte_boundary() {
        let mut writer = BitWriter::with_capacity(16);
        writer.write_bits(6, 0).unwrap();
        writer.write_bits(6, 0b1010_11).unwrap();
        writer.write_bits(4, 0b1111).unwrap();
        assert_eq!(writer.into_bytes(), vec![0b1100_0000, 0b1111_1010]);
    }

    #[test]
    fn writer_ignores_value_bits_beyond_count() {
        let mut writer = BitWriter::new();
        writer.write_bits(3, 0xFF).unwrap();
        writer.write_bits(5, 0).unwrap();
        assert_eq!(writer.into_bytes(), vec![0b0000_0111]);
    }

    #[test]
    fn writer_discards_incomplete_trailing_byte() {
        let mut writer = BitWriter::new();
        writer.write_bits(6, 0b11_1111).unwrap();
        writer.write_bits(6, 0b11_1111).unwrap();
        assert_eq!(writer.position(), 12);
        assert_eq!(writer.into_bytes(), vec![0xFF]);
    }

    #[test]
    fn writer_reports_bits_to_byte_boundary() {
        let mut writer = BitWriter::new();
        assert_eq!(writer.bits_to_byte_boundary(), 0);
        writer.write_bits(6, 0).unwrap();
        assert_eq!(writer.bits_to_byte_boundary(), 2);
        writer.write_bits(2, 0).unwrap();
        assert_eq!(writer.bits_to_byte_boundary(), 0);
        writer.write_bits(1, 0).unwrap();
        assert_eq!(writer.bits_to_byte_boundary(), 7);
        writer.write_bits(7, 0b101_0101).unwrap();
        assert_eq!(writer.into_bytes(), vec![0x00, 0b1010_1010]);
    }

    #[test]
    fn writer_zero_width_write_is_a_no_op() {
        let mut writer = BitWriter::new();
        writer.write_bits(0, 0xFF).unwrap();
        assert_eq!(writer.position(), 0);
        assert!(writer.into_bytes().is_empty());
    }

    #[test]
    fn writer_rejects_unsupported_group_width() {
        let mut writer = BitWriter::new();
        assert_eq!(
            writer.write_bits(8, 0),
            Err(Base62Error::BitCursorOutOfBounds {
                offset: 0,
                total_bits: 0,
                count: 8,
            })
        );
    }

    #[test]
    fn writer_output_reads_back_through_reader() {
        let groups: [(u8, u8); 6] = [(6, 61), (5, 30), (6, 0), (4, 9), (6, 33), (5, 31)];
        let mut writer = BitWriter::new();
        for (count, value) in groups {
            writer.write_bits(count, value).unwrap();
        }
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 4);

        let mut reader = BitReader::new(&bytes);
        for (count, value) in groups {
            assert_eq!(reader.read_bits(count).unwrap(), value);
        }
    }
}
