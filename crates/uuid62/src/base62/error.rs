/// Errors that can occur while decoding Base62 or driving the bit cursors
/// directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base62Error {
    /// The input contained a byte outside the Base62 alphabet.
    ///
    /// Non-ASCII characters are reported on their first UTF-8 byte.
    #[error("invalid base62 symbol {byte:#04x} at index {index}")]
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending symbol in the input.
        index: usize,
    },

    /// A bit cursor was moved outside its buffer, or asked for a group width
    /// it does not support.
    ///
    /// This signals a bug in the caller of [`crate::BitReader`] or
    /// [`crate::BitWriter`], never malformed Base62 input.
    #[error("bit cursor out of bounds: offset {offset} of {total_bits} bits (group of {count})")]
    BitCursorOutOfBounds {
        /// Cursor position, in bits, at the time of the failed operation.
        offset: usize,
        /// Number of addressable bits in the buffer.
        total_bits: usize,
        /// Width of the requested group in bits.
        count: u8,
    },
}
