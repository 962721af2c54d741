use crate::Base62Error;

/// A result type defaulting to the crate-wide [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `uuid62` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input could not be decoded as Base62.
    #[error(transparent)]
    Base62(#[from] Base62Error),

    /// A UUID byte buffer was not exactly [`crate::UUID_SIZE`] bytes long.
    ///
    /// This covers both too-short buffers and decoded Base62 strings that
    /// carry more or fewer than 128 bits.
    #[error("invalid uuid length: expected {expected} bytes, got {len}", expected = crate::UUID_SIZE)]
    InvalidLength {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },

    /// A string containing a `-` was not a valid hyphenated UUID.
    #[error("invalid hyphenated uuid: {0}")]
    Hyphenated(uuid::Error),
}
