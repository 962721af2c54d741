use crate::{Error, Result, uuid_from_base62};
use uuid::Uuid;

/// A textual UUID, classified by the separator heuristic.
///
/// Anything containing a `-` is taken to be the canonical hyphenated
/// hexadecimal form (`86559453-e224-4921-baee-6fb5c0252e85`); anything else is
/// treated as Base62. The Base62 alphabet has no `-`, so the two never
/// overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UuidText<'a> {
    /// Canonical hyphenated hexadecimal.
    Hyphenated(&'a str),
    /// Bit-packed Base62.
    Base62(&'a str),
}

impl<'a> UuidText<'a> {
    /// Classifies `input` after trimming surrounding whitespace.
    #[must_use]
    pub fn classify(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.contains('-') {
            Self::Hyphenated(trimmed)
        } else {
            Self::Base62(trimmed)
        }
    }

    /// Parses the classified text with the matching decoder.
    ///
    /// # Errors
    ///
    /// - [`Error::Hyphenated`] if hyphenated text is not a valid UUID.
    /// - Any error of [`uuid_from_base62`] for Base62 text.
    pub fn parse(self) -> Result<Uuid> {
        match self {
            Self::Hyphenated(text) => Uuid::try_parse(text).map_err(Error::Hyphenated),
            Self::Base62(text) => uuid_from_base62(text),
        }
    }
}

/// Parses a UUID given either as Base62 or in hyphenated form.
///
/// # Errors
///
/// See [`UuidText::parse`].
///
/// # Example
///
/// ```
/// use uuid62::parse_uuid;
///
/// let a = parse_uuid("GWFlTJOJJFiuuftaBuEXKE").unwrap();
/// let b = parse_uuid("86559453-e224-4921-baee-6fb5c0252e85").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_uuid(input: &str) -> Result<Uuid> {
    UuidText::classify(input).parse()
}
