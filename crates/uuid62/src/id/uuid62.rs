use crate::{Error, encode, parse_uuid, uuid_to_bytes};
use core::{fmt, ops::Deref, str::FromStr};
use uuid::Uuid;

/// A [`Uuid`] whose textual form is Base62.
///
/// `Display` writes Base62; `FromStr` accepts either Base62 or the canonical
/// hyphenated form (see [`crate::UuidText`]). With the `serde` feature the
/// same rules apply to serialization, which makes `Uuid62` usable directly as
/// a JSON field or as a URL path/query parameter.
///
/// # Example
///
/// ```
/// use uuid62::Uuid62;
///
/// let id: Uuid62 = "86559453-e224-4921-baee-6fb5c0252e85".parse().unwrap();
/// assert_eq!(id.to_string(), "GWFlTJOJJFiuuftaBuEXKE");
/// assert_eq!("GWFlTJOJJFiuuftaBuEXKE".parse::<Uuid62>().unwrap(), id);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uuid62(pub Uuid);

impl Uuid62 {
    /// Wraps a [`Uuid`].
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the wrapped [`Uuid`].
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns the canonical hyphenated form, for when the long form is
    /// wanted explicitly.
    #[must_use]
    pub const fn hyphenated(&self) -> uuid::fmt::Hyphenated {
        self.0.hyphenated()
    }
}

impl fmt::Display for Uuid62 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&uuid_to_bytes(self.0)))
    }
}

impl FromStr for Uuid62 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_uuid(s).map(Self)
    }
}

impl Deref for Uuid62 {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Uuid> for Uuid62 {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for Uuid62 {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<Uuid62> for Uuid {
    fn from(id: Uuid62) -> Self {
        id.0
    }
}
