use crate::{Uuid62, parse_uuid, uuid_to_base62};
use core::{fmt, marker::PhantomData};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use uuid::Uuid;

/// Visitor accepting a string in either textual UUID form.
struct UuidTextVisitor<T>(PhantomData<T>);

impl<T: From<Uuid>> de::Visitor<'_> for UuidTextVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a base62 or hyphenated UUID string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_uuid(v).map(T::from).map_err(de::Error::custom)
    }
}

impl Serialize for Uuid62 {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uuid62 {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(UuidTextVisitor(PhantomData))
    }
}

/// Serde adapter for plain [`Uuid`] fields: serializes as Base62 and
/// deserializes from either Base62 or the hyphenated form.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use uuid62::Uuid;
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "uuid62::as_base62")]
///     id: Uuid,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"id":"86559453-e224-4921-baee-6fb5c0252e85"}"#).unwrap();
/// assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"id":"GWFlTJOJJFiuuftaBuEXKE"}"#);
/// ```
pub mod as_base62 {
    use super::*;

    pub fn serialize<S>(id: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&uuid_to_base62(*id))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(UuidTextVisitor(PhantomData))
    }
}

/// Like [`as_base62`] for `Option<Uuid>` fields; `None` maps to `null`.
pub mod as_base62_option {
    use super::*;

    pub fn serialize<S>(id: &Option<Uuid>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.map(Uuid62).serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Uuid>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Uuid62>::deserialize(d)?.map(Uuid62::into_inner))
    }
}
