//! Serde module for 64-bit integers Discord sends as strings.
//!
//! Permission bitsets exceed what JSON numbers carry safely, so the API encodes
//! them as decimal strings. Older payloads use plain numbers; both are read.
//! Values are always written back as strings.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Serialize as a decimal string.
///
/// # Errors
/// Returns any serializer error when serialization fails.
pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Deserialize from a decimal string or a non-negative integer.
///
/// # Errors
/// Returns an error if the value is neither, or does not fit in a `u64`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(U64Visitor)
}

struct U64Visitor;

impl Visitor<'_> for U64Visitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an unsigned integer or a string containing one")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// The same encoding for optional fields.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some` as a decimal string and `None` as null.
    ///
    /// # Errors
    /// Returns any serializer error when serialization fails.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional string or integer.
    ///
    /// # Errors
    /// Returns an error if a present value is not a valid `u64`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super")] u64);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(v)| v))
    }
}
