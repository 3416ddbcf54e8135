//! Serde module for optional fields that arrive as either a string or a number.
//!
//! Message nonces are echoed back in whatever form the sender used.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

/// Deserialize an optional string or integer into `Option<String>`.
///
/// # Errors
/// Returns an error if a present value is neither a string nor an integer.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Unsigned(n) => n.to_string(),
            StringOrNumber::Signed(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Nonce {
        #[serde(default, deserialize_with = "super::deserialize")]
        nonce: Option<String>,
    }

    #[test]
    fn test_nonce_forms() {
        let parse = |s: &str| serde_json::from_str::<Nonce>(s).unwrap().nonce;

        assert_eq!(parse(r#"{"nonce": "abc"}"#).as_deref(), Some("abc"));
        assert_eq!(parse(r#"{"nonce": 1234}"#).as_deref(), Some("1234"));
        assert_eq!(parse(r#"{"nonce": null}"#), None);
        assert_eq!(parse("{}"), None);
    }
}
