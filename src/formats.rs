//! Serde helpers for byte fields carried as text.
//!
//! ```rust
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Signed {
//!     #[serde(with = "token_codec::formats::base64url")]
//!     signature: Vec<u8>,
//!     #[serde(with = "token_codec::formats::hex")]
//!     digest: Vec<u8>,
//! }
//!
//! let signed = Signed { signature: b"Hello".to_vec(), digest: vec![0xde, 0xad] };
//! let json = serde_json::to_string(&signed).unwrap();
//! assert_eq!(json, r#"{"signature":"SGVsbG8","digest":"dead"}"#);
//! ```

use crate::encoding::Encoding;
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
use std::borrow::Cow;

fn serialize_with<S: Serializer>(serializer: S, codec: impl Encoding, bytes: &[u8]) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&codec.encode(bytes))
}

fn deserialize_with<'de, D, E>(deserializer: D, codec: E) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
    E: Encoding,
    E::Error: std::fmt::Display,
{
    let s = Cow::<'de, str>::deserialize(deserializer)?;
    codec.decode(s.as_bytes()).map_err(D::Error::custom)
}

/// Unpadded Base64URL text.
pub mod base64url {
    use super::*;
    use crate::encoding::base64::Base64Url;

    pub fn serialize<S: Serializer>(bytes: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(serializer, Base64Url, bytes.as_ref())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        deserialize_with(deserializer, Base64Url)
    }
}

/// Lowercase hex text. Either case is accepted on input.
pub mod hex {
    use super::*;
    use crate::encoding::hex::Hex;

    pub fn serialize<S: Serializer>(bytes: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(serializer, Hex, bytes.as_ref())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        deserialize_with(deserializer, Hex)
    }
}
