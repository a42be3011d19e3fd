//! Base64URL and hex codecs for token segments, signatures and digests.
//!
//! ```rust
//! use token_codec::{base64_url_decode, base64_url_encode};
//!
//! let payload = base64_url_encode(r#"{"sub":"12345"}"#);
//! assert_eq!(base64_url_decode(&payload).unwrap(), r#"{"sub":"12345"}"#);
//! ```

#[macro_use]
mod macros;

pub mod encoding;
pub mod error;
#[cfg(feature = "serde")]
pub mod formats;

//  - Re - export
pub use {
    encoding::{
        base64::{
            decode as base64_url_decode, decode_bytes as base64_url_decode_bytes, decode_lossy as base64_url_decode_lossy, encode as base64_url_encode,
            encode_bytes as base64_url_encode_bytes, Base64Url,
        },
        decode, encode,
        hex::{bytes_to_hex, hex_to_bytes, Hex},
        Encoding,
    },
    error::{DecodeError, Error},
};
