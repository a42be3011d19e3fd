use super::Encoding;
use crate::error::{DecodeError, Error};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

/// URL-safe Base64 (RFC 4648 §5), unpadded on output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Url;

const PAD: u8 = b'=';

// A 4-symbol block never needs more than 3 padding characters.
const MAX_PADDING: usize = 3;

const URL_SAFE_NO_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, GeneralPurposeConfig::new().with_encode_padding(false));

// Decoding runs over the standard alphabet once `-` and `_` are mapped back, so `+` and `/` are accepted too.
// Padding is stripped before the engine sees the text.
const STANDARD_UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

impl Encoding for Base64Url {
    type Error = DecodeError;

    const NAME: &'static str = "base64url";

    fn encode(&self, input: impl AsRef<[u8]>) -> String {
        encode_bytes(input)
    }

    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Self::Error> {
        decode_bytes(input)
    }
}

/// Encode a UTF-8 string.
///
/// ```
/// assert_eq!(token_codec::encoding::base64::encode(r#"{"alg":"HS256"}"#), "eyJhbGciOiJIUzI1NiJ9");
/// ```
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Encode raw bytes, e.g. a signature.
pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode to raw bytes.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] for bytes outside the alphabet and
/// [`DecodeError::InvalidLength`] when the unpadded length is `1 mod 4`, the
/// padding run is longer than three, or the text is nothing but padding.
pub fn decode_bytes(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    let unpadded = strip_padding(input);
    let padding = input.len() - unpadded.len();

    ensure!(padding <= MAX_PADDING, DecodeError::InvalidLength(input.len()));
    ensure!(input.is_empty() || !unpadded.is_empty(), DecodeError::InvalidLength(input.len()));
    ensure!(unpadded.len() % 4 != 1, DecodeError::InvalidLength(input.len()));

    let standard = unpadded
        .iter()
        .map(|&byte| match byte {
            | b'-' => b'+',
            | b'_' => b'/',
            | other => other,
        })
        .collect::<Vec<u8>>();

    STANDARD_UNPADDED.decode(standard).map_err(|err| DecodeError::from_base64(err, input.len()))
}

/// Decode to a UTF-8 string.
///
/// # Errors
///
/// [`Error::Decode`] for malformed text, [`Error::Transcoding`] when the
/// decoded bytes are not valid UTF-8.
pub fn decode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Ok(String::from_utf8(decode_bytes(input)?)?)
}

/// Decode to a string, replacing invalid UTF-8 sequences with U+FFFD.
pub fn decode_lossy(input: impl AsRef<[u8]>) -> Result<String, DecodeError> {
    decode_bytes(input).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn strip_padding(input: &[u8]) -> &[u8] {
    let end = input.iter().rposition(|&byte| byte != PAD).map_or(0, |last| last + 1);
    &input[..end]
}
