use std::string::FromUtf8Error;
use thiserror::Error;

/// Malformed encoded text.
///
/// Shared by the Base64URL and hex decoders. Offsets and lengths refer to the
/// text as the caller passed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid character '{}' at offset {offset}", .byte.escape_ascii())]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("invalid length {0}, cannot form complete units")]
    InvalidLength(usize),
}

/// Failure of a text-level decode, i.e. one that ends in a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Transcoding(#[from] FromUtf8Error),
}

impl DecodeError {
    /// Map an engine error onto the text the caller passed, `len` bytes long.
    pub(crate) fn from_base64(value: base64::DecodeError, len: usize) -> Self {
        match value {
            | base64::DecodeError::InvalidByte(offset, byte) | base64::DecodeError::InvalidLastSymbol(offset, byte) => {
                DecodeError::InvalidCharacter { offset, byte }
            }
            | base64::DecodeError::InvalidLength(_) | base64::DecodeError::InvalidPadding => DecodeError::InvalidLength(len),
        }
    }
}
