use super::Encoding;
use crate::error::DecodeError;
use hex::FromHexError;

/// Lowercase hexadecimal, two digits per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl Encoding for Hex {
    type Error = DecodeError;

    const NAME: &'static str = "hex";

    fn encode(&self, input: impl AsRef<[u8]>) -> String {
        bytes_to_hex(input)
    }

    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Self::Error> {
        hex_to_bytes(input)
    }
}

/// ```
/// assert_eq!(token_codec::encoding::hex::bytes_to_hex([0xde_u8, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn bytes_to_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(input)
}

/// Parse hex text of either case.
///
/// # Errors
///
/// [`DecodeError::InvalidLength`] on odd length, [`DecodeError::InvalidCharacter`]
/// at the first non-hex digit.
pub fn hex_to_bytes(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();

    ensure!(input.len() % 2 == 0, DecodeError::InvalidLength(input.len()));

    hex::decode(input).map_err(|err| match err {
        | FromHexError::InvalidHexCharacter { index, .. } => DecodeError::InvalidCharacter { offset: index, byte: input[index] },
        | FromHexError::OddLength | FromHexError::InvalidStringLength => DecodeError::InvalidLength(input.len()),
    })
}
