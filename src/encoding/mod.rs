pub mod base64;
pub mod hex;

/// A binary-to-text codec.
///
/// Encoding is total. Decoding fails on malformed text.
pub trait Encoding {
    type Error;

    // Tags trace events
    const NAME: &'static str;

    fn encode(&self, input: impl AsRef<[u8]>) -> String;

    fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Self::Error>;
}

pub fn encode<T>(enc: &T, input: impl AsRef<[u8]>) -> String
where
    T: Encoding,
{
    let input = input.as_ref();
    trace_codec!("encode", T::NAME, input.len());
    enc.encode(input)
}

pub fn decode<T>(dec: &T, input: impl AsRef<[u8]>) -> Result<Vec<u8>, T::Error>
where
    T: Encoding,
{
    let input = input.as_ref();
    trace_codec!("decode", T::NAME, input.len());
    dec.decode(input)
}
