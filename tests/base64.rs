use anyhow::Result;
use token_codec::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

/// Encode and Decode The value Passed through the generic dispatch
///
/// # Errors
///
/// This function will return an error if decoding failed.
fn encode_and_decode_handler<T>(engine: &T, value: impl AsRef<[u8]>, msg: &str) -> Result<()>
where
    T: Encoding<Error = DecodeError>,
{
    init_tracing();
    let enc_content = encode(engine, value.as_ref());

    println!("{} - {:?}", msg, enc_content);
    assert_eq!(decode(engine, &enc_content)?, value.as_ref());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::encode_and_decode_handler;
    use anyhow::Result;
    use token_codec::*;

    #[test]
    fn test_generic_dispatch() -> Result<()> {
        encode_and_decode_handler(&Base64Url, "ABCDGETAJHE", "BASE64URL")?;
        encode_and_decode_handler(&Base64Url, [0x00_u8, 0xff, 0x80, 0x7f], "BASE64URL - BINARY")
    }

    #[test]
    fn test_vectors() -> Result<()> {
        assert_eq!(base64_url_encode("Hello"), "SGVsbG8");
        assert_eq!(base64_url_encode(r#"{"alg":"HS256"}"#), "eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(base64_url_encode_bytes([0x48_u8, 0x65, 0x6c, 0x6c, 0x6f]), "SGVsbG8");

        assert_eq!(base64_url_decode("SGVsbG8")?, "Hello");
        assert_eq!(base64_url_decode("eyJhbGciOiJIUzI1NiJ9")?, r#"{"alg":"HS256"}"#);
        assert_eq!(base64_url_decode("SGVsbG8h")?, "Hello!");
        assert_eq!(base64_url_decode("SGk")?, "Hi");
        Ok(())
    }

    #[test]
    fn test_utf8_round_trip() -> Result<()> {
        let text = "Hello, World! 🌍 ünïcödé";
        assert_eq!(base64_url_decode(base64_url_encode(text))?, text);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<()> {
        assert_eq!(base64_url_encode_bytes(b""), "");
        assert_eq!(base64_url_decode_bytes("")?, Vec::<u8>::new());
        assert_eq!(base64_url_decode("")?, "");
        Ok(())
    }

    #[test]
    fn test_padding_tolerated() -> Result<()> {
        for padded in ["SGk", "SGk=", "SGk==", "SGk==="] {
            assert_eq!(base64_url_decode(padded)?, "Hi");
        }
        for padded in ["SA", "SA==", "SA="] {
            assert_eq!(base64_url_decode_bytes(padded)?, b"H");
        }
        Ok(())
    }

    #[test]
    fn test_malformed_text() {
        assert!(matches!(base64_url_decode_bytes("not valid text!"), Err(DecodeError::InvalidCharacter { offset: 3, byte: b' ' })));
        assert!(matches!(base64_url_decode("not valid text!"), Err(Error::Decode(_))));
        assert_eq!(base64_url_decode_bytes("abcde"), Err(DecodeError::InvalidLength(5)));

        // padding with nothing to pad, or more than a block can hold
        assert_eq!(base64_url_decode_bytes("="), Err(DecodeError::InvalidLength(1)));
        assert_eq!(base64_url_decode_bytes("===="), Err(DecodeError::InvalidLength(4)));
        assert_eq!(base64_url_decode_bytes("SGk====="), Err(DecodeError::InvalidLength(8)));
        assert!(matches!(base64_url_decode("SGk===="), Err(Error::Decode(DecodeError::InvalidLength(7)))));
    }

    #[test]
    fn test_invalid_utf8() {
        // [0xff, 0xfe] is never valid UTF-8
        let encoded = base64_url_encode_bytes([0xff_u8, 0xfe]);

        assert!(matches!(base64_url_decode(&encoded), Err(Error::Transcoding(_))));
        assert_eq!(base64_url_decode_lossy(&encoded).unwrap(), "\u{fffd}\u{fffd}");
    }
}

mod properties {
    use token_codec::*;

    quickcheck::quickcheck! {
        fn bytes_round_trip(bytes: Vec<u8>) -> bool {
            base64_url_decode_bytes(base64_url_encode_bytes(&bytes)) == Ok(bytes)
        }

        fn string_round_trip(text: String) -> bool {
            base64_url_decode(base64_url_encode(&text)) == Ok(text)
        }

        fn output_is_url_safe(bytes: Vec<u8>) -> bool {
            let encoded = base64_url_encode_bytes(&bytes);
            !encoded.contains(['+', '/', '='])
        }

        fn padding_does_not_change_output(bytes: Vec<u8>) -> bool {
            let encoded = base64_url_encode_bytes(&bytes);
            let padding = "=".repeat((4 - encoded.len() % 4) % 4);
            base64_url_decode_bytes(format!("{encoded}{padding}")) == Ok(bytes)
        }
    }
}
