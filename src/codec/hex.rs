//! Uppercase hex helpers for diagnostics and test vectors.

/// Errors that can occur while parsing hex text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HexError {
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),
}

/// Renders bytes as uppercase hex digits, two per byte, no separators.
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parses hex text back into bytes.
///
/// # Errors
/// `HexError::MalformedHex` on odd length or any non-hex-digit character.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>, HexError> {
    Ok(hex::decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let bytes = [0x21, 0x00, 0xff, 0x4a];
        let text = bytes_to_hex(&bytes);
        assert_eq!(text, "2100FF4A");
        assert_eq!(hex_to_bytes(&text).unwrap(), bytes);
    }

    #[test]
    fn empty_input() {
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn odd_length_is_malformed() {
        assert!(hex_to_bytes("ABC").is_err());
    }

    #[test]
    fn non_hex_digit_is_malformed() {
        assert!(hex_to_bytes("ZZ").is_err());
    }
}
