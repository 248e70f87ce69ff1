//! Encoding utilities: Base64, digests and hex.
//! All helpers are pure; text inputs are always hashed/encoded as UTF-8.

use base64ct::{Base64, Encoding};
use log::debug;
use sha2::{Digest, Sha256};

use crate::config::input_preview;
use crate::error::DecodeError;

// === BASE64 STANDARD (RFC 4648 §4, PADDED) ===

/// Encode the UTF-8 bytes of `input` as standard padded Base64.
pub fn base64_encode_string(input: &str) -> String {
    base64_encode_data(input.as_bytes())
}

/// Decode standard padded Base64 and interpret the result as UTF-8 text.
pub fn base64_decode_string(input: &str) -> Result<String, DecodeError> {
    let bytes = base64_decode_data(input)?;
    String::from_utf8(bytes).map_err(|e| {
        debug!("Base64 payload is not UTF-8 text: {}", e.utf8_error());
        DecodeError::from(e)
    })
}

/// Encode bytes to a standard base64 string
pub fn base64_encode_data(data: &[u8]) -> String {
    Base64::encode_string(data)
}

/// Decode a standard base64 string. Whitespace and the URL-safe alphabet are rejected.
pub fn base64_decode_data(input: &str) -> Result<Vec<u8>, DecodeError> {
    Base64::decode_vec(input).map_err(|e| {
        debug!("Rejected Base64 input {:?}: {}", input_preview(input), e);
        DecodeError::from(e)
    })
}

// === DIGESTS ===

/// MD5 of the UTF-8 bytes of `input`, as 32 lowercase hex characters.
pub fn md5_encode(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// SHA-256 of the UTF-8 bytes of `input`, as 64 lowercase hex characters.
pub fn sha256_encode(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

// === HEX ===

/// Lowercase hex rendering of `data`, two characters per byte.
pub fn hex_string_from_data(data: &[u8]) -> String {
    hex::encode(data)
}

/// Accepts upper- and lowercase digits.
pub fn data_from_hex_string(input: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(input).map_err(|e| {
        debug!("Rejected hex input {:?}: {}", input_preview(input), e);
        DecodeError::from(e)
    })
}
