use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::JsValue;

/// Encoding Utility Error Types
///
/// Each conversion reports one of three failure families so callers can tell
/// a bad Base64/hex payload apart from unrepresentable JSON input or
/// unparseable JSON text.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeError {
    /// Input is not standard padded Base64
    InvalidBase64(String),
    /// Decoded bytes are not valid UTF-8 text
    InvalidUtf8(String),
    /// Input is not an even-length hex string
    InvalidHex(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeError {
    /// NaN or an infinity somewhere in the input
    NonFiniteNumber(String),
    /// Input did not serialize to a JSON object
    NotADictionary(String),
    /// serde_json refused the input (e.g. a map key it cannot render as a string)
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    /// Input is not syntactically valid JSON
    InvalidJson(String),
    /// Valid JSON whose top-level value is not an object
    NotAnObject(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingError {
    Decode(DecodeError),
    Encode(EncodeError),
    Parse(ParseError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidBase64(msg) => write!(f, "Base64 decode error: {}", msg),
            DecodeError::InvalidUtf8(msg) => {
                write!(f, "Decoded bytes are not valid UTF-8: {}", msg)
            }
            DecodeError::InvalidHex(msg) => write!(f, "Hex decode error: {}", msg),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NonFiniteNumber(value) => {
                write!(f, "JSON cannot represent non-finite number {}", value)
            }
            EncodeError::NotADictionary(found) => {
                write!(f, "Expected a dictionary to encode, found {}", found)
            }
            EncodeError::Serialization(msg) => write!(f, "JSON encode error: {}", msg),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidJson(msg) => write!(f, "JSON parse error: {}", msg),
            ParseError::NotAnObject(found) => {
                write!(f, "Expected a JSON object at top level, found {}", found)
            }
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::Decode(err) => write!(f, "{}", err),
            EncodingError::Encode(err) => write!(f, "{}", err),
            EncodingError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DecodeError {}
impl std::error::Error for EncodeError {}
impl std::error::Error for ParseError {}

impl std::error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodingError::Decode(err) => Some(err),
            EncodingError::Encode(err) => Some(err),
            EncodingError::Parse(err) => Some(err),
        }
    }
}

impl From<DecodeError> for EncodingError {
    fn from(err: DecodeError) -> Self {
        EncodingError::Decode(err)
    }
}

impl From<EncodeError> for EncodingError {
    fn from(err: EncodeError) -> Self {
        EncodingError::Encode(err)
    }
}

impl From<ParseError> for EncodingError {
    fn from(err: ParseError) -> Self {
        EncodingError::Parse(err)
    }
}

impl From<base64ct::Error> for DecodeError {
    fn from(err: base64ct::Error) -> Self {
        DecodeError::InvalidBase64(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DecodeError::InvalidUtf8(err.utf8_error().to_string())
    }
}

impl From<hex::FromHexError> for DecodeError {
    fn from(err: hex::FromHexError) -> Self {
        DecodeError::InvalidHex(err.to_string())
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidJson(err.to_string())
    }
}

impl From<EncodingError> for JsValue {
    fn from(err: EncodingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<DecodeError> for JsValue {
    fn from(err: DecodeError) -> Self {
        EncodingError::from(err).into()
    }
}

impl From<EncodeError> for JsValue {
    fn from(err: EncodeError) -> Self {
        EncodingError::from(err).into()
    }
}

impl From<ParseError> for JsValue {
    fn from(err: ParseError) -> Self {
        EncodingError::from(err).into()
    }
}

// Result type alias for convenience
pub type EncodingResult<T> = Result<T, EncodingError>;
