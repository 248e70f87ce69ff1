//! JSON encode/decode between Rust values and dictionaries.
//!
//! Encoders accept any `Serialize` value; the dictionary entry points require
//! it to serialize to a JSON object. Decoders always return a
//! [`JsonDictionary`] and reject any other top-level value.

mod finite;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{input_preview, SOURCE_TAG_KEY, SOURCE_TAG_VALUE};
use crate::error::{EncodeError, ParseError};

pub(crate) use finite::ensure_finite;

/// Key-unique JSON object.
pub type JsonDictionary = Map<String, Value>;

/// Name of the JSON kind of `value`, as reported in errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn to_dictionary<T: Serialize + ?Sized>(dictionary: &T) -> Result<JsonDictionary, EncodeError> {
    ensure_finite(dictionary)?;
    match serde_json::to_value(dictionary)? {
        Value::Object(map) => Ok(map),
        other => Err(EncodeError::NotADictionary(json_kind(&other).to_string())),
    }
}

// === ENCODERS ===

pub fn encode_array_to_json_string<T: Serialize>(array: &[T]) -> Result<String, EncodeError> {
    ensure_finite(array)?;
    Ok(serde_json::to_string(array)?)
}

pub fn encode_dictionary_to_json_string<T: Serialize + ?Sized>(
    dictionary: &T,
) -> Result<String, EncodeError> {
    encode_dictionary_to_json_string_with_source(dictionary, false)
}

/// Encode a dictionary, optionally tagging it with
/// `"source": SOURCE_TAG_VALUE`. An existing `"source"` entry is overwritten.
pub fn encode_dictionary_to_json_string_with_source<T: Serialize + ?Sized>(
    dictionary: &T,
    need_source: bool,
) -> Result<String, EncodeError> {
    let mut map = to_dictionary(dictionary)?;
    if need_source {
        map.insert(
            SOURCE_TAG_KEY.to_string(),
            Value::String(SOURCE_TAG_VALUE.to_string()),
        );
    }
    Ok(serde_json::to_string(&map)?)
}

pub fn encode_dictionary_to_json_data<T: Serialize + ?Sized>(
    dictionary: &T,
) -> Result<Vec<u8>, EncodeError> {
    let map = to_dictionary(dictionary)?;
    Ok(serde_json::to_vec(&map)?)
}

// === DECODERS ===

fn expect_object(value: Value) -> Result<JsonDictionary, ParseError> {
    match value {
        Value::Object(map) => Ok(map),
        other => {
            let kind = json_kind(&other);
            debug!("Top-level JSON value is {}, expected object", kind);
            Err(ParseError::NotAnObject(kind.to_string()))
        }
    }
}

pub fn decode_json_data_to_dictionary(data: &[u8]) -> Result<JsonDictionary, ParseError> {
    let value: Value = serde_json::from_slice(data).map_err(|e| {
        debug!("Rejected JSON data ({} bytes): {}", data.len(), e);
        ParseError::from(e)
    })?;
    expect_object(value)
}

pub fn decode_json_string_to_dictionary(json: &str) -> Result<JsonDictionary, ParseError> {
    let value: Value = serde_json::from_str(json).map_err(|e| {
        debug!("Rejected JSON text {:?}: {}", input_preview(json), e);
        ParseError::from(e)
    })?;
    expect_object(value)
}
