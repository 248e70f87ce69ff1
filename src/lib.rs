mod config;
mod encoders;
mod error;
mod json;
mod logger;
mod query;
#[cfg(test)]
mod tests;

use log::debug;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use config::{DEFAULT_SOURCE_TAG_VALUE, SOURCE_TAG_KEY, SOURCE_TAG_VALUE};
pub use encoders::{
    base64_decode_data, base64_decode_string, base64_encode_data, base64_encode_string,
    data_from_hex_string, hex_string_from_data, md5_encode, sha256_encode,
};
pub use error::{DecodeError, EncodeError, EncodingError, EncodingResult, ParseError};
pub use json::{
    decode_json_data_to_dictionary, decode_json_string_to_dictionary,
    encode_array_to_json_string, encode_dictionary_to_json_data,
    encode_dictionary_to_json_string, encode_dictionary_to_json_string_with_source, json_kind,
    JsonDictionary,
};
pub use query::{
    decode_query_string_to_dictionary, encode_dictionary_to_query_string, percent_decode,
    percent_encode_query_component, QueryDictionary,
};

#[wasm_bindgen(js_name = "initEncodingUtils")]
pub fn init_encoding_utils() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(config::CURRENT_LOG_LEVEL);
    debug!(
        "Encoding utils initialized (source tag {:?})",
        config::SOURCE_TAG_VALUE
    );
}

// === JS BOUNDARY HELPERS ===

fn js_to_json(value: JsValue) -> Result<serde_json::Value, EncodeError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| EncodeError::Serialization(format!("Invalid JS value: {}", e)))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to convert result to JS: {}", e)))
}

// === BASE64 / DIGEST / HEX EXPORTS ===

#[wasm_bindgen(js_name = "base64EncodeString")]
pub fn base64_encode_string_js(input: &str) -> String {
    base64_encode_string(input)
}

#[wasm_bindgen(js_name = "base64DecodeString")]
pub fn base64_decode_string_js(input: &str) -> Result<String, JsValue> {
    Ok(base64_decode_string(input)?)
}

#[wasm_bindgen(js_name = "base64EncodeData")]
pub fn base64_encode_data_js(data: &[u8]) -> String {
    base64_encode_data(data)
}

#[wasm_bindgen(js_name = "base64DecodeData")]
pub fn base64_decode_data_js(input: &str) -> Result<Vec<u8>, JsValue> {
    Ok(base64_decode_data(input)?)
}

#[wasm_bindgen(js_name = "md5Encode")]
pub fn md5_encode_js(input: &str) -> String {
    md5_encode(input)
}

#[wasm_bindgen(js_name = "sha256Encode")]
pub fn sha256_encode_js(input: &str) -> String {
    sha256_encode(input)
}

#[wasm_bindgen(js_name = "hexStringFromData")]
pub fn hex_string_from_data_js(data: &[u8]) -> String {
    hex_string_from_data(data)
}

#[wasm_bindgen(js_name = "dataFromHexString")]
pub fn data_from_hex_string_js(input: &str) -> Result<Vec<u8>, JsValue> {
    Ok(data_from_hex_string(input)?)
}

// === JSON EXPORTS ===

/// `array` must be a JS array; anything else is rejected.
#[wasm_bindgen(js_name = "encodeArrayToJsonString")]
pub fn encode_array_to_json_string_js(array: JsValue) -> Result<String, JsValue> {
    match js_to_json(array)? {
        serde_json::Value::Array(items) => Ok(encode_array_to_json_string(&items)?),
        other => Err(EncodeError::Serialization(format!(
            "Expected an array to encode, found {}",
            json_kind(&other)
        ))
        .into()),
    }
}

#[wasm_bindgen(js_name = "encodeDictionaryToJsonString")]
pub fn encode_dictionary_to_json_string_js(
    dictionary: JsValue,
    need_source: Option<bool>,
) -> Result<String, JsValue> {
    let value = js_to_json(dictionary)?;
    Ok(encode_dictionary_to_json_string_with_source(
        &value,
        need_source.unwrap_or(false),
    )?)
}

#[wasm_bindgen(js_name = "encodeDictionaryToJsonData")]
pub fn encode_dictionary_to_json_data_js(dictionary: JsValue) -> Result<Vec<u8>, JsValue> {
    let value = js_to_json(dictionary)?;
    Ok(encode_dictionary_to_json_data(&value)?)
}

#[wasm_bindgen(js_name = "decodeJsonDataToDictionary")]
pub fn decode_json_data_to_dictionary_js(data: &[u8]) -> Result<JsValue, JsValue> {
    let dictionary = decode_json_data_to_dictionary(data)?;
    to_js(&dictionary)
}

#[wasm_bindgen(js_name = "decodeJsonStringToDictionary")]
pub fn decode_json_string_to_dictionary_js(json: &str) -> Result<JsValue, JsValue> {
    let dictionary = decode_json_string_to_dictionary(json)?;
    to_js(&dictionary)
}

// === QUERY STRING EXPORTS ===

#[wasm_bindgen(js_name = "decodeQueryStringToDictionary")]
pub fn decode_query_string_to_dictionary_js(query: &str) -> Result<JsValue, JsValue> {
    to_js(&decode_query_string_to_dictionary(query))
}

/// Non-string values are rejected rather than stringified.
#[wasm_bindgen(js_name = "encodeDictionaryToQueryString")]
pub fn encode_dictionary_to_query_string_js(dictionary: JsValue) -> Result<String, JsValue> {
    let dictionary: QueryDictionary = serde_wasm_bindgen::from_value(dictionary).map_err(|e| {
        JsValue::from(EncodeError::Serialization(format!(
            "Query dictionary must map strings to strings: {}",
            e
        )))
    })?;
    Ok(encode_dictionary_to_query_string(&dictionary))
}
