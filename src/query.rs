//! Query-string helpers.
//!
//! Decoding never fails: malformed percent escapes are kept literally, and a
//! component whose escapes decode to invalid UTF-8 is kept undecoded.
//! Repeated keys keep their first value. `+` is not treated as a space.

use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

use crate::config::{input_preview, QUERY_KEY_VALUE_SEPARATOR, QUERY_PAIR_SEPARATOR, QUERY_PREFIX};

pub type QueryDictionary = BTreeMap<String, String>;

/// Everything outside the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) is escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-decode `input`, leaving malformed escapes as they are.
pub fn percent_decode(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            debug!(
                "Keeping {:?} undecoded: escapes form invalid UTF-8 ({})",
                input_preview(input),
                e
            );
            input.to_string()
        }
    }
}

/// Percent-encode a key or value with uppercase hex escapes.
pub fn percent_encode_query_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

/// Parse `a=1&b=hello%20world` into a dictionary.
///
/// A single leading `?` is ignored, empty segments and segments without `=`
/// are skipped, and only the first `=` splits key from value.
pub fn decode_query_string_to_dictionary(query: &str) -> QueryDictionary {
    let query = query.strip_prefix(QUERY_PREFIX).unwrap_or(query);
    let mut dictionary = QueryDictionary::new();

    for pair in query.split(QUERY_PAIR_SEPARATOR) {
        if pair.is_empty() {
            continue;
        }
        let Some((raw_key, raw_value)) = pair.split_once(QUERY_KEY_VALUE_SEPARATOR) else {
            debug!("Skipping query segment without a value: {:?}", input_preview(pair));
            continue;
        };
        dictionary
            .entry(percent_decode(raw_key))
            .or_insert_with(|| percent_decode(raw_value));
    }

    dictionary
}

/// Inverse of [`decode_query_string_to_dictionary`]: `k=v` pairs in key order, no leading `?`.
pub fn encode_dictionary_to_query_string(dictionary: &QueryDictionary) -> String {
    let mut query = String::new();
    for (key, value) in dictionary {
        if !query.is_empty() {
            query.push(QUERY_PAIR_SEPARATOR);
        }
        query.push_str(&percent_encode_query_component(key));
        query.push(QUERY_KEY_VALUE_SEPARATOR);
        query.push_str(&percent_encode_query_component(value));
    }
    query
}
