// === CONFIGURATION CONSTANTS ===
// Configuration values for the encoding utilities

/// Change this constant and recompile to adjust logging verbosity
/// Available levels: Error, Warn, Info, Debug, Trace
pub const CURRENT_LOG_LEVEL: log::Level = log::Level::Info;

// === JSON SOURCE TAG ===

/// Key of the marker field injected by `encode_dictionary_to_json_string_with_source`
pub const SOURCE_TAG_KEY: &str = "source";

/// Value of the marker field. Set `ENCODING_UTILS_SOURCE_TAG` at build time to override.
pub const SOURCE_TAG_VALUE: &str = match option_env!("ENCODING_UTILS_SOURCE_TAG") {
    Some(tag) => tag,
    None => DEFAULT_SOURCE_TAG_VALUE,
};

pub const DEFAULT_SOURCE_TAG_VALUE: &str = "rust";

// === QUERY STRINGS ===

pub const QUERY_PAIR_SEPARATOR: char = '&';
pub const QUERY_KEY_VALUE_SEPARATOR: char = '=';
pub const QUERY_PREFIX: char = '?';

// === LOGGING ===

/// Upper bound on how much of a rejected input is echoed into debug logs
pub const LOG_INPUT_PREVIEW_CHARS: usize = 32;

/// Truncated preview of caller input for log lines
pub fn input_preview(input: &str) -> String {
    let mut chars = input.chars();
    let preview: String = chars.by_ref().take(LOG_INPUT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}
