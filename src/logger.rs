use log::{Level, Log, Metadata, Record};

/// Prefix on every console line so encoding-utils output is easy to filter
/// out of a shared worker console.
const LINE_PREFIX: &str = "[encoding-utils]";

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Safe to call more than once; later calls only
/// adjust the max level.
pub fn init(level: Level) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level.to_level_filter());
}

/// `encoders`, `json`, `query`... rather than the full module path.
fn short_target(target: &str) -> &str {
    let within_crate = target
        .strip_prefix(env!("CARGO_CRATE_NAME"))
        .and_then(|rest| rest.strip_prefix("::"));
    match within_crate {
        Some(rest) => rest,
        None if target == env!("CARGO_CRATE_NAME") => "lib",
        None => target,
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {} {}: {}",
        LINE_PREFIX,
        record.level(),
        short_target(record.target()),
        record.args()
    )
}

fn sink_for(level: Level) -> fn(&str) {
    match level {
        Level::Error => console::error,
        Level::Warn => console::warn,
        Level::Info | Level::Debug | Level::Trace => console::log,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            sink_for(record.level())(&format_record(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn log(s: &str);

        #[wasm_bindgen(js_namespace = console, js_name = warn)]
        pub fn warn(s: &str);

        #[wasm_bindgen(js_namespace = console, js_name = error)]
        pub fn error(s: &str);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod console {
    pub fn log(s: &str) {
        println!("{s}");
    }

    pub fn warn(s: &str) {
        eprintln!("{s}");
    }

    pub fn error(s: &str) {
        eprintln!("{s}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_prefix_level_and_module() {
        let formatted = format_record(
            &Record::builder()
                .args(format_args!("decode failed"))
                .level(Level::Warn)
                .target(concat!(env!("CARGO_CRATE_NAME"), "::query"))
                .build(),
        );
        assert_eq!(formatted, "[encoding-utils] WARN query: decode failed");
    }

    #[test]
    fn foreign_targets_are_kept_whole() {
        assert_eq!(short_target("serde_json::de"), "serde_json::de");
        assert_eq!(short_target(env!("CARGO_CRATE_NAME")), "lib");
    }

    #[test]
    fn init_is_idempotent() {
        init(Level::Debug);
        init(Level::Info);
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }
}
