//! Console Logging
//!
//! A `log` backend that writes to the browser console, one console method
//! per level so devtools filtering works.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[portfolio_site::content::loader] message` → `[content::loader] message`
fn format_line(target: &str, message: &str) -> String {
    let target = target.strip_prefix("portfolio_site::").unwrap_or(target);
    format!("[{}] {}", target, message)
}

/// Install the console logger. Calling it twice keeps the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Styled greeting in the devtools console
pub fn banner() {
    console::log_2(
        &JsValue::from_str("%c Welcome to my Portfolio! "),
        &JsValue::from_str(
            "background: linear-gradient(135deg, #00f0ff, #7b2dff); color: white; font-size: 16px; padding: 10px; border-radius: 5px;",
        ),
    );
    console::log_2(
        &JsValue::from_str("%c Built with passion and curiosity "),
        &JsValue::from_str("color: #00f0ff; font-size: 12px;"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_crate_prefix() {
        assert_eq!(format_line("portfolio_site::content::loader", "ok"), "[content::loader] ok");
        assert_eq!(format_line("dom_listeners", "x"), "[dom_listeners] x");
    }
}
