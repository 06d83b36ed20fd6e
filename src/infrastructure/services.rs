use chrono::{DateTime, Local};

use crate::domain::clock::Clock;
use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Logger writing to the browser console (stderr off the browser)
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    #[cfg(target_arch = "wasm32")]
    fn write(level: LogLevel, line: String) {
        let line = wasm_bindgen::JsValue::from(line);
        match level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(_level: LogLevel, line: String) {
        eprintln!("{}", line);
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            Self::write(entry.level, entry.format_line());
        }
    }
}

/// Wall clock of the host (the browser's, on wasm)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
