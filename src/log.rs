// src/log.rs
// File-backed debug log, separate from the operator-facing error log the
// store maintains. Off unless MDL_SCRAPE_DEBUG is set in the environment.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use chrono::Local;

static LOG_FILE: &str = "debug.log";
static LOG_LOCK: Mutex<()> = Mutex::new(());

pub fn enabled() -> bool {
    std::env::var_os("MDL_SCRAPE_DEBUG").is_some()
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    if !enabled() {
        return;
    }
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{stamp}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
