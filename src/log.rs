// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STATE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// `.catalog_tools/debug.log`, created on first use. None if the dir can't be made.
fn log_path() -> Option<&'static PathBuf> {
    LOG_PATH
        .get_or_init(|| {
            let dir = PathBuf::from(STATE_DIR);
            fs::create_dir_all(&dir).ok()?;
            Some(dir.join(LOG_FILE))
        })
        .as_ref()
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    let Some(path) = log_path() else { return };

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
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

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Warn-level logging (recoverable, but the user probably wants to know)
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log("WARN", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
