//! Logging bridge for fontswap.
//!
//! Routes all `log::info!()` etc. to stderr (stdout carries the panel
//! protocol and must stay clean) and optionally to a file named by the
//! `FONTSWAP_LOG_FILE` environment variable. Level precedence: the
//! `--log-level` CLI flag, then the `FONTSWAP_LOG` environment variable,
//! then the configured default.

use std::fs::OpenOptions;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};
use parking_lot::Mutex;

/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "FONTSWAP_LOG";
/// Environment variable naming an additional log file target.
pub const LOG_FILE_ENV: &str = "FONTSWAP_LOG_FILE";

struct LogBridge {
    level: LevelFilter,
    file: Option<Mutex<std::fs::File>>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        eprintln!("{line}");
        if let Some(file) = &self.file {
            let _ = writeln!(file.lock(), "{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Install the bridge. `cli_level` (from `--log-level`) wins over
/// `FONTSWAP_LOG`, which wins over `config_level`.
pub fn init_log_bridge(cli_level: Option<LevelFilter>, config_level: LevelFilter) {
    let level = cli_level
        .or_else(|| {
            std::env::var(LOG_ENV)
                .ok()
                .and_then(|value| value.parse().ok())
        })
        .unwrap_or(config_level);

    let file = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(Mutex::new(file)),
            Err(err) => {
                eprintln!("fontswap: cannot open log file {path}: {err}");
                None
            }
        }
    });

    let bridge = LogBridge { level, file };
    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(level);
    }
}
