//! Raw wire logging to disk.
//!
//! When enabled, appends every raw inbound protocol line to a daily log
//! file named `wire_<server>_<date>.log` in the configured directory
//! (default: `~/.local/share/crabwire/logs/`). Registered on the transport
//! as a raw-line observer; nothing in the shaping layer depends on it.

use crate::config::WireLogConfig;
use crate::transport::RawLineObserver;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Appends raw inbound lines to per-day log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct WireLogger {
    enabled: bool,
    log_dir: String,
    server: String,
    file_handles: Mutex<HashMap<String, fs::File>>,
}

impl WireLogger {
    pub fn new(config: &WireLogConfig, server: &str) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            server: server.to_string(),
            file_handles: Mutex::new(HashMap::new()),
        }
    }

    /// Package this logger as a transport observer.
    pub fn observer(self: &Arc<Self>) -> RawLineObserver {
        let logger = Arc::clone(self);
        Box::new(move |line| logger.log_line(line))
    }

    /// Append one raw line to today's log file. No-op if logging is
    /// disabled.
    pub fn log_line(&self, line: &str) {
        if !self.enabled {
            return;
        }

        // Sanitize server name for filename
        let safe_server: String = self
            .server
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("wire_{}_{}.log", safe_server, date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        let mut handles = self.file_handles.lock().unwrap();
        let handle = handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let timestamp = chrono::Local::now().format("%H:%M:%S");
        let _ = writeln!(handle, "[{}] {}", timestamp, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("crabwire-test-off-{}", std::process::id()));
        let config = WireLogConfig {
            enabled: false,
            log_dir: dir.to_string_lossy().into_owned(),
        };
        let logger = WireLogger::new(&config, "libera");
        logger.log_line(":server PING :token");
        assert!(!dir.exists());
    }

    #[test]
    fn test_lines_appended_to_daily_file() {
        let dir = std::env::temp_dir().join(format!("crabwire-test-log-{}", std::process::id()));
        let config = WireLogConfig {
            enabled: true,
            log_dir: dir.to_string_lossy().into_owned(),
        };
        let logger = WireLogger::new(&config, "libera");
        logger.log_line(":alice!u@h PRIVMSG #chan :hello");
        logger.log_line(":server PONG :token");

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let contents = fs::read_to_string(dir.join(format!("wire_libera_{}.log", date))).unwrap();
        assert!(contents.contains("PRIVMSG #chan :hello"));
        assert!(contents.contains("PONG"));
        let _ = fs::remove_dir_all(&dir);
    }
}
