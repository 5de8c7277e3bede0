//! Client options.
//!
//! [`Options`] is an explicit, immutable value handed to the connection at
//! construction; there is no process-wide default object mutated at runtime.
//! All fields have serde defaults so a TOML file containing only a `host`
//! works out of the box.

pub mod nickname;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use nickname::generate_nickname;

/// Connection options: identity, TLS posture, liveness/pacing policy, text
/// encoding, and the wire-log section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Hostname or IP address of the IRC server.
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub tls: bool,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default = "default_nickname")]
    pub nickname: String,
    #[serde(default)]
    pub alt_nicks: Vec<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub realname: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub nick_password: Option<String>,
    /// Channels joined automatically after registration.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Text encoding for the wire (UTF-8 when unset).
    #[serde(default)]
    pub encoding: Option<String>,
    /// Seconds of silence before the connection layer pings the server.
    #[serde(default)]
    pub ping_time: Option<u32>,
    /// Seconds to wait for a ping reply before giving the connection up.
    #[serde(default)]
    pub ping_timeout: Option<u32>,
    /// Flood-protection window length in seconds, enforced by the
    /// connection layer.
    #[serde(default)]
    pub burst_window_length: Option<u32>,
    /// Maximum messages sent within one burst window.
    #[serde(default)]
    pub max_messages_in_burst: Option<u32>,
    #[serde(default = "default_quit_message")]
    pub quit_message: String,
    #[serde(default)]
    pub wire_log: WireLogConfig,
}

impl Options {
    /// Options for `host` with everything else defaulted.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tls: true,
            accept_invalid_certs: false,
            nickname: generate_nickname(),
            alt_nicks: Vec::new(),
            username: None,
            realname: None,
            password: None,
            nick_password: None,
            channels: Vec::new(),
            encoding: None,
            ping_time: None,
            ping_timeout: None,
            burst_window_length: None,
            max_messages_in_burst: None,
            quit_message: default_quit_message(),
            wire_log: WireLogConfig::default(),
        }
    }
}

/// Raw inbound wire logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireLogConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for WireLogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_host() -> String {
    "irc.libera.chat".to_string()
}
fn default_port() -> u16 {
    6697
}
fn default_true() -> bool {
    true
}
fn default_nickname() -> String {
    generate_nickname()
}
fn default_quit_message() -> String {
    "crabwire".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/crabwire/logs".to_string()
}

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabwire")
        .join("config.toml")
}

/// Load options from `path`, or from the default config location when
/// `None`. A missing file yields [`Options::default`].
pub fn load_options(path: Option<&Path>) -> Result<Options> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_path);
    if !path.exists() {
        return Ok(Options::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read options from {}", path.display()))?;
    let options: Options =
        toml::from_str(&contents).with_context(|| "Failed to parse options file")?;
    Ok(options)
}

/// Persist options as TOML at `path`, or at the default config location
/// when `None`.
pub fn save_options(options: &Options, path: Option<&Path>) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents =
        toml::to_string_pretty(options).with_context(|| "Failed to serialize options")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write options to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let options: Options = toml::from_str("host = \"irc.example.net\"").unwrap();
        assert_eq!(options.host, "irc.example.net");
        assert_eq!(options.port, 6697);
        assert!(options.tls);
        assert!(!options.nickname.is_empty());
        assert!(!options.wire_log.enabled);
    }

    #[test]
    fn test_options_roundtrip() {
        let mut options = Options::new("irc.example.net");
        options.channels = vec!["#rust".into()];
        options.ping_time = Some(60);
        let text = toml::to_string_pretty(&options).unwrap();
        let back: Options = toml::from_str(&text).unwrap();
        assert_eq!(back.host, options.host);
        assert_eq!(back.channels, options.channels);
        assert_eq!(back.ping_time, Some(60));
    }
}
