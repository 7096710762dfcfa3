use std::path::PathBuf;

use serde::Deserialize;

/// Server configuration.
///
/// Loaded from a YAML file when `CONFIG_FILE` is set, otherwise from
/// individual environment variables with built-in defaults.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the listener binds to (env: `LISTEN`).
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Identifier sent in the `Server:` header and substituted for the
    /// server-name template token in text bodies (env: `SERVER_NAME`).
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Directory request targets resolve against (env: `WEB_ROOT`).
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_server_name() -> String {
    "tinyserv".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("CONFIG_FILE") {
            let raw = std::fs::read_to_string(&path)?;
            let cfg = serde_yaml::from_str(&raw)?;
            return Ok(cfg);
        }
        Ok(Self::from_env())
    }

    pub fn from_env() -> Self {
        let listen_addr = std::env::var("LISTEN")
            .unwrap_or_else(|_| default_listen_addr());
        let server_name = std::env::var("SERVER_NAME")
            .unwrap_or_else(|_| default_server_name());
        let root = std::env::var("WEB_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_root());
        Self { listen_addr, server_name, root }
    }
}
