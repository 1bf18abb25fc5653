use anyhow::Context;
use serde::Deserialize;
use std::{fs, io, path::Path};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_ROWS_PATH: &str = "/api/table-rows";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub listen: Option<String>,
    // Path the billing rows are served at. Must start with '/'.
    // Defaults to `/api/table-rows`.
    pub rows_path: Option<String>,
    // Wrap the router in a permissive CORS layer so browser front ends on
    // other origins can fetch the rows. Defaults to false.
    pub cors_permissive: Option<bool>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str =
            fs::read_to_string(path).with_context(|| format!("reading config file '{}'", path))?;
        toml::from_str(&cfg_str).with_context(|| format!("parsing config file '{}'", path))
    }

    /// Loads `path`, except that a missing default `config.toml` yields the
    /// built-in defaults. An explicitly named file must exist.
    pub fn load(path: &str, explicit: bool) -> anyhow::Result<Self> {
        if !explicit && !Path::new(path).exists() {
            info!("No {} found, using built-in defaults", path);
            return Ok(Config::default());
        }
        Self::from_file(path).map_err(|e| match e.downcast_ref::<io::Error>() {
            Some(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                anyhow::anyhow!("config file '{}' does not exist", path)
            }
            _ => e,
        })
    }

    pub fn listen(&self) -> &str {
        self.listen.as_deref().unwrap_or(DEFAULT_LISTEN)
    }

    pub fn rows_path(&self) -> &str {
        self.rows_path.as_deref().unwrap_or(DEFAULT_ROWS_PATH)
    }
}
