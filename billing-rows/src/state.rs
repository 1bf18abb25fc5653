use crate::config::Config;
use crate::records::RecordListProvider;
use std::net::SocketAddr;
use tracing::{debug, info, warn};

pub const HEALTH_PATH: &str = "/health";

pub struct AppState {
    pub provider: RecordListProvider,
    pub listen: SocketAddr,
    pub rows_path: String,
    pub cors_permissive: bool,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let listen: SocketAddr = cfg
            .listen()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address '{}': {}", cfg.listen(), e))?;

        // Validate the rows path at startup so a typo fails fast instead of 404ing
        let rows_path = cfg.rows_path();
        if !rows_path.starts_with('/') {
            anyhow::bail!("Invalid rows_path '{}': must start with '/'", rows_path);
        }
        if rows_path == HEALTH_PATH {
            anyhow::bail!("Invalid rows_path '{}': reserved for health checks", rows_path);
        }
        // Router treats ':' and '*' as captures and panics on unnamed ones
        if rows_path.contains([':', '*']) {
            anyhow::bail!(
                "Invalid rows_path '{}': path parameters and wildcards are not allowed",
                rows_path
            );
        }

        let provider = RecordListProvider::fixed();
        info!(
            "Serving {} billing rows at GET {}",
            provider.list_records().len(),
            rows_path
        );

        let cors_permissive = cfg.cors_permissive.unwrap_or(false);
        if cors_permissive {
            warn!("Permissive CORS enabled: any origin may fetch {}", rows_path);
        } else {
            debug!("Permissive CORS disabled");
        }

        Ok(AppState {
            provider,
            listen,
            rows_path: rows_path.to_string(),
            cors_permissive,
        })
    }
}
