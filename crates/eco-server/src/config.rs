use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use eco_store::StoreConfig;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Leaderboard size when the request does not specify one.
    pub default_leaderboard_limit: usize,
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            default_leaderboard_limit: 10,
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_store::{IdScheme, OrphanPolicy};
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8787".parse::<SocketAddr>().unwrap());
        assert_eq!(c.default_leaderboard_limit, 10);
        assert_eq!(c.store, StoreConfig::default());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:9000"

            [store]
            orphan_comments = "allow"
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.default_leaderboard_limit, 10);
        assert_eq!(c.store.orphan_comments, OrphanPolicy::Allow);
        assert_eq!(c.store.id_scheme, IdScheme::Sequential);
        assert!(c.store.seed);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_leaderboard_limit = 3").unwrap();
        writeln!(file, "[store]").unwrap();
        writeln!(file, "id_scheme = \"uuid\"").unwrap();

        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.default_leaderboard_limit, 3);
        assert_eq!(c.store.id_scheme, IdScheme::Uuid);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
