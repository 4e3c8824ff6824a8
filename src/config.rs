//! Configuration module
//!
//! Reads `config.toml` (see [`default_config_path`]); every section and field
//! falls back to its default so a partial file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::{DatabaseConfig, JwtConfig};
use crate::shared::InfraError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TYREHUB_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub security: SecuritySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds allowed for cleanup after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Full connection URL; takes precedence over `sqlite_path`
    pub url: Option<String>,
    pub sqlite_path: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            sqlite_path: "./tyrehub.db".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseSettings {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => DatabaseConfig::sqlite(&self.sqlite_path).url,
        }
    }

    pub fn to_database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.connection_url(),
            max_connections: self.max_connections,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Identity subjects allowed to use the admin endpoints
    pub admin_subjects: Vec<String>,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            jwt_issuer: jwt.issuer,
            admin_subjects: Vec::new(),
        }
    }
}

impl std::fmt::Debug for SecuritySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecuritySettings")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("admin_subjects", &self.admin_subjects)
            .finish()
    }
}

impl SecuritySettings {
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            issuer: self.jwt_issuer.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load and parse the file at `path`, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let raw = std::fs::read_to_string(path)?;
        let mut cfg = Self::from_toml(&raw)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        toml::from_str(raw).map_err(|e| InfraError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), InfraError> {
        let text = toml::to_string_pretty(self).map_err(|e| InfraError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// `DATABASE_URL` and `JWT_SECRET` win over the file
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("JWT_SECRET").ok(),
        );
    }

    fn apply_overrides(&mut self, database_url: Option<String>, jwt_secret: Option<String>) {
        if let Some(url) = database_url.filter(|v| !v.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(secret) = jwt_secret.filter(|v| !v.is_empty()) {
            self.security.jwt_secret = secret;
        }
    }
}

/// `$TYREHUB_CONFIG`, or `<config dir>/tyrehub/config.toml`
pub fn default_config_path() -> PathBuf {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(explicit);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tyrehub")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.api_port, 8080);
        assert_eq!(cfg.logging.format, LogFormat::Pretty);
        assert!(cfg.security.admin_subjects.is_empty());
        assert_eq!(cfg.database.connection_url(), "sqlite://./tyrehub.db?mode=rwc");
    }

    #[test]
    fn parses_partial_sections() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            api_port = 3000

            [database]
            sqlite_path = "/var/lib/tyrehub/data.db"

            [security]
            jwt_issuer = "https://id.example.com"
            admin_subjects = ["sub-admin"]

            [logging]
            level = "debug,sea_orm=warn"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.address(), "0.0.0.0:3000");
        assert_eq!(
            cfg.database.connection_url(),
            "sqlite:///var/lib/tyrehub/data.db?mode=rwc"
        );
        assert_eq!(cfg.security.jwt_config().issuer, "https://id.example.com");
        assert_eq!(cfg.security.admin_subjects, vec!["sub-admin"]);
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn explicit_url_beats_sqlite_path() {
        let mut cfg = AppConfig::default();
        cfg.database.url = Some("postgres://localhost/tyrehub".into());
        assert_eq!(cfg.database.connection_url(), "postgres://localhost/tyrehub");

        cfg.database.url = Some("  ".into());
        assert!(cfg.database.connection_url().starts_with("sqlite://"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(Some("sqlite::memory:".into()), Some("s3cret".into()));
        assert_eq!(cfg.database.connection_url(), "sqlite::memory:");
        assert_eq!(cfg.security.jwt_secret, "s3cret");

        cfg.apply_overrides(Some(String::new()), None);
        assert_eq!(cfg.database.connection_url(), "sqlite::memory:");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let err = AppConfig::from_toml("[server\napi_port = ").unwrap_err();
        assert!(matches!(err, InfraError::Config(_)));
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("tyrehub-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.server.api_port = 9999;
        cfg.save(&path).unwrap();

        let loaded = AppConfig::from_toml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.server.api_port, 9999);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
