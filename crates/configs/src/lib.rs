use anyhow::{anyhow, Result};
use common::utils::logging::LogFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Unset fields (empty host, port 0, no worker count) are filled from the
/// environment, then from built-in defaults, during normalization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

/// Which account store backs the admin API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: String::new(), admin_role: default_admin_role() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }
fn default_admin_role() -> String { "admin".into() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`); a missing file falls back to
    /// defaults plus environment variables.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.normalize()?;
        self.auth.normalize_from_env();
        self.auth.validate()?;
        if self.store.backend == StoreBackend::Postgres {
            self.database.normalize_from_env();
            self.database.validate()?;
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn normalize_from_env(&mut self) {
        self.fill_from(|key| std::env::var(key).ok());
    }

    fn fill_from(&mut self, var: impl Fn(&str) -> Option<String>) {
        if self.host.trim().is_empty() {
            if let Some(host) = var("SERVER_HOST") {
                self.host = host;
            }
        }
        if self.port == 0 {
            if let Some(port) = var("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
                self.port = port;
            }
        }
        if matches!(self.worker_threads, None | Some(0)) {
            if let Some(w) = var("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
                self.worker_threads = Some(w);
            }
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            self.port = 8080;
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            if let Ok(secret) = std::env::var("JWT_SECRET") {
                self.jwt_secret = secret;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!("auth.jwt_secret is empty; set it in config.toml or JWT_SECRET"));
        }
        if self.admin_role.trim().is_empty() {
            return Err(anyhow!("auth.admin_role must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let mut cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 0);
        cfg.server.normalize().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.backend, StoreBackend::Postgres);
        assert_eq!(cfg.auth.admin_role, "admin");
        assert_eq!(cfg.log.format, LogFormat::Compact);
        assert!(cfg.database.run_migrations);
    }

    #[test]
    fn memory_backend_skips_database_checks() {
        let mut cfg = parse(
            r#"
            [store]
            backend = "memory"

            [auth]
            jwt_secret = "s3cret"
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    const SERVER_ENV: &[(&str, &str)] =
        &[("SERVER_HOST", "0.0.0.0"), ("SERVER_PORT", "9090"), ("TOKIO_WORKER_THREADS", "8")];

    #[test]
    fn server_file_values_win_over_env() {
        let mut cfg = parse(
            r#"
            [server]
            host = "10.0.0.1"
            port = 3000
            worker_threads = 2
            "#,
        )
        .unwrap();
        cfg.server.fill_from(env_of(SERVER_ENV));
        assert_eq!(cfg.server.host, "10.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(2));
    }

    #[test]
    fn server_env_fills_omitted_values() {
        let mut cfg = parse("[server]\nport = 3000\n").unwrap();
        cfg.server.fill_from(env_of(SERVER_ENV));
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(8));

        let mut cfg = parse("").unwrap();
        cfg.server.fill_from(env_of(&[("SERVER_PORT", "not-a-port")]));
        cfg.server.normalize().unwrap();
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn database_url_scheme_is_checked() {
        let db = DatabaseConfig { url: "mysql://localhost/db".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
        let db = DatabaseConfig { url: "postgres://localhost/db".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_ok());
    }

    #[test]
    fn blank_admin_role_is_rejected() {
        let auth = AuthConfig { jwt_secret: "x".into(), admin_role: " ".into() };
        assert!(auth.validate().is_err());
    }
}
