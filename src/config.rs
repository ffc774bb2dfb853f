use std::{env, path::PathBuf, str::FromStr};

use anyhow::{Context, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => bail!("unknown STORAGE_BACKEND `{other}` (expected `memory` or `postgres`)"),
        }
    }
}

/// Ten years; keeps cookie Max-Age and expiry arithmetic well inside range.
pub const MAX_SESSION_TTL_HOURS: i64 = 87_600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub base_url: String,
    pub session_ttl_hours: i64,
    pub session_prune_interval_secs: u64,
    pub cookie_secure: bool,
    pub max_upload_bytes: usize,
    pub admin_username: String,
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) if database_url.is_some() => StorageBackend::Postgres,
            Err(_) => StorageBackend::Memory,
        };
        if backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set for the postgres storage backend");
        }

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let base_url = env::var("BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://{host}:{port}"));

        let config = Self {
            backend,
            database_url,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            base_url,
            session_ttl_hours: parse_var("SESSION_TTL_HOURS", 24)?,
            session_prune_interval_secs: parse_var("SESSION_PRUNE_INTERVAL_SECS", 86_400)?,
            cookie_secure: parse_var("COOKIE_SECURE", false)?,
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            host,
            port,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the session and upload layers cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            bail!(
                "SESSION_TTL_HOURS must be between 1 and {MAX_SESSION_TTL_HOURS}, got {}",
                self.session_ttl_hours
            );
        }
        if self.session_prune_interval_secs == 0 {
            bail!("SESSION_PRUNE_INTERVAL_SECS must be greater than 0");
        }
        if self.max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be greater than 0");
        }
        Ok(())
    }

    /// Configuration for in-process use (tests, tooling): memory backend, local defaults.
    pub fn local(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::Memory,
            database_url: None,
            host: "127.0.0.1".to_string(),
            port: 3000,
            upload_dir: upload_dir.into(),
            base_url: "http://127.0.0.1:3000".to_string(),
            session_ttl_hours: 24,
            session_prune_interval_secs: 86_400,
            cookie_secure: false,
            max_upload_bytes: 10 * 1024 * 1024,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: `{raw}`")),
        Err(_) => Ok(default),
    }
}
