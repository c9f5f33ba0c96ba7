use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Port the service listens on unless `PORT` overrides it.
pub const DEFAULT_PORT: u16 = 8010;

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Database credentials. Host and port come from the driver defaults.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Connection options with TLS disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .username(&self.username)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// database credentials, which are read as-is (empty when unset).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8010`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Credentials from `APP_DB_USERNAME`, `APP_DB_PASSWORD`, `APP_DB_NAME`.
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8010`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_DB_USERNAME`      | empty                      |
    /// | `APP_DB_PASSWORD`      | empty                      |
    /// | `APP_DB_NAME`          | empty                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
                var: "PORT",
                expected: "u16",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value: raw,
            })?,
            None => 30,
        };

        let database = DatabaseConfig {
            username: lookup("APP_DB_USERNAME").unwrap_or_default(),
            password: lookup("APP_DB_PASSWORD").unwrap_or_default(),
            name: lookup("APP_DB_NAME").unwrap_or_default(),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database,
        })
    }
}
