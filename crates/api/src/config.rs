use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. When set it takes precedence over the discrete fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`DatabaseConfig::from_env`] for the database variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database: DatabaseConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    /// Load database settings from environment variables with defaults.
    ///
    /// | Env Var              | Default        |
    /// |----------------------|----------------|
    /// | `DATABASE_URL`       | unset          |
    /// | `POSTGRES_HOST`      | `localhost`    |
    /// | `POSTGRES_PORT`      | `5432`         |
    /// | `POSTGRES_USER`      | `postgres`     |
    /// | `POSTGRES_PASSWORD`  | `root`         |
    /// | `POSTGRES_DB`        | `benchmark_db` |
    /// | `DB_MAX_CONNECTIONS` | `20`           |
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let port: u16 = std::env::var("POSTGRES_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("POSTGRES_PORT must be a valid u16");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            host: std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".into()),
            port,
            user: std::env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".into()),
            password: std::env::var("POSTGRES_PASSWORD").unwrap_or_else(|_| "root".into()),
            name: std::env::var("POSTGRES_DB").unwrap_or_else(|_| "benchmark_db".into()),
            max_connections,
        }
    }

    /// Resolve connection options, preferring `url` when present.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(prodbench_db::connect_options(
                &self.host,
                self.port,
                &self.user,
                &self.password,
                &self.name,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discrete() -> DatabaseConfig {
        DatabaseConfig {
            url: None,
            host: "db.internal".to_string(),
            port: 6543,
            user: "bench".to_string(),
            password: "secret".to_string(),
            name: "products".to_string(),
            max_connections: 5,
        }
    }

    #[test]
    fn connect_options_from_discrete_fields() {
        let options = discrete().connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "bench");
        assert_eq!(options.get_database(), Some("products"));
    }

    #[test]
    fn connect_options_prefers_url() {
        let config = DatabaseConfig {
            url: Some("postgres://alice:pw@example.com:5433/shop".to_string()),
            ..discrete()
        };
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "example.com");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "alice");
        assert_eq!(options.get_database(), Some("shop"));
    }

    #[test]
    fn connect_options_rejects_malformed_url() {
        let config = DatabaseConfig {
            url: Some("not a url".to_string()),
            ..discrete()
        };
        assert!(config.connect_options().is_err());
    }
}
