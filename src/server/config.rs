use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_HOST: &str = "db";
const DEFAULT_DB_PORT: &str = "5432";
const DEFAULT_APP_URL: &str = "http://localhost";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MEDIA_ROOT: &str = "media";

pub struct Config {
    pub database_url: String,

    /// Public base URL, without a trailing slash. Used for media and short links.
    pub app_url: String,
    pub bind_addr: SocketAddr,
    pub media_root: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `DATABASE_URL` wins when set; otherwise the PostgreSQL URL is assembled from
    /// the same variables the database container reads.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and well formed
    /// - `Err(AppError::ConfigErr)` - Missing variable or unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => {
                let user = required("POSTGRES_USER")?;
                let password = required("POSTGRES_PASSWORD")?;
                let name = required("POSTGRES_DB")?;
                let host = var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
                let port = var("DB_PORT").unwrap_or_else(|| DEFAULT_DB_PORT.to_string());

                if port.parse::<u16>().is_err() {
                    return Err(ConfigError::InvalidValue {
                        var: "DB_PORT".to_string(),
                        value: port,
                    }
                    .into());
                }

                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    user, password, host, port, name
                )
            }
        };

        let app_url = var("APP_URL")
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if url::Url::parse(&app_url).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "APP_URL".to_string(),
                value: app_url,
            }
            .into());
        }

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                value: bind_addr.clone(),
            })?;

        let media_root = var("MEDIA_ROOT").unwrap_or_else(|| DEFAULT_MEDIA_ROOT.to_string());

        Ok(Self {
            database_url,
            app_url,
            bind_addr,
            media_root,
        })
    }
}
