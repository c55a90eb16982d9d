use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB_NAME: &str = "aroundtheus";
pub const DEFAULT_USERS_COLLECTION: &str = "users";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// # Service Configuration
///
/// Read from the process environment (after `.env` has been loaded by
/// `main`). Every key is optional.
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `127.0.0.1` |
/// | `PORT` | `3001` |
/// | `MONGODB_URI` | `mongodb://localhost:27017` |
/// | `DB_NAME` | `aroundtheus` |
/// | `DB_USERS_COLLECTION` | `users` |
/// | `PUBLIC_BASE_URL` | `http://localhost:{PORT}` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub db_name: String,
    pub users_collection: String,
    /// Prefix used when building public profile URLs.
    pub public_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{}", port));
        if !public_base_url.starts_with("http://") && !public_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "PUBLIC_BASE_URL",
                value: public_base_url,
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongodb_uri: lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            db_name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            users_collection: lookup("DB_USERS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_USERS_COLLECTION.to_string()),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3001);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "aroundtheus");
        assert_eq!(config.users_collection, "users");
        assert_eq!(config.public_base_url, "http://localhost:3001");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("MONGODB_URI", "mongodb://db:27017"),
            ("DB_NAME", "prod"),
            ("DB_USERS_COLLECTION", "people"),
            ("PUBLIC_BASE_URL", "https://users.example.com/"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.mongodb_uri, "mongodb://db:27017");
        assert_eq!(config.db_name, "prod");
        assert_eq!(config.users_collection, "people");
        assert_eq!(config.public_base_url, "https://users.example.com");
    }

    #[test]
    fn test_base_url_follows_port() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap();
        assert_eq!(config.public_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("PUBLIC_BASE_URL", "ftp://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PUBLIC_BASE_URL", .. }));
    }
}
