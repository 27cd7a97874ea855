//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::{Context, bail};
use auth::AuthConfig;
use scores::ScoresConfig;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DECKS_PATH: &str = "data/cards.json";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    /// Unset means the in-memory score store
    pub database_url: Option<String>,
    pub decks_path: PathBuf,
    pub public_dir: PathBuf,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub scores: ScoresConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().with_context(|| format!("Invalid PORT {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let Some(api_key) = var("FIREBASE_API_KEY") else {
            bail!("FIREBASE_API_KEY must be set in environment");
        };
        let mut auth = AuthConfig::new(api_key);
        if let Some(endpoint) = var("IDENTITY_ENDPOINT") {
            auth.identity_endpoint = endpoint;
        }
        if let Some(raw) = var("IDENTITY_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid IDENTITY_TIMEOUT_SECS {raw:?}"))?;
            auth.request_timeout = Duration::from_secs(secs);
        }

        let mut scores = ScoresConfig::default();
        if let Some(name) = var("COLLECTION_NAME") {
            scores.collection_name = name;
        }
        scores
            .collection()
            .context("COLLECTION_NAME is not a usable table name")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            port,
            database_url: var("DATABASE_URL"),
            decks_path: var("DECKS_PATH")
                .unwrap_or_else(|| DEFAULT_DECKS_PATH.to_string())
                .into(),
            public_dir: var("PUBLIC_DIR")
                .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string())
                .into(),
            frontend_origins,
            auth,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("FIREBASE_API_KEY", "key")]).unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.database_url.is_none());
        assert_eq!(config.decks_path, PathBuf::from("data/cards.json"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.scores.collection_name, "match-high-scores");
        assert_eq!(config.auth.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("FIREBASE_API_KEY", "key"),
            ("PORT", "9000"),
            ("COLLECTION_NAME", "scores_test"),
            ("DATABASE_URL", "postgres://localhost/match"),
            ("IDENTITY_ENDPOINT", "http://127.0.0.1:9099/identitytoolkit.googleapis.com"),
            ("IDENTITY_TIMEOUT_SECS", "3"),
            ("FRONTEND_ORIGINS", "https://match.example.com, "),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.scores.collection_name, "scores_test");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/match"));
        assert_eq!(config.auth.request_timeout, Duration::from_secs(3));
        assert!(config.auth.lookup_url().starts_with("http://127.0.0.1:9099/"));
        assert_eq!(config.frontend_origins, ["https://match.example.com"]);
    }

    #[test]
    fn test_api_key_required() {
        assert!(config(&[]).is_err());
        assert!(config(&[("FIREBASE_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("FIREBASE_API_KEY", "key"), ("PORT", "http")]).is_err());
        assert!(config(&[("FIREBASE_API_KEY", "key"), ("COLLECTION_NAME", "a b")]).is_err());
        assert!(config(&[("FIREBASE_API_KEY", "key"), ("IDENTITY_TIMEOUT_SECS", "-1")]).is_err());
    }
}
