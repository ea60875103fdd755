use anyhow::{Context, Result};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::ModelId;

pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com";

/// Application configuration loaded from environment variables.
///
/// API keys are optional here: a request may supply its own. They are only
/// required once an orchestration call is about to run (see [`Config::resolve`]).
#[derive(Debug, Clone)]
pub struct Config {
    pub firecrawl_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub default_model: ModelId,
    pub firecrawl_api_url: String,
    pub openai_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

/// Per-request key overrides. Blank values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiKeyOverrides {
    #[serde(default)]
    pub firecrawl: Option<String>,
    #[serde(default)]
    pub openai: Option<String>,
}

/// Fully resolved settings for one user action. Built per request and handed
/// to the orchestrators at construction time.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub firecrawl_api_key: String,
    pub openai_api_key: String,
    pub model: ModelId,
    pub firecrawl_api_url: String,
    pub openai_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            firecrawl_api_key: optional_env("FIRECRAWL_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            default_model: optional_env("OPENAI_MODEL_ID")
                .map(|id| ModelId::from_selector(&id))
                .unwrap_or_default(),
            firecrawl_api_url: optional_env("FIRECRAWL_API_URL")
                .unwrap_or_else(|| DEFAULT_FIRECRAWL_API_URL.to_string()),
            openai_api_url: optional_env("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Merges request overrides over the environment and checks that both keys
    /// are present. Fails before any network call is made.
    pub fn resolve(
        &self,
        overrides: &ApiKeyOverrides,
        model: Option<ModelId>,
    ) -> Result<AdvisorConfig, AppError> {
        let firecrawl = pick_key(overrides.firecrawl.as_deref(), self.firecrawl_api_key.as_deref());
        let openai = pick_key(overrides.openai.as_deref(), self.openai_api_key.as_deref());

        match (firecrawl, openai) {
            (Some(firecrawl), Some(openai)) => Ok(AdvisorConfig {
                firecrawl_api_key: firecrawl,
                openai_api_key: openai,
                model: model.unwrap_or(self.default_model),
                firecrawl_api_url: self.firecrawl_api_url.clone(),
                openai_api_url: self.openai_api_url.clone(),
            }),
            (firecrawl, openai) => {
                let mut missing = Vec::new();
                if firecrawl.is_none() {
                    missing.push("Firecrawl API Key");
                }
                if openai.is_none() {
                    missing.push("OpenAI API Key");
                }
                Err(AppError::MissingApiKeys(missing))
            }
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn pick_key(override_key: Option<&str>, env_key: Option<&str>) -> Option<String> {
    override_key
        .filter(|k| !k.trim().is_empty())
        .or(env_key)
        .map(|k| k.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(firecrawl: Option<&str>, openai: Option<&str>) -> Config {
        Config {
            firecrawl_api_key: firecrawl.map(str::to_string),
            openai_api_key: openai.map(str::to_string),
            default_model: ModelId::O3Mini,
            firecrawl_api_url: DEFAULT_FIRECRAWL_API_URL.to_string(),
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_resolve_uses_env_keys_when_no_override() {
        let resolved = config(Some("fc-env"), Some("sk-env"))
            .resolve(&ApiKeyOverrides::default(), None)
            .unwrap();
        assert_eq!(resolved.firecrawl_api_key, "fc-env");
        assert_eq!(resolved.openai_api_key, "sk-env");
        assert_eq!(resolved.model, ModelId::O3Mini);
    }

    #[test]
    fn test_override_wins_over_env() {
        let overrides = ApiKeyOverrides {
            firecrawl: Some("fc-request".to_string()),
            openai: None,
        };
        let resolved = config(Some("fc-env"), Some("sk-env"))
            .resolve(&overrides, Some(ModelId::Gpt4oMini))
            .unwrap();
        assert_eq!(resolved.firecrawl_api_key, "fc-request");
        assert_eq!(resolved.openai_api_key, "sk-env");
        assert_eq!(resolved.model, ModelId::Gpt4oMini);
    }

    #[test]
    fn test_blank_override_falls_back_to_env() {
        let overrides = ApiKeyOverrides {
            firecrawl: Some("   ".to_string()),
            openai: Some(String::new()),
        };
        let resolved = config(Some("fc-env"), Some("sk-env"))
            .resolve(&overrides, None)
            .unwrap();
        assert_eq!(resolved.firecrawl_api_key, "fc-env");
        assert_eq!(resolved.openai_api_key, "sk-env");
    }

    #[test]
    fn test_missing_keys_are_all_reported() {
        let err = config(None, None)
            .resolve(&ApiKeyOverrides::default(), None)
            .unwrap_err();
        match err {
            AppError::MissingApiKeys(missing) => {
                assert_eq!(missing, vec!["Firecrawl API Key", "OpenAI API Key"]);
            }
            other => panic!("expected MissingApiKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_single_missing_key() {
        let err = config(Some("fc-env"), None)
            .resolve(&ApiKeyOverrides::default(), None)
            .unwrap_err();
        assert!(err.to_string().contains("OpenAI API Key"));
        assert!(!err.to_string().contains("Firecrawl"));
    }
}
