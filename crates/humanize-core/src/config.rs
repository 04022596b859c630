//! Gateway configuration from the environment.
//!
//! A missing API key is not a startup error: the request goes out without
//! credentials, the service rejects it, and the failure path substitutes a
//! canned insight. Nothing here panics.

use std::env;
use std::time::Duration;

/// Env var holding the API key. `ANTHROPIC_API_KEY` is honored as a fallback.
pub const API_KEY_ENV: &str = "HUMANIZE_API_KEY";
const API_KEY_ENV_FALLBACK: &str = "ANTHROPIC_API_KEY";

/// Env var overriding the endpoint URL.
pub const ENDPOINT_ENV: &str = "HUMANIZE_API_URL";

/// Env var overriding the model identifier.
pub const MODEL_ENV: &str = "HUMANIZE_MODEL";

const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Hard bound on the outbound call. The upstream view had none; we surface a
/// timeout as the ordinary failure path.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the insight gateway needs to talk to the text API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Read overrides and the credential from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                config.endpoint = url;
            }
        }
        if let Ok(model) = env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        config.api_key = env::var(API_KEY_ENV)
            .or_else(|_| env::var(API_KEY_ENV_FALLBACK))
            .ok()
            .filter(|k| !k.trim().is_empty());
        if config.api_key.is_none() {
            log::debug!("no API key in {API_KEY_ENV}; insight requests will fall back to the canned pool");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_reference_service() {
        let config = GatewayConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn env_overrides_apply() {
        // Process-wide env mutation: use vars no other test touches.
        unsafe {
            env::set_var(ENDPOINT_ENV, "http://localhost:9090/v1/messages");
            env::set_var(MODEL_ENV, "test-model");
            env::set_var(API_KEY_ENV, "sk-test");
        }
        let config = GatewayConfig::from_env();
        assert_eq!(config.endpoint, "http://localhost:9090/v1/messages");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        unsafe {
            env::remove_var(ENDPOINT_ENV);
            env::remove_var(MODEL_ENV);
            env::remove_var(API_KEY_ENV);
        }
    }
}
