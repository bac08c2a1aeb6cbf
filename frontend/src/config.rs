use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_AUTH_DELAY_MS: u64 = 1500;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub auth_delay_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

impl RuntimeConfig {
    /// Keys are matched case-insensitively (`AUTH_DELAY_MS` from env.js or
    /// `auth_delay_ms`). If both spellings are present the lower-case one wins.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;
        let mut normalized = serde_json::Map::new();
        for (key, value) in object {
            let lower = key.to_ascii_lowercase();
            if key == lower || !normalized.contains_key(&lower) {
                normalized.insert(lower, value);
            }
        }
        Ok(serde_json::from_value(serde_json::Value::Object(normalized))?)
    }

    /// Fills unset values from `fallback`; values already present win.
    pub fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            auth_delay_ms: self.auth_delay_ms.or(fallback.auth_delay_ms),
            log_level: self.log_level.or(fallback.log_level),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.auth_delay_ms.is_none() && self.log_level.is_none()
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms.unwrap_or(DEFAULT_AUTH_DELAY_MS))
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_deref() {
            Some(raw) => parse_log_level(raw).unwrap_or_else(|err| {
                log::warn!("{}; falling back to {}", err, DEFAULT_LOG_LEVEL);
                DEFAULT_LOG_LEVEL
            }),
            None => DEFAULT_LOG_LEVEL,
        }
    }
}

pub fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::UnknownLogLevel(raw.to_string()))
}

/// Resolved configuration, or defaults until [`init`] has completed.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    pub fn read_global(name: &str) -> Option<RuntimeConfig> {
        // Expect optional global object: window.<name> = { auth_delay_ms: 1500, log_level: "info" }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(name)).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
        match RuntimeConfig::from_json(&raw) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("ignoring window.{}: {}", name, err);
                None
            }
        }
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        let body = resp.text().await.ok()?;
        match RuntimeConfig::from_json(&body) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("ignoring config.json: {}", err);
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn load() -> RuntimeConfig {
    // window.__PORTAL_ENV (env.js) takes precedence over window.__PORTAL_CONFIG.
    let from_globals = browser::read_global("__PORTAL_ENV")
        .unwrap_or_default()
        .merge(browser::read_global("__PORTAL_CONFIG").unwrap_or_default());
    if !from_globals.is_empty() {
        return from_globals;
    }
    browser::fetch_runtime_config().await.unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> RuntimeConfig {
    RuntimeConfig::default()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = load().await;
    let _ = RUNTIME_CONFIG.set(resolved.clone());
    current()
}
