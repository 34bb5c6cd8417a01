//! Configuration (env-layered, with a process-wide default).

use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<SparkConfig> = OnceLock::new();

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the generation backend.
///
/// Cheap to clone; all clones share the same underlying values.
#[derive(Clone)]
pub struct SparkConfig {
    api_key: Arc<RwLock<Option<String>>>,
    base_url: Arc<RwLock<Option<String>>>,
    model: Arc<RwLock<String>>,
}

impl fmt::Debug for SparkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparkConfig")
            .field("api_key", &self.api_key.read().unwrap().as_ref().map(|_| ".."))
            .field("base_url", &self.base_url.read().unwrap())
            .field("model", &self.model.read().unwrap())
            .finish()
    }
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SparkConfig {
    /// Create an empty config with the default model.
    pub fn new() -> Self {
        Self {
            api_key: Arc::new(RwLock::new(None)),
            base_url: Arc::new(RwLock::new(None)),
            model: Arc::new(RwLock::new(DEFAULT_MODEL.to_string())),
        }
    }

    /// Load from environment variables (GOOGLE_API_KEY / GEMINI_API_KEY,
    /// STORYSPARK_BASE_URL, STORYSPARK_MODEL).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let config = Self::new();

        if let Ok(key) = std::env::var("GOOGLE_API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY"))
        {
            config.set_api_key(key);
        }
        if let Ok(url) = std::env::var("STORYSPARK_BASE_URL") {
            config.set_base_url(url);
        }
        if let Ok(model) = std::env::var("STORYSPARK_MODEL") {
            config.set_model(model);
        }

        config
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static SparkConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }

    pub fn set_api_key(&self, key: String) {
        *self.api_key.write().unwrap() = Some(key);
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key.read().unwrap().clone()
    }

    pub fn set_base_url(&self, url: String) {
        *self.base_url.write().unwrap() = Some(url);
    }

    pub fn base_url(&self) -> Option<String> {
        self.base_url.read().unwrap().clone()
    }

    pub fn set_model(&self, model: String) {
        *self.model.write().unwrap() = model;
    }

    pub fn model(&self) -> String {
        self.model.read().unwrap().clone()
    }

    /// Check whether an API key is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key().is_some()
    }
}
