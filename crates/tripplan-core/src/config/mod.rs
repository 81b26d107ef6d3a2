use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{conversation, endpoints, env, models, paths, timeouts, trip};
use crate::error::PlannerError;
use crate::llm::{ModelClient, OpenAIClient};
use crate::trip::{Currency, TripType};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub planner: PlannerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub min_budget: u64,
    pub follow_up_window: usize,
    pub default_currency: Currency,
    pub default_trip_type: TripType,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: models::DEFAULT_MODEL.to_string(),
            api_key_env: env::DEFAULT_API_KEY_ENV.to_string(),
            base_url: endpoints::GROQ_BASE_URL.to_string(),
            timeout_secs: timeouts::LLM_REQUEST_SECS,
        }
    }
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            min_budget: trip::MIN_BUDGET,
            follow_up_window: conversation::FOLLOW_UP_WINDOW,
            default_currency: Currency::default(),
            default_trip_type: TripType::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    /// Loads the default config file, falling back to defaults if it is missing or unreadable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(settings) => return settings,
                Err(e) => tracing::warn!("Ignoring {}: {e}", config_path.display()),
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> Result<Self, PlannerError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PlannerError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self) -> Result<(), PlannerError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PlannerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable named in settings. Blank counts as unset.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Build the model client. A missing key is fatal and nothing is sent.
    pub fn build_model_client(&self) -> Result<Box<dyn ModelClient>, PlannerError> {
        let api_key = self.api_key().ok_or_else(|| {
            PlannerError::Config(format!(
                "API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ))
        })?;
        if self.llm.model.trim().is_empty() {
            return Err(PlannerError::Config("llm.model must not be empty".into()));
        }

        let client = OpenAIClient::new(api_key)
            .with_model(&self.llm.model)
            .with_base_url(&self.llm.base_url)
            .with_timeout(Duration::from_secs(self.llm.timeout_secs.max(1)));
        Ok(Box::new(client))
    }
}
