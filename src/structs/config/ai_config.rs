use serde::{Deserialize, Serialize};
use crate::errors::{EngineerError, EngineerResult};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            temperature: ConfigHelper::default_temperature(),
            max_output_tokens: None,
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
        }
    }
}

impl AiConfig {
    /// Read the API key from the environment variable named by `api_key_env`.
    pub fn api_key(&self) -> EngineerResult<String> {
        self.api_key_from(|name| std::env::var(name).ok())
    }

    pub fn api_key_from<F>(&self, lookup: F) -> EngineerResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                EngineerError::config_error(
                    &format!("Missing {} in environment", self.api_key_env),
                    Some("ai.api_key_env"),
                    Some(&format!("Add {}=<your key> to a .env file or export it", self.api_key_env)),
                )
            })
    }
}
