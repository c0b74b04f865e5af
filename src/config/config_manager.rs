use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, GEMINI_MODEL_ENV, GEMINI_PROVIDER};
use crate::errors::{EngineerError, EngineerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Pair Engineer configuration

# Languages offered in the review form
languages = ["python", "javascript", "typescript", "java", "cpp", "go"]

[ai]
provider = "gemini"
# Overridden by the GEMINI_MODEL environment variable when set
model = "gemini-2.0-flash-lite"
temperature = 0.2
# Name of the environment variable holding the API key (a .env file works too)
api_key_env = "GEMINI_API_KEY"
base_url = "https://generativelanguage.googleapis.com/v1beta"
# max_output_tokens = 8192

[server]
# First port to try; the next free one is used when it is taken
port = 8501
open_browser = true
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load `.env`, then the user config file (or defaults), then apply
    /// environment overrides.
    pub fn load() -> EngineerResult<Config> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("📋 Loaded environment from: {}", path.display());
        }

        let config_path = Self::config_path();
        let mut config = if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            Self::load_from(&config_path)?
        } else {
            log::debug!("📋 No config at {}, using defaults", config_path.display());
            Config::default()
        };

        Self::apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> EngineerResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| EngineerError::config_file_error(&path.display().to_string(), &e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| EngineerError::config_file_error(&path.display().to_string(), e.message()))
    }

    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup(GEMINI_MODEL_ENV).filter(|model| !model.trim().is_empty()) {
            log::debug!("🔧 Using model from {GEMINI_MODEL_ENV}: {model}");
            config.ai.model = model.trim().to_string();
        }
    }

    pub fn create_sample_config(path: &Path, force: bool) -> EngineerResult<()> {
        if path.exists() && !force {
            return Err(EngineerError::config_error(
                &format!("Config file already exists: {}", path.display()),
                None,
                Some("Pass --force to overwrite it"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;

        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.provider != GEMINI_PROVIDER {
            errors.push(format!(
                "Unsupported AI provider '{}' (supported: {GEMINI_PROVIDER})",
                config.ai.provider
            ));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("AI model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!(
                "AI temperature {} is outside the range 0.0-2.0",
                config.ai.temperature
            ));
        }

        if config.ai.base_url.trim().is_empty() {
            errors.push("AI base_url must not be empty".to_string());
        }

        if config.languages.is_empty() {
            errors.push("At least one language must be configured".to_string());
        }

        let mut names = std::collections::HashSet::new();
        for language in &config.languages {
            if language.trim().is_empty() {
                errors.push("Language names must not be empty".to_string());
            } else if !names.insert(language) {
                errors.push(format!("Duplicate language: {language}"));
            }
        }

        if config.server.port == 0 {
            errors.push("Server port must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
