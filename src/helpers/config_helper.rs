use crate::config::constants::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_LANGUAGES, DEFAULT_SERVER_PORT,
    DEFAULT_TEMPERATURE, GEMINI_API_KEY_ENV, GEMINI_PROVIDER,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        GEMINI_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub const fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_GEMINI_BASE_URL.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub const fn default_open_browser() -> bool {
        true
    }

    pub fn default_languages() -> Vec<String> {
        DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect()
    }
}
