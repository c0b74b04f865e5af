use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 8501;
pub const SERVER_PORT_SEARCH_SPAN: u16 = 100;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const MAX_REVIEW_REQUEST_BYTES: u64 = 2 * 1024 * 1024;

pub const CONFIG_DIR_NAME: &str = ".pair-engineer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GEMINI_PROVIDER: &str = "gemini";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

pub const RATE_LIMIT_SUMMARY: &str =
    "Rate limit exceeded. Gemini free tier has per-minute limits. Please wait 1-2 minutes and try again.";
pub const MALFORMED_JSON_SUMMARY: &str = "Model did not return valid JSON. Showing raw output.";

pub const DEFAULT_LANGUAGES: &[&str] = &["python", "javascript", "typescript", "java", "cpp", "go"];

pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("go", "go"),
    ("php", "php"),
    ("rb", "ruby"),
];

/// Language tag for a source file, based on its extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    SUPPORTED_FILE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

pub const fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
