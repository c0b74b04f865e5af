use std::fs;
use pair_engineer::config::config_manager::ConfigManager;
use pair_engineer::config::constants::{DEFAULT_GEMINI_MODEL, DEFAULT_SERVER_PORT};
use pair_engineer::structs::config::config::Config;
use tempfile::TempDir;

#[test]
fn init_then_load_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".pair-engineer").join("config.toml");

    ConfigManager::create_sample_config(&path, false).unwrap();
    let config = ConfigManager::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.ai.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    assert!(ConfigManager::validate_config(&config).is_ok());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "languages = [\"go\"]\n").unwrap();

    assert!(ConfigManager::create_sample_config(&path, false).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "languages = [\"go\"]\n");

    ConfigManager::create_sample_config(&path, true).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("[ai]"));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai]\nmodel = \"gemini-2.5-flash\"\n\n[server]\nport = 9000\n").unwrap();

    let config = ConfigManager::load_from(&path).unwrap();

    assert_eq!(config.ai.model, "gemini-2.5-flash");
    assert_eq!(config.server.port, 9000);
    assert!(config.server.open_browser);
    assert_eq!(config.languages, Config::default().languages);
}

#[test]
fn broken_file_is_a_config_file_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai\nmodel = ").unwrap();

    let error = ConfigManager::load_from(&path).unwrap_err();

    assert!(error.user_message().contains("config.toml"));
}

#[test]
fn model_environment_variable_wins() {
    let mut config = Config::default();

    ConfigManager::apply_env_overrides(&mut config, |name| {
        (name == "GEMINI_MODEL").then(|| "gemini-2.5-pro".to_string())
    });

    assert_eq!(config.ai.model, "gemini-2.5-pro");
}

#[test]
fn validation_collects_every_problem() {
    let mut config = Config::default();
    config.ai.provider = "openai".to_string();
    config.ai.temperature = 3.5;
    config.languages = vec!["go".to_string(), "go".to_string()];

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors.len(), 3);
}
