use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::language_for_path;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::errors::{EngineerError, EngineerResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::code_reviewer::CodeReviewer;
use crate::services::review_renderer::ReviewRenderer;
use crate::structs::config::config::Config;
use crate::structs::review_request::ReviewRequest;
use crate::ui::review_server::ReviewServer;

const STDIN_PATH: &str = "-";

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> EngineerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { port, no_browser } => self.serve_command(port, no_browser).await,
            Commands::Review { language, file, context, output, format } => {
                self.review_command(language, &file, context, output, format).await
            }
            Commands::Init { force } => self.init_command(force),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    async fn serve_command(&self, port: Option<u16>, no_browser: bool) -> EngineerResult<()> {
        let config = Self::load_valid_config()?;
        let reviewer = CodeReviewer::from_config(&config.ai)?;

        let mut server = ReviewServer::new(reviewer, config.languages.clone());
        server.start(port.unwrap_or(config.server.port)).await?;
        let url = server.url().unwrap_or_default();

        println!("🌐 Pair Engineer is running at {url}");
        println!("   Press Ctrl+C to stop");

        if config.server.open_browser && !no_browser {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {e}");
                println!("   Open {url} in your browser");
            }
        }

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| EngineerError::system_error("wait for Ctrl+C", &e.to_string()))?;

        server.shutdown().await
    }

    async fn review_command(
        &self,
        language: Option<String>,
        file: &Path,
        context: String,
        output: Option<PathBuf>,
        format: OutputFormat,
    ) -> EngineerResult<()> {
        let config = Self::load_valid_config()?;

        let language = match language.or_else(|| language_for_path(file).map(str::to_string)) {
            Some(language) => language,
            None => {
                return Err(EngineerError::validation_error(
                    "language",
                    &file.display().to_string(),
                    "Cannot infer the language from the file name",
                    Some("Pass --language"),
                ))
            }
        };

        let request = ReviewRequest {
            language,
            code: Self::read_source(file)?,
            extra_context: context,
        };
        if let Some(reason) = request.rejection_reason(&config.languages) {
            return Err(EngineerError::validation_error(
                "review",
                &request.language,
                &reason,
                Some(&format!("Configured languages: {}", config.languages.join(", "))),
            ));
        }

        let reviewer = CodeReviewer::from_config(&config.ai)?;

        let mut spinner = AnimatedLogger::new("🤖 Reviewing".to_string());
        spinner.start();
        let result = match reviewer
            .review_code(&request.language, &request.code, &request.extra_context)
            .await
        {
            Ok(result) => {
                spinner.stop("Review complete").await;
                result
            }
            Err(e) => {
                spinner.error("Review failed").await;
                return Err(e);
            }
        };

        match format {
            OutputFormat::Markdown => println!("{}", ReviewRenderer::to_markdown(&result, &request.language)),
            OutputFormat::Json => println!("{}", ReviewRenderer::to_json(&result)?),
        }

        if let Some(path) = output {
            fs::write(&path, ReviewRenderer::to_json(&result)?)?;
            log::info!("💾 Saved review to {}", path.display());
        }

        Ok(())
    }

    fn init_command(&self, force: bool) -> EngineerResult<()> {
        log::info!("🚀 Initializing pair-engineer configuration...");

        let path = ConfigManager::config_path();
        ConfigManager::create_sample_config(&path, force)?;

        println!("✅ Configuration written to {}", path.display());
        println!("🔑 Put your key in GEMINI_API_KEY (environment or .env file).");
        println!("🔧 Run 'pair-engineer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> EngineerResult<()> {
        log::info!("🔍 Validating pair-engineer configuration...");

        let config = Self::load_valid_config()?;
        println!("✅ Configuration is valid");
        println!("🤖 Model: {} ({})", config.ai.model, config.ai.provider);
        println!("🗂️  Languages: {}", config.languages.join(", "));

        match config.ai.api_key() {
            Ok(_) => println!("🔑 API key found in {}", config.ai.api_key_env),
            Err(e) => println!("⚠️ {}", e.user_message()),
        }

        Ok(())
    }

    fn load_valid_config() -> EngineerResult<Config> {
        let config = ConfigManager::load()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {error}");
            }
            return Err(EngineerError::config_error(
                &errors.join("; "),
                None,
                Some(&format!("Edit {}", ConfigManager::config_path().display())),
            ));
        }

        Ok(config)
    }

    fn read_source(file: &Path) -> EngineerResult<String> {
        if file.as_os_str() == STDIN_PATH {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            return Ok(code);
        }

        fs::read_to_string(file).map_err(|e| {
            EngineerError::system_error(&format!("read {}", file.display()), &e.to_string())
        })
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
