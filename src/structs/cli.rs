use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "pair-engineer")]
#[clap(about = "AI pair engineer: design flaws, tests and a refactor patch for pasted code", long_about = None)]
#[clap(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[clap(long, global = true, env = "PAIR_ENGINEER_LOG", default_value = "info")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Running without a subcommand serves the web UI.
    pub fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Serve {
            port: None,
            no_browser: false,
        })
    }
}
