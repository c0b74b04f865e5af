use clap::Parser;
use pair_engineer::errors::ErrorHandler;
use pair_engineer::structs::cli::Cli;
use pair_engineer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .format_timestamp(None)
        .init();

    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command_or_default()).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
