use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the local web UI
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_browser: bool,
    },
    /// Review one file (or stdin with `-f -`) and print the result
    Review {
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long)]
        file: PathBuf,
        #[clap(short, long, default_value = "")]
        context: String,
        /// Also write the JSON result to this file
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
    /// Write a sample configuration file
    Init {
        #[clap(long)]
        force: bool,
    },
    Validate,
}
