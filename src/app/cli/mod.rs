//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::info;

use crate::app::commands::generate::{DRY_RUN_BANNER, GenerateOptions, GenerateOutcome};
use crate::app::logging;
use crate::domain::{AppError, CallFileName, CallOptions, LogLevel};
use crate::services::DEFAULT_TEMPLATE_FILE;

#[derive(Parser, Debug)]
#[command(name = "callgen")]
#[command(version)]
#[command(
    about = "Generate Asterisk call files from command-line fields",
    long_about = None
)]
struct Cli {
    /// Channel for the call file.
    ///
    /// There is no `-ch` short form; `-ch X` parses as `-c h`. Use `--channel` or `--ch`.
    #[arg(long, visible_alias = "ch")]
    channel: String,
    /// Context to use for the call
    #[arg(short = 'c', long)]
    context: String,
    /// Extension to use for the call
    #[arg(short = 'e', long)]
    exten: u64,
    /// Priority to use for the call
    #[arg(short = 'p', long)]
    priority: Option<u32>,
    /// Caller ID number for the call file (`--cnum`, not `-cnum`)
    #[arg(long, visible_alias = "cnum")]
    cid_number: Option<u64>,
    /// Caller ID name for the call file (`--cname`, not `-cname`)
    #[arg(long, visible_alias = "cname")]
    cid_name: Option<String>,
    /// Seconds to wait for the channel to answer
    #[arg(short = 'w', long)]
    wait_time: Option<u32>,
    /// Maximum number of retries
    #[arg(short = 'm', long)]
    max_retries: Option<u32>,
    /// Seconds to wait between retries
    #[arg(short = 'r', long)]
    retry_time: Option<u32>,
    /// Account code for the call
    #[arg(short = 'a', long)]
    account: Option<String>,
    /// Variable to set for the call (NAME=value)
    #[arg(short = 's', long)]
    setvar: Option<String>,
    /// Log verbosity; repeat the flag to change the level
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
    /// Print the call file instead of writing it
    #[arg(short = 'd', long)]
    dry_run: bool,
    /// Template file to render
    #[arg(short = 't', long, default_value = DEFAULT_TEMPLATE_FILE)]
    template: PathBuf,
}

impl Cli {
    fn into_options(self, file_name: CallFileName) -> GenerateOptions {
        let call = CallOptions {
            channel: self.channel,
            context: self.context,
            exten: self.exten,
            priority: self.priority,
            cid_number: self.cid_number,
            cid_name: self.cid_name,
            wait_time: self.wait_time,
            max_retries: self.max_retries,
            retry_time: self.retry_time,
            account: self.account,
            setvar: self.setvar,
            verbose: self.verbose,
            dry_run: self.dry_run,
        };
        GenerateOptions { call, template: self.template, file_name }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let file_name = CallFileName::generate();
    let cli = Cli::parse();

    logging::init(LogLevel::from_verbosity(cli.verbose));
    info!("Call file generator started");

    let result = run_generate(&cli.into_options(file_name));

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(options: &GenerateOptions) -> Result<i32, AppError> {
    let outcome = crate::app::api::generate(options)?;

    match &outcome {
        GenerateOutcome::DryRun { body } => {
            println!("{}", DRY_RUN_BANNER);
            println!("{}", body);
            info!("Exiting due to dry-run option");
        }
        GenerateOutcome::Written { path, .. } => {
            println!("Success! File written to: {}", path.display());
            info!("Call file generator exiting");
        }
    }

    Ok(outcome.exit_code())
}
