//! sa-token
//!
//! Prints a JWT signed with a service account's private key.

use clap::Parser;
use sa_token::cli::Args;
use sa_token::config::Config;
use sa_token::generator::TokenGenerator;
use sa_token::observability::init_tracing;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(args.json_logs);

    // Errors are logged here and nowhere else
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        service_account = %config.service_account_path.display(),
        "Generating token"
    );

    let generator = TokenGenerator::new(config);

    let stdout = std::io::stdout();
    if let Err(e) = generator.run(&mut stdout.lock()) {
        error!("Token generation failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
