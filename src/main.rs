mod generator;
mod models;
mod resume;
mod scraper;
mod utils;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, info, warn};

use crate::generator::{GenerateError, ResumeRequest, RetryPolicy, generate};
use crate::resume::export;
use crate::scraper::linkedin::LinkedinClient;
use crate::utils::cli::Args;
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;
use crate::utils::prompt::{ask, ask_secret, first_filled};
use crate::utils::target;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // a local .env may carry LINKEDIN_USERNAME / LINKEDIN_PASSWORD
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting profile-resume {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );
    if let Ok(path) = dotenv {
        debug!("loaded environment from {}", path.display());
    }

    let config: Config = config(args.config.clone())?;
    let request = collect_request(&args, &config)?;
    debug!("request: {:?}", request);

    let client = LinkedinClient::new(&config.linkedin)?;
    let resume = match generate(&request, &client, RetryPolicy::from(&config.linkedin)).await {
        Ok(resume) => resume,
        Err(e @ GenerateError::MissingInput { .. }) => {
            warn!("nothing retrieved, inputs are missing");
            println!("{}", capitalize(&e.to_string()).yellow());
            return Ok(ExitCode::SUCCESS);
        }
        Err(e @ GenerateError::Retrieval(_)) => {
            println!("{}", capitalize(&e.to_string()).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("\n{}\n", "=== Generated Resume ===".cyan().bold());
    println!("{}", resume.body);

    if args.no_save {
        info!("--no-save given, not writing {}", export::file_name(&resume.target));
        return Ok(ExitCode::SUCCESS);
    }

    let directory = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    let path = export::save(&directory, &resume.target, &resume.body).await?;
    println!(
        "{}",
        format!("resume saved as {} ({})", path.display(), export::CONTENT_TYPE).green()
    );

    Ok(ExitCode::SUCCESS)
}

/// Merges flags, environment and config, prompting for whatever is still missing.
fn collect_request(args: &Args, config: &Config) -> Result<ResumeRequest> {
    let interactive = !args.no_prompt && std::io::stdin().is_terminal();
    if interactive {
        println!("{}", "=== LinkedIn Login ===".cyan().bold());
    }

    let username = match first_filled([args.username.clone(), config.linkedin.username.clone()]) {
        Some(username) => username,
        None if interactive => ask("Username")?,
        None => String::new(),
    };

    let password = match first_filled([args.password.clone(), config.linkedin.password.clone()]) {
        Some(password) => password,
        None if interactive => ask_secret("Password")?,
        None => String::new(),
    };

    let target = match first_filled([args.target.clone()]) {
        Some(target) => target,
        None if interactive => ask("Target LinkedIn profile (username or URL)")?,
        None => String::new(),
    };

    Ok(ResumeRequest {
        username: username.trim().to_string(),
        password,
        target: target::normalize(&target),
    })
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
