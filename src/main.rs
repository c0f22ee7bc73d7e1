mod ai;
mod config;
mod constants;
mod draft;
mod interactive;
mod request;
mod session;

use anyhow::Result;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ai::GeminiClient;
use crate::config::Config;
use crate::session::Session;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,eigyo=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("eigyo.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        // Log to file; stdout belongs to the interactive session
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"eigyo - AI-assisted sales email draft generator

Usage: eigyo [command]

Commands:
    (none)      Start an interactive session
    setup       Write a default configuration file
    help        Show this help message

Configuration file: ~/.config/eigyo/config.toml
Requires the GEMINI_API_KEY environment variable."#
    );
}

fn run_setup() -> Result<()> {
    use std::io::{self, Write};

    let config_path = Config::config_path()?;
    if config_path.exists() {
        print!("Configuration already exists. Overwrite? [y/N]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    Config::default().save()?;
    println!("Configuration saved to {}", config_path.display());
    println!("\nSet your Gemini API key and run 'eigyo' to start:");
    println!("  export {}='your-api-key'", constants::API_KEY_ENV);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("setup") => run_setup(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            Config::ensure_dirs()?;
            setup_logging();

            let config = Config::load()?;

            let client = match GeminiClient::from_env(
                config.llm.model.clone(),
                config.llm.max_output_tokens,
            ) {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("{e:#}");
                    eprintln!("\nSet the Gemini API key and try again:");
                    eprintln!("  export {}='your-api-key'", constants::API_KEY_ENV);
                    std::process::exit(1);
                }
            };

            let mut session = Session::new(client, config.generation.variant_count);
            interactive::run(&mut session, &config).await
        }
    }
}
