mod cli;
mod commands;
mod config;
mod credentials_store;
mod main_lib;
mod render;
mod settings_store;

use std::process;

use clap::Parser;
use cli::{Args, OutputFormat};
use config::Config;
use main_lib::{init_tracing, AppState};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format, args.verbose, args.quiet);

    let output = args.command.output_format();
    let state = AppState::new(config);

    if let Err(e) = commands::execute(args.command, &state).await {
        match output {
            OutputFormat::Json => {
                let error_json = serde_json::json!({
                    "status": "error",
                    "message": e.to_string(),
                });
                println!("{}", error_json);
            }
            OutputFormat::Text => {
                tracing::debug!("Command failed: {:?}", e);
                eprintln!("Error: {}", e);
            }
        }
        process::exit(1);
    }
}
