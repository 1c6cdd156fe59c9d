// src/main.rs
mod cli;
mod logging;

use chrono::{Local, Utc};
use clap::Parser;
use cli::{Args, is_config_operation};
use crossterm::{execute, terminal::SetTitle};
use daily_fixtures::app::{build_league_refs, run_daily_report};
use daily_fixtures::config::Config;
use daily_fixtures::config::user_prompts::prompt_for_api_key;
use daily_fixtures::constants::APP_NAME;
use daily_fixtures::data_fetcher::api::{
    create_http_client_with_timeout, determine_fetch_date, season_for_date,
};
use daily_fixtures::error::AppError;
use std::io::{IsTerminal, stdout};

/// Applies `--set-key`, `--set-log-file` and `--clear-log-file` to the stored config.
async fn update_config(args: Args) -> Result<(), AppError> {
    let mut config = Config::load_from_path(&Config::get_config_path())
        .await
        .unwrap_or_default();

    if let Some(new_key) = args.set_key {
        config.api_key = if new_key.trim().is_empty() {
            prompt_for_api_key().await?
        } else {
            new_key.trim().to_string()
        };
    }

    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_operation(&args) {
        return update_config(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let date = determine_fetch_date(args.date.as_deref())?;
    let default_season = season_for_date(&date)?;
    let leagues = build_league_refs(&config, &args.leagues, args.season, default_season);
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let mut out = stdout();
    let styled = !args.plain && out.is_terminal();
    if styled {
        execute!(out, SetTitle(APP_NAME))?;
    }

    let summary = if args.utc {
        run_daily_report(&client, &config, leagues, &date, &mut out, &Utc, styled).await?
    } else {
        run_daily_report(&client, &config, leagues, &date, &mut out, &Local, styled).await?
    };

    if summary.failed > 0 {
        tracing::warn!("{} leagues could not be fetched", summary.failed);
    }

    Ok(())
}
