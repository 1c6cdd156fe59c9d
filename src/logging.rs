use crate::cli::Args;
use daily_fixtures::config::Config;
use daily_fixtures::constants::{APP_NAME, env_vars};
use daily_fixtures::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}=info")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Picks the log file: `--log-file`, then the environment, then the config
/// file, then the default log directory.
async fn resolve_log_path(args: &Args) -> (String, String) {
    let config_log_path = match args.log_file.clone() {
        Some(path) => Some(path),
        None => match std::env::var(env_vars::LOG_FILE) {
            Ok(path) => Some(path),
            // Read the file directly so logging setup never triggers the key prompt
            Err(_) => Config::load_from_path(&Config::get_config_path())
                .await
                .ok()
                .and_then(|config| config.log_file_path),
        },
    };

    let default_file_name = format!("{APP_NAME}.log");
    match config_log_path {
        Some(custom_path) => {
            let path = Path::new(&custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(default_file_name.as_str());
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), default_file_name),
    }
}

/// Sets up logging for the application.
///
/// - Logs always go to a daily rolling file so stdout carries only the report
/// - `--debug` adds a stdout layer
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_path(args).await;

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
