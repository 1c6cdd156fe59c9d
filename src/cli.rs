use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch configuration and no fixtures are fetched
pub fn is_config_operation(args: &Args) -> bool {
    args.set_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Daily football fixtures from API-Football
///
/// Prints today's fixtures for the configured leagues: teams, local kickoff
/// time, match status and score. By default the leagues are Brasileirão
/// Série A (71), Série B (72) and Copa Libertadores (13) in the current season.
///
/// The API key is read from the config file or the APISPORTS_KEY
/// environment variable. On first run without either, you are asked for it.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show fixtures for a specific date in YYYY-MM-DD format instead of today.
    #[arg(long = "date", short = 'd', help_heading = "Selection")]
    pub date: Option<String>,

    /// Fetch only this league ID. Repeat to fetch several. Overrides the configured leagues for this run.
    #[arg(
        long = "league",
        short = 'L',
        value_name = "ID",
        value_parser = clap::value_parser!(i32).range(1..),
        help_heading = "Selection"
    )]
    pub leagues: Vec<i32>,

    /// Use this season for every league instead of the configured or current one.
    #[arg(
        long = "season",
        short = 's',
        value_name = "YEAR",
        value_parser = clap::value_parser!(i32).range(1..),
        help_heading = "Selection"
    )]
    pub season: Option<i32>,

    /// Plain output: no bold header and no terminal title.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Show kickoff times in UTC instead of local time.
    #[arg(long = "utc", help_heading = "Display Options")]
    pub utc: bool,

    /// Store the API key in config. Will prompt for the key if not provided.
    #[arg(
        long = "set-key",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub set_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal, not only to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
