use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use json_imports::export::{to_json_compact, to_json_pretty};
use json_imports::{PartialOptions, SpecialCharacter, Value, read_json_with_imports};

#[derive(Parser)]
#[command(name = "json-imports")]
#[command(version)]
#[command(about = "Print a JSON file with all ${import:...} macros resolved")]
struct Cli {
    /// Maximum import nesting below FILE
    #[arg(long, value_name = "MAX_DEPTH", value_parser = parse_max_depth)]
    max_depth: Option<usize>,

    /// One of '#', '$', '%', '&', '@'
    #[arg(long, value_name = "SPECIAL_CHARACTER")]
    special_character: Option<SpecialCharacter>,

    /// Print on a single line instead of indenting with four spaces
    #[arg(long)]
    compact: bool,

    /// JSON file to read
    file: PathBuf,
}

impl Cli {
    /// Flags that were not given stay unset and fall back to the defaults.
    fn options(&self) -> PartialOptions {
        PartialOptions {
            special_character: self.special_character,
            max_depth: self.max_depth,
            json_parser: None,
        }
    }
}

/// Plain decimal digits only: no sign and no leading zeros.
fn parse_max_depth(s: &str) -> Result<usize, String> {
    let digits_only = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (s.len() > 1 && s.starts_with('0')) {
        return Err(format!("'{s}' is not a non-negative integer"));
    }
    s.parse().map_err(|e: std::num::ParseIntError| e.to_string())
}

fn render(value: &Value, compact: bool) -> serde_json::Result<String> {
    if compact {
        to_json_compact(value)
    } else {
        to_json_pretty(value)
    }
}

/// clap already starts its messages with `error: `.
fn error_line(message: &str) -> String {
    let message = message.trim_end();
    format!("ERROR: {}", message.strip_prefix("error: ").unwrap_or(message))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let value = match read_json_with_imports(&cli.file, cli.options()).await {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    match render(&value, cli.compact) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
