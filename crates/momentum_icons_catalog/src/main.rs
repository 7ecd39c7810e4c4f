//! Exports the Momentum rebrand icon table as a JSON or CSS catalog.
//!
//! Usage: `momentum-icons-catalog [--css] [--pretty] [CONFIG.json]`

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use momentum_icons::logging::{init_logging, LogConfig};
use momentum_icons::{Catalog, CatalogConfig, IconError};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json { pretty: bool },
    Css,
}

struct Args {
    format: Format,
    config_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, IconError> {
    let mut css = false;
    let mut pretty = false;
    let mut config_path = None;

    for arg in args {
        match arg.as_str() {
            "--css" => css = true,
            "--pretty" => pretty = true,
            flag if flag.starts_with("--") => {
                return Err(IconError::config(format!("Unknown flag: {flag}")));
            }
            path => {
                if config_path.replace(PathBuf::from(path)).is_some() {
                    return Err(IconError::config("Only one config file may be given"));
                }
            }
        }
    }

    let format = if css { Format::Css } else { Format::Json { pretty } };
    Ok(Args { format, config_path })
}

fn run() -> Result<(), IconError> {
    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config_path {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    let catalog = Catalog::build(&config);
    let output = match args.format {
        Format::Json { pretty } => catalog.to_json(pretty)?,
        Format::Css => catalog.to_css(),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    tracing::debug!(format = ?args.format, "Catalog written");
    Ok(())
}

fn main() -> ExitCode {
    init_logging(LogConfig::new());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, category = e.category(), "Catalog export failed");
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed.format, Format::Json { pretty: false });
        assert!(parsed.config_path.is_none());
    }

    #[test]
    fn test_parse_flags_and_config() {
        let parsed = parse_args(args(&["--pretty", "catalog.json"])).unwrap();
        assert_eq!(parsed.format, Format::Json { pretty: true });
        assert_eq!(parsed.config_path, Some(PathBuf::from("catalog.json")));

        let parsed = parse_args(args(&["--css"])).unwrap();
        assert_eq!(parsed.format, Format::Css);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--svg"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }
}
