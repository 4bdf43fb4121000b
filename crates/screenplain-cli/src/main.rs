mod outline;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use screenplain_config::{Config, OutputFormat};
use screenplain_engine::{ParseOptions, PlainEmphasis, ScreenplayParser};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "screenplain")]
#[command(about = "Parse a Fountain screenplay and print its structure")]
struct Args {
    /// Screenplay to read; `-` or nothing reads stdin
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Columns per tab stop
    #[arg(long)]
    tab_width: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Outline,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Outline => OutputFormat::Outline,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    log::debug!("effective config: {config:?}");

    let source = read_source(args.file.as_deref())?;
    let parser = ScreenplayParser::new(PlainEmphasis).with_options(ParseOptions {
        tab_width: config.tab_width,
    });
    let play = parser.parse(source.lines());
    log::info!("parsed {} elements", play.elements.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Outline => outline::write_outline(&mut out, &play)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&play)?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Flags override the config file, which overrides the defaults.
fn resolve_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) => {
            let path = Config::expand_path(path)
                .with_context(|| format!("Cannot expand config path {}", path.display()))?;
            Config::load_from_path(&path)?
        }
        None => Config::load()?,
    };

    let mut config = loaded.unwrap_or_else(|| {
        log::debug!("no config file found, using defaults");
        Config::default()
    });
    if let Some(format) = args.format {
        config.format = format.into();
    }
    if let Some(tab_width) = args.tab_width {
        config.tab_width = tab_width;
    }
    Ok(config)
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        Config {
            tab_width: 8,
            format: OutputFormat::Json,
        }
        .save_to_path(&config_file)
        .unwrap();

        let args = Args::parse_from([
            "screenplain",
            "--config",
            config_file.to_str().unwrap(),
            "--tab-width",
            "2",
        ]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(
            config,
            Config {
                tab_width: 2,
                format: OutputFormat::Json,
            }
        );
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let args = Args::parse_from([
            "screenplain",
            "--config",
            "/nonexistent/screenplain/config.toml",
            "--format",
            "json",
        ]);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.tab_width, 4);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn dash_means_stdin() {
        let args = Args::parse_from(["screenplain", "-"]);
        assert_eq!(args.file.as_deref(), Some(Path::new("-")));
    }
}
