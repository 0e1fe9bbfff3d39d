//       _
// __  _| | ___ __   __ _ ___ _____      ____| |
// \ \/ / |/ / '_ \ / _` / __/ __\ \ /\ / / _` |
//  >  <| ' <| |_) | (_| \__ \__ \\ V  V / (_| |
// /_/\_\_|\_\ .__/ \__,_|___/___/ \_/\_/ \__,_|
//           |_|
//
// License : Apache-2.0
//
// An XKCD-style memorable password generator.
// Based on https://xkpasswd.net/

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use xkpasswd::WORDS;
use xkpasswd::config::{Config, RawConfig};
use xkpasswd::passgen;

// Used when no configuration file is found.
const DEFAULT_CONFIG: &str = include_str!("../data/defaults.json");

const CONFIG_FILENAME: &str = ".xkpasswd.json";

#[derive(Debug, Parser)]
#[command(name = "xkpasswd", version)]
#[command(about = "Generate XKCD-style memorable passwords", long_about = None)]
struct Cli {
    /// Number of passwords to generate
    #[arg(default_value_t = 1)]
    count: usize,

    /// Write debug output to stderr
    #[arg(short, long)]
    debug: bool,

    /// Path to a configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a word list (JSON array of strings)
    #[arg(short, long)]
    wordlist: Option<PathBuf>,
}

/// Resolution order: explicit flag, dotfile in the home directory, dotfile
/// in the current directory. `None` means fall back to built-in defaults.
fn find_config(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }
    if let Some(home) = dirs::home_dir() {
        let path = home.join(CONFIG_FILENAME);
        if path.is_file() {
            return Some(path);
        }
    }
    let path = PathBuf::from(CONFIG_FILENAME);
    path.is_file().then_some(path)
}

fn load_raw_config(cli: &Cli) -> Result<RawConfig> {
    let data = match find_config(cli) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            fs::read_to_string(&path).with_context(|| {
                format!("failed to read configuration file {}", path.display())
            })?
        }
        None => {
            debug!("no configuration file found, using built-in defaults");
            DEFAULT_CONFIG.to_string()
        }
    };
    let raw = serde_json::from_str(&data).context("failed to parse configuration")?;
    Ok(raw)
}

fn load_dictionary(cli: &Cli) -> Result<Vec<String>> {
    match &cli.wordlist {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            let words: Vec<String> = serde_json::from_str(&data)
                .with_context(|| format!("failed to parse word list {}", path.display()))?;
            Ok(words)
        }
        None => Ok(WORDS.iter().map(|w| w.to_string()).collect()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let raw = load_raw_config(&cli)?;
    debug!(?raw, "raw configuration");

    let dictionary = load_dictionary(&cli)?;
    debug!(words = dictionary.len(), "dictionary loaded");

    let config = Config::from_raw(raw, dictionary).context("invalid configuration")?;
    debug!(?config.case_transform, ?config.separator_mode, ?config.padding_type, "configuration validated");

    for _ in 0..cli.count {
        println!("{}", passgen::generate(&config)?);
    }

    Ok(())
}
