use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{info, Level};

use tabgen::{RawConfig, TabConfig, TuningEntry};

/// Render pitch estimates as ASCII guitar tablature
#[derive(Parser, Debug)]
#[command(name = "tabgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pitch-estimate JSON (a list of records or an analysis document)
    input: PathBuf,

    /// Write the tab here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Six open strings, low to high, as note names or semitone indices
    #[arg(long, value_delimiter = ',')]
    tuning: Option<Vec<String>>,

    #[arg(long, allow_negative_numbers = true)]
    max_fret: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    notes_per_measure: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    measures_per_line: Option<i64>,

    /// Print the resolved string/fret events as JSON instead of tab
    #[arg(long)]
    events: bool,

    /// Log each resolved note to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> RawConfig {
        RawConfig {
            tuning: self.tuning.as_ref().map(|strings| {
                strings
                    .iter()
                    .map(|s| match s.trim().parse::<i64>() {
                        Ok(index) => TuningEntry::Index(index),
                        Err(_) => TuningEntry::Name(s.trim().to_string()),
                    })
                    .collect()
            }),
            max_fret: self.max_fret,
            notes_per_measure: self.notes_per_measure,
            measures_per_line: self.measures_per_line,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // Settings: flags over file over defaults
    let file_config = match &cli.config {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading config '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            match RawConfig::from_yaml(&content) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => RawConfig::default(),
    };
    let config = match TabConfig::from_raw(file_config.overlay(cli.overrides())) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let source = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.input.display(), e);
            process::exit(1);
        }
    };
    let estimates = match tabgen::parse_estimates(&source) {
        Ok(estimates) => estimates,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    info!("loaded {} pitch estimates", estimates.len());

    let text = if cli.events {
        let events = tabgen::resolve_estimates(&estimates, &config);
        match serde_json::to_string_pretty(&events) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error encoding events: {}", e);
                process::exit(1);
            }
        }
    } else {
        tabgen::generate_tab(&estimates, &config)
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", text)) {
                eprintln!("Error writing to '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote tab to {}", path.display());
        }
        None => {
            println!("{}", text);
        }
    }
}
