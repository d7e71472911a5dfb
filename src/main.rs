//! Binary entrypoint for the Detective Quest CLI.
//!
//! Commands:
//! - `play [--case <path>]` - explore the mansion and accuse a suspect (default)
//! - `init` - write a starter `config.toml` and the built-in case to `cases/mansion.json`
//! - `map [--case <path>]` - print the room outline and the suspects
//!
//! See the library crate docs for module-level details: `detective_quest::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::Path;

use detective_quest::case::{load_case_or_default, CaseFile, Session, SessionOptions};
use detective_quest::config::Config;

#[derive(Parser)]
#[command(name = "detective-quest")]
#[command(about = "Explore the mansion, collect clues and accuse the culprit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one investigation
    Play {
        /// JSON case file (overrides game.case_file)
        #[arg(long)]
        case: Option<String>,
    },
    /// Write a default config and the built-in case file
    Init,
    /// Print the room map and the suspects of a case
    Map {
        /// JSON case file (overrides game.case_file)
        #[arg(long)]
        case: Option<String>,
    },
}

const DEFAULT_CASE_PATH: &str = "cases/mansion.json";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    init_logging(&config, cli.verbose);

    match cli.command.unwrap_or(Commands::Play { case: None }) {
        Commands::Play { case } => {
            let case_path = case.or_else(|| config.game.case_file.clone());
            let case = load_case_or_default(case_path.as_deref())?;
            let options = SessionOptions {
                title: case.title.clone(),
                show_intro: config.game.show_intro,
            };
            let (map, index) = case.into_parts()?;
            let session = Session::new(&map, &index, options);

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let report = session.run(&mut stdin.lock(), &mut stdout.lock())?;
            info!(
                "Investigation closed with {} clue(s) collected",
                report.clues.len()
            );
        }
        Commands::Init => {
            info!("Initializing Detective Quest files");
            if Path::new(&cli.config).exists() {
                warn!("{} already exists; leaving it untouched", cli.config);
            } else {
                Config::create_default(&cli.config)?;
                println!("Configuration file created at {}", cli.config);
            }

            let case_path = Path::new(DEFAULT_CASE_PATH);
            if case_path.exists() {
                warn!("{} already exists; leaving it untouched", DEFAULT_CASE_PATH);
            } else {
                if let Some(dir) = case_path.parent() {
                    std::fs::create_dir_all(dir)?;
                }
                let json = serde_json::to_string_pretty(&CaseFile::mansion())?;
                std::fs::write(case_path, json)
                    .map_err(|e| anyhow!("Failed to write {}: {}", DEFAULT_CASE_PATH, e))?;
                println!("Built-in case written to {}", DEFAULT_CASE_PATH);
            }
        }
        Commands::Map { case } => {
            let case_path = case.or_else(|| config.game.case_file.clone());
            let case = load_case_or_default(case_path.as_deref())?;
            let title = case.title.clone();
            let (map, index) = case.into_parts()?;
            println!("{} - {} sala(s)\n", title, map.len());
            print!("{}", map.outline());
            println!("\nSuspeitos:");
            for name in index.suspects() {
                println!(" - {}", name);
            }
        }
    }
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let log_file = std::sync::Mutex::new(f);
            // Mirror to the console only when stderr is a terminal
            let is_tty = atty::is(atty::Stream::Stderr);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = log_file.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            eprintln!("Could not open log file {}; logging to stderr", file);
            builder.format(format_record);
        }
    } else {
        builder.format(format_record);
    }
    let _ = builder.try_init();
}

fn format_record(fmt: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    use std::io::Write;
    writeln!(
        fmt,
        "{} [{}] {}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        record.level(),
        record.args()
    )
}
