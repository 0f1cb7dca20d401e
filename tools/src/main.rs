mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordpredict_core::fuzzy::distance;
use wordpredict_core::{Config, Dictionary};

#[derive(Parser)]
#[command(name = "wordpredict")]
#[command(about = "Word suggestions from a JSON word list")]
#[command(version)]
struct Cli {
    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print suggestions for one or more prefixes
    Suggest {
        /// Word list: a JSON array of strings
        #[arg(short, long)]
        words: PathBuf,
        /// Print each suggestion with the stage that produced it, as JSON
        #[arg(long)]
        json: bool,
        #[arg(required = true, num_args = 1..)]
        prefixes: Vec<String>,
    },
    /// Print the edit distance between two words
    Distance { a: String, b: String },
    /// Type into a simulated keyboard session from stdin
    Interactive {
        /// Word list: a JSON array of strings
        #[arg(short, long)]
        words: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(p) => Config::load_toml(p),
        None => Ok(Config::default()),
    }
}

fn load_dictionary(config: Config, words: &Path) -> Arc<Dictionary> {
    let dict = Arc::new(Dictionary::with_config(config));
    let count = dict.load_json_file_in_background(words).wait();
    if count == 0 {
        eprintln!("⚠ No words loaded from {}", words.display());
    } else {
        eprintln!("✓ Loaded {} words from {}", count, words.display());
    }
    dict
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "configuration");

    match cli.command {
        Commands::Suggest {
            words,
            json,
            prefixes,
        } => {
            let dict = load_dictionary(config, &words);
            for prefix in &prefixes {
                if json {
                    let ranked = dict.ranked(prefix);
                    println!("{}", serde_json::to_string(&ranked)?);
                } else {
                    let s = dict.suggestions(prefix);
                    if s.is_empty() {
                        println!("{}: (no suggestions)", prefix);
                    } else {
                        println!("{}: {}", prefix, s.join(", "));
                    }
                }
            }
        }
        Commands::Distance { a, b } => {
            println!("{}", distance(&a, &b));
        }
        Commands::Interactive { words } => {
            let dict = load_dictionary(config, &words);
            interactive::run(dict)?;
        }
    }
    Ok(())
}
