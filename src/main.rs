//! Hua - Main entrypoint.
//!
//! Loads configuration and a word list, then answers membership, completion
//! and close-match queries from the command line.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hua_lib::config::{self, ConfigLoader, HuaConfig, LogConfig};
use hua_lib::data_structures::HuaTrie;
use hua_lib::dictionary::{DictionaryLoader, LoadReport};
use hua_lib::error::{HuaError, HuaResult};

/// Command line arguments for Hua.
#[derive(Parser, Debug)]
#[clap(name = "hua", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding `dictionary.path`
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether each word is in the dictionary
    Check {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// List dictionary words within one edit of each word
    Suggest {
        /// Words to match
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Load the dictionary and print its statistics
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    word: &'a str,
    known: bool,
}

#[derive(Serialize)]
struct CompleteOutput<'a> {
    prefix: &'a str,
    completions: BTreeSet<String>,
}

#[derive(Serialize)]
struct SuggestOutput<'a> {
    word: &'a str,
    known: bool,
    suggestions: BTreeSet<String>,
}

#[derive(Serialize)]
struct StatsOutput {
    words: usize,
    nodes: usize,
    alphabet: String,
    load: LoadReport,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> HuaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| HuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configured word list.
fn load_dictionary(config: &HuaConfig) -> HuaResult<(HuaTrie, LoadReport)> {
    let path = config.dictionary.path.as_deref().ok_or_else(|| {
        HuaError::Custom("No dictionary configured; pass --dictionary or set dictionary.path".to_string())
    })?;

    let mut trie = HuaTrie::with_config(config.search.to_trie_config());
    let report = DictionaryLoader::new(&mut trie)
        .strict(config.dictionary.strict)
        .load_file(path)?;

    Ok((trie, report))
}

fn print_json<T: Serialize>(value: &T) -> HuaResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_default_config(output: &Path) -> HuaResult<()> {
    info!("Generating default configuration");
    let default_config = HuaConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| HuaError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: Args, mut config: HuaConfig) -> HuaResult<()> {
    if let Some(path) = args.dictionary {
        config.dictionary.path = Some(path);
    }

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration ok");
            Ok(())
        }
        Command::GenConfig { output } => write_default_config(&output),
        Command::Stats => {
            let (trie, load) = load_dictionary(&config)?;
            let stats = StatsOutput {
                words: trie.len(),
                nodes: trie.node_count(),
                alphabet: trie.edge_labels().iter().collect(),
                load,
            };
            if args.json {
                print_json(&stats)
            } else {
                println!("words:      {}", stats.words);
                println!("nodes:      {}", stats.nodes);
                println!("alphabet:   {}", stats.alphabet);
                println!("duplicates: {}", stats.load.duplicates);
                println!("rejected:   {}", stats.load.rejected);
                Ok(())
            }
        }
        Command::Check { words } => {
            let (trie, _) = load_dictionary(&config)?;
            let results: Vec<_> = words
                .iter()
                .map(|word| CheckOutput {
                    word,
                    known: trie.contains_word(word),
                })
                .collect();
            if args.json {
                print_json(&results)
            } else {
                for result in results {
                    println!("{}\t{}", result.word, result.known);
                }
                Ok(())
            }
        }
        Command::Complete { prefix } => {
            let (trie, _) = load_dictionary(&config)?;
            let result = CompleteOutput {
                prefix: &prefix,
                completions: trie.autocomplete(&prefix),
            };
            if args.json {
                print_json(&result)
            } else {
                for word in &result.completions {
                    println!("{word}");
                }
                Ok(())
            }
        }
        Command::Suggest { words } => {
            let (trie, _) = load_dictionary(&config)?;
            let results: Vec<_> = words
                .iter()
                .map(|word| SuggestOutput {
                    word,
                    known: trie.contains_word(word),
                    suggestions: trie.close_matches(word),
                })
                .collect();
            if args.json {
                print_json(&results)
            } else {
                for result in results {
                    let suggestions: Vec<_> = result.suggestions.into_iter().collect();
                    println!("{}  ->  {}", result.word, suggestions.join(", "));
                }
                Ok(())
            }
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(args, config) {
        error!("{}", e);
        eprintln!("error: {e}");
        process::exit(1);
    }
}
