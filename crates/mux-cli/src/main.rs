//! trie-mux CLI
//!
//! CLI tool for checking route manifests and matching paths against them.

mod bench;
mod manifest;

use std::env;
use std::path::Path;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

use mux_core::{Params, RouterBuilder};

use crate::bench::{run_bench, BenchOptions};
use crate::manifest::load_manifest;

const ENV_LOG: &str = "TRIE_MUX_LOG";

#[derive(Parser)]
#[command(name = "mux-cli")]
#[command(about = "trie-mux route manifest checker and matcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and compile a manifest, reporting every rejected line
    Check {
        /// Manifest file (`.json` for JSON, anything else for text)
        #[arg(short, long)]
        input: String,
    },

    /// Match paths against a manifest and print one JSON object per path
    Match {
        /// Manifest file
        #[arg(short, long)]
        input: String,

        /// Handler name reported when nothing matches
        #[arg(long)]
        not_found: Option<String>,

        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the registered routes in canonical form
    Routes {
        /// Manifest file
        #[arg(short, long)]
        input: String,
    },

    /// Time lookups against a manifest
    Bench {
        /// Manifest file
        #[arg(short, long)]
        input: String,

        /// Number of timed lookups
        #[arg(long, default_value_t = 1_000_000)]
        iterations: usize,

        /// Untimed lookups before measuring
        #[arg(long, default_value_t = 10_000)]
        warmup: usize,

        /// Paths to resolve, round robin
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    path: &'a str,
    handler: Option<&'a str>,
    matched: bool,
    params: Params,
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_filters(&env::var(ENV_LOG).unwrap_or_default())
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { input } => cmd_check(&input),
        Commands::Match {
            input,
            not_found,
            paths,
        } => cmd_match(&input, not_found, &paths),
        Commands::Routes { input } => cmd_routes(&input),
        Commands::Bench {
            input,
            iterations,
            warmup,
            paths,
        } => cmd_bench(&input, iterations, warmup, &paths),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_check(input: &str) -> Result<(), String> {
    let loaded = load_manifest(Path::new(input))?;
    let stats = &loaded.outcome.stats;

    println!("Manifest '{}'", input);
    println!("  Entries:  {}", stats.entries);
    println!("  Routes:   {}", stats.routes);
    println!("  Rejected: {}", stats.rejected);
    println!("  Time:     {:.2}ms", loaded.total_ms);

    if loaded.diagnostics.is_empty() {
        return Ok(());
    }

    println!();
    for diagnostic in &loaded.diagnostics {
        println!("  {}", diagnostic);
    }

    Err(format!("{} problem(s) in '{}'", loaded.diagnostics.len(), input))
}

fn cmd_match(input: &str, not_found: Option<String>, paths: &[String]) -> Result<(), String> {
    let loaded = load_manifest(Path::new(input))?;
    for diagnostic in &loaded.diagnostics {
        log::warn!("{}", diagnostic);
    }

    let trie = loaded.outcome.trie;

    match not_found {
        Some(not_found) => {
            let mut builder = RouterBuilder::from(trie);
            builder.not_found(not_found);
            let router = builder.build().map_err(|e| e.to_string())?;

            for path in paths {
                let resolved = router
                    .resolve(path)
                    .map_err(|e| format!("Cannot match '{}': {}", path, e))?;
                print_json(&MatchOutput {
                    path,
                    handler: Some(resolved.handler.as_str()),
                    matched: resolved.matched,
                    params: resolved.params,
                })?;
            }
        }
        None => {
            for path in paths {
                let found = trie
                    .match_path(path)
                    .map_err(|e| format!("Cannot match '{}': {}", path, e))?;
                let output = match found {
                    Some(m) => MatchOutput {
                        path,
                        handler: Some(m.handler.as_str()),
                        matched: true,
                        params: m.params,
                    },
                    None => MatchOutput {
                        path,
                        handler: None,
                        matched: false,
                        params: Params::new(),
                    },
                };
                print_json(&output)?;
            }
        }
    }

    Ok(())
}

fn cmd_routes(input: &str) -> Result<(), String> {
    let loaded = load_manifest(Path::new(input))?;
    let routes = loaded.outcome.trie.routes();

    let width = routes.iter().map(|(pattern, _)| pattern.len()).max().unwrap_or(0);
    for (pattern, handler) in routes {
        println!("{:<width$}  {}", pattern, handler, width = width);
    }

    if !loaded.diagnostics.is_empty() {
        eprintln!("({} rejected line(s), run `check` for details)", loaded.diagnostics.len());
    }

    Ok(())
}

fn cmd_bench(input: &str, iterations: usize, warmup: usize, paths: &[String]) -> Result<(), String> {
    let loaded = load_manifest(Path::new(input))?;
    let opts = BenchOptions {
        iterations,
        warmup_ops: warmup,
    };
    let report = run_bench(&loaded.outcome.trie, paths, &opts)?;

    println!("Benchmark '{}' ({} routes, {} paths)", input, loaded.outcome.stats.routes, paths.len());
    println!("  Ops:      {}", report.ops);
    println!("  Hits:     {}", report.hits);
    println!("  Time:     {:.1}ms", report.total_ms);
    println!("  Per op:   {:.1}ns", report.ns_per_op);

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let line = serde_json::to_string(value).map_err(|e| format!("Failed to encode output: {}", e))?;
    println!("{}", line);
    Ok(())
}
