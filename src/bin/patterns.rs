//! Lists and runs the pattern demos.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use design_patterns::{catalog, logging, Category, Demo, PatternsConfig};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Runnable design pattern and SOLID demos", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available demos
    List {
        /// Only show one category (creational, structural, behavioral, solid)
        #[arg(long)]
        category: Option<Category>,
    },

    /// Run the named demos
    Run {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Run every demo in catalog order
    All {
        #[arg(long)]
        category: Option<Category>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => PatternsConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PatternsConfig::default(),
    };
    if let Some(color) = config.output.color_override() {
        colored::control::set_override(color);
    }

    match cli.command {
        Commands::List { category } => list(category),
        Commands::Run { names } => {
            // Resolve everything first so a typo fails before any output.
            let demos = names
                .iter()
                .map(|name| catalog::find(name))
                .collect::<Result<Vec<_>, _>>()?;
            run_demos(demos, &config)
        }
        Commands::All { category } => {
            let demos: Vec<&Demo> = match category {
                Some(c) => catalog::by_category(c).collect(),
                None => catalog::all().iter().collect(),
            };
            run_demos(demos, &config)
        }
    }
}

fn list(category: Option<Category>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for c in Category::ALL {
        if category.is_some_and(|wanted| wanted != c) {
            continue;
        }
        writeln!(out, "{}", c.as_str().to_uppercase().bold().cyan())?;
        for demo in catalog::by_category(c) {
            writeln!(
                out,
                "  {:<26} {:<24} {}",
                demo.name.green(),
                demo.pattern,
                demo.summary.dimmed()
            )?;
        }
    }
    Ok(())
}

fn run_demos(demos: Vec<&Demo>, config: &PatternsConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let heading = format!("=== {} ({}) ===", demo.name, demo.pattern);
        writeln!(out, "{}", heading.bold().yellow())?;
        demo.run(&mut out, config)
            .with_context(|| format!("demo '{}' failed", demo.name))?;
    }
    tracing::info!("Ran {} demo(s)", demos.len());
    Ok(())
}
