use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use toolsite::collector::Collector;
use toolsite::config::{Config, SiteConfig};
use toolsite::llm::DescriptionGenerator;
use toolsite::site::SiteBuilder;

mod cli;

use cli::{Cli, Commands};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolsite")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolsite.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Fold CLI overrides into the loaded configuration
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(root) = &cli.root {
        config.build.root_dir = root.clone();
    }
    if let Some(out) = &cli.out {
        config.build.out_dir = out.clone();
    }
    if cli.no_llm {
        config.llm.enabled = false;
    }
    if let Commands::Colophon { limit: Some(limit) } = &cli.command {
        config.build.commit_limit = *limit;
    }
}

fn site_builder(config: &Config, with_llm: bool) -> Result<SiteBuilder> {
    let site = SiteConfig::load(&config.build.root_dir).context("Failed to load site configuration")?;
    info!("Site: {:?}", site);

    let generator = if with_llm {
        DescriptionGenerator::from_env(&config.llm)
    } else {
        None
    };
    let collector = match generator {
        Some(generator) => Collector::with_generator(generator),
        None => Collector::new(),
    };

    Ok(SiteBuilder::new(&config.build, site).with_collector(collector))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Running {:?}", cli.command);

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
        println!("  root: {}", config.build.root_dir.display());
        println!("  out:  {}", config.build.out_dir.display());
    }

    let uses_llm = matches!(cli.command, Commands::Build | Commands::Gather);
    let builder = site_builder(config, uses_llm)?;

    match &cli.command {
        Commands::Build => {
            println!("{}", "=== Building site ===".cyan());
            let report = builder.build().await.context("Build failed")?;
            println!(
                "{} {} tool(s), {} commit(s), {} file(s) in {}",
                "✓".green(),
                report.tools,
                report.commits,
                report.files_written.len(),
                builder.out_dir().display()
            );
        }
        Commands::Gather => {
            println!("{}", "=== Gathering tool metadata ===".cyan());
            let manifest = builder.gather().await.context("Failed to gather tool metadata")?;
            println!(
                "{} Wrote {} tool(s) to {}",
                "✓".green(),
                manifest.len(),
                builder.manifest_path().display()
            );
        }
        Commands::Index => {
            println!("{}", "=== Building index ===".cyan());
            let written = builder.index().context("Failed to build index")?;
            println!(
                "{} Built index with {} tool(s)",
                "✓".green(),
                written.len().saturating_sub(1)
            );
        }
        Commands::Colophon { .. } => {
            println!("{}", "=== Building colophon ===".cyan());
            let (path, commits) = builder.colophon().context("Failed to build colophon")?;
            println!("Found {} commit(s)", commits);
            println!("{} Wrote colophon to {}", "✓".green(), path.display());
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_overrides(&cli, &mut config);

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
