//! slink - a static shortlink generator.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod redirect;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Validate { args } => cli::validate::run(&config, args),
        Commands::Generate => cli::generate::run(&config),
        Commands::Serve { interface, port } => cli::serve::run(&config, *interface, *port),
    }
}
