mod app;
mod cli;
mod render;

use anyhow::{bail, Result};
use clap::Parser;
use std::{
    fs::{self, OpenOptions},
    io::{self, IsTerminal},
};

use mastermind_core::{
    config::{self, AppConfig},
    GameRng, GameSession, Mastermind,
};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::{app::MastermindApp, cli::Cli, render::Renderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let mut settings = match &cli.config {
        Some(path) => {
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
            AppConfig::load_from(Some(path.as_path()))?
        }
        None => {
            config::ensure_default_config()?;
            AppConfig::load()?
        }
    };
    settings.apply_overrides(&cli.overrides());

    let (rules, warnings) = settings.clamp();
    for warning in &warnings {
        println!("{warning}");
    }

    let mut rng = match settings.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_clock(),
    };
    debug!(seed = rng.seed(), "Random source ready");

    let engine = Mastermind::new(rules, &mut rng)?;
    let color = settings.color_output && io::stdout().is_terminal();
    let mut app = MastermindApp::new(GameSession::new(engine), Renderer::new(color));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = app.run(stdin.lock(), &mut stdout)?;
    info!(
        ?outcome,
        turns_used = app.session().history().len(),
        "Session closed"
    );
    Ok(())
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("mastermind.log");

    let env_filter = EnvFilter::from_default_env();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
