use std::{
    fs::File,
    io::{self, BufReader},
};

use agenda::{shell::Shell, Agenda, AgendaConfig, DEFAULT_LOG_FILTER};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AgendaConfig::parse();

    // logs go to stderr so that command output can be piped
    let filter = match &config.log {
        Some(log) => EnvFilter::try_new(log).context("invalid `--log` filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut agenda = Agenda::new(&config);
    if let Some(path) = &config.import {
        agenda
            .import(path)
            .with_context(|| format!("importing {}", path.display()))?;
    }
    if config.generate > 0 {
        agenda.generate(config.generate)?;
    }
    tracing::info!(len = agenda.len(), "register ready");

    let mut shell = Shell::new(agenda, io::stdout().lock());
    match &config.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening script {}", path.display()))?;
            shell.run(BufReader::new(file), false)?;
        }
        None => shell.run(io::stdin().lock(), true)?,
    }
    Ok(())
}
