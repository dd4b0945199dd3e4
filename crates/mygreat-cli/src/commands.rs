//! Subcommand implementations
//!
//! Each command returns its output as a string; printing is left to `main`.

use crate::cli::resolve_config;
use crate::report::{render_json, render_migration, render_table};
use anyhow::{bail, Context};
use clap::ArgMatches;
use mygreat_adaptors::{DirectoryLocator, FileLoader, JsonFileStore};
use mygreat_core::{Analyser, LocalRepository, MigrationLoader, MygreatConfig, RemoteRepository};

/// Dispatch parsed arguments to a command
///
/// # Errors
/// Configuration, source or load failures
pub async fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let config = resolve_config(matches)?;

    match matches.subcommand() {
        Some(("status", args)) => status(&config, args.get_flag("json")).await,
        Some(("show", args)) => {
            let name = args
                .get_one::<String>("name")
                .context("missing migration name")?;
            show(&config, name).await
        }
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    }
}

/// Analyse the configured directory against the configured record file
///
/// # Errors
/// If either source fails
pub async fn status(config: &MygreatConfig, json: bool) -> anyhow::Result<String> {
    let analyser = Analyser::new(
        LocalRepository::new(DirectoryLocator::new(config.migrations.as_str())),
        RemoteRepository::new(JsonFileStore::new(&config.remote.records)),
    );

    let collection = analyser.analyse().await.context("analysing migrations")?;

    if json {
        Ok(render_json(&collection)?)
    } else {
        Ok(render_table(&collection))
    }
}

/// Load one local migration by name
///
/// # Errors
/// If the directory cannot be listed, the name is unknown, or the file
/// cannot be loaded
pub async fn show(config: &MygreatConfig, name: &str) -> anyhow::Result<String> {
    let local = LocalRepository::new(DirectoryLocator::new(config.migrations.as_str()));
    let located = local
        .located()
        .await
        .context("locating local migrations")?
        .into_iter()
        .find(|m| m.name.as_str() == name);

    let Some(located) = located else {
        bail!("no local migration named '{name}' matches {}", config.migrations);
    };

    let migration = FileLoader::from_config(&config.loader)
        .load(&located)
        .await
        .with_context(|| format!("loading {}", located.path.display()))?;

    Ok(render_migration(&migration))
}
