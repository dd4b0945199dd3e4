//! Command line definition and configuration resolution

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use mygreat_core::MygreatConfig;
use std::path::{Path, PathBuf};

/// Config file read from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "mygreat.toml";

fn migrations_arg() -> Arg {
    Arg::new("migrations")
        .long("migrations")
        .value_name("PATTERN")
        .help("Glob pattern for local migration files (overrides config)")
}

/// Build the `mygreat` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("mygreat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reconcile local migration files with remote migration records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Config file (default: ./mygreat.toml if present)"),
        )
        .subcommand(
            Command::new("status")
                .about("List every migration with the locations it was found in")
                .arg(migrations_arg())
                .arg(
                    Arg::new("records")
                        .long("records")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("JSON record file (overrides config)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a local migration's path, checksum and body")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .value_name("NAME")
                        .help("Migration name (file name without extension)"),
                )
                .arg(migrations_arg()),
        )
}

/// Resolve configuration: explicit file, else `./mygreat.toml`, else defaults;
/// then apply subcommand overrides
///
/// # Errors
/// If an explicit config file is missing or any config file is invalid
pub fn resolve_config(matches: &ArgMatches) -> anyhow::Result<MygreatConfig> {
    resolve_config_in(matches, Path::new("."))
}

/// As [`resolve_config`], looking for the default config file under `dir`
///
/// # Errors
/// If an explicit config file is missing or any config file is invalid
pub fn resolve_config_in(matches: &ArgMatches, dir: &Path) -> anyhow::Result<MygreatConfig> {
    let (_, sub) = matches.subcommand().context("no subcommand given")?;

    let mut config = match sub.get_one::<PathBuf>("config") {
        Some(path) => MygreatConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => {
            let default = dir.join(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                MygreatConfig::from_file(&default)
                    .with_context(|| format!("reading config {}", default.display()))?
            } else {
                MygreatConfig::default()
            }
        }
    };

    if let Some(pattern) = sub.try_get_one::<String>("migrations").ok().flatten() {
        config = config.with_migrations(pattern.clone());
    }
    if let Some(records) = sub.try_get_one::<PathBuf>("records").ok().flatten() {
        config = config.with_records(records.clone());
    }

    config.validate()?;
    Ok(config)
}
