//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::tree_view::OidTreeConvert;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.base_dir.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Tree { descriptions } => tree(&container, *descriptions),
        Commands::Files => files(&container),
        Commands::Lookup { oid } => lookup(&container, oid),
        Commands::Resolve { name } => resolve(&container, name),
        Commands::Config { command } => config(&container, command),
        Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(container))]
fn tree(container: &ServiceContainer, descriptions: bool) -> CliResult<()> {
    let forest = container.forest()?;
    if forest.is_empty() {
        output::warning(&format!(
            "no definitions loaded from {}",
            container.settings.base_dir.display()
        ));
        return Ok(());
    }
    for root in forest.roots() {
        output::plain(&root.to_tree_string(descriptions));
    }
    Ok(())
}

#[instrument(skip(container))]
fn files(container: &ServiceContainer) -> CliResult<()> {
    let sources = container.sources()?;
    let layout = &container.settings.layout;

    if sources.is_empty() {
        output::warning(&format!(
            "no definition files below {}",
            layout.conf_path(&container.settings.base_dir).display()
        ));
        return Ok(());
    }

    let loadable = sources.has_main_file(&layout.main_file);

    output::section("Definition files", sources.oid_files.len());
    for file in &sources.oid_files {
        output::file_entry(file, !loadable);
    }
    output::section("Code tables", sources.code_files.len());
    for file in &sources.code_files {
        output::file_entry(file, !loadable);
    }
    if !loadable {
        output::warning(&format!(
            "{}.xml not found in {}, no definitions will be loaded",
            layout.main_file,
            layout.conf_path(&container.settings.base_dir).display()
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn lookup(container: &ServiceContainer, oid: &str) -> CliResult<()> {
    if oid.trim().is_empty() {
        return Err(CliError::Usage("OID must not be empty".into()));
    }
    let forest = container.forest()?;
    let translation = forest
        .translate(oid)
        .ok_or_else(|| CliError::NotFound(oid.to_string()))?;

    output::translation(oid, &translation);
    if let Some(description) = translation.node.description() {
        output::note(description.trim());
    }
    Ok(())
}

#[instrument(skip(container))]
fn resolve(container: &ServiceContainer, name: &str) -> CliResult<()> {
    let forest = container.forest()?;
    let value = forest
        .find_by_full_name(name)
        .and_then(|node| node.value())
        .ok_or_else(|| CliError::NotFound(name.to_string()))?;

    output::translation(name, value);
    Ok(())
}

fn config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::plain(&container.settings.to_toml()?),
        ConfigCommands::Template => output::plain(&Settings::template()),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".into());
            output::field("global", &global);
            output::field(
                "local",
                &local_config_path(&container.settings.base_dir).display(),
            );
        }
    }
    Ok(())
}
