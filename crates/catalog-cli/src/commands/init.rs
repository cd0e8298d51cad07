//! `catalog init` - create a default configuration file and an empty
//! catalog data file.

use std::path::Path;

use catalog_adapters::JsonFileStore;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, StorageBackend},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = global.config.clone().unwrap_or_else(AppConfig::config_path);
    write_config(&config_path, args.force, &output)?;

    let data_file = global
        .data_file
        .clone()
        .unwrap_or_else(|| config.storage.data_file.clone());

    if global.data_file.is_some() || config.storage.backend == StorageBackend::File {
        if JsonFileStore::initialize(&data_file)? {
            output.success(&format!("Catalog created at {}", data_file.display()))?;
        } else {
            output.info(&format!("Catalog already exists at {}", data_file.display()))?;
        }
    }

    Ok(())
}

fn write_config(config_path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    if config_path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}
