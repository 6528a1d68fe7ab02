//! Configuration commands.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Dump the configuration with plain-text credentials masked.
pub fn dump(config: &CliConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(&config.redacted())
        .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# {}", config.path().display());
    println!("{}", toml_str);
    Ok(())
}

/// Validate the configuration, resolving credentials.
pub fn validate(config: &CliConfig) -> CliResult<()> {
    let client_config = config.to_client_config(None).map_err(CliError::Config)?;
    println!(
        "Configuration is valid ({} auth, {}).",
        client_config.auth.kind(),
        client_config.base_url
    );
    Ok(())
}

/// Show the path of the configuration file in use.
pub fn path(config: &CliConfig) -> CliResult<()> {
    println!("config: {}", config.path().display());
    Ok(())
}
