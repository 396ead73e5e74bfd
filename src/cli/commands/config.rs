//! Config command - show current configuration

use crate::cli::output::print_json;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration was read from; absent when using defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = crate::core::xdg::XdgDirs::new();
    let response = ConfigResponse {
        config_file: Config::file_path(&xdg).map(|p| p.to_string_lossy().into_owned()),
        config: (*services.config).clone(),
    };

    match format {
        OutputFormat::Human => {
            match &response.config_file {
                Some(path) => println!("# config_file: {path}"),
                None => println!("# no config file found, using defaults"),
            }
            print!("{}", toml::to_string_pretty(&response.config)?);
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
