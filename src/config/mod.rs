pub mod suite_config;

use crate::flows::KNOWN_FLOWS;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use suite_config::SuiteConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "api-smoke")]
#[command(about = "End-to-end checks for the user and card-deck APIs")]
pub struct CliConfig {
    #[arg(long, default_value = "https://reqres.in")]
    pub users_base_url: String,

    #[arg(long, default_value = "https://www.deckofcardsapi.com")]
    pub deck_base_url: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Run a single flow: user-crud or deck")]
    pub flow: Option<String>,

    #[arg(long, help = "TOML suite config; overrides the URL flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("users_base_url", &self.users_base_url)?;
        validation::validate_url("deck_base_url", &self.deck_base_url)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if let Some(flow) = &self.flow {
            if !KNOWN_FLOWS.contains(&flow.as_str()) {
                return Err(CheckError::ConfigValidationError {
                    field: "flow".to_string(),
                    message: format!(
                        "Unknown flow '{}'. Known flows: {}",
                        flow,
                        KNOWN_FLOWS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Effective settings for one run, after merging CLI flags and the
/// optional TOML suite config.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub users_base_url: String,
    pub deck_base_url: String,
    pub timeout: Duration,
    pub execution_order: Vec<String>,
}

impl RunSettings {
    pub fn from_suite(config: &SuiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            users_base_url: config.services.users_base_url.clone(),
            deck_base_url: config.services.deck_base_url.clone(),
            timeout: Duration::from_secs(config.services.timeout_seconds.unwrap_or(30)),
            execution_order: config.suite.execution_order.clone(),
        })
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        cli.validate()?;

        if let Some(path) = &cli.config {
            let suite = SuiteConfig::from_file(path)?;
            let mut settings = Self::from_suite(&suite)?;
            // A --flow filter still applies on top of the suite file.
            if let Some(flow) = &cli.flow {
                settings.execution_order.retain(|name| name == flow);
                if settings.execution_order.is_empty() {
                    return Err(CheckError::ConfigError {
                        message: format!("Flow '{}' is not part of the configured suite", flow),
                    });
                }
            }
            return Ok(settings);
        }

        let execution_order = match &cli.flow {
            Some(flow) => vec![flow.clone()],
            None => KNOWN_FLOWS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            users_base_url: cli.users_base_url.clone(),
            deck_base_url: cli.deck_base_url.clone(),
            timeout: Duration::from_secs(cli.timeout_seconds),
            execution_order,
        })
    }
}
