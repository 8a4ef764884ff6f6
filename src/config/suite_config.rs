use crate::flows::KNOWN_FLOWS;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML description of a check suite: which flows run, in what order,
/// and against which service endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: SuiteInfo,
    pub services: ServicesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteInfo {
    pub name: String,
    pub description: Option<String>,
    pub execution_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub users_base_url: String,
    pub deck_base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl SuiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigValidationError {
            field: "suite_toml_parsing".to_string(),
            message: format!("Suite TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values. Unset
    /// variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("suite.name", &self.suite.name)?;
        validation::validate_url("services.users_base_url", &self.services.users_base_url)?;
        validation::validate_url("services.deck_base_url", &self.services.deck_base_url)?;

        if let Some(timeout) = self.services.timeout_seconds {
            validation::validate_positive_number("services.timeout_seconds", timeout, 1)?;
        }

        if self.suite.execution_order.is_empty() {
            return Err(CheckError::ConfigValidationError {
                field: "suite.execution_order".to_string(),
                message: "At least one flow must be listed".to_string(),
            });
        }

        for flow_name in &self.suite.execution_order {
            if !KNOWN_FLOWS.contains(&flow_name.as_str()) {
                return Err(CheckError::ConfigValidationError {
                    field: "suite.execution_order".to_string(),
                    message: format!(
                        "Unknown flow '{}'. Known flows: {}",
                        flow_name,
                        KNOWN_FLOWS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate()
    }
}
