use crate::core::billing::RateTable;
use crate::core::inventory::{Inventory, DEFAULT_CAPACITY};
use crate::utils::error::{MarinaError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Optional settings file. Every section and key has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarinaConfig {
    pub inventory: InventoryConfig,
    pub rates: RateTable,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl MarinaConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MarinaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MarinaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MarinaError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("inventory.capacity", self.inventory.capacity, 1)?;
        self.rates.validate()?;

        if let Some(level) = &self.logging.level {
            validate_non_empty_string("logging.level", level)?;
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(MarinaError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Unsupported level. Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    /// Replaces the configured capacity when the command line gives one.
    pub fn with_capacity_override(mut self, capacity: Option<usize>) -> Self {
        if let Some(capacity) = capacity {
            self.inventory.capacity = capacity;
        }
        self
    }

    pub fn capacity(&self) -> usize {
        self.inventory.capacity
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    /// An empty inventory with the configured capacity and rates.
    pub fn new_inventory(&self) -> Inventory {
        Inventory::new(self.inventory.capacity).with_rates(self.rates)
    }
}

impl Validate for MarinaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
