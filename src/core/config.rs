use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ConfigError, ModelError};
use crate::model::{PropertyDefinitionSpec, PropertyRole, RecordDefinition, RecordModel, MONGO_KEY_FIELD};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub collection: CollectionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionConfig {
    pub name: String,
    #[serde(default)]
    pub record: RecordDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: "vectors".to_string(),
            record: RecordDefinition {
                properties: vec![
                    PropertyDefinitionSpec::new("Key", PropertyRole::Key).with_storage_name(MONGO_KEY_FIELD),
                ],
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(contents).map_err(|e| ConfigError::TomlParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {:?}", path))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid configuration file {:?}", path))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.collection.name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "collection.name".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }

        Ok(())
    }

    /// Build the record model described by `collection.record`
    pub fn record_model(&self) -> std::result::Result<RecordModel, ModelError> {
        self.collection.record.build_model()
    }
}
