use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    control::{Controller, FilteringRelay, RelayInterface},
    symbols::Symbol,
};

const SCHEMA_FILE_NAME: &str = "clarion.schema.json";
const BUNDLED_SCHEMA: &str = include_str!("../clarion.schema.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub relays: Vec<RelayConfig>,
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    7
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

/// Declarative form of a filtering relay.
///
/// Controller construct types and interface values are checked while
/// deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    pub client: Symbol,
    pub controller: Controller,
    pub interface: RelayInterface,
}

impl RelayConfig {
    pub fn build(&self) -> FilteringRelay {
        FilteringRelay::new(
            self.client.clone(),
            self.controller.clone(),
            self.interface.clone(),
        )
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema = load_schema(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;
        config.check_relay_clients()?;

        if !config.logging.dir.is_absolute() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }

        Ok(config)
    }

    pub fn build_relays(&self) -> Vec<FilteringRelay> {
        self.relays.iter().map(RelayConfig::build).collect()
    }

    fn check_relay_clients(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for relay in &self.relays {
            if !seen.insert(&relay.client) {
                return Err(anyhow!("relay client {} is declared more than once", relay.client));
            }
        }
        Ok(())
    }
}

/// Reads the schema named by `$schema`, else the schema beside the config,
/// else the bundled copy.
fn load_schema(config_base: &Path, config_value: &Value) -> Result<Value> {
    let schema_path = match config_value.get("$schema").and_then(Value::as_str) {
        Some(path_text) => Some(config_base.join(path_text)),
        None => Some(config_base.join(SCHEMA_FILE_NAME)).filter(|path| path.exists()),
    };

    let Some(schema_path) = schema_path else {
        return serde_json::from_str(BUNDLED_SCHEMA).context("failed to parse bundled schema");
    };

    let schema_content = fs::read_to_string(&schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))
}

fn validate_against_schema(config_value: &Value, schema: &Value) -> Result<()> {
    let compiled =
        JSONSchema::compile(schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| format!("{} at '{}'", error, error.instance_path))
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
