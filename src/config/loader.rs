// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use crate::severity::{Severity, SeverityMask};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Handler configuration for a message manager.
///
/// Typically loaded from a YAML file. Each entry describes one handler: where
/// its output goes and which severities it accepts.
///
/// # Example
/// ```yaml
/// handlers:
///   - target: stderr
///     severities: [error, warning, failure]
///   - target: stdout
///     severities: [info]
///   - target: tracing
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MsgConfig {
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

/// Configuration for a single handler.
///
/// # Fields
/// * `target` - Where messages are written
/// * `severities` - Severities the handler accepts (optional, defaults to all)
#[derive(Debug, Deserialize)]
pub struct HandlerConfig {
    pub target: Target,
    pub severities: Option<Vec<Severity>>,
}

/// Output destination of a configured handler.
///
/// # Variants
/// * `Stdout` - Formatted lines on standard output
/// * `Stderr` - Formatted lines on standard error
/// * `Tracing` - Relayed into the `tracing` subscriber
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Stdout,
    Stderr,
    Tracing,
}

impl HandlerConfig {
    /// The handler's mask. A missing list means every severity.
    pub fn mask(&self) -> SeverityMask {
        match &self.severities {
            Some(severities) => severities.iter().copied().collect(),
            None => SeverityMask::ALL,
        }
    }
}

impl MsgConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let cfg: MsgConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects handlers that list no severities at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, handler) in self.handlers.iter().enumerate() {
            if matches!(&handler.severities, Some(list) if list.is_empty()) {
                return Err(ConfigError::EmptySeverities { index });
            }
        }
        Ok(())
    }
}

/// Load and validate a handler configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MsgConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    MsgConfig::from_yaml_str(&content)
}
