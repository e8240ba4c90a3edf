// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while loading handler configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid YAML or does not match the schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A handler lists `severities: []`, which would never receive anything
    #[error("Handler #{index} has an empty severity list")]
    EmptySeverities {
        /// Position of the offending handler in the `handlers` list
        index: usize,
    },
}
