// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by handler registration and message emission.

use thiserror::Error;

/// Errors produced by the manager, handlers, and sinks.
///
/// `AlreadyRegistered` and `NotRegisteredHere` are contract violations: they
/// indicate a programming bug in the caller, and the registry is left exactly
/// as it was before the failing call.
#[derive(Error, Debug)]
pub enum MsgError {
    /// The handler already belongs to a manager (possibly the one being asked).
    #[error("Handler is already registered with a manager")]
    AlreadyRegistered,

    /// The handler does not belong to the manager it is being removed from.
    #[error("Handler is not registered with this manager")]
    NotRegisteredHere,

    /// A raw value that does not name one of the five severities.
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// Writing to the sink's output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other sink-specific failure.
    #[error("Sink error: {0}")]
    Sink(String),
}

impl MsgError {
    /// True for errors that signal a caller bug rather than a runtime fault.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            MsgError::AlreadyRegistered | MsgError::NotRegisteredHere | MsgError::UnknownSeverity(_)
        )
    }
}

/// Result type alias for dispatch operations.
pub type MsgResult<T> = Result<T, MsgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_classification() {
        struct TestCase {
            name: &'static str,
            error: MsgError,
            expected: bool,
        }

        let test_cases = vec![
            TestCase {
                name: "double registration",
                error: MsgError::AlreadyRegistered,
                expected: true,
            },
            TestCase {
                name: "foreign unregister",
                error: MsgError::NotRegisteredHere,
                expected: true,
            },
            TestCase {
                name: "unknown severity",
                error: MsgError::UnknownSeverity("7".to_string()),
                expected: true,
            },
            TestCase {
                name: "io failure",
                error: MsgError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed")),
                expected: false,
            },
            TestCase {
                name: "sink failure",
                error: MsgError::Sink("rejected".to_string()),
                expected: false,
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                test_case.error.is_contract_violation(),
                test_case.expected,
                "Test case '{}' failed",
                test_case.name
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MsgError::UnknownSeverity("fatal".to_string()).to_string(),
            "Unknown severity: fatal"
        );
        assert_eq!(
            MsgError::AlreadyRegistered.to_string(),
            "Handler is already registered with a manager"
        );
    }
}
