// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for manager fan-out and bookkeeping events.

use crate::observability::messages::StructuredLog;
use crate::severity::Severity;
use std::fmt::{Display, Formatter};

/// A sink returned an error; delivery continued with the next handler.
///
/// # Log Level
/// `warn!` - Message lost for one handler
///
/// # Example
/// ```
/// use msgmgr::observability::messages::manager::EmitFailed;
/// use msgmgr::Severity;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
/// let msg = EmitFailed {
///     sink: "stdout",
///     severity: Severity::Error,
///     label: "E042",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Handler 'stdout' failed to emit Error [E042]: closed");
/// ```
pub struct EmitFailed<'a> {
    pub sink: &'a str,
    pub severity: Severity,
    pub label: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for EmitFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler '{}' failed to emit {} [{}]: {}",
            self.sink, self.severity, self.label, self.error
        )
    }
}

impl StructuredLog for EmitFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            sink = self.sink,
            severity = self.severity.as_str(),
            label = self.label,
            error = %self.error,
            "{}", self
        );
    }
}

/// A handler was reached again while its sink was still emitting.
///
/// # Log Level
/// `warn!` - Nested delivery dropped for one handler
pub struct ReentrantEmitSkipped<'a> {
    pub sink: &'a str,
    pub severity: Severity,
    pub label: &'a str,
}

impl Display for ReentrantEmitSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler '{}' is already emitting; skipped nested {} [{}]",
            self.sink, self.severity, self.label
        )
    }
}

impl StructuredLog for ReentrantEmitSkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            sink = self.sink,
            severity = self.severity.as_str(),
            label = self.label,
            "{}", self
        );
    }
}

/// Every handler detached from a manager (explicitly or on drop).
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct HandlersReleased {
    pub handler_count: usize,
}

impl Display for HandlersReleased {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Released {} handlers", self.handler_count)
    }
}

impl StructuredLog for HandlersReleased {
    fn log(&self) {
        tracing::debug!(handler_count = self.handler_count, "{}", self);
    }
}

/// Counters reset.
///
/// # Log Level
/// `debug!` - Routine bookkeeping
pub struct CountsCleared {
    pub previous_total: u64,
}

impl Display for CountsCleared {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Message counters cleared (previous total {})", self.previous_total)
    }
}

impl StructuredLog for CountsCleared {
    fn log(&self) {
        tracing::debug!(previous_total = self.previous_total, "{}", self);
    }
}
