// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for handler registration events.
//!
//! This module contains message types for logging events related to:
//! * Handlers joining and leaving a manager
//! * Handlers removed implicitly when dropped
//! * Rejected registration requests

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Handler appended to a manager's delivery list.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
///
/// # Example
/// ```
/// use msgmgr::observability::messages::handler::HandlerRegistered;
///
/// let msg = HandlerRegistered {
///     sink: "stderr",
///     slot: 2,
///     handler_count: 3,
/// };
///
/// assert_eq!(msg.to_string(), "Handler 'stderr' registered at slot 2 (3 handlers)");
/// ```
pub struct HandlerRegistered<'a> {
    pub sink: &'a str,
    pub slot: usize,
    pub handler_count: usize,
}

impl Display for HandlerRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler '{}' registered at slot {} ({} handlers)",
            self.sink, self.slot, self.handler_count
        )
    }
}

impl StructuredLog for HandlerRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            sink = self.sink,
            slot = self.slot,
            handler_count = self.handler_count,
            "{}", self
        );
    }
}

/// Handler removed from a manager by an explicit unregister call.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct HandlerUnregistered<'a> {
    pub sink: &'a str,
    pub slot: usize,
    pub handler_count: usize,
}

impl Display for HandlerUnregistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler '{}' unregistered from slot {} ({} handlers left)",
            self.sink, self.slot, self.handler_count
        )
    }
}

impl StructuredLog for HandlerUnregistered<'_> {
    fn log(&self) {
        tracing::debug!(
            sink = self.sink,
            slot = self.slot,
            handler_count = self.handler_count,
            "{}", self
        );
    }
}

/// Registered handler dropped; it removed itself from its manager.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct HandlerDropped<'a> {
    pub sink: &'a str,
    pub slot: usize,
    pub handler_count: usize,
}

impl Display for HandlerDropped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler '{}' dropped while registered; slot {} released ({} handlers left)",
            self.sink, self.slot, self.handler_count
        )
    }
}

impl StructuredLog for HandlerDropped<'_> {
    fn log(&self) {
        tracing::debug!(
            sink = self.sink,
            slot = self.slot,
            handler_count = self.handler_count,
            "{}", self
        );
    }
}

/// Register or unregister request refused.
///
/// # Log Level
/// `warn!` - Caller bug; the registry was left unchanged
///
/// # Example
/// ```
/// use msgmgr::observability::messages::handler::RegistrationRejected;
/// use msgmgr::MsgError;
///
/// let error = MsgError::AlreadyRegistered;
/// let msg = RegistrationRejected {
///     sink: "stdout",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("already registered"));
/// ```
pub struct RegistrationRejected<'a> {
    pub sink: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RegistrationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registration change for handler '{}' rejected: {}",
            self.sink, self.error
        )
    }
}

impl StructuredLog for RegistrationRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            sink = self.sink,
            error = %self.error,
            "{}", self
        );
    }
}
