// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for the facility's own structured logging.
//!
//! Each message type implements `Display` for the human-readable text and
//! [`StructuredLog`] to emit it through `tracing` with typed fields.
//!
//! # Organization
//!
//! * `handler` - handler registration lifecycle
//! * `manager` - fan-out failures and counter maintenance
//!
//! # Usage Pattern
//!
//! ```rust
//! use msgmgr::observability::messages::{handler::HandlerRegistered, StructuredLog};
//!
//! let msg = HandlerRegistered {
//!     sink: "stderr",
//!     slot: 0,
//!     handler_count: 1,
//! };
//!
//! msg.log();
//! ```

pub mod handler;
pub mod manager;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emits the message as a `tracing` event at its level.
    fn log(&self);
}
