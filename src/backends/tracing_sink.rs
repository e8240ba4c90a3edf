// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::MsgResult;
use crate::message::Message;
use crate::severity::Severity;
use crate::traits::MsgSink;

/// Forwards messages to `tracing` at the level matching their severity.
///
/// `Error` and `Failure` map to `error!`, `Warning` to `warn!`, `Info` to
/// `info!`, `Debug` to `debug!`. The producer's location and the label are
/// attached as fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl MsgSink for TracingSink {
    fn emit(&mut self, msg: &Message<'_>) -> MsgResult<()> {
        match msg.severity {
            Severity::Error | Severity::Failure => tracing::error!(
                target: "msgmgr::relay",
                src_file = msg.file,
                src_line = msg.line,
                severity = msg.severity.as_str(),
                label = msg.label,
                "{}", msg.body
            ),
            Severity::Warning => tracing::warn!(
                target: "msgmgr::relay",
                src_file = msg.file,
                src_line = msg.line,
                label = msg.label,
                "{}", msg.body
            ),
            Severity::Info => tracing::info!(
                target: "msgmgr::relay",
                src_file = msg.file,
                src_line = msg.line,
                label = msg.label,
                "{}", msg.body
            ),
            Severity::Debug => tracing::debug!(
                target: "msgmgr::relay",
                src_file = msg.file,
                src_line = msg.line,
                label = msg.label,
                "{}", msg.body
            ),
        }
        Ok(())
    }
}
