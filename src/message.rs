// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::severity::Severity;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A diagnostic message as it travels through one dispatch call.
///
/// Borrowed from the producer; sinks that need to keep a message convert it
/// with [`Message::to_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    /// Source file of the producer.
    pub file: &'a str,
    /// Source line of the producer.
    pub line: u32,
    pub severity: Severity,
    /// Short message label, e.g. `W001`.
    pub label: &'a str,
    pub body: &'a str,
}

impl<'a> Message<'a> {
    pub fn new(file: &'a str, line: u32, severity: Severity, label: &'a str, body: &'a str) -> Self {
        Self {
            file,
            line,
            severity,
            label,
            body,
        }
    }

    pub fn to_record(&self) -> MsgRecord {
        MsgRecord {
            file: self.file.to_string(),
            line: self.line,
            severity: self.severity,
            label: self.label.to_string(),
            body: self.body.to_string(),
        }
    }
}

/// Renders `<severity> [<label>]: <body>` without a line terminator.
impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.label, self.body)
    }
}

/// An owned copy of a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MsgRecord {
    pub file: String,
    pub line: u32,
    pub severity: Severity,
    pub label: String,
    pub body: String,
}

impl MsgRecord {
    pub fn as_message(&self) -> Message<'_> {
        Message::new(&self.file, self.line, self.severity, &self.label, &self.body)
    }
}
