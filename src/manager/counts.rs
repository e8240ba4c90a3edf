// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::severity::Severity;
use serde::Serialize;

/// Per-severity message tallies kept by a manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MsgCounts {
    pub error: u64,
    pub warning: u64,
    pub info: u64,
    pub failure: u64,
    pub debug: u64,
}

impl MsgCounts {
    pub fn record(&mut self, severity: Severity) {
        *self.slot_mut(severity) += 1;
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Failure => self.failure,
            Severity::Debug => self.debug,
        }
    }

    /// Sum of all five counters.
    pub fn total(&self) -> u64 {
        self.error + self.warning + self.info + self.failure + self.debug
    }

    fn slot_mut(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Error => &mut self.error,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
            Severity::Failure => &mut self.failure,
            Severity::Debug => &mut self.debug,
        }
    }
}
