// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::MsgResult;
use crate::message::{Message, MsgRecord};
use crate::traits::MsgSink;

/// Collects every emitted message in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<MsgRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected messages in emission order.
    pub fn records(&self) -> &[MsgRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl MsgSink for MemorySink {
    fn emit(&mut self, msg: &Message<'_>) -> MsgResult<()> {
        self.records.push(msg.to_record());
        Ok(())
    }
}
