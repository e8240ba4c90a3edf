// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::MsgResult;
use crate::message::Message;
use crate::traits::MsgSink;
use std::io::{self, Write};

/// Writes each message as one text line: `<severity> [<label>]: <body>`.
///
/// The writer is flushed after every message. Write errors are returned to
/// the manager, which logs them and carries on with the other handlers.
///
/// # Example
/// ```
/// use msgmgr::{Message, MsgSink, Severity, StreamSink};
///
/// let mut sink = StreamSink::new(Vec::new());
/// sink.emit(&Message::new("f.cc", 10, Severity::Info, "I7", "ready")).unwrap();
/// assert_eq!(sink.get_ref().as_slice(), b"Info [I7]: ready\n");
/// ```
pub struct StreamSink<W> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> MsgSink for StreamSink<W> {
    fn emit(&mut self, msg: &Message<'_>) -> MsgResult<()> {
        writeln!(self.writer, "{}", msg)?;
        self.writer.flush()?;
        Ok(())
    }
}
