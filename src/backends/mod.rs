// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete sinks for message handlers.
//!
//! Each sink implements the [`MsgSink`](crate::traits::MsgSink) trait and is
//! wrapped in a [`MsgHandler`](crate::MsgHandler) to receive messages.
//!
//! # Available Sinks
//!
//! - **StreamSink**: formats `<severity> [<label>]: <body>` lines onto any
//!   `std::io::Write` (stdout, stderr, a file, a `Vec<u8>`)
//! - **MemorySink**: keeps owned copies of every message, for tests and for
//!   callers that want to inspect diagnostics after the fact
//! - **TracingSink**: relays messages into `tracing` at the matching level
//!
//! # Example
//! ```rust
//! use msgmgr::backends::MemorySink;
//! use msgmgr::{MsgHandler, MsgManager, Severity};
//!
//! let manager = MsgManager::new();
//! let capture = MsgHandler::new(MemorySink::new());
//! manager.reg_handler(&capture).unwrap();
//!
//! manager.put_msg(file!(), line!(), Severity::Debug, "D0", "probe");
//! assert_eq!(capture.sink().records()[0].body, "probe");
//! ```

pub mod memory;
pub mod stream;
pub mod tracing_sink;

pub use memory::MemorySink;
pub use stream::StreamSink;
pub use tracing_sink::TracingSink;
