// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // concrete sinks
pub mod config;     // YAML handler configuration
pub mod errors;     // error handling
pub mod global;     // per-thread default manager + macros
pub mod handler;
pub mod manager;    // registry, fan-out, counters
pub mod message;
pub mod observability;
pub mod severity;
pub mod traits;     // sink abstraction

pub use backends::{MemorySink, StreamSink, TracingSink};
pub use errors::{ConfigError, MsgError, MsgResult};
pub use handler::MsgHandler;
pub use manager::{MsgCounts, MsgManager};
pub use message::{Message, MsgRecord};
pub use severity::{Severity, SeverityMask};
pub use traits::{BoxedSink, MsgSink};
