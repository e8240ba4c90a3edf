// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::{StreamSink, TracingSink};
use crate::config::{HandlerConfig, MsgConfig, Target};
use crate::handler::MsgHandler;
use crate::traits::BoxedSink;

/// Factory for creating handlers from configuration
pub struct HandlerFactory;

impl HandlerFactory {
    /// Create an unregistered handler for one configuration entry
    pub fn build(cfg: &HandlerConfig) -> MsgHandler<BoxedSink> {
        let (sink, name): (BoxedSink, &'static str) = match cfg.target {
            Target::Stdout => (Box::new(StreamSink::stdout()), "stdout"),
            Target::Stderr => (Box::new(StreamSink::stderr()), "stderr"),
            Target::Tracing => (Box::new(TracingSink::new()), "tracing"),
        };
        MsgHandler::named(sink, cfg.mask(), name)
    }

    /// Create one handler per entry, in configuration order
    pub fn build_all(cfg: &MsgConfig) -> Vec<MsgHandler<BoxedSink>> {
        cfg.handlers.iter().map(Self::build).collect()
    }
}
