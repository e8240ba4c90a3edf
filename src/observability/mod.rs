// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability for the message facility itself.
//!
//! The facility reports its own lifecycle (registrations, dropped handlers,
//! sink failures) through `tracing`, never through the managers it serves,
//! so a misbehaving sink cannot feed back into the fan-out that exposed it.
//!
//! Message types follow a struct-based pattern: each event is a struct with a
//! `Display` implementation and a [`messages::StructuredLog`] implementation
//! that attaches the struct's fields to the `tracing` event.

pub mod messages;
