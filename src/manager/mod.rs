// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The message manager: handler registry, fan-out, and per-severity counters.
//!
//! # Delivery
//!
//! `put_msg` bumps the counter for the message's severity and then offers the
//! message to every handler, in registration order. The handler set is taken
//! when the call starts: handlers registered from inside a sink see the next
//! message, and handlers unregistered from inside a sink are skipped for the
//! rest of the current one, even if they are registered again (here or with
//! another manager) before their turn.
//!
//! # Failures
//!
//! A sink error never stops the fan-out. It is logged, counted in
//! [`MsgManager::emit_failure_num`], and delivery continues with the next
//! handler. Contract violations (double registration, unregistering from the
//! wrong manager) are returned as errors and leave the registry unchanged.

mod counts;
mod registry;


pub use counts::MsgCounts;

use crate::errors::{MsgError, MsgResult};
use crate::handler::{Delivery, MsgHandler, Registration};
use crate::message::Message;
use crate::observability::messages::handler::{
    HandlerRegistered, HandlerUnregistered, RegistrationRejected,
};
use crate::observability::messages::manager::{
    CountsCleared, EmitFailed, HandlersReleased, ReentrantEmitSkipped,
};
use crate::observability::messages::StructuredLog;
use crate::severity::Severity;
use crate::traits::MsgSink;
use registry::{Entry, HandlerList};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Shared manager state. Handlers hold a weak reference to it.
pub(crate) struct ManagerCore {
    handlers: RefCell<HandlerList>,
    counts: Cell<MsgCounts>,
    emit_failures: Cell<u64>,
}

impl ManagerCore {
    /// Frees `slot` on behalf of a handler that already cleared its own
    /// back-reference.
    pub(crate) fn release(&self, slot: usize) {
        self.handlers.borrow_mut().remove(slot);
    }

    pub(crate) fn handler_num(&self) -> usize {
        self.handlers.borrow().len()
    }
}

/// Central registry and dispatcher for diagnostic messages.
///
/// The manager does not own its handlers. Dropping the manager unregisters
/// every handler still attached; the handlers themselves live on.
///
/// # Example
/// ```
/// use msgmgr::{MsgHandler, MsgManager, Severity, SeverityMask, StreamSink};
///
/// let manager = MsgManager::new();
/// let handler = MsgHandler::with_mask(StreamSink::new(Vec::new()), SeverityMask::WARNING);
/// manager.reg_handler(&handler).unwrap();
///
/// manager.put_msg("f.cc", 10, Severity::Warning, "W001", "disk low");
///
/// assert_eq!(handler.sink().get_ref().as_slice(), b"Warning [W001]: disk low\n");
/// assert_eq!(manager.warning_num(), 1);
/// ```
pub struct MsgManager {
    core: Rc<ManagerCore>,
}

impl MsgManager {
    pub fn new() -> Self {
        Self {
            core: Rc::new(ManagerCore {
                handlers: RefCell::new(HandlerList::new()),
                counts: Cell::new(MsgCounts::default()),
                emit_failures: Cell::new(0),
            }),
        }
    }

    /// Appends `handler` to the delivery list.
    ///
    /// Fails with [`MsgError::AlreadyRegistered`] if the handler belongs to
    /// any manager, this one included.
    pub fn reg_handler<S: MsgSink + 'static>(&self, handler: &MsgHandler<S>) -> MsgResult<()> {
        if handler.is_registered() {
            let error = MsgError::AlreadyRegistered;
            RegistrationRejected {
                sink: handler.sink_name(),
                error: &error,
            }
            .log();
            return Err(error);
        }

        let (slot, ticket) = self.core.handlers.borrow_mut().push(handler.as_dispatch());
        *handler.registration().borrow_mut() = Some(Registration {
            manager: Rc::downgrade(&self.core),
            slot,
            ticket,
        });

        HandlerRegistered {
            sink: handler.sink_name(),
            slot,
            handler_count: self.handler_num(),
        }
        .log();
        Ok(())
    }

    /// Removes `handler` from the delivery list.
    ///
    /// Fails with [`MsgError::NotRegisteredHere`] if the handler is
    /// unregistered or belongs to a different manager.
    pub fn unreg_handler<S>(&self, handler: &MsgHandler<S>) -> MsgResult<()> {
        let slot = match handler.registration().borrow().as_ref() {
            Some(registration) if self.is(&registration.manager) => registration.slot,
            _ => {
                let error = MsgError::NotRegisteredHere;
                RegistrationRejected {
                    sink: handler.sink_name(),
                    error: &error,
                }
                .log();
                return Err(error);
            }
        };

        handler.registration().borrow_mut().take();
        self.core.release(slot);

        HandlerUnregistered {
            sink: handler.sink_name(),
            slot,
            handler_count: self.handler_num(),
        }
        .log();
        Ok(())
    }

    /// Detaches every handler and empties the list. Idempotent.
    pub fn unreg_all_handlers(&self) {
        let handlers = self.core.handlers.borrow_mut().drain();
        for handler in &handlers {
            handler.detach();
        }
        if !handlers.is_empty() {
            HandlersReleased {
                handler_count: handlers.len(),
            }
            .log();
        }
    }

    /// Records one message and delivers it to the registered handlers.
    pub fn put_msg(&self, file: &str, line: u32, severity: Severity, label: &str, body: &str) {
        self.put_message(&Message::new(file, line, severity, label, body));
    }

    pub fn put_message(&self, msg: &Message<'_>) {
        let mut counts = self.core.counts.get();
        counts.record(msg.severity);
        self.core.counts.set(counts);

        let targets = self.core.handlers.borrow().snapshot();
        for Entry { ticket, handler: target } in targets {
            // Left this manager (or rejoined under a new ticket) mid fan-out.
            if !target.is_attached_to(&self.core, ticket) {
                continue;
            }
            match target.dispatch(msg) {
                Delivery::Emitted | Delivery::Filtered => {}
                Delivery::Busy => ReentrantEmitSkipped {
                    sink: target.sink_name(),
                    severity: msg.severity,
                    label: msg.label,
                }
                .log(),
                Delivery::Failed(error) => {
                    self.core.emit_failures.set(self.core.emit_failures.get() + 1);
                    EmitFailed {
                        sink: target.sink_name(),
                        severity: msg.severity,
                        label: msg.label,
                        error: &error,
                    }
                    .log();
                }
            }
        }
    }

    /// Resets all five counters. Registered handlers are untouched.
    pub fn clear_count(&self) {
        let previous_total = self.msg_num();
        self.core.counts.set(MsgCounts::default());
        CountsCleared { previous_total }.log();
    }

    pub fn counts(&self) -> MsgCounts {
        self.core.counts.get()
    }

    /// Total number of messages since creation or the last `clear_count`.
    pub fn msg_num(&self) -> u64 {
        self.counts().total()
    }

    pub fn error_num(&self) -> u64 {
        self.counts().error
    }

    pub fn warning_num(&self) -> u64 {
        self.counts().warning
    }

    pub fn info_num(&self) -> u64 {
        self.counts().info
    }

    pub fn fail_num(&self) -> u64 {
        self.counts().failure
    }

    pub fn debug_num(&self) -> u64 {
        self.counts().debug
    }

    /// Number of sink errors swallowed during fan-out. Not reset by `clear_count`.
    pub fn emit_failure_num(&self) -> u64 {
        self.core.emit_failures.get()
    }

    pub fn handler_num(&self) -> usize {
        self.core.handler_num()
    }

    pub(crate) fn is(&self, manager: &Weak<ManagerCore>) -> bool {
        std::ptr::eq(manager.as_ptr(), Rc::as_ptr(&self.core))
    }

    #[cfg(test)]
    pub(crate) fn occurrences<S>(&self, handler: &MsgHandler<S>) -> usize {
        self.core.handlers.borrow().occurrences(handler.addr())
    }
}

impl Default for MsgManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MsgManager {
    fn drop(&mut self) {
        self.unreg_all_handlers();
    }
}
