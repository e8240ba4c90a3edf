// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message handlers: a sink plus the severity mask that gates it.
//!
//! A handler is either unregistered or registered with exactly one
//! [`MsgManager`]. Registration is recorded on both sides: the manager keeps a
//! weak reference in its slot list, and the handler keeps a weak reference to
//! the manager together with its slot token so it can remove itself in O(1)
//! when dropped.

use crate::errors::MsgError;
use crate::manager::{ManagerCore, MsgManager};
use crate::message::Message;
use crate::observability::messages::{handler::HandlerDropped, StructuredLog};
use crate::severity::{Severity, SeverityMask};
use crate::traits::MsgSink;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

/// Result of offering one message to one handler.
#[derive(Debug)]
pub(crate) enum Delivery {
    /// The mask accepted the message and the sink emitted it.
    Emitted,
    /// The mask rejected the message.
    Filtered,
    /// The sink was already emitting (re-entrant dispatch); nothing was done.
    Busy,
    /// The sink returned an error.
    Failed(MsgError),
}

/// Type-erased view of a handler used by the manager's slot list.
pub(crate) trait Dispatch {
    fn dispatch(&self, msg: &Message<'_>) -> Delivery;

    /// Moves the handler's slot token after the slot list was compacted.
    fn relocate(&self, slot: usize);

    /// Clears the back-reference without touching the manager.
    fn detach(&self);

    /// True while the handler is still registered with `manager` under
    /// `ticket`.
    fn is_attached_to(&self, manager: &Rc<ManagerCore>, ticket: u64) -> bool;

    fn sink_name(&self) -> &'static str;
}

/// Back-reference from a handler to the manager holding it.
pub(crate) struct Registration {
    pub(crate) manager: Weak<ManagerCore>,
    pub(crate) slot: usize,
    pub(crate) ticket: u64,
}

pub(crate) struct HandlerCore<S> {
    mask: Cell<SeverityMask>,
    registration: RefCell<Option<Registration>>,
    sink_name: &'static str,
    sink: RefCell<S>,
}

impl<S: MsgSink> Dispatch for HandlerCore<S> {
    fn dispatch(&self, msg: &Message<'_>) -> Delivery {
        if !self.mask.get().accepts(msg.severity) {
            return Delivery::Filtered;
        }
        let Ok(mut sink) = self.sink.try_borrow_mut() else {
            return Delivery::Busy;
        };
        match sink.emit(msg) {
            Ok(()) => Delivery::Emitted,
            Err(e) => Delivery::Failed(e),
        }
    }

    fn relocate(&self, slot: usize) {
        if let Some(registration) = self.registration.borrow_mut().as_mut() {
            registration.slot = slot;
        }
    }

    fn detach(&self) {
        self.registration.borrow_mut().take();
    }

    fn is_attached_to(&self, manager: &Rc<ManagerCore>, ticket: u64) -> bool {
        self.registration.borrow().as_ref().is_some_and(|registration| {
            registration.ticket == ticket
                && std::ptr::eq(registration.manager.as_ptr(), Rc::as_ptr(manager))
        })
    }

    fn sink_name(&self) -> &'static str {
        self.sink_name
    }
}

/// A registered (or registrable) receiver of diagnostic messages.
///
/// Wraps a [`MsgSink`] and only forwards messages whose severity is in the
/// handler's mask. Dropping a registered handler unregisters it first.
///
/// # Example
/// ```
/// use msgmgr::{MemorySink, MsgHandler, MsgManager, Severity, SeverityMask};
///
/// let manager = MsgManager::new();
/// let handler = MsgHandler::with_mask(MemorySink::new(), SeverityMask::ERROR);
/// manager.reg_handler(&handler).unwrap();
///
/// manager.put_msg("main.rs", 7, Severity::Error, "E1", "boom");
/// manager.put_msg("main.rs", 8, Severity::Info, "I1", "fine");
///
/// assert_eq!(handler.sink().len(), 1);
/// assert_eq!(manager.msg_num(), 2);
/// ```
pub struct MsgHandler<S> {
    core: Rc<HandlerCore<S>>,
}

impl<S: MsgSink + 'static> MsgHandler<S> {
    /// Creates an unregistered handler that accepts every severity.
    pub fn new(sink: S) -> Self {
        Self::with_mask(sink, SeverityMask::ALL)
    }

    pub fn with_mask(sink: S, mask: SeverityMask) -> Self {
        Self::named(sink, mask, std::any::type_name::<S>())
    }

    /// Like [`MsgHandler::with_mask`], with the name used in diagnostics.
    pub fn named(sink: S, mask: SeverityMask, sink_name: &'static str) -> Self {
        Self {
            core: Rc::new(HandlerCore {
                mask: Cell::new(mask),
                registration: RefCell::new(None),
                sink_name,
                sink: RefCell::new(sink),
            }),
        }
    }

    pub(crate) fn as_dispatch(&self) -> Weak<dyn Dispatch> {
        let core: Rc<dyn Dispatch> = self.core.clone();
        Rc::downgrade(&core)
    }
}

impl<S> MsgHandler<S> {
    pub fn set_mask(&self, mask: SeverityMask) {
        self.core.mask.set(mask);
    }

    pub fn mask(&self) -> SeverityMask {
        self.core.mask.get()
    }

    /// Enables a single severity; `severity` is not a mask.
    pub fn add_mask(&self, severity: Severity) {
        self.core.mask.set(self.core.mask.get() | severity.mask());
    }

    /// Disables a single severity; `severity` is not a mask.
    pub fn delete_mask(&self, severity: Severity) {
        self.core.mask.set(self.core.mask.get() & !severity.mask());
    }

    pub fn is_registered(&self) -> bool {
        self.core.registration.borrow().is_some()
    }

    pub fn is_registered_with(&self, manager: &MsgManager) -> bool {
        self.core
            .registration
            .borrow()
            .as_ref()
            .is_some_and(|registration| manager.is(&registration.manager))
    }

    /// Borrows the sink.
    ///
    /// Panics if called from inside this handler's own `emit`.
    pub fn sink(&self) -> Ref<'_, S> {
        self.core.sink.borrow()
    }

    /// Mutably borrows the sink.
    ///
    /// Panics if called from inside this handler's own `emit`.
    pub fn sink_mut(&self) -> RefMut<'_, S> {
        self.core.sink.borrow_mut()
    }

    pub fn sink_name(&self) -> &'static str {
        self.core.sink_name
    }

    pub(crate) fn registration(&self) -> &RefCell<Option<Registration>> {
        &self.core.registration
    }

    /// Address of the shared handler state, used to find this handler's slot.
    #[cfg(test)]
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.core) as *const ()
    }
}

impl<S> Drop for MsgHandler<S> {
    fn drop(&mut self) {
        let registration = self.core.registration.borrow_mut().take();
        let Some(registration) = registration else {
            return;
        };
        if let Some(manager) = registration.manager.upgrade() {
            manager.release(registration.slot);
            HandlerDropped {
                sink: self.core.sink_name,
                slot: registration.slot,
                handler_count: manager.handler_num(),
            }
            .log();
        }
    }
}
