// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::handler::Dispatch;
use std::rc::{Rc, Weak};

/// Minimum slot count before tombstones are compacted away.
const COMPACT_MIN_SLOTS: usize = 16;

/// A registered handler together with the ticket it was registered under.
pub(crate) struct Entry {
    pub(crate) ticket: u64,
    pub(crate) handler: Rc<dyn Dispatch>,
}

struct Slot {
    ticket: u64,
    handler: Weak<dyn Dispatch>,
}

/// Ordered slot list of registered handlers.
///
/// Slots are appended in registration order and never reordered. Removal
/// leaves a tombstone so the remaining handlers keep their tokens; once
/// tombstones outnumber live entries the list is compacted and every moved
/// handler is told its new slot. Slot indices can be reused after
/// compaction; tickets are never reused.
#[derive(Default)]
pub(crate) struct HandlerList {
    slots: Vec<Option<Slot>>,
    live: usize,
    next_ticket: u64,
}

impl HandlerList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a handler and returns its slot token and ticket.
    pub(crate) fn push(&mut self, handler: Weak<dyn Dispatch>) -> (usize, u64) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.slots.push(Some(Slot { ticket, handler }));
        self.live += 1;
        (self.slots.len() - 1, ticket)
    }

    /// Removes the handler at `slot`. Returns false if the slot was empty.
    pub(crate) fn remove(&mut self, slot: usize) -> bool {
        let removed = self.slots.get_mut(slot).and_then(Option::take).is_some();
        if removed {
            self.live -= 1;
            self.maybe_compact();
        }
        removed
    }

    /// Strong references to every live handler, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Entry> {
        self.slots
            .iter()
            .flatten()
            .filter_map(|slot| {
                slot.handler.upgrade().map(|handler| Entry {
                    ticket: slot.ticket,
                    handler,
                })
            })
            .collect()
    }

    /// Empties the list, returning the handlers it held in registration order.
    pub(crate) fn drain(&mut self) -> Vec<Rc<dyn Dispatch>> {
        let handlers = self.snapshot().into_iter().map(|entry| entry.handler).collect();
        self.slots.clear();
        self.live = 0;
        handlers
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots referring to the handler state at `addr`.
    #[cfg(test)]
    pub(crate) fn occurrences(&self, addr: *const ()) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|slot| slot.handler.as_ptr() as *const () == addr)
            .count()
    }

    fn maybe_compact(&mut self) {
        if self.live == 0 {
            self.slots.clear();
            return;
        }
        let tombstones = self.slots.len() - self.live;
        if self.slots.len() < COMPACT_MIN_SLOTS || tombstones <= self.live {
            return;
        }

        self.slots.retain(Option::is_some);
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(handler) = slot.as_ref().and_then(|slot| slot.handler.upgrade()) {
                handler.relocate(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MemorySink;
    use crate::handler::MsgHandler;

    #[test]
    fn test_push_returns_sequential_slots() {
        let handlers: Vec<_> = (0..3).map(|_| MsgHandler::new(MemorySink::new())).collect();
        let mut list = HandlerList::new();
        let slots: Vec<usize> = handlers.iter().map(|h| list.push(h.as_dispatch()).0).collect();
        assert_eq!(slots, vec![0, 1, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_leaves_other_slots_in_place() {
        let handlers: Vec<_> = (0..3).map(|_| MsgHandler::new(MemorySink::new())).collect();
        let mut list = HandlerList::new();
        for handler in &handlers {
            list.push(handler.as_dispatch());
        }

        assert!(list.remove(1));
        assert!(!list.remove(1), "second removal of the same slot");
        assert!(!list.remove(99), "out of range slot");
        assert_eq!(list.len(), 2);
        assert_eq!(list.slot_count(), 3);
        assert_eq!(list.occurrences(handlers[0].addr()), 1);
        assert_eq!(list.occurrences(handlers[1].addr()), 0);
        assert_eq!(list.occurrences(handlers[2].addr()), 1);
    }

    #[test]
    fn test_removing_last_live_entry_clears_slots() {
        let handler = MsgHandler::new(MemorySink::new());
        let mut list = HandlerList::new();
        let (slot, ticket) = list.push(handler.as_dispatch());
        assert!(list.remove(slot));
        assert_eq!(list.slot_count(), 0);
        assert!(list.snapshot().is_empty());

        // The slot index comes back; the ticket does not.
        let (again, next) = list.push(handler.as_dispatch());
        assert_eq!(again, slot);
        assert_ne!(next, ticket);
    }

    #[test]
    fn test_compaction_preserves_order() {
        let handlers: Vec<_> = (0..COMPACT_MIN_SLOTS)
            .map(|_| MsgHandler::new(MemorySink::new()))
            .collect();
        let mut list = HandlerList::new();
        for handler in &handlers {
            list.push(handler.as_dispatch());
        }

        // Tombstones equal to live entries do not compact yet.
        let half = COMPACT_MIN_SLOTS / 2;
        for slot in 0..half {
            assert!(list.remove(slot));
        }
        assert_eq!(list.slot_count(), COMPACT_MIN_SLOTS);

        // One more tips the balance.
        assert!(list.remove(half));
        let remaining = COMPACT_MIN_SLOTS - half - 1;
        assert_eq!(list.len(), remaining);
        assert_eq!(list.slot_count(), remaining);

        let survivors: Vec<*const ()> = list
            .snapshot()
            .iter()
            .map(|entry| Rc::as_ptr(&entry.handler) as *const ())
            .collect();
        let expected: Vec<*const ()> = handlers[half + 1..].iter().map(|h| h.addr()).collect();
        assert_eq!(survivors, expected);
    }
}
