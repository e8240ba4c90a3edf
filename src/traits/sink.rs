// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::MsgResult;
use crate::message::Message;

/// The side effect a handler performs for every message its mask accepts.
///
/// Returning an error does not stop the manager from delivering the message
/// to the remaining handlers; the failure is logged and counted instead.
pub trait MsgSink {
    fn emit(&mut self, msg: &Message<'_>) -> MsgResult<()>;
}

impl<S: MsgSink + ?Sized> MsgSink for Box<S> {
    fn emit(&mut self, msg: &Message<'_>) -> MsgResult<()> {
        (**self).emit(msg)
    }
}

/// Boxed sink type used where the concrete sink is chosen at runtime.
pub type BoxedSink = Box<dyn MsgSink>;
