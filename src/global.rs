// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The default manager and the logging macros that feed it.
//!
//! Managers are single-threaded, so the default manager is per thread. It is
//! created on first use and dropped (unregistering its handlers) when the
//! thread exits.
//!
//! # Example
//! ```
//! use msgmgr::{global, msg_warning, MemorySink, MsgHandler};
//!
//! let capture = MsgHandler::new(MemorySink::new());
//! global::with_manager(|mgr| mgr.reg_handler(&capture)).unwrap();
//!
//! msg_warning!("W001", "disk {}% full", 93);
//!
//! let records = capture.sink();
//! assert_eq!(records.records()[0].body, "disk 93% full");
//! assert_eq!(records.records()[0].file, file!());
//! ```

use crate::manager::MsgManager;
use crate::severity::Severity;

thread_local! {
    static DEFAULT_MANAGER: MsgManager = MsgManager::new();
}

/// Runs `f` with this thread's default manager.
///
/// Panics if called while the thread's locals are being destroyed.
pub fn with_manager<R>(f: impl FnOnce(&MsgManager) -> R) -> R {
    DEFAULT_MANAGER.with(f)
}

/// Sends a message to this thread's default manager.
///
/// Messages sent after the default manager was torn down are dropped.
pub fn put_msg(file: &str, line: u32, severity: Severity, label: &str, body: &str) {
    // Err only during thread teardown, when there is nothing left to deliver to.
    DEFAULT_MANAGER
        .try_with(|mgr| mgr.put_msg(file, line, severity, label, body))
        .ok();
}

/// Sends a formatted message to the default manager, tagged with the
/// caller's file and line.
///
/// ```
/// use msgmgr::{msg, Severity};
///
/// msg!(Severity::Info, "I100", "loaded {} entries", 12);
/// ```
#[macro_export]
macro_rules! msg {
    ($severity:expr, $label:expr, $($arg:tt)+) => {
        $crate::global::put_msg(
            ::std::file!(),
            ::std::line!(),
            $severity,
            $label,
            &::std::format!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! msg_error {
    ($label:expr, $($arg:tt)+) => {
        $crate::msg!($crate::Severity::Error, $label, $($arg)+)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($label:expr, $($arg:tt)+) => {
        $crate::msg!($crate::Severity::Warning, $label, $($arg)+)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($label:expr, $($arg:tt)+) => {
        $crate::msg!($crate::Severity::Info, $label, $($arg)+)
    };
}

#[macro_export]
macro_rules! msg_failure {
    ($label:expr, $($arg:tt)+) => {
        $crate::msg!($crate::Severity::Failure, $label, $($arg)+)
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($label:expr, $($arg:tt)+) => {
        $crate::msg!($crate::Severity::Debug, $label, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MemorySink;
    use crate::handler::MsgHandler;

    #[test]
    fn test_macros_route_to_default_manager() {
        let capture = MsgHandler::new(MemorySink::new());
        with_manager(|mgr| mgr.reg_handler(&capture)).unwrap();
        with_manager(|mgr| mgr.clear_count());

        crate::msg_error!("E1", "code {}", 1);
        crate::msg_warning!("W1", "plain");
        crate::msg_info!("I1", "{}-{}", "a", "b");
        crate::msg_failure!("F1", "failed");
        crate::msg_debug!("D1", "trace");

        let severities: Vec<Severity> = capture.sink().records().iter().map(|r| r.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert_eq!(capture.sink().records()[0].body, "code 1");
        assert_eq!(capture.sink().records()[2].body, "a-b");
        assert!(capture
            .sink()
            .records()
            .iter()
            .all(|r| r.file == file!() && r.line > 0));

        with_manager(|mgr| {
            assert_eq!(mgr.msg_num(), 5);
            assert_eq!(mgr.fail_num(), 1);
        });
    }

    #[test]
    fn test_default_manager_is_per_thread() {
        let capture = MsgHandler::new(MemorySink::new());
        with_manager(|mgr| mgr.reg_handler(&capture)).unwrap();

        std::thread::spawn(|| {
            put_msg("other.rs", 1, Severity::Error, "E", "elsewhere");
            with_manager(|mgr| assert_eq!(mgr.handler_num(), 0));
        })
        .join()
        .unwrap();

        assert!(capture.sink().is_empty());
    }

    /// Sends a message from its destructor, which runs during thread teardown.
    struct SendOnDrop;

    impl Drop for SendOnDrop {
        fn drop(&mut self) {
            put_msg("teardown.rs", 1, Severity::Debug, "D", "late");
        }
    }

    thread_local! {
        static LATE_SENDER: SendOnDrop = SendOnDrop;
    }

    #[test]
    fn test_put_msg_during_thread_teardown_does_not_panic() {
        let joined = std::thread::spawn(|| {
            with_manager(|mgr| mgr.put_msg("t.rs", 1, Severity::Info, "I", "alive"));
            LATE_SENDER.with(|_| {});
        })
        .join();
        assert!(joined.is_ok());
    }

    #[test]
    fn test_dropped_handler_leaves_default_manager() {
        let before = with_manager(|mgr| mgr.handler_num());
        {
            let capture = MsgHandler::new(MemorySink::new());
            with_manager(|mgr| mgr.reg_handler(&capture)).unwrap();
            assert_eq!(with_manager(|mgr| mgr.handler_num()), before + 1);
        }
        assert_eq!(with_manager(|mgr| mgr.handler_num()), before);
    }
}
