// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message severities and the bit masks handlers filter on.

use crate::errors::MsgError;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a diagnostic message.
///
/// The set is closed: every severity maps to exactly one bit of
/// [`SeverityMask`], and the manager keeps one counter per severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Failure,
    Debug,
}

bitflags! {
    /// A set of severities a handler accepts.
    ///
    /// # Example
    /// ```
    /// use msgmgr::{Severity, SeverityMask};
    ///
    /// let mask = Severity::Error.mask() | Severity::Warning.mask();
    /// assert!(mask.accepts(Severity::Warning));
    /// assert!(!mask.accepts(Severity::Debug));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeverityMask: u8 {
        const ERROR = 1 << 0;
        const WARNING = 1 << 1;
        const INFO = 1 << 2;
        const FAILURE = 1 << 3;
        const DEBUG = 1 << 4;
    }
}

impl SeverityMask {
    /// Every severity enabled. Default mask for new handlers.
    pub const ALL: Self = Self::all();

    /// Whether a message of `severity` passes this mask.
    pub fn accepts(self, severity: Severity) -> bool {
        self.contains(severity.mask())
    }
}

impl Default for SeverityMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Severity> for SeverityMask {
    fn from(severity: Severity) -> Self {
        severity.mask()
    }
}

impl FromIterator<Severity> for SeverityMask {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SeverityMask::empty(), |mask, severity| mask | severity.mask())
    }
}

impl Severity {
    /// All severities in declaration order.
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Failure,
        Severity::Debug,
    ];

    /// The single-bit mask for this severity.
    pub const fn mask(self) -> SeverityMask {
        match self {
            Severity::Error => SeverityMask::ERROR,
            Severity::Warning => SeverityMask::WARNING,
            Severity::Info => SeverityMask::INFO,
            Severity::Failure => SeverityMask::FAILURE,
            Severity::Debug => SeverityMask::DEBUG,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Failure => "Failure",
            Severity::Debug => "Debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Severity {
    type Error = MsgError;

    fn try_from(value: u8) -> Result<Self, MsgError> {
        Severity::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| MsgError::UnknownSeverity(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = MsgError;

    /// Parses a severity name, ignoring case. `fail` is accepted for `Failure`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "failure" | "fail" => Ok(Severity::Failure),
            "debug" => Ok(Severity::Debug),
            _ => Err(MsgError::UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_severity_has_a_distinct_single_bit() {
        let mut seen = SeverityMask::empty();
        for severity in Severity::ALL {
            let bit = severity.mask();
            assert_eq!(bit.bits().count_ones(), 1, "{} is not a single bit", severity);
            assert!(!seen.intersects(bit), "{} overlaps another severity", severity);
            seen |= bit;
        }
        assert_eq!(seen, SeverityMask::ALL);
    }

    #[test]
    fn test_default_mask_accepts_everything() {
        let mask = SeverityMask::default();
        for severity in Severity::ALL {
            assert!(mask.accepts(severity));
        }
    }

    #[test]
    fn test_mask_add_and_remove() {
        let mut mask = SeverityMask::empty();
        mask |= Severity::Info.mask();
        mask |= Severity::Debug.mask();
        assert!(mask.accepts(Severity::Info));
        assert!(mask.accepts(Severity::Debug));

        mask &= !Severity::Info.mask();
        assert!(!mask.accepts(Severity::Info));
        assert!(mask.accepts(Severity::Debug));
        assert!(!mask.accepts(Severity::Error));
    }

    #[test]
    fn test_mask_from_iterator() {
        let mask: SeverityMask = [Severity::Error, Severity::Failure].into_iter().collect();
        assert_eq!(mask, SeverityMask::ERROR | SeverityMask::FAILURE);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = Severity::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["Error", "Warning", "Info", "Failure", "Debug"]);
    }

    #[test]
    fn test_parse_table_driven() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: Option<Severity>,
        }

        let test_cases = vec![
            TestCase {
                name: "lowercase",
                input: "warning",
                expected: Some(Severity::Warning),
            },
            TestCase {
                name: "capitalized",
                input: "Error",
                expected: Some(Severity::Error),
            },
            TestCase {
                name: "short failure",
                input: "FAIL",
                expected: Some(Severity::Failure),
            },
            TestCase {
                name: "surrounding whitespace",
                input: "  debug ",
                expected: Some(Severity::Debug),
            },
            TestCase {
                name: "unknown name",
                input: "fatal",
                expected: None,
            },
            TestCase {
                name: "empty",
                input: "",
                expected: None,
            },
        ];

        for test_case in test_cases {
            let result = test_case.input.parse::<Severity>();
            match test_case.expected {
                Some(expected) => assert_eq!(
                    result.ok(),
                    Some(expected),
                    "Test case '{}' failed",
                    test_case.name
                ),
                None => assert!(
                    matches!(result, Err(MsgError::UnknownSeverity(_))),
                    "Test case '{}' should be rejected",
                    test_case.name
                ),
            }
        }
    }

    #[test]
    fn test_try_from_raw_value() {
        assert_eq!(Severity::try_from(0).ok(), Some(Severity::Error));
        assert_eq!(Severity::try_from(4).ok(), Some(Severity::Debug));
        assert!(matches!(
            Severity::try_from(5),
            Err(MsgError::UnknownSeverity(ref v)) if v == "5"
        ));
    }

    #[test]
    fn test_serde_lowercase_names() {
        let yaml = serde_yaml::to_string(&Severity::Failure).unwrap();
        assert_eq!(yaml.trim(), "failure");
        let parsed: Severity = serde_yaml::from_str("info").unwrap();
        assert_eq!(parsed, Severity::Info);
    }
}
