//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FacadeError;

/// Ordered severity of a log record.
///
/// Five major levels (Trace, Debug, Info, Warn, Error) plus a Fatal group,
/// each with numbered sub-levels for finer-grained filtering. The facade
/// never reinterprets a severity; it is carried through to the backend as an
/// opaque ordered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    #[default]
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Trace2 => "TRACE2",
            Severity::Trace3 => "TRACE3",
            Severity::Trace4 => "TRACE4",
            Severity::Debug => "DEBUG",
            Severity::Debug2 => "DEBUG2",
            Severity::Debug3 => "DEBUG3",
            Severity::Debug4 => "DEBUG4",
            Severity::Info => "INFO",
            Severity::Info2 => "INFO2",
            Severity::Info3 => "INFO3",
            Severity::Info4 => "INFO4",
            Severity::Warn => "WARN",
            Severity::Warn2 => "WARN2",
            Severity::Warn3 => "WARN3",
            Severity::Warn4 => "WARN4",
            Severity::Error => "ERROR",
            Severity::Error2 => "ERROR2",
            Severity::Error3 => "ERROR3",
            Severity::Error4 => "ERROR4",
            Severity::Fatal => "FATAL",
            Severity::Fatal2 => "FATAL2",
            Severity::Fatal3 => "FATAL3",
            Severity::Fatal4 => "FATAL4",
        }
    }

    /// Numeric severity (1 = finest Trace, 24 = coarsest Fatal).
    pub fn severity_number(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "TRACE2" => Ok(Severity::Trace2),
            "TRACE3" => Ok(Severity::Trace3),
            "TRACE4" => Ok(Severity::Trace4),
            "DEBUG" => Ok(Severity::Debug),
            "DEBUG2" => Ok(Severity::Debug2),
            "DEBUG3" => Ok(Severity::Debug3),
            "DEBUG4" => Ok(Severity::Debug4),
            "INFO" => Ok(Severity::Info),
            "INFO2" => Ok(Severity::Info2),
            "INFO3" => Ok(Severity::Info3),
            "INFO4" => Ok(Severity::Info4),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "WARN2" => Ok(Severity::Warn2),
            "WARN3" => Ok(Severity::Warn3),
            "WARN4" => Ok(Severity::Warn4),
            "ERROR" => Ok(Severity::Error),
            "ERROR2" => Ok(Severity::Error2),
            "ERROR3" => Ok(Severity::Error3),
            "ERROR4" => Ok(Severity::Error4),
            "FATAL" => Ok(Severity::Fatal),
            "FATAL2" => Ok(Severity::Fatal2),
            "FATAL3" => Ok(Severity::Fatal3),
            "FATAL4" => Ok(Severity::Fatal4),
            _ => Err(FacadeError::InvalidSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_level_ordering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_sub_level_ordering() {
        assert!(Severity::Trace < Severity::Trace2);
        assert!(Severity::Trace4 < Severity::Debug);
        assert!(Severity::Warn2 < Severity::Error);
    }

    #[test]
    fn test_severity_number() {
        assert_eq!(Severity::Trace.severity_number(), 1);
        assert_eq!(Severity::Info.severity_number(), 9);
        assert_eq!(Severity::Fatal4.severity_number(), 24);
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Warn2.to_string(), "WARN2");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("trace3".parse::<Severity>().unwrap(), Severity::Trace3);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
