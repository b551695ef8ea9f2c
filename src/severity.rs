use thiserror::Error;

use crate::record::Level;

/// Result of bridge operations that can fail.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
/// Errors raised by the telemetry bridge.
///
/// The bridge itself raises in exactly one place: decoding a raw severity
/// value that is outside the defined set. Everything else is fire-and-forget,
/// and sink failures propagate from the sink untouched.
pub enum TelemetryError {
    /// The raw severity value does not name a defined [`Severity`].
    #[error("invalid severity value: {0}")]
    InvalidSeverity(i32),
}

/// The host runtime's severity scheme for telemetry and log calls.
///
/// `Off` is a sentinel: severity-bearing operations are suppressed entirely
/// before translation when they carry it. It still maps to a level in
/// [`Severity::to_level`] so the translator stays total over the enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd)]
pub enum Severity {
    /// Suppresses emission entirely.
    Off = 0,
    /// ERROR
    Error = 1,
    /// WARNING
    Warning = 2,
    /// INFO
    Info = 3,
    /// VERBOSE
    Verbose = 4,
    /// VERBOSE2
    Verbose2 = 5,
    /// VERBOSE3
    Verbose3 = 6,
}

impl Severity {
    /// Translate this severity to the sink's level set.
    ///
    /// The three verbose grades collapse to [`Level::Verbose`], as does
    /// `Off` — callers are expected to have suppressed `Off` before asking
    /// for a level.
    pub const fn to_level(self) -> Level {
        match self {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warning,
            Severity::Info => Level::Information,
            Severity::Verbose | Severity::Verbose2 | Severity::Verbose3 | Severity::Off => {
                Level::Verbose
            }
        }
    }

    /// Return the string representing the short name for the `Severity` value.
    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Off => "OFF",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
            Severity::Verbose2 => "VERBOSE2",
            Severity::Verbose3 => "VERBOSE3",
        }
    }
}

impl TryFrom<i32> for Severity {
    type Error = TelemetryError;

    /// Decode a raw severity value as received from the host runtime.
    ///
    /// Fails with [`TelemetryError::InvalidSeverity`] for any value outside
    /// the defined set; never silently defaults.
    fn try_from(value: i32) -> TelemetryResult<Severity> {
        match value {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Error),
            2 => Ok(Severity::Warning),
            3 => Ok(Severity::Info),
            4 => Ok(Severity::Verbose),
            5 => Ok(Severity::Verbose2),
            6 => Ok(Severity::Verbose3),
            other => Err(TelemetryError::InvalidSeverity(other)),
        }
    }
}

/// The category a host-runtime log call declares itself under.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoggerType {
    /// The runtime's own internals.
    Runtime,
    /// Actor (grain) code.
    Grain,
    /// Application code hosted by the runtime.
    Application,
    /// Pluggable providers (storage, streams, ...).
    Provider,
}

impl LoggerType {
    /// Return the string representing the short name for the `LoggerType` value.
    pub const fn name(&self) -> &'static str {
        match self {
            LoggerType::Runtime => "Runtime",
            LoggerType::Grain => "Grain",
            LoggerType::Application => "Application",
            LoggerType::Provider => "Provider",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_translates_per_table() {
        assert_eq!(Severity::Error.to_level(), Level::Error);
        assert_eq!(Severity::Warning.to_level(), Level::Warning);
        assert_eq!(Severity::Info.to_level(), Level::Information);
        assert_eq!(Severity::Verbose.to_level(), Level::Verbose);
        assert_eq!(Severity::Verbose2.to_level(), Level::Verbose);
        assert_eq!(Severity::Verbose3.to_level(), Level::Verbose);
        // Off maps too, but callers suppress before translation.
        assert_eq!(Severity::Off.to_level(), Level::Verbose);
    }

    #[test]
    fn raw_severity_roundtrips() {
        for raw in 0..=6 {
            let severity = Severity::try_from(raw).unwrap();
            assert_eq!(severity as i32, raw);
        }
    }

    #[test]
    fn out_of_range_severity_is_an_error() {
        assert_eq!(
            Severity::try_from(7),
            Err(TelemetryError::InvalidSeverity(7))
        );
        assert_eq!(
            Severity::try_from(-1),
            Err(TelemetryError::InvalidSeverity(-1))
        );
    }
}
