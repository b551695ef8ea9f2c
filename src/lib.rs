//! # Telemetry Log Bridge
//!
//! This crate provides a bridge between a distributed-actor runtime's
//! telemetry-consumer contract and a structured logging sink. It converts
//! telemetry calls (exceptions, named events, dependency calls, metrics,
//! traces, and severity-leveled log lines) into enriched [`LogEntry`]s and
//! hands them to any sink implementing the [`StructuredLogger`] capability
//! trait.
//!
//! ## Overview
//!
//! The host runtime reports operational events through the telemetry-consumer
//! trait family ([`ExceptionTelemetryConsumer`], [`EventTelemetryConsumer`],
//! [`DependencyTelemetryConsumer`], [`MetricTelemetryConsumer`],
//! [`TraceTelemetryConsumer`], [`LogConsumer`]). [`TelemetryLogBridge`]
//! implements all of them over either an injected sink or the process-wide
//! default logger (see [`global`]).
//!
//! Every operation is a synchronous, fire-and-forget translation into one
//! entry at a selected output [`Level`], with caller-supplied key/value
//! property maps attached as structured fields. There is no batching, retry,
//! or transport here; those concerns belong to the sink.
//!
//! ## Getting Started
//!
//! ```rust
//! use telemetry_log_bridge::{
//!     EventTelemetryConsumer, NoopLogger, TelemetryConsumer, TelemetryLogBridge,
//! };
//!
//! // Any StructuredLogger works here; NoopLogger stands in for a real sink.
//! let bridge = TelemetryLogBridge::new(NoopLogger::new());
//!
//! bridge.track_event("silo-started", None, None);
//! bridge.close();
//! ```
//!
//! Alternatively, install a sink process-wide and let bridges resolve it
//! lazily:
//!
//! ```rust
//! use telemetry_log_bridge::{global, NoopLogger, TelemetryLogBridge};
//!
//! global::set_default_logger(NoopLogger::new());
//! let bridge = TelemetryLogBridge::from_default();
//! # let _ = bridge;
//! ```
//!
//! ## Mapping details
//!
//! | telemetry call            | level                  | notes                                              |
//! |---------------------------|------------------------|----------------------------------------------------|
//! | `track_exception`         | `Error`                | exception attached, both property maps enriched    |
//! | `track_event`             | `Information`          | event name interpolated into the body              |
//! | `track_dependency`        | `Information`          | body renders success as `Success`/`Failure`        |
//! | `track_metric`            | `Information`          | metric name becomes the structured-field label     |
//! | `track_trace`             | translated / `Debug`   | `Severity::Off` suppresses emission entirely       |
//! | `log`                     | translated             | decorated with logger type, event code, endpoint   |
//! | `increment_/decrement_metric` | (none)             | deliberate no-ops; this is not a metrics aggregator |

pub mod bridge;
pub mod global;
pub mod logger;
pub mod noop;
pub mod record;
pub mod severity;

pub use bridge::{
    DependencyTelemetryConsumer, EventTelemetryConsumer, ExceptionTelemetryConsumer, LogConsumer,
    MetricMap, MetricTelemetryConsumer, MetricValue, PropertyMap, TelemetryConsumer,
    TelemetryLogBridge, TraceTelemetryConsumer,
};
pub use global::BoxedLogger;
pub use logger::{with_properties, Enriched, StructuredLogger};
pub use noop::NoopLogger;
pub use record::{AnyValue, Exception, Field, Key, Level, LogEntry, LogEntryBuilder};
pub use severity::{LoggerType, Severity, TelemetryError, TelemetryResult};
