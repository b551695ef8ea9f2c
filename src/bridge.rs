//! The bridge from host-runtime telemetry calls to a structured sink.
//!
//! [`TelemetryLogBridge`] implements the full telemetry-consumer trait
//! family: each call is translated synchronously into one enriched
//! [`LogEntry`] and handed to the sink, fire-and-forget. Nothing is queued,
//! retried, or batched here.

use std::{
    collections::HashMap,
    net::SocketAddr,
    time::{Duration, SystemTime},
};

use crate::{
    global::{self, BoxedLogger},
    logger::{with_properties, StructuredLogger},
    record::{AnyValue, Exception, Key, Level, LogEntry, LogEntryBuilder},
    severity::{LoggerType, Severity},
};

/// Caller-supplied string properties, attached as structured fields.
pub type PropertyMap = HashMap<String, String>;

/// Caller-supplied numeric properties, attached as structured fields.
pub type MetricMap = HashMap<String, f64>;

/// The two value shapes a tracked metric can carry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MetricValue {
    /// A plain numeric reading.
    Number(f64),
    /// An elapsed-time reading.
    Elapsed(Duration),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<Duration> for MetricValue {
    fn from(value: Duration) -> Self {
        MetricValue::Elapsed(value)
    }
}

impl From<MetricValue> for AnyValue {
    fn from(value: MetricValue) -> Self {
        match value {
            MetricValue::Number(n) => AnyValue::Double(n),
            MetricValue::Elapsed(d) => AnyValue::String(format!("{d:?}")),
        }
    }
}

/// Base contract every telemetry consumer honors.
pub trait TelemetryConsumer {
    /// Ask the consumer to flush anything it buffered.
    fn flush(&self);

    /// Release the consumer's sink.
    fn close(&self);
}

/// Consumer of exception telemetry.
pub trait ExceptionTelemetryConsumer: TelemetryConsumer {
    /// Report a caught exception, with optional string and numeric context.
    fn track_exception(
        &self,
        exception: Exception,
        properties: Option<&PropertyMap>,
        metrics: Option<&MetricMap>,
    );
}

/// Consumer of named-event telemetry.
pub trait EventTelemetryConsumer: TelemetryConsumer {
    /// Report a named event, with optional string and numeric context.
    fn track_event(&self, name: &str, properties: Option<&PropertyMap>, metrics: Option<&MetricMap>);
}

/// Consumer of dependency-call telemetry.
pub trait DependencyTelemetryConsumer: TelemetryConsumer {
    /// Report one call to an external dependency.
    fn track_dependency(
        &self,
        name: &str,
        command: &str,
        start_time: SystemTime,
        duration: Duration,
        success: bool,
    );
}

/// Consumer of metric telemetry.
pub trait MetricTelemetryConsumer: TelemetryConsumer {
    /// Report a metric reading, with optional string context.
    fn track_metric(&self, name: &str, value: MetricValue, properties: Option<&PropertyMap>);

    /// Increment a counter metric by one.
    fn increment_metric(&self, name: &str);

    /// Increment a counter metric by `value`.
    fn increment_metric_by(&self, name: &str, value: f64);

    /// Decrement a counter metric by one.
    fn decrement_metric(&self, name: &str);

    /// Decrement a counter metric by `value`.
    fn decrement_metric_by(&self, name: &str, value: f64);
}

/// Consumer of trace-message telemetry.
pub trait TraceTelemetryConsumer: TelemetryConsumer {
    /// Report a trace message.
    ///
    /// `Some(Severity::Off)` suppresses emission entirely; `None` emits at
    /// the fixed debug level.
    fn track_trace(&self, message: &str, severity: Option<Severity>, properties: Option<&PropertyMap>);
}

/// The general-purpose log entry point used by the host runtime's own
/// internal logging.
pub trait LogConsumer: TelemetryConsumer {
    /// Write one severity-leveled log line with caller metadata.
    ///
    /// Suppressed entirely when `severity` is [`Severity::Off`].
    #[allow(clippy::too_many_arguments)]
    fn log(
        &self,
        severity: Severity,
        logger_type: LoggerType,
        caller: &str,
        message: &str,
        endpoint: Option<SocketAddr>,
        exception: Option<Exception>,
        event_code: i32,
    );
}

/// Bridges telemetry-consumer calls into a [`StructuredLogger`].
///
/// Constructed either over an injected sink ([`TelemetryLogBridge::new`]) or
/// over the process-wide default ([`TelemetryLogBridge::from_default`]),
/// which is resolved lazily on every call so a sink installed later still
/// takes effect.
#[derive(Debug)]
pub struct TelemetryLogBridge {
    logger: Option<BoxedLogger>,
}

impl TelemetryLogBridge {
    /// Create a bridge over an injected sink.
    ///
    /// The bridge shares the sink with its owner; [`close`] releases it
    /// through the sink's own `close`.
    ///
    /// [`close`]: TelemetryConsumer::close
    pub fn new(logger: impl StructuredLogger + Send + Sync + 'static) -> Self {
        TelemetryLogBridge {
            logger: Some(BoxedLogger::new(logger)),
        }
    }

    /// Create a bridge over the process-wide default logger.
    pub fn from_default() -> Self {
        TelemetryLogBridge { logger: None }
    }

    fn logger(&self) -> BoxedLogger {
        self.logger.clone().unwrap_or_else(global::default_logger)
    }

    fn entry(level: Level) -> LogEntryBuilder {
        LogEntry::builder()
            .with_timestamp(SystemTime::now())
            .with_level(level)
    }
}

impl Default for TelemetryLogBridge {
    fn default() -> Self {
        Self::from_default()
    }
}

impl TelemetryConsumer for TelemetryLogBridge {
    fn flush(&self) {
        // The sink flushes on close, not on demand.
    }

    fn close(&self) {
        match &self.logger {
            Some(logger) => logger.close(),
            None => global::close_default_logger(),
        }
    }
}

impl ExceptionTelemetryConsumer for TelemetryLogBridge {
    fn track_exception(
        &self,
        exception: Exception,
        properties: Option<&PropertyMap>,
        metrics: Option<&MetricMap>,
    ) {
        let logger = with_properties(self.logger(), properties, false);
        let logger = with_properties(logger, metrics, false);
        logger.emit(
            Self::entry(Level::Error)
                .with_exception(exception)
                .with_body("TrackException")
                .build(),
        );
    }
}

impl EventTelemetryConsumer for TelemetryLogBridge {
    fn track_event(
        &self,
        name: &str,
        properties: Option<&PropertyMap>,
        metrics: Option<&MetricMap>,
    ) {
        let logger = with_properties(self.logger(), properties, false);
        let logger = with_properties(logger, metrics, false);
        logger.emit(
            Self::entry(Level::Information)
                .with_body(format!("TrackEvent {name}"))
                .build(),
        );
    }
}

impl DependencyTelemetryConsumer for TelemetryLogBridge {
    fn track_dependency(
        &self,
        name: &str,
        command: &str,
        start_time: SystemTime,
        duration: Duration,
        success: bool,
    ) {
        let success = if success { "Success" } else { "Failure" };
        self.logger().emit(
            Self::entry(Level::Information)
                .with_body(format!(
                    "TrackDependency: {name}:{command} ({success}) started at {start_time:?} and took {duration:?}."
                ))
                .build(),
        );
    }
}

impl MetricTelemetryConsumer for TelemetryLogBridge {
    fn track_metric(&self, name: &str, value: MetricValue, properties: Option<&PropertyMap>) {
        // The caller-supplied metric name is the field label, verbatim.
        let logger = with_properties(self.logger(), properties, false).with_field(
            Key::new(name.to_string()),
            value.into(),
            false,
        );
        logger.emit(
            Self::entry(Level::Information)
                .with_body(format!("TrackMetric {name}"))
                .build(),
        );
    }

    fn increment_metric(&self, _name: &str) {
        // Not implemented: the sink is a structured logger, not a full APM suite.
    }

    fn increment_metric_by(&self, _name: &str, _value: f64) {
        // Not implemented: the sink is a structured logger, not a full APM suite.
    }

    fn decrement_metric(&self, _name: &str) {
        // Not implemented: the sink is a structured logger, not a full APM suite.
    }

    fn decrement_metric_by(&self, _name: &str, _value: f64) {
        // Not implemented: the sink is a structured logger, not a full APM suite.
    }
}

impl TraceTelemetryConsumer for TelemetryLogBridge {
    fn track_trace(
        &self,
        message: &str,
        severity: Option<Severity>,
        properties: Option<&PropertyMap>,
    ) {
        let level = match severity {
            Some(Severity::Off) => return,
            Some(severity) => severity.to_level(),
            None => Level::Debug,
        };
        with_properties(self.logger(), properties, false)
            .emit(Self::entry(level).with_body(message).build());
    }
}

impl LogConsumer for TelemetryLogBridge {
    fn log(
        &self,
        severity: Severity,
        logger_type: LoggerType,
        _caller: &str,
        message: &str,
        endpoint: Option<SocketAddr>,
        exception: Option<Exception>,
        event_code: i32,
    ) {
        if severity == Severity::Off {
            return;
        }
        let level = severity.to_level();

        let mut logger = self
            .logger()
            .with_field(
                Key::from_static_str("TelemetryLoggerType"),
                AnyValue::from(logger_type.name()),
                false,
            )
            .with_field(
                Key::from_static_str("EventCode"),
                AnyValue::Int(event_code.into()),
                false,
            );
        if let Some(endpoint) = endpoint {
            logger = logger.with_field(
                Key::from_static_str("Endpoint"),
                AnyValue::String(endpoint.to_string()),
                false,
            );
        }

        let entry = Self::entry(level).with_body(message);
        let entry = match exception {
            Some(exception) => entry.with_exception(exception),
            None => entry,
        };
        logger.emit(entry.build());
    }
}
