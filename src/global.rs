//! Process-wide default structured logger.
//!
//! A single well-known [`BoxedLogger`], lazily initialized to a
//! [`NoopLogger`] on first use. Bridges constructed without an injected
//! sink resolve it on every call, so installing a sink late still takes
//! effect. Closing tears each installed instance down exactly once: the
//! handle is swapped out before its `close` runs.

use std::{
    fmt, mem,
    sync::{Arc, RwLock},
};

use once_cell::sync::Lazy;

use crate::{
    logger::StructuredLogger,
    noop::NoopLogger,
    record::{AnyValue, Key, LogEntry},
};

/// Object-safe mirror of [`StructuredLogger`], so sinks of different
/// concrete types can share the [`BoxedLogger`] currency.
pub trait ObjectSafeLogger: Send + Sync {
    /// See [`StructuredLogger::emit`].
    fn emit_entry(&self, entry: LogEntry);

    /// See [`StructuredLogger::with_field`]; the decorated handle comes back
    /// boxed.
    fn with_field_boxed(&self, key: Key, value: AnyValue, destructure: bool) -> BoxedLogger;

    /// See [`StructuredLogger::close`].
    fn close_logger(&self);
}

impl<L> ObjectSafeLogger for L
where
    L: StructuredLogger + Send + Sync + 'static,
{
    fn emit_entry(&self, entry: LogEntry) {
        self.emit(entry)
    }

    fn with_field_boxed(&self, key: Key, value: AnyValue, destructure: bool) -> BoxedLogger {
        BoxedLogger(Arc::new(self.with_field(key, value, destructure)))
    }

    fn close_logger(&self) {
        self.close()
    }
}

/// A type-erased, shareable [`StructuredLogger`] handle.
#[derive(Clone)]
pub struct BoxedLogger(Arc<dyn ObjectSafeLogger>);

impl BoxedLogger {
    /// Box a concrete sink.
    pub fn new(logger: impl StructuredLogger + Send + Sync + 'static) -> Self {
        BoxedLogger(Arc::new(logger))
    }

    /// Whether two handles refer to the same underlying sink instance.
    pub fn ptr_eq(&self, other: &BoxedLogger) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BoxedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedLogger")
    }
}

impl StructuredLogger for BoxedLogger {
    fn emit(&self, entry: LogEntry) {
        self.0.emit_entry(entry)
    }

    fn with_field(&self, key: Key, value: AnyValue, destructure: bool) -> Self {
        self.0.with_field_boxed(key, value, destructure)
    }

    fn close(&self) {
        self.0.close_logger()
    }
}

static DEFAULT_LOGGER: Lazy<RwLock<BoxedLogger>> =
    Lazy::new(|| RwLock::new(BoxedLogger::new(NoopLogger::new())));

/// Returns a handle to the process-wide default logger.
pub fn default_logger() -> BoxedLogger {
    DEFAULT_LOGGER
        .read()
        .expect("DEFAULT_LOGGER RwLock poisoned")
        .clone()
}

/// Install `logger` as the process-wide default, returning the replaced
/// handle.
pub fn set_default_logger(logger: impl StructuredLogger + Send + Sync + 'static) -> BoxedLogger {
    let mut default_logger = DEFAULT_LOGGER
        .write()
        .expect("DEFAULT_LOGGER RwLock poisoned");
    mem::replace(&mut *default_logger, BoxedLogger::new(logger))
}

/// Close and flush the process-wide default logger.
///
/// The installed instance is swapped out for a noop before being closed, so
/// its close-and-flush path runs exactly once even if called again.
pub fn close_default_logger() {
    set_default_logger(NoopLogger::new()).close();
}
