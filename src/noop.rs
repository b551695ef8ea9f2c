use crate::{
    logger::StructuredLogger,
    record::{AnyValue, Key, LogEntry},
};

/// A no-op implementation of a [`StructuredLogger`].
///
/// Serves as the process-wide default until a real sink is installed, and
/// as the placeholder swapped back in when the default is closed.
#[derive(Clone, Debug, Default)]
pub struct NoopLogger(());

impl NoopLogger {
    /// Create a new no-op logger.
    pub fn new() -> Self {
        NoopLogger(())
    }
}

impl StructuredLogger for NoopLogger {
    fn emit(&self, _entry: LogEntry) {}

    fn with_field(&self, _key: Key, _value: AnyValue, _destructure: bool) -> Self {
        NoopLogger(())
    }
}
