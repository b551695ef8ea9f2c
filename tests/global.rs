//! Process-wide default logger lifecycle.
//!
//! Kept in its own test binary: the default logger is shared process state,
//! and the bridge tests must not race against it.

mod common;

use common::RecordingLogger;
use telemetry_log_bridge::{
    global, EventTelemetryConsumer, TelemetryConsumer, TelemetryLogBridge,
};

#[test]
fn default_logger_lifecycle() {
    // Constructed before a sink is installed: resolution is lazy, per call.
    let bridge = TelemetryLogBridge::from_default();

    let sink = RecordingLogger::new();
    global::set_default_logger(sink.clone());

    bridge.track_event("using-default", None, None);
    assert_eq!(sink.entries().len(), 1);

    // Close without an injected sink tears the default down exactly once.
    bridge.close();
    assert_eq!(sink.close_count(), 1);
    bridge.close();
    assert_eq!(sink.close_count(), 1);

    // After teardown the default is a noop again.
    bridge.track_event("after-close", None, None);
    assert_eq!(sink.entries().len(), 1);
}
