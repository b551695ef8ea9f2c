use std::collections::HashMap;

use crate::record::{AnyValue, Field, Key, LogEntry};

/// The interface for emitting [`LogEntry`]s.
///
/// This is the narrow capability the bridge needs from a structured sink:
/// write an entry, derive a field-decorated handle, and release. Anything
/// level-filtering, buffering, or transport-related belongs to the sink
/// implementation behind it.
pub trait StructuredLogger {
    /// Emit a [`LogEntry`]. Hands the entry to the sink's own ingestion path
    /// and returns; any buffering or async write behind that is the sink's.
    fn emit(&self, entry: LogEntry);

    /// Return a new handle that attaches `key`/`value` as a structured field
    /// on every entry subsequently emitted through it.
    ///
    /// The receiver is never mutated: chained calls compose decorated
    /// handles without affecting the originals. `destructure` controls
    /// whether compound values are kept structured or captured opaquely, see
    /// [`Field::new`].
    fn with_field(&self, key: Key, value: AnyValue, destructure: bool) -> Self
    where
        Self: Sized;

    /// Release the sink, flushing anything it buffered.
    ///
    /// Defaults to a no-op for sinks with nothing to release.
    fn close(&self) {}
}

/// A [`StructuredLogger`] decorated with additional fields.
///
/// Sink implementations can return this from
/// [`with_field`](StructuredLogger::with_field) instead of tracking context
/// themselves; the fields are attached to each entry at emit time.
#[derive(Debug, Clone)]
pub struct Enriched<L> {
    inner: L,
    fields: Vec<Field>,
}

impl<L: StructuredLogger> Enriched<L> {
    /// Decorate `inner` with one field.
    pub fn new(inner: L, key: Key, value: AnyValue, destructure: bool) -> Self {
        Enriched {
            inner,
            fields: vec![Field::new(key, value, destructure)],
        }
    }
}

impl<L: StructuredLogger + Clone> StructuredLogger for Enriched<L> {
    fn emit(&self, mut entry: LogEntry) {
        // Latest-attached context first, so it wins key collisions under the
        // entry's first-insert-wins policy.
        for field in self.fields.iter().rev() {
            entry.add_field(field.clone());
        }
        self.inner.emit(entry);
    }

    fn with_field(&self, key: Key, value: AnyValue, destructure: bool) -> Self {
        let mut fields = self.fields.clone();
        fields.push(Field::new(key, value, destructure));
        Enriched {
            inner: self.inner.clone(),
            fields,
        }
    }

    fn close(&self) {
        self.inner.close()
    }
}

/// Decorate `logger` with every entry of a homogeneous property map.
///
/// An empty or absent map is an identity: the logger comes back unchanged,
/// with no wrapper allocated. Call twice in sequence to compose separate
/// string and numeric maps onto one outgoing entry.
pub fn with_properties<L, V>(
    logger: L,
    properties: Option<&HashMap<String, V>>,
    destructure: bool,
) -> L
where
    L: StructuredLogger,
    V: Clone + Into<AnyValue>,
{
    match properties {
        Some(map) if !map.is_empty() => map.iter().fold(logger, |logger, (key, value)| {
            logger.with_field(Key::new(key.clone()), value.clone().into(), destructure)
        }),
        _ => logger,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::record::Level;

    /// Records entries; carries no field context of its own.
    #[derive(Clone, Default)]
    struct CollectingSink(Arc<Mutex<Vec<LogEntry>>>);

    impl CollectingSink {
        fn entries(&self) -> Vec<LogEntry> {
            self.0.lock().unwrap().clone()
        }
    }

    impl StructuredLogger for CollectingSink {
        fn emit(&self, entry: LogEntry) {
            self.0.lock().unwrap().push(entry);
        }

        fn with_field(&self, _key: Key, _value: AnyValue, _destructure: bool) -> Self {
            self.clone()
        }
    }

    #[test]
    fn enriched_attaches_fields_at_emit_time() {
        let sink = CollectingSink::default();
        let enriched = Enriched::new(sink.clone(), Key::new("a"), AnyValue::Int(1), false)
            .with_field(Key::new("b"), AnyValue::Int(2), false);

        enriched.emit(LogEntry::builder().with_level(Level::Information).build());

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field("a"), Some(&AnyValue::Int(1)));
        assert_eq!(entries[0].field("b"), Some(&AnyValue::Int(2)));
    }

    #[test]
    fn enriched_latest_context_wins_collisions() {
        let sink = CollectingSink::default();
        let enriched = Enriched::new(sink.clone(), Key::new("k"), AnyValue::Int(1), false)
            .with_field(Key::new("k"), AnyValue::Int(2), false);

        enriched.emit(LogEntry::builder().build());

        assert_eq!(sink.entries()[0].field("k"), Some(&AnyValue::Int(2)));
    }

    #[test]
    fn with_properties_folds_every_map_entry() {
        let sink = CollectingSink::default();
        let map: HashMap<String, f64> =
            [("a".to_string(), 1.0), ("b".to_string(), 2.0)].into();

        let enriched = with_properties(
            Enriched::new(sink.clone(), Key::new("seed"), AnyValue::Int(0), false),
            Some(&map),
            false,
        );
        enriched.emit(LogEntry::builder().build());

        let entries = sink.entries();
        assert_eq!(entries[0].fields.len(), 3);
        assert_eq!(entries[0].field("a"), Some(&AnyValue::Double(1.0)));
        assert_eq!(entries[0].field("b"), Some(&AnyValue::Double(2.0)));
    }
}
