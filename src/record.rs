use std::{borrow::Cow, error::Error, fmt, sync::Arc, time::SystemTime};

/// An exception object attached to a log entry.
///
/// Shared ownership so entries stay cheap to clone through enrichment
/// wrappers and recording sinks.
pub type Exception = Arc<dyn Error + Send + Sync>;

/// The structured sink's level set.
///
/// Severity translation targets four of these; [`Level::Debug`] is the fixed
/// level of severity-less trace tracking.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd)]
pub enum Level {
    /// VERBOSE
    Verbose,
    /// DEBUG
    Debug,
    /// INFORMATION
    Information,
    /// WARNING
    Warning,
    /// ERROR
    Error,
}

/// The key part of a structured [`Field`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Cow<'static, str>);

impl Key {
    /// Create a new `Key` from anything string-like.
    pub fn new(value: impl Into<Key>) -> Self {
        value.into()
    }

    /// Create a new const `Key`.
    pub const fn from_static_str(value: &'static str) -> Self {
        Key(Cow::Borrowed(value))
    }

    /// Returns a reference to the underlying key name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Key {
    fn from(key_str: &'static str) -> Self {
        Key(Cow::Borrowed(key_str))
    }
}

impl From<String> for Key {
    fn from(string: String) -> Self {
        Key(Cow::Owned(string))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

/// Value types for representing arbitrary values in a log entry field.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue {
    /// An integer value
    Int(i64),
    /// A double value
    Double(f64),
    /// A string value
    String(String),
    /// A boolean value
    Boolean(bool),
    /// An array of `AnyValue`s
    List(Vec<AnyValue>),
    /// A map of keys to `AnyValue`s, arbitrarily nested.
    Map(Vec<(Key, AnyValue)>),
}

macro_rules! impl_trivial_from {
    ($t:ty, $variant:path) => {
        impl From<$t> for AnyValue {
            fn from(val: $t) -> AnyValue {
                $variant(val.into())
            }
        }
    };
}

impl_trivial_from!(i8, AnyValue::Int);
impl_trivial_from!(i16, AnyValue::Int);
impl_trivial_from!(i32, AnyValue::Int);
impl_trivial_from!(i64, AnyValue::Int);

impl_trivial_from!(u8, AnyValue::Int);
impl_trivial_from!(u16, AnyValue::Int);
impl_trivial_from!(u32, AnyValue::Int);

impl_trivial_from!(f64, AnyValue::Double);
impl_trivial_from!(f32, AnyValue::Double);

impl_trivial_from!(String, AnyValue::String);
impl_trivial_from!(&str, AnyValue::String);

impl_trivial_from!(bool, AnyValue::Boolean);

impl<T: Into<AnyValue>> FromIterator<T> for AnyValue {
    /// Creates an [`AnyValue::List`] value from a sequence of `Into<AnyValue>` values.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AnyValue::List(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Key>, V: Into<AnyValue>> FromIterator<(K, V)> for AnyValue {
    /// Creates an [`AnyValue::Map`] value from a sequence of key-value pairs.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AnyValue::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A structured field attached to a [`LogEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub key: Key,
    /// Field value.
    pub value: AnyValue,
}

impl Field {
    /// Create a field, applying the destructure flag.
    ///
    /// Compound values (`List`, `Map`) pass through structured only when
    /// `destructure` is set; otherwise they are captured as one opaque
    /// string rendering. Scalars are unaffected by the flag.
    pub fn new(key: Key, value: AnyValue, destructure: bool) -> Self {
        let value = match value {
            compound @ (AnyValue::List(_) | AnyValue::Map(_)) if !destructure => {
                AnyValue::String(format!("{compound:?}"))
            }
            scalar => scalar,
        };
        Field { key, value }
    }
}

/// LogEntry represents all data carried by one emitted log entry, and is
/// provided to [`StructuredLogger`] implementations as input.
///
/// [`StructuredLogger`]: crate::logger::StructuredLogger
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct LogEntry {
    /// Entry timestamp
    pub timestamp: Option<SystemTime>,

    /// Entry level
    pub level: Option<Level>,

    /// Rendered message body
    pub body: Option<String>,

    /// Exception attached to the entry, if any
    pub exception: Option<Exception>,

    /// Structured fields attached to this entry
    pub fields: Vec<Field>,
}

impl LogEntry {
    /// Create a [`LogEntryBuilder`] to create a new log entry.
    pub fn builder() -> LogEntryBuilder {
        LogEntryBuilder::new()
    }

    /// Attach a field unless the key is already present.
    ///
    /// Enrichment wrappers apply outermost (most recently attached context)
    /// first, so first-insert-wins makes the latest enrichment take
    /// precedence on key collisions.
    pub fn add_field(&mut self, field: Field) {
        if !self.fields.iter().any(|f| f.key == field.key) {
            self.fields.push(field);
        }
    }

    /// Look up a field value by key name.
    pub fn field(&self, key: &str) -> Option<&AnyValue> {
        self.fields
            .iter()
            .find(|f| f.key.as_str() == key)
            .map(|f| &f.value)
    }
}

/// A builder for [`LogEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct LogEntryBuilder {
    entry: LogEntry,
}

impl LogEntryBuilder {
    /// Create a new LogEntryBuilder
    pub fn new() -> Self {
        Self {
            entry: Default::default(),
        }
    }

    /// Assign timestamp
    pub fn with_timestamp(self, timestamp: SystemTime) -> Self {
        Self {
            entry: LogEntry {
                timestamp: Some(timestamp),
                ..self.entry
            },
        }
    }

    /// Assign level
    pub fn with_level(self, level: Level) -> Self {
        Self {
            entry: LogEntry {
                level: Some(level),
                ..self.entry
            },
        }
    }

    /// Assign the rendered message body
    pub fn with_body(self, body: impl Into<String>) -> Self {
        Self {
            entry: LogEntry {
                body: Some(body.into()),
                ..self.entry
            },
        }
    }

    /// Attach an exception
    pub fn with_exception(self, exception: Exception) -> Self {
        Self {
            entry: LogEntry {
                exception: Some(exception),
                ..self.entry
            },
        }
    }

    /// Build the entry, consuming the builder
    pub fn build(self) -> LogEntry {
        self.entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fields_ignore_destructure_flag() {
        let field = Field::new(Key::new("count"), AnyValue::Int(3), false);
        assert_eq!(field.value, AnyValue::Int(3));
    }

    #[test]
    fn compound_field_is_opaque_unless_destructured() {
        let value = AnyValue::from_iter([("inner", 1i64)]);

        let opaque = Field::new(Key::new("ctx"), value.clone(), false);
        assert!(matches!(opaque.value, AnyValue::String(_)));

        let structured = Field::new(Key::new("ctx"), value.clone(), true);
        assert_eq!(structured.value, value);
    }

    #[test]
    fn first_insert_wins_on_key_collision() {
        let mut entry = LogEntry::builder().with_level(Level::Information).build();
        entry.add_field(Field::new(Key::new("k"), AnyValue::Int(1), false));
        entry.add_field(Field::new(Key::new("k"), AnyValue::Int(2), false));
        assert_eq!(entry.fields.len(), 1);
        assert_eq!(entry.field("k"), Some(&AnyValue::Int(1)));
    }
}
