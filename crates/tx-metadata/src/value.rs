//! [`MetadataValue`]: one node of the metadata value algebra.

/// A single metadata value.
///
/// Variant order is significant: the derived [`Ord`] compares variants in
/// declaration order first, then by contained value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataValue {
    /// Key/value pairs. Keys are arbitrary metadata values.
    Map(Vec<(MetadataValue, MetadataValue)>),
    /// Ordered list of values.
    List(Vec<MetadataValue>),
    /// Integer; valid range is `-(2^64 - 1) ..= 2^64 - 1`.
    Number(i128),
    /// Raw bytes; at most 64 bytes when valid.
    Bytes(Vec<u8>),
    /// UTF-8 text; at most 64 encoded bytes when valid.
    Text(String),
}

impl MetadataValue {
    /// Largest magnitude a valid [`MetadataValue::Number`] may have.
    pub const MAX_NUMBER: i128 = u64::MAX as i128;
    /// Smallest valid [`MetadataValue::Number`].
    pub const MIN_NUMBER: i128 = -(u64::MAX as i128);

    pub fn text(s: impl Into<String>) -> Self {
        MetadataValue::Text(s.into())
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        MetadataValue::Bytes(b.into())
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataValue::Map(_) => "map",
            MetadataValue::List(_) => "list",
            MetadataValue::Number(_) => "int",
            MetadataValue::Bytes(_) => "bytes",
            MetadataValue::Text(_) => "string",
        }
    }
}

impl From<i128> for MetadataValue {
    fn from(n: i128) -> Self {
        MetadataValue::Number(n)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::Number(n.into())
    }
}

impl From<u64> for MetadataValue {
    fn from(n: u64) -> Self {
        MetadataValue::Number(n.into())
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<Vec<u8>> for MetadataValue {
    fn from(b: Vec<u8>) -> Self {
        MetadataValue::Bytes(b)
    }
}

impl From<Vec<MetadataValue>> for MetadataValue {
    fn from(items: Vec<MetadataValue>) -> Self {
        MetadataValue::List(items)
    }
}

impl FromIterator<(MetadataValue, MetadataValue)> for MetadataValue {
    fn from_iter<I: IntoIterator<Item = (MetadataValue, MetadataValue)>>(iter: I) -> Self {
        MetadataValue::Map(iter.into_iter().collect())
    }
}
