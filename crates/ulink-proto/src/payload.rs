//! Message payload.

use bytes::Bytes;

use crate::attributes::USerializationHint;

/// Payload bytes with their serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UPayload {
    data: Bytes,
    format: USerializationHint,
}

impl UPayload {
    /// Wrap `data` in the given format.
    pub fn new(data: impl Into<Bytes>, format: USerializationHint) -> Self {
        Self { data: data.into(), format }
    }

    /// Payload bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Serialization format.
    pub fn format(&self) -> USerializationHint {
        self.format
    }

    /// Length in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
