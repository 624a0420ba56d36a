//! Header and message assembly.
//!
//! [`HeaderBuilder`] runs the two passes: it sizes the output with
//! [`header_len`] / [`estimate`], allocates a [`HeaderWriter`] of exactly that
//! capacity, and writes the field plan into it entry by entry. The writer only
//! hands its buffer back when it is exactly full, so an estimate that is off by
//! a single byte fails the build.

use bytes::Bytes;

use crate::{
    attributes::UAttributes,
    codec::{write_entry, write_segment},
    config::HeaderConfig,
    diagnostics::{DiagnosticSink, TracingSink},
    errors::{HeaderError, Result},
    estimate::{estimate, header_len},
    fields::{HeaderField, fields, present_tags},
    payload::UPayload,
    tag::PAYLOAD_MARKER,
    writer::HeaderWriter,
};

/// Builds message headers.
///
/// Holds no per-message state; one builder can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct HeaderBuilder<S = TracingSink> {
    config: HeaderConfig,
    sink: S,
}

impl HeaderBuilder {
    /// Builder with default configuration, reporting entries to `tracing`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with `config`, reporting entries to `tracing`.
    pub fn with_config(config: HeaderConfig) -> Self {
        Self { config, sink: TracingSink }
    }
}

impl<S: DiagnosticSink> HeaderBuilder<S> {
    /// Replace the diagnostic sink.
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> HeaderBuilder<T> {
        HeaderBuilder { config: self.config, sink }
    }

    /// Configuration in use.
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Diagnostic sink in use.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Encode the header for `attrs`.
    ///
    /// The result is exactly [`header_len`] bytes long.
    pub fn build(&self, attrs: &UAttributes) -> Result<Vec<u8>> {
        let capacity = header_len(attrs, &self.config)?;
        let mut writer = HeaderWriter::with_capacity(capacity);

        self.write_header(&mut writer, attrs)?;
        let header = writer.finish()?;

        tracing::debug!(
            len = header.len(),
            tags = ?present_tags(attrs),
            header = %hex::encode(&header),
            "built header"
        );
        Ok(Vec::from(header))
    }

    /// Encode the header for `attrs` followed by the payload segment.
    ///
    /// The result is exactly [`estimate`] bytes long: the header, then
    /// `[PAYLOAD_MARKER][len][payload]`.
    pub fn build_message(&self, attrs: &UAttributes, payload: &UPayload) -> Result<Bytes> {
        let capacity = estimate(attrs, payload.size(), &self.config)?;
        let mut writer = HeaderWriter::with_capacity(capacity);

        let header_end = self.write_header(&mut writer, attrs)?;
        write_segment(&mut writer, PAYLOAD_MARKER, payload.data())?;
        let message = writer.finish()?;

        tracing::debug!(
            len = message.len(),
            header_len = header_end,
            payload_len = payload.size(),
            "built message"
        );
        Ok(message)
    }

    fn write_header(&self, writer: &mut HeaderWriter, attrs: &UAttributes) -> Result<usize> {
        let mut pos = writer.position();
        for field in fields(attrs, &self.config) {
            pos = self.write_field(writer, field)?;
        }
        Ok(pos)
    }

    fn write_field(&self, writer: &mut HeaderWriter, field: HeaderField<'_>) -> Result<usize> {
        let expected = field.checked_len(&self.config)?;
        let bytes = field.value.to_bytes();

        if bytes.len() != expected {
            return Err(HeaderError::SizeMismatch { estimated: expected, written: bytes.len() });
        }

        write_entry(writer, field.tag, &bytes, &self.sink)
    }
}
