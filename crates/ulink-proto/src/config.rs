//! Header encoding configuration.

/// How the sink URI text is placed in its entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkEncoding {
    /// Long-form URI text as is
    #[default]
    Raw,
    /// Long-form URI text, base64 encoded (standard alphabet, padded)
    Base64,
}

/// Header encoding configuration.
#[derive(Debug, Clone)]
pub struct HeaderConfig {
    /// Sink entry encoding, shared by sizing and writing
    pub sink_encoding: SinkEncoding,
    /// Largest accepted header value, in bytes. The payload segment is exempt.
    pub max_value_len: usize,
}

impl HeaderConfig {
    /// Default limit on a single entry value (16 MB).
    pub const DEFAULT_MAX_VALUE_LEN: usize = 16 * 1024 * 1024;
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { sink_encoding: SinkEncoding::Raw, max_value_len: Self::DEFAULT_MAX_VALUE_LEN }
    }
}
