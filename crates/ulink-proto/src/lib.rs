//! Header wire format for uProtocol messages carried over a zenoh link.
//!
//! Every message on the link is a header followed by a payload segment. The
//! header is a run of tag-length-value entries, one per attribute present in
//! [`UAttributes`]: a one-byte [`Tag`], an 8-byte big-endian length, then the
//! value bytes. There is no terminator, so a reader has to know the header
//! size up front, which is why sizing and encoding must agree to the byte.
//!
//! Both passes are driven by one field plan ([`fields::fields`]). The size
//! pass ([`estimate()`]) sums entry lengths over the plan, and the write pass
//! ([`HeaderBuilder`]) encodes the same plan into a buffer allocated at exactly
//! that size. A disagreement surfaces as [`HeaderError::SizeMismatch`] instead
//! of an overrun.
//!
//! # Security
//!
//! Writes go through a bounded writer that refuses to grow its buffer. Lengths
//! that do not fit the fixed-width length field are rejected rather than
//! truncated.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attributes;
pub mod builder;
pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod estimate;
pub mod fields;
pub mod payload;
pub mod tag;
pub mod uri;
pub mod writer;

pub use attributes::{UAttributes, UMessageType, UPriority, USerializationHint};
pub use builder::HeaderBuilder;
pub use config::{HeaderConfig, SinkEncoding};
pub use diagnostics::{DiagnosticSink, EntryRecord, NullSink, RecordingSink, TracingSink};
pub use errors::{HeaderError, Result};
pub use estimate::{estimate, header_len};
pub use payload::UPayload;
pub use tag::{LENGTH_FIELD_WIDTH, PAYLOAD_MARKER, Tag, TagSet};
pub use uri::{UAuthority, UEntity, UResource, UUri};
pub use writer::HeaderWriter;
