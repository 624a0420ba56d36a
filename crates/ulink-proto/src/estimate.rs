//! Size pass.
//!
//! Walks the field plan and adds up entry sizes. Nothing is serialized and no
//! buffer is allocated, so sizing a header costs no more than reading its
//! attributes.

use crate::{
    attributes::UAttributes,
    config::HeaderConfig,
    errors::{HeaderError, Result},
    fields::fields,
    tag::entry_len,
};

/// Exact size of the header for `attrs`, in bytes.
pub fn header_len(attrs: &UAttributes, config: &HeaderConfig) -> Result<usize> {
    fields(attrs, config).try_fold(0usize, |total, field| {
        let len = entry_len(field.checked_len(config)?)?;
        total.checked_add(len).ok_or(HeaderError::SizeOverflow)
    })
}

/// Exact size of a message with header `attrs` and `payload_size` bytes of
/// payload.
///
/// The header accounts for [`header_len`] bytes; the payload segment that
/// follows it costs the same framing as a header entry. The payload is not
/// subject to [`HeaderConfig::max_value_len`], which bounds header values only.
pub fn estimate(attrs: &UAttributes, payload_size: usize, config: &HeaderConfig) -> Result<usize> {
    let header = header_len(attrs, config)?;
    let total = header.checked_add(entry_len(payload_size)?).ok_or(HeaderError::SizeOverflow)?;

    tracing::trace!(header, payload_size, total, "estimated message size");
    Ok(total)
}
