//! The header field plan.
//!
//! [`fields`] lists, in wire order, every entry a header for a given attribute
//! set will contain, together with its value. The size pass reads only
//! [`FieldValue::encoded_len`]; the write pass reads [`FieldValue::to_bytes`].
//! Presence checks and normalization live here and nowhere else, so the two
//! passes cannot drift apart.

use std::borrow::Cow;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use uuid::Uuid;

use crate::{
    attributes::UAttributes,
    config::{HeaderConfig, SinkEncoding},
    errors::{HeaderError, Result},
    tag::{Tag, TagSet},
    uri::UUri,
};

/// Value of one header entry, before conversion to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// 16-byte identifier
    Uuid(&'a Uuid),
    /// Enumeration ordinal, one byte
    Ordinal(u8),
    /// Signed 32-bit integer, four bytes big-endian
    Int(i32),
    /// UTF-8 text, its byte length
    Text(&'a str),
    /// URI as long-form text in the given encoding
    Uri(&'a UUri, SinkEncoding),
}

impl<'a> FieldValue<'a> {
    /// Encoded length in bytes, computed without producing the bytes.
    pub fn encoded_len(&self) -> Result<usize> {
        Ok(match self {
            Self::Uuid(_) => 16,
            Self::Ordinal(_) => 1,
            Self::Int(_) => 4,
            Self::Text(text) => text.len(),
            Self::Uri(uri, SinkEncoding::Raw) => uri.long_form_len(),
            Self::Uri(uri, SinkEncoding::Base64) => {
                base64::encoded_len(uri.long_form_len(), true).ok_or(HeaderError::SizeOverflow)?
            },
        })
    }

    /// Encoded bytes.
    pub fn to_bytes(self) -> Cow<'a, [u8]> {
        match self {
            Self::Uuid(id) => Cow::Borrowed(id.as_bytes()),
            Self::Ordinal(value) => Cow::Owned(vec![value]),
            Self::Int(value) => Cow::Owned(value.to_be_bytes().to_vec()),
            Self::Text(text) => Cow::Borrowed(text.as_bytes()),
            Self::Uri(uri, SinkEncoding::Raw) => Cow::Owned(uri.to_long_form().into_bytes()),
            Self::Uri(uri, SinkEncoding::Base64) => {
                Cow::Owned(STANDARD.encode(uri.to_long_form()).into_bytes())
            },
        }
    }
}

/// One planned header entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField<'a> {
    /// Entry tag
    pub tag: Tag,
    /// Entry value
    pub value: FieldValue<'a>,
}

impl<'a> HeaderField<'a> {
    const fn new(tag: Tag, value: FieldValue<'a>) -> Self {
        Self { tag, value }
    }

    /// Encoded value length, rejected if it exceeds `config.max_value_len`.
    ///
    /// The size pass and the write pass both size entries through this, so an
    /// oversized value fails the estimate with the same error as the build.
    pub fn checked_len(&self, config: &HeaderConfig) -> Result<usize> {
        let len = self.value.encoded_len()?;
        if len > config.max_value_len {
            return Err(HeaderError::ValueTooLarge {
                tag: self.tag,
                len,
                max: config.max_value_len,
            });
        }
        Ok(len)
    }
}

/// Entries of the header for `attrs`, in wire order.
///
/// Mandatory entries come first, then each present optional entry in tag
/// order. Absent optional fields produce nothing.
pub fn fields<'a>(
    attrs: &'a UAttributes,
    config: &HeaderConfig,
) -> impl Iterator<Item = HeaderField<'a>> + use<'a> {
    let sink_encoding = config.sink_encoding;

    let mandatory = [
        HeaderField::new(Tag::ID, FieldValue::Uuid(attrs.id())),
        HeaderField::new(Tag::TYPE, FieldValue::Ordinal(attrs.message_type().to_u8())),
        HeaderField::new(Tag::PRIORITY, FieldValue::Ordinal(attrs.priority().to_u8())),
    ];

    let optional = [
        attrs.ttl().map(|v| HeaderField::new(Tag::TTL, FieldValue::Int(v))),
        attrs.token().map(|v| HeaderField::new(Tag::TOKEN, FieldValue::Text(v))),
        attrs
            .serialization_hint()
            .map(|v| HeaderField::new(Tag::HINT, FieldValue::Ordinal(v.to_u8()))),
        attrs.sink().map(|v| HeaderField::new(Tag::SINK, FieldValue::Uri(v, sink_encoding))),
        attrs.plevel().map(|v| HeaderField::new(Tag::PLEVEL, FieldValue::Int(v))),
        attrs.commstatus().map(|v| HeaderField::new(Tag::COMMSTATUS, FieldValue::Int(v))),
        attrs.reqid().map(|v| HeaderField::new(Tag::REQID, FieldValue::Uuid(v))),
    ];

    mandatory.into_iter().chain(optional.into_iter().flatten())
}

/// Tags the header for `attrs` will carry.
pub fn present_tags(attrs: &UAttributes) -> TagSet {
    fields(attrs, &HeaderConfig::default()).map(|field| field.tag).collect()
}
