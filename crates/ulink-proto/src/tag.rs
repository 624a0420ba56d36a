//! Tag alphabet and entry layout.
//!
//! Each header entry starts with a one-byte tag naming the attribute it
//! carries. The alphabet is closed: adding a tag is a wire format change.
//!
//! ```text
//! +-----+----------------------+-----------------+
//! | tag | length (u64, BE)     | value           |
//! | 1 B | 8 B                  | length bytes    |
//! +-----+----------------------+-----------------+
//! ```

use bitflags::bitflags;

use crate::errors::{HeaderError, Result};

/// Width of the length field in every entry, in bytes.
///
/// Fixed at 8 on every platform; the length is written as a big-endian u64.
pub const LENGTH_FIELD_WIDTH: usize = 8;

/// Bytes an entry spends on framing, before its value.
pub const ENTRY_OVERHEAD: usize = 1 + LENGTH_FIELD_WIDTH;

/// Leading byte of the payload segment that follows the header.
///
/// Not part of the header tag alphabet.
pub const PAYLOAD_MARKER: u8 = 0x00;

/// Header entry tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::upper_case_acronyms)]
pub enum Tag {
    /// Message identifier (mandatory)
    ID = 0x01,
    /// Message type (mandatory)
    TYPE = 0x02,
    /// Priority class (mandatory)
    PRIORITY = 0x03,
    /// Time to live in milliseconds
    TTL = 0x04,
    /// Access token
    TOKEN = 0x05,
    /// Payload serialization hint
    HINT = 0x06,
    /// Destination URI
    SINK = 0x07,
    /// Permission level
    PLEVEL = 0x08,
    /// Communication status
    COMMSTATUS = 0x09,
    /// Identifier of the request this message answers
    REQID = 0x0A,
}

impl Tag {
    /// Every tag, in the order entries appear in a header.
    pub const ALL: [Self; 10] = [
        Self::ID,
        Self::TYPE,
        Self::PRIORITY,
        Self::TTL,
        Self::TOKEN,
        Self::HINT,
        Self::SINK,
        Self::PLEVEL,
        Self::COMMSTATUS,
        Self::REQID,
    ];

    /// Wire code.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Parse a wire code.
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::ID),
            0x02 => Some(Self::TYPE),
            0x03 => Some(Self::PRIORITY),
            0x04 => Some(Self::TTL),
            0x05 => Some(Self::TOKEN),
            0x06 => Some(Self::HINT),
            0x07 => Some(Self::SINK),
            0x08 => Some(Self::PLEVEL),
            0x09 => Some(Self::COMMSTATUS),
            0x0A => Some(Self::REQID),
            _ => None,
        }
    }

    /// Whether every header carries this entry.
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::ID | Self::TYPE | Self::PRIORITY)
    }

    /// Corresponding flag in a [`TagSet`].
    pub const fn flag(self) -> TagSet {
        TagSet::from_bits_retain(1 << (self as u8 - 1))
    }
}

bitflags! {
    /// Set of tags, used to describe which entries a header carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagSet: u16 {
        /// Message identifier
        const ID = 1 << 0;
        /// Message type
        const TYPE = 1 << 1;
        /// Priority class
        const PRIORITY = 1 << 2;
        /// Time to live
        const TTL = 1 << 3;
        /// Access token
        const TOKEN = 1 << 4;
        /// Serialization hint
        const HINT = 1 << 5;
        /// Destination URI
        const SINK = 1 << 6;
        /// Permission level
        const PLEVEL = 1 << 7;
        /// Communication status
        const COMMSTATUS = 1 << 8;
        /// Request identifier
        const REQID = 1 << 9;

        /// Entries present in every header
        const MANDATORY = Self::ID.bits() | Self::TYPE.bits() | Self::PRIORITY.bits();
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, tag| set | tag.flag())
    }
}

/// Total size of an entry whose value is `value_len` bytes.
///
/// Both the size pass and the write pass account for entries through this.
pub fn entry_len(value_len: usize) -> Result<usize> {
    ENTRY_OVERHEAD.checked_add(value_len).ok_or(HeaderError::SizeOverflow)
}
