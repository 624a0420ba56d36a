//! Single-entry encoder.

use crate::{
    diagnostics::{DiagnosticSink, EntryRecord},
    errors::{HeaderError, Result},
    tag::{Tag, entry_len},
    writer::HeaderWriter,
};

/// Write one `[tag][len][value]` entry at the writer's cursor.
///
/// Returns the cursor after the entry. The whole entry is checked against the
/// remaining capacity first, so on error nothing has been written.
pub fn write_entry<S>(writer: &mut HeaderWriter, tag: Tag, value: &[u8], sink: &S) -> Result<usize>
where
    S: DiagnosticSink + ?Sized,
{
    write_segment(writer, tag.to_u8(), value)?;
    let pos = writer.position() - entry_len(value.len())?;
    sink.entry_written(EntryRecord { tag, len: value.len(), pos });
    Ok(writer.position())
}

/// Write a marker byte, a length field and `value`, atomically.
///
/// Shared by header entries and the payload segment.
pub(crate) fn write_segment(writer: &mut HeaderWriter, marker: u8, value: &[u8]) -> Result<()> {
    let len = u64::try_from(value.len())
        .map_err(|_| HeaderError::LengthOverflow { len: value.len() })?;
    writer.reserve_exact(entry_len(value.len())?)?;

    writer.put_u8(marker)?;
    writer.put_u64(len)?;
    writer.put_slice(value)
}
