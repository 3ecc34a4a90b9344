use crate::cursor::Cursor;
use crate::error::Result;
use crate::header::HEADER_SIZE;

/// Where the two entry tables live and how many rows each holds.
///
/// Stored as two groups of five words right after the fixed header: the
/// first group carries the table offsets, the second the row counts, each
/// in slots 1 and 4. The other six words have no known meaning and ride
/// along in [`TableLayout::reserved`] so a decoded bank still carries
/// everything the file said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Absolute offset of the event table.
    pub event_table_offset: u32,
    /// Rows in the event table.
    pub event_count: u32,
    /// Absolute offset of the source table.
    pub source_table_offset: u32,
    /// Rows in the source table.
    pub source_count: u32,
    /// The six uninterpreted locator words, in file order.
    pub reserved: [u32; 6],
}

impl TableLayout {
    /// Parse both locator groups. Seeks to [`HEADER_SIZE`] first, since the
    /// header leaves the cursor parked at its string field, and leaves the
    /// cursor right after the second group.
    pub fn parse(c: &mut Cursor) -> Result<Self> {
        if c.position() != HEADER_SIZE {
            c.seek(HEADER_SIZE);
        }
        let offsets = c.read_u32s(5)?;
        let counts = c.read_u32s(5)?;
        Ok(Self {
            event_table_offset: offsets[1],
            event_count: counts[1],
            source_table_offset: offsets[4],
            source_count: counts[4],
            reserved: [offsets[0], offsets[2], offsets[3], counts[0], counts[2], counts[3]],
        })
    }
}
