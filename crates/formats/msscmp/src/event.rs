use crate::cursor::Cursor;
use crate::error::Result;
use crate::source::BankSource;

/// A named audio cue aggregating zero or more sources.
#[derive(Debug, Clone, PartialEq)]
pub struct BankEvent {
    /// Path-like identifier, also the lookup key in the decoded bank.
    pub name: String,
    /// The property string exactly as stored.
    pub raw_property_string: String,
    /// [`raw_property_string`](Self::raw_property_string) split on `;`.
    /// Field meanings past the leading discriminator are undocumented, so
    /// consumers get the verbatim pieces.
    pub properties: Vec<String>,
    /// Sources whose path directory names this event, in source-table
    /// order.
    pub sources: Vec<BankSource>,
}

impl BankEvent {
    /// Parse one event-table row: a name offset and a details offset, both
    /// dereferenced through scoped string reads. The cursor advances
    /// exactly eight bytes, whatever the strings point at.
    pub fn parse(c: &mut Cursor) -> Result<Self> {
        let name_offset = c.read_u32()?;
        let details_offset = c.read_u32()?;
        let name = c.read_cstring_at(name_offset as usize)?;
        let raw_property_string = c.read_cstring_at(details_offset as usize)?;
        let properties = raw_property_string.split(';').map(str::to_owned).collect();
        Ok(Self {
            name,
            raw_property_string,
            properties,
            sources: Vec::new(),
        })
    }
}
