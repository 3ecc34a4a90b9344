use std::collections::BTreeMap;

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Known readings of [`BankSource::play_mode`]. Observed values only,
/// unconfirmed against the runtime; the decoder stores the raw word and
/// leaves the interpretation to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    PlayOnce,
    Loop,
}

impl PlayMode {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::PlayOnce),
            2 => Some(Self::Loop),
            _ => None,
        }
    }
}

/// One embedded audio payload and its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BankSource {
    /// Slash-delimited virtual path. Its directory component names the
    /// event this source belongs to.
    pub path: String,
    /// Offset the source table said [`path`](Self::path) lives at. The
    /// record repeats it as its first word, which is the one integrity
    /// check the format affords.
    pub path_offset: u32,
    /// Decorated file name. The payload offset is smuggled into its last
    /// `*` segment; see [`payload_offset_from_name`].
    pub embedded_file_name: String,
    /// Payload length in bytes.
    pub file_size: u32,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Absolute offset of the payload bytes, recovered from
    /// [`embedded_file_name`](Self::embedded_file_name). The record has no
    /// plain field for it.
    pub payload_offset: u32,
    /// Raw play-mode word; [`PlayMode::from_u32`] offers a reading.
    pub play_mode: u32,
    /// Channel count as recorded, not verified against the payload.
    pub channel_count: u32,
    /// Duration in milliseconds as recorded.
    pub duration_ms: u32,
    /// Volume scale factor.
    pub volume_scalar: f32,
    /// Record words with no known meaning, keyed by their byte offset from
    /// the record start, so nothing the file says is dropped.
    pub unknown_fields: BTreeMap<u32, u32>,
    /// The payload bytes, exactly [`file_size`](Self::file_size) of them.
    pub payload: Vec<u8>,
}

impl BankSource {
    /// Parse one source-table row: a path offset and a record offset, then
    /// the record behind the latter. The cursor advances exactly eight
    /// bytes; the record, its strings and the payload are all scoped reads.
    pub fn parse(c: &mut Cursor) -> Result<Self> {
        let path_offset = c.read_u32()?;
        let record_offset = c.read_u32()?;
        c.read_at(record_offset as usize, |c| {
            Self::parse_record(c, path_offset, record_offset)
        })
    }

    fn parse_record(c: &mut Cursor, path_offset: u32, record_offset: u32) -> Result<Self> {
        // The record opens with the offset of its own path string. If that
        // disagrees with the table row we followed here, either the table
        // start was wrong or the record layout has drifted, and no word
        // after this one can be trusted. Fail before reading any of them.
        let self_path_offset = c.read_u32()?;
        if self_path_offset != path_offset {
            return Err(Error::SourceOffsetMismatch {
                record_offset,
                expected: path_offset,
                actual: self_path_offset,
            });
        }
        let path = c.read_cstring_at(path_offset as usize)?;

        // The file-name offset is signed and relative to the record start;
        // packers park the string on either side.
        let file_name_rel = c.read_u32()? as i32;
        let file_name_at = i64::from(record_offset) + i64::from(file_name_rel);
        let embedded_file_name =
            c.read_cstring_at(usize::try_from(file_name_at).unwrap_or(usize::MAX))?;

        let mut unknown_fields = BTreeMap::new();
        unknown_fields.insert(0x08, c.read_u32()?);
        let play_mode = c.read_u32()?;
        unknown_fields.insert(0x10, c.read_u32()?);
        let sample_rate = c.read_u32()?;
        let file_size = c.read_u32()?;
        let channel_count = c.read_u32()?;
        unknown_fields.insert(0x20, c.read_u32()?);
        let duration_ms = c.read_u32()?;
        unknown_fields.insert(0x28, c.read_u32()?);
        unknown_fields.insert(0x2C, c.read_u32()?);
        unknown_fields.insert(0x30, c.read_u32()?);
        let volume_scalar = c.read_f32()?;
        unknown_fields.insert(0x38, c.read_u32()?);

        let payload_offset = payload_offset_from_name(&embedded_file_name)?;
        let payload = c.read_at(payload_offset as usize, |c| {
            Ok(c.read_bytes(file_size as usize)?.to_vec())
        })?;

        Ok(Self {
            path,
            path_offset,
            embedded_file_name,
            file_size,
            sample_rate,
            payload_offset,
            play_mode,
            channel_count,
            duration_ms,
            volume_scalar,
            unknown_fields,
            payload,
        })
    }

    /// Extension for an extracted payload file, taken from the embedded
    /// file name. Falls back to `binka` (Bink Audio, the codec observed in
    /// shipped banks) when the name carries none.
    pub fn payload_extension(&self) -> &str {
        let tail = self.embedded_file_name.rsplit('*').next().unwrap_or("");
        match tail.split_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => "binka",
        }
    }
}

/// Recover the absolute payload offset hidden in a decorated file name.
///
/// The record never stores the payload location as a plain field. Instead
/// the file-name string is decorated: the segment after the last `*`, with
/// everything from the first `.` stripped, is the offset in base 10. So
/// `"x*512.binka"` encodes offset 512. Pure string work; the result does
/// not depend on the byte order or anything else in the file.
pub fn payload_offset_from_name(file_name: &str) -> Result<u32> {
    let tail = file_name.rsplit('*').next().unwrap_or("");
    let digits = match tail.split_once('.') {
        Some((head, _)) => head,
        None => tail,
    };
    digits
        .parse::<u32>()
        .map_err(|_| Error::PayloadOffsetNotEncoded {
            file_name: file_name.to_owned(),
        })
}
