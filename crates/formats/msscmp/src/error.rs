use thiserror::Error;

/// Errors produced while decoding a soundbank container.
///
/// Every variant is fatal to the decode that raised it: the format carries
/// no redundancy to resynchronize on, so guessing past a bad offset would
/// only read unrelated file regions as if they were records.
#[derive(Debug, Error)]
pub enum Error {
    /// The first four bytes are neither `BANK` nor `KNAB`.
    #[error("not a soundbank: signature {signature:02x?}")]
    UnrecognizedSignature { signature: [u8; 4] },

    /// A fixed-width or payload read ran past the end of the data.
    #[error(
        "unexpected end of data at offset {offset:#x}: wanted {wanted} bytes, {available} available"
    )]
    Truncated {
        offset: usize,
        wanted: usize,
        available: usize,
    },

    /// A string read found no NUL terminator before the end of the data.
    #[error("unterminated string at offset {offset:#x}")]
    UnterminatedString { offset: usize },

    /// String bytes were not valid UTF-8.
    #[error("string at offset {offset:#x} is not valid UTF-8")]
    StringNotUtf8 { offset: usize },

    /// A source record's leading word disagrees with the table entry that
    /// pointed at it. Either the table start was wrong or the record layout
    /// has drifted; never silently corrected.
    #[error(
        "source record at {record_offset:#x}: expected path offset {expected:#x}, found {actual:#x}"
    )]
    SourceOffsetMismatch {
        record_offset: u32,
        expected: u32,
        actual: u32,
    },

    /// The decorated file name carries no parseable payload offset.
    #[error("no payload offset encoded in file name {file_name:?}")]
    PayloadOffsetNotEncoded { file_name: String },

    /// A source path has no directory component to link by.
    #[error("source path {path:?} has no directory component")]
    PathWithoutDirectory { path: String },
}

pub type Result<T> = std::result::Result<T, Error>;
