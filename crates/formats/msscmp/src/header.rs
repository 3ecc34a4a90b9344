use crate::cursor::{ByteOrder, Cursor};
use crate::error::{Error, Result};

/// Container signature as stored by a big-endian packer; little-endian
/// builds store the same magic byte-reversed.
pub const SIGNATURE: [u8; 4] = *b"BANK";

/// Layout revision this decoder was written against. Other revisions still
/// decode; callers that care compare and warn.
pub const FORMAT_VERSION: u32 = 8;

/// Size of the fixed header region. The table locator starts exactly here,
/// and so does the bank name string; the two share bytes.
pub const HEADER_SIZE: usize = 0x38;

/// Select the byte order from the leading signature.
///
/// `BANK` reads big-endian, `KNAB` little-endian. Anything else is fatal:
/// with no signature match there is no way to interpret a single word of
/// the rest of the file.
pub fn sniff_signature(data: &[u8]) -> Result<ByteOrder> {
    if data.len() < SIGNATURE.len() {
        return Err(Error::Truncated {
            offset: 0,
            wanted: SIGNATURE.len(),
            available: data.len(),
        });
    }
    let signature = [data[0], data[1], data[2], data[3]];
    match &signature {
        b"BANK" => Ok(ByteOrder::Big),
        b"KNAB" => Ok(ByteOrder::Little),
        _ => Err(Error::UnrecognizedSignature { signature }),
    }
}

/// Decoded fixed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHeader {
    /// Bank display name, stored at offset [`HEADER_SIZE`]. Overlaps the
    /// first table-locator word; short names fit inside it entirely.
    pub name: String,
    /// Original container file name as recorded by the packer, stored in
    /// the reserved span at 0x10. Often empty in practice.
    pub container_filename: String,
    /// Bytes the game runtime sets aside to hold the decoded entry data.
    pub memory_budget: u32,
    /// Layout revision; see [`FORMAT_VERSION`].
    pub format_version: u32,
    /// Byte order selected by the signature.
    pub byte_order: ByteOrder,
}

impl BankHeader {
    /// Parse the fixed header. The cursor must sit right after the 4-byte
    /// signature; afterwards it sits at the container-filename field
    /// (0x10), since both string reads are scoped and do not advance it.
    pub fn parse(c: &mut Cursor) -> Result<Self> {
        let format_version = c.read_u32()?;
        let memory_budget = c.read_u32()?;
        let _reserved = c.read_u32()?;
        let container_filename = c.peek_cstring()?;
        let name = c.read_cstring_at(HEADER_SIZE)?;
        Ok(Self {
            name,
            container_filename,
            memory_budget,
            format_version,
            byte_order: c.byte_order(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_selects_byte_order() {
        assert_eq!(sniff_signature(b"BANKxxxx").unwrap(), ByteOrder::Big);
        assert_eq!(sniff_signature(b"KNABxxxx").unwrap(), ByteOrder::Little);
    }

    #[test]
    fn unknown_signature_is_fatal() {
        match sniff_signature(b"RIFF\0\0\0\0") {
            Err(Error::UnrecognizedSignature { signature }) => {
                assert_eq!(&signature, b"RIFF");
            }
            other => panic!("expected UnrecognizedSignature, got {other:?}"),
        }
    }

    #[test]
    fn input_shorter_than_signature_is_truncated() {
        assert!(matches!(
            sniff_signature(b"BA"),
            Err(Error::Truncated {
                offset: 0,
                wanted: 4,
                available: 2,
            })
        ));
    }
}
