//! Reader for Miles soundbank (`.msscmp`) containers.
//!
//! A soundbank is a flat binary image: a fixed header, a table of named
//! events, a table of audio sources and the payload bytes the sources point
//! at. Nothing in the file is self-describing. Every field is a
//! fixed-width word at a fixed offset, strings live behind absolute
//! offsets, and the payload location is hidden inside a decorated file-name
//! string rather than stored as a field. The signature doubles as the
//! byte-order mark: `BANK` marks a big-endian image, `KNAB` a little-endian
//! one.
//!
//! [`decode`] walks all of it and returns a [`BankModel`] that owns the
//! decoded tree, payload bytes included:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("sounds.msscmp")?;
//! let bank = msscmp::decode(&data)?;
//! for event in bank.events() {
//!     for source in &event.sources {
//!         println!("{} ({} bytes)", source.path, source.file_size);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cursor;
pub mod decode;
pub mod error;
pub mod event;
pub mod header;
pub mod model;
pub mod source;
pub mod tables;

pub use cursor::{ByteOrder, Cursor, Writer};
pub use decode::{decode, decode_with_observer, DecodeObserver, NullObserver};
pub use error::{Error, Result};
pub use event::BankEvent;
pub use header::{BankHeader, FORMAT_VERSION, HEADER_SIZE, SIGNATURE};
pub use model::BankModel;
pub use source::{payload_offset_from_name, BankSource, PlayMode};
pub use tables::TableLayout;
