//! The decode driver: header, locator, both tables, linking.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::event::BankEvent;
use crate::header::{sniff_signature, BankHeader, SIGNATURE};
use crate::model::BankModel;
use crate::source::BankSource;
use crate::tables::TableLayout;

/// Hooks called at fixed points of a decode.
///
/// This is the decoder's whole reporting surface: tools that want progress
/// lines, statistics or damage reports implement the methods they care
/// about, and every method defaults to doing nothing. The decoder itself
/// never prints.
pub trait DecodeObserver {
    /// Fixed header decoded. A `format_version` other than
    /// [`crate::header::FORMAT_VERSION`] is worth a warning here; the
    /// decode proceeds regardless.
    fn header_decoded(&mut self, header: &BankHeader) {
        let _ = header;
    }

    /// One event-table row decoded, about to be inserted.
    fn event_decoded(&mut self, event: &BankEvent) {
        let _ = event;
    }

    /// One source record decoded, payload bytes and all.
    fn source_decoded(&mut self, source: &BankSource) {
        let _ = source;
    }

    /// A decoded source matched no event and was filed as an orphan.
    fn source_orphaned(&mut self, source: &BankSource) {
        let _ = source;
    }

    /// A source record failed its offset self-check. The decode aborts
    /// with [`Error::SourceOffsetMismatch`] right after this call.
    fn integrity_failure(&mut self, expected: u32, actual: u32) {
        let _ = (expected, actual);
    }
}

/// A [`DecodeObserver`] that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl DecodeObserver for NullObserver {}

/// Decode a complete container image.
pub fn decode(data: &[u8]) -> Result<BankModel> {
    decode_with_observer(data, &mut NullObserver)
}

/// Decode a complete container image, reporting progress to `observer`.
///
/// Returns either a fully populated model or the first error; no partial
/// model escapes and no table row is silently skipped.
pub fn decode_with_observer(data: &[u8], observer: &mut dyn DecodeObserver) -> Result<BankModel> {
    let order = sniff_signature(data)?;
    let mut c = Cursor::new(data, order);
    c.seek(SIGNATURE.len());

    let header = BankHeader::parse(&mut c)?;
    observer.header_decoded(&header);

    let layout = TableLayout::parse(&mut c)?;
    let mut model = BankModel::new(header, layout);

    // Event table, strictly in row order; row order becomes the model's
    // iteration order.
    if c.position() != model.layout.event_table_offset as usize {
        c.seek(model.layout.event_table_offset as usize);
    }
    for _ in 0..model.layout.event_count {
        let event = BankEvent::parse(&mut c)?;
        observer.event_decoded(&event);
        model.insert_event(event);
    }

    // Source table. Not guaranteed to start where the event table ends.
    if c.position() != model.layout.source_table_offset as usize {
        c.seek(model.layout.source_table_offset as usize);
    }
    for _ in 0..model.layout.source_count {
        let source = match BankSource::parse(&mut c) {
            Ok(source) => source,
            Err(err) => {
                if let Error::SourceOffsetMismatch {
                    expected, actual, ..
                } = &err
                {
                    observer.integrity_failure(*expected, *actual);
                }
                return Err(err);
            }
        };
        observer.source_decoded(&source);
        link_source(&mut model, source, observer)?;
    }

    Ok(model)
}

/// Attach a decoded source to the event named by its path directory, or
/// file it as an orphan when no such event exists.
fn link_source(
    model: &mut BankModel,
    source: BankSource,
    observer: &mut dyn DecodeObserver,
) -> Result<()> {
    let directory = directory_of(&source.path)?;
    match model.event_mut(directory) {
        Some(event) => event.sources.push(source),
        None => {
            observer.source_orphaned(&source);
            model.orphans.push(source);
        }
    }
    Ok(())
}

/// Directory component of a source path: everything before the last `/`.
/// A path without one has nothing to link by, which is fatal.
fn directory_of(path: &str) -> Result<&str> {
    match path.rfind('/') {
        Some(i) => Ok(&path[..i]),
        None => Err(Error::PathWithoutDirectory {
            path: path.to_owned(),
        }),
    }
}
