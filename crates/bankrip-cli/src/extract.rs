//! Writes decoded payloads back out as standalone files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use msscmp::{BankModel, BankSource};

/// Write every payload in the bank, linked sources and orphans alike, as
/// `<dest>/<source path>.<extension>`. Returns the number of files
/// written.
pub fn extract_bank(bank: &BankModel, dest: &Path) -> Result<usize> {
    let mut written = 0;
    for event in bank.events() {
        for source in &event.sources {
            write_source(dest, source)?;
            written += 1;
        }
    }
    for source in &bank.orphans {
        write_source(dest, source)?;
        written += 1;
    }
    Ok(written)
}

/// Destination for one source: its virtual path, which mirrors the event
/// hierarchy as directories, plus the extension recovered from the
/// embedded file name. Leading separators are stripped first; a virtual
/// path like `/boom` must not turn the join absolute and escape `dest`.
fn source_dest(dest: &Path, source: &BankSource) -> PathBuf {
    let name = format!("{}.{}", source.path, source.payload_extension());
    dest.join(name.trim_start_matches('/'))
}

fn write_source(dest: &Path, source: &BankSource) -> Result<()> {
    let out = source_dest(dest, source);
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&out, &source.payload).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn source(path: &str, file_name: &str) -> BankSource {
        BankSource {
            path: path.to_owned(),
            path_offset: 0,
            embedded_file_name: file_name.to_owned(),
            file_size: 0,
            sample_rate: 22050,
            payload_offset: 0,
            play_mode: 1,
            channel_count: 1,
            duration_ms: 0,
            volume_scalar: 1.0,
            unknown_fields: BTreeMap::new(),
            payload: Vec::new(),
        }
    }

    #[test]
    fn destination_mirrors_the_virtual_path() {
        let s = source("sfx/cave/boom", "x*512.binka");
        assert_eq!(
            source_dest(Path::new("out"), &s),
            Path::new("out/sfx/cave/boom.binka")
        );
    }

    #[test]
    fn leading_separator_stays_under_the_destination() {
        // Decodes fine: the directory component of "/boom" is "".
        let s = source("/boom", "x*512.binka");
        assert_eq!(
            source_dest(Path::new("out"), &s),
            Path::new("out/boom.binka")
        );
    }

    #[test]
    fn destination_uses_the_embedded_extension() {
        let s = source("music/theme", "theme*4096.wem");
        assert_eq!(
            source_dest(Path::new("dump"), &s),
            Path::new("dump/music/theme.wem")
        );
    }
}
