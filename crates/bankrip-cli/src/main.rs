mod extract;
mod listing;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use msscmp::{BankEvent, BankHeader, BankSource, DecodeObserver, FORMAT_VERSION};

/// Inspect and extract Miles soundbank (.msscmp) containers.
#[derive(Parser, Debug)]
#[command(name = "bankrip", version)]
struct Args {
    /// Soundbank to read.
    bank: PathBuf,

    /// Report every decoded event and source on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print a JSON listing of the decoded bank on stdout, payload bytes
    /// excluded.
    #[arg(long)]
    json: bool,

    /// Extract every payload into this directory.
    #[arg(short = 'd', long = "dump", value_name = "DIR")]
    dump: Option<PathBuf>,
}

/// Stderr progress lines for `--verbose`.
struct VerboseObserver;

impl DecodeObserver for VerboseObserver {
    fn header_decoded(&mut self, header: &BankHeader) {
        eprintln!(
            "[bankrip] bank {:?}, format version {}, {:?}-endian, runtime budget {} bytes",
            header.name, header.format_version, header.byte_order, header.memory_budget
        );
    }

    fn event_decoded(&mut self, event: &BankEvent) {
        eprintln!(
            "[bankrip] event {} ({} properties)",
            event.name,
            event.properties.len()
        );
    }

    fn source_decoded(&mut self, source: &BankSource) {
        eprintln!(
            "[bankrip] source {} ({} bytes at {:#x}, {} Hz)",
            source.path, source.file_size, source.payload_offset, source.sample_rate
        );
    }

    fn source_orphaned(&mut self, source: &BankSource) {
        eprintln!("[bankrip] warn: source {} matches no event", source.path);
    }
}

fn is_soundbank_path(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("msscmp")
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !is_soundbank_path(&args.bank) {
        bail!("not a soundbank (.msscmp) file: {}", args.bank.display());
    }

    let data = fs::read(&args.bank).with_context(|| format!("reading {}", args.bank.display()))?;

    let bank = if args.verbose {
        msscmp::decode_with_observer(&data, &mut VerboseObserver)
    } else {
        msscmp::decode(&data)
    }
    .with_context(|| format!("decoding {}", args.bank.display()))?;

    if bank.header.format_version != FORMAT_VERSION {
        eprintln!(
            "[bankrip] warn: format version {} (expected {}), field layout may have drifted",
            bank.header.format_version, FORMAT_VERSION
        );
    }

    if args.json {
        listing::print_json(&bank)?;
    } else {
        eprintln!(
            "[bankrip] {}: {} events, {} sources ({} orphaned)",
            bank.header.name,
            bank.event_count(),
            bank.source_count(),
            bank.orphans.len()
        );
    }

    if let Some(dir) = &args.dump {
        let written = extract::extract_bank(&bank, dir)?;
        eprintln!("[bankrip] wrote {written} files under {}", dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_msscmp_paths_pass_the_gate() {
        assert!(is_soundbank_path(Path::new("GameAudio.msscmp")));
        assert!(is_soundbank_path(Path::new("dir/with.dots/GameAudio.msscmp")));
        assert!(!is_soundbank_path(Path::new("GameAudio.msscmp.bak")));
        assert!(!is_soundbank_path(Path::new("GameAudio.wav")));
        assert!(!is_soundbank_path(Path::new("msscmp")));
    }
}
