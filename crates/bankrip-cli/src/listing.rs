//! Machine-readable listing of a decoded bank, payload bytes excluded.

use anyhow::Result;
use msscmp::{BankEvent, BankModel, BankSource};
use serde::Serialize;

#[derive(Serialize)]
struct BankListing<'a> {
    name: &'a str,
    container_filename: &'a str,
    format_version: u32,
    memory_budget: u32,
    events: Vec<EventListing<'a>>,
    orphans: Vec<SourceListing<'a>>,
}

#[derive(Serialize)]
struct EventListing<'a> {
    name: &'a str,
    properties: &'a [String],
    sources: Vec<SourceListing<'a>>,
}

#[derive(Serialize)]
struct SourceListing<'a> {
    path: &'a str,
    file_name: &'a str,
    file_size: u32,
    sample_rate: u32,
    channel_count: u32,
    duration_ms: u32,
    play_mode: u32,
    volume: f32,
    payload_offset: u32,
}

impl<'a> From<&'a BankSource> for SourceListing<'a> {
    fn from(source: &'a BankSource) -> Self {
        Self {
            path: &source.path,
            file_name: &source.embedded_file_name,
            file_size: source.file_size,
            sample_rate: source.sample_rate,
            channel_count: source.channel_count,
            duration_ms: source.duration_ms,
            play_mode: source.play_mode,
            volume: source.volume_scalar,
            payload_offset: source.payload_offset,
        }
    }
}

impl<'a> From<&'a BankEvent> for EventListing<'a> {
    fn from(event: &'a BankEvent) -> Self {
        Self {
            name: &event.name,
            properties: &event.properties,
            sources: event.sources.iter().map(SourceListing::from).collect(),
        }
    }
}

/// Print the bank as pretty JSON on stdout.
pub fn print_json(bank: &BankModel) -> Result<()> {
    let listing = BankListing {
        name: &bank.header.name,
        container_filename: &bank.header.container_filename,
        format_version: bank.header.format_version,
        memory_budget: bank.header.memory_budget,
        events: bank.events().map(EventListing::from).collect(),
        orphans: bank.orphans.iter().map(SourceListing::from).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
