use std::collections::HashMap;

use crate::event::BankEvent;
use crate::header::BankHeader;
use crate::source::BankSource;
use crate::tables::TableLayout;

/// A fully decoded soundbank.
///
/// Owns everything it exposes: the header, the locator words, every event
/// with its linked sources, and the sources no event claimed. Nothing in
/// here borrows from the input buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BankModel {
    /// Decoded fixed header.
    pub header: BankHeader,
    /// Table locator, reserved words included.
    pub layout: TableLayout,
    /// Sources whose path directory matched no event name. Not an error;
    /// shipped banks contain a handful, and extraction still wants their
    /// payloads.
    pub orphans: Vec<BankSource>,
    events: Vec<BankEvent>,
    index: HashMap<String, usize>,
}

impl BankModel {
    pub(crate) fn new(header: BankHeader, layout: TableLayout) -> Self {
        Self {
            header,
            layout,
            orphans: Vec::new(),
            events: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an event under its name. A duplicate name replaces the
    /// earlier event but keeps its table position; shipped banks contain
    /// the odd duplicate and players resolve it last-write-wins.
    pub(crate) fn insert_event(&mut self, event: BankEvent) {
        match self.index.get(&event.name) {
            Some(&i) => self.events[i] = event,
            None => {
                self.index.insert(event.name.clone(), self.events.len());
                self.events.push(event);
            }
        }
    }

    pub(crate) fn event_mut(&mut self, name: &str) -> Option<&mut BankEvent> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.events[i]),
            None => None,
        }
    }

    /// Look up an event by its exact name.
    pub fn event(&self, name: &str) -> Option<&BankEvent> {
        self.index.get(name).map(|&i| &self.events[i])
    }

    /// Events in event-table order.
    pub fn events(&self) -> impl Iterator<Item = &BankEvent> {
        self.events.iter()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Total decoded sources, linked and orphaned.
    pub fn source_count(&self) -> usize {
        self.events.iter().map(|e| e.sources.len()).sum::<usize>() + self.orphans.len()
    }
}
