//! In-Memory Repository Implementation
//!
//! Holds the market snapshot for the whole session. The data is populated
//! once before any session state is built and is never mutated afterwards,
//! so no locking is needed.

use crate::domain::market::instrument::{Instrument, Snapshot, TickerEntry};
use crate::domain::repositories::InstrumentRepository;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct InMemoryInstrumentRepository {
    instruments: Vec<Instrument>,
    ticker_tape: Vec<TickerEntry>,
}

impl InMemoryInstrumentRepository {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            instruments: snapshot.instruments,
            ticker_tape: snapshot.ticker_tape,
        }
    }

    pub fn from_instruments(instruments: Vec<Instrument>) -> Self {
        Self::new(Snapshot::new(instruments, Vec::new()))
    }
}

impl InstrumentRepository for InMemoryInstrumentRepository {
    fn get_all(&self) -> &[Instrument] {
        &self.instruments
    }

    fn ticker_tape(&self) -> &[TickerEntry] {
        &self.ticker_tape
    }

    fn get_by_id(&self, id: &str) -> Option<&Instrument> {
        match self.instruments.iter().find(|etf| etf.id == id) {
            Some(etf) => Some(etf),
            None => {
                let fallback = self.instruments.first();
                if let Some(first) = fallback {
                    debug!("Unknown instrument '{}', falling back to {}", id, first.id);
                }
                fallback
            }
        }
    }

    fn search(&self, query: &str) -> Vec<&Instrument> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.instruments.iter().collect();
        }

        self.instruments
            .iter()
            .filter(|etf| {
                etf.id.to_lowercase().contains(&needle)
                    || etf.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
