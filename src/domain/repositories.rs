//! Repository abstraction over the instrument snapshot.
//!
//! The snapshot is loaded once and never mutated, so the trait only offers
//! reads. Implementations are shared as `Arc<dyn InstrumentRepository>` and
//! injected into every component that needs market data.

use crate::domain::market::instrument::{Instrument, TickerEntry};

pub trait InstrumentRepository: Send + Sync {
    /// All instruments in load order
    fn get_all(&self) -> &[Instrument];

    /// Ticker-tape entries in load order
    fn ticker_tape(&self) -> &[TickerEntry];

    /// Look up an instrument by id.
    ///
    /// Unknown ids resolve to the first instrument. `None` only when the
    /// repository holds no instruments at all.
    fn get_by_id(&self, id: &str) -> Option<&Instrument>;

    /// Instruments whose id or category contains `query`, ignoring case
    fn search(&self, query: &str) -> Vec<&Instrument>;

    fn first(&self) -> Option<&Instrument> {
        self.get_all().first()
    }

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}
