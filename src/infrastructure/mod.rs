pub mod repositories;
pub mod snapshot_loader;

pub use repositories::InMemoryInstrumentRepository;
pub use snapshot_loader::SnapshotLoader;
