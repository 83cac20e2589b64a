// Snapshot data model
pub mod instrument;

// Growth projection
pub mod projection;

// Moving-average signal
pub mod signal;
