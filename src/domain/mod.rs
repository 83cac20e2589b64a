// Market data domain
pub mod market;

// Repository traits
pub mod repositories;

// Domain-specific error types
pub mod errors;
