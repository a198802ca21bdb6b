//! Photo filesystem contracts, shared models, and in-memory adapters.

pub mod service;
pub mod types;
