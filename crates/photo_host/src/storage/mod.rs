//! Key-value persistence contracts and adapters.

pub mod kv;
