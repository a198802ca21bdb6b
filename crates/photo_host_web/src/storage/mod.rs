//! Key-value store adapters.

pub mod local_kv;
pub mod native_kv;
