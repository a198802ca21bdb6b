//! Photo filesystem adapters.

pub mod photo_fs;
