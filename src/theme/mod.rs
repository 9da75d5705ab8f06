//! Theme - palette and optional on-disk overrides

pub mod colors;
pub mod config;
