//! Core types and stores for the folio portfolio content layer.
//!
//! Two documents live in a client-local key-value medium: a singleton
//! [`Profile`](profile::Profile) and an ordered collection of
//! [`Item`](item::Item)s. The medium is injected through the
//! [`KeyValueMedium`](medium::KeyValueMedium) trait; this crate ships an
//! in-memory implementation and knows nothing about SQLite or the CLI.

pub mod error;
pub mod filter;
pub mod item;
pub mod medium;
pub mod profile;
pub mod seed;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
