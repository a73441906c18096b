//! SQLite backend for the folio persistence medium.
//!
//! Both documents are plain text rows in a single key-value table; the
//! connection lives behind a mutex so the medium can be shared between the
//! profile and item stores.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteMedium;
