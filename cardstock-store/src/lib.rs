//! Persistence interface for checklist data.
//!
//! The application persists through a hosted backend; this crate defines
//! the narrow async interface the reconciliation core depends on, plus an
//! in-memory implementation that doubles as the reference semantics in
//! tests and local tooling.

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{CardQuery, CardStore};
