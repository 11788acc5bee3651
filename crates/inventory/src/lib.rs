//! Inventory store: item name → positive quantity, backed by a JSON file.
//!
//! Mutations and queries are deterministic in-memory operations on
//! [`Inventory`]; [`persistence`] adds the fail-soft JSON load and the
//! full-overwrite save.

pub mod persistence;
pub mod quantity;
pub mod report;
pub mod store;

pub use persistence::{DEFAULT_INVENTORY_PATH, LoadOutcome, PersistenceError};
pub use quantity::Quantity;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Removal};
