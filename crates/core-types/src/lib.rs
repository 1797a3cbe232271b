//! # Stockroom Core Types
//!
//! Layer 0 of the workspace: the plain record types handed over by the hosted
//! backend, plus the small enums every other crate speaks in. Nothing in here
//! performs I/O or knows how records were fetched.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{OrderPriority, OrderStatus, RecordStatus, StockLabel, StockStatus};
pub use error::CoreError;
pub use structs::{InventoryLine, Order, Product, Snapshot, Warehouse};
