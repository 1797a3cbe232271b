//! # Stockroom Metrics Engine
//!
//! This crate turns already-fetched warehouse records into the derived values the
//! dashboard and report screens display: stock status per inventory line, warehouse
//! utilization, aggregate dashboard statistics and flattened report rows.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of the backend
//!   client that produced the records. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` holds nothing but its thresholds.
//!   Every call depends only on its arguments, so it can be shared across threads.
//! - **Total Functions:** Unresolved relations (a product or warehouse id with no
//!   matching record) are absorbed by default substitution, never reported as errors.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The calculator and all of its operations.
//! - `RecordIndex`: id→record maps built once per snapshot for O(1) joins.
//! - `DashboardStats`, `InventoryReportRow`, `WarehouseReportRow`, `SalesReport`:
//!   the output rows.
//! - `InventoryFilter`, `OrderFilter`: the list-page filters, with their summaries.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod index;
pub mod inventory;
pub mod orders;
pub mod report;
pub mod sales;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{DEFAULT_REORDER_POINT, MetricsEngine, StockThresholds, utilization_pct};
pub use error::AnalyticsError;
pub use index::RecordIndex;
pub use inventory::{InventoryFilter, InventorySummary, StockAlert};
pub use orders::{OrderFilter, OrderSummary};
pub use report::{
    DashboardStats, InventoryReportRow, Report, ReportKind, WarehouseReportRow, WarehouseSummary,
};
pub use sales::{SalesReport, SalesReportParams, SalesReportRow, SalesSummary};
