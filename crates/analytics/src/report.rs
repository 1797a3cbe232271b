use chrono::{DateTime, Utc};
use core_types::{RecordStatus, StockLabel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display string for an unresolved product or warehouse name.
pub const UNKNOWN: &str = "Unknown";
/// Display string for an unresolved SKU or a missing contact field.
pub const NOT_AVAILABLE: &str = "N/A";

/// The headline numbers on the dashboard.
///
/// This struct is the output of `MetricsEngine::aggregate_dashboard_stats` and is
/// rendered as-is by the stats cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    // I. Record counts
    pub total_products: usize,
    pub total_orders: usize,
    pub total_warehouses: usize,

    // II. Attention counts
    pub low_stock_items: usize,
    pub pending_orders: usize,

    // III. Money
    pub total_revenue: Decimal, // delivered orders only
    pub inventory_value: Decimal,

    // IV. Space
    pub utilization_rate: Decimal, // 0 when total capacity is 0
}

impl DashboardStats {
    /// Creates a new, zeroed-out snapshot. This is what an empty account shows.
    pub fn new() -> Self {
        Self {
            total_products: 0,
            total_orders: 0,
            total_warehouses: 0,
            low_stock_items: 0,
            pending_orders: 0,
            total_revenue: Decimal::ZERO,
            inventory_value: Decimal::ZERO,
            utilization_rate: Decimal::ZERO,
        }
    }
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One flattened line of the inventory report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReportRow {
    pub product_name: String,
    pub sku: String,
    pub warehouse_name: String,
    pub quantity_on_hand: i64,
    pub quantity_reserved: i64,
    pub quantity_available: i64,
    pub unit_price: Decimal,
    pub total_value: Decimal,
    pub reorder_point: u32,
    pub status: StockLabel,
    pub last_updated: Option<DateTime<Utc>>,
}

/// One warehouse on the warehouse report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseReportRow {
    pub name: String,
    pub address: String,
    pub manager_name: String,
    pub capacity: u64,
    pub current_utilization: u64,
    pub utilization_percentage: Decimal,
    pub total_items: i64,
    pub status: RecordStatus,
    pub phone: String,
    pub email: String,
}

/// The summary cards above the warehouse list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseSummary {
    pub total_warehouses: usize,
    pub total_capacity: u64,
    pub total_used: u64,
    /// Unweighted mean of each warehouse's utilization percentage.
    pub average_utilization: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Inventory,
    Sales,
    Warehouse,
}

impl ReportKind {
    fn id_prefix(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "inv",
            ReportKind::Sales => "sales",
            ReportKind::Warehouse => "warehouse",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "Inventory Report",
            ReportKind::Sales => "Sales Report",
            ReportKind::Warehouse => "Warehouse Report",
        }
    }
}

/// A generated report, ready for export.
///
/// The caller supplies `generated_at`; the id is derived from it so that two
/// reports built from the same inputs at the same instant are identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T> {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub generated_at: DateTime<Utc>,
    pub data: T,
}

impl<T> Report<T> {
    pub fn new(kind: ReportKind, data: T, generated_at: DateTime<Utc>) -> Self {
        Self {
            id: format!("{}_{}", kind.id_prefix(), generated_at.timestamp_millis()),
            name: kind.title().to_string(),
            kind,
            generated_at,
            data,
        }
    }
}
