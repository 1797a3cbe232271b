use crate::enums::{OrderPriority, OrderStatus, RecordStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalogue entry. Prices are per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    pub unit_price: Decimal,
    /// Stock level at or below which restocking is indicated.
    pub reorder_point: u32,
    #[serde(default)]
    pub reorder_quantity: u32,
    #[serde(default)]
    pub status: RecordStatus,
}

/// A physical site. `capacity` and `current_utilization` are in square feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub capacity: u64,
    /// Not bounded by `capacity` in source data; over-capacity is a real signal.
    pub current_utilization: u64,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Warehouse {
    /// `"<address>, <city>, <state> <zip>"`, as printed on warehouse reports.
    pub fn formatted_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// Stock of one product held at one warehouse.
///
/// Quantities are signed so that out-of-contract data (a negative adjustment,
/// more reserved than on hand) flows through the metrics instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    pub id: String,
    pub product_id: String,
    pub warehouse_id: String,
    #[serde(default)]
    pub location: Option<String>,
    pub quantity_on_hand: i64,
    #[serde(default)]
    pub quantity_reserved: i64,
    /// Stored by the backend when present; see [`InventoryLine::available`].
    #[serde(default)]
    pub quantity_available: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryLine {
    /// The quantity free for new orders.
    ///
    /// Uses the stored value when the backend supplied one, otherwise
    /// `on_hand - reserved`, saturating at the `i64` bounds.
    pub fn available(&self) -> i64 {
        self.quantity_available
            .unwrap_or_else(|| self.quantity_on_hand.saturating_sub(self.quantity_reserved))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub required_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shipped_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: OrderPriority,
    pub total_amount: Decimal,
    #[serde(default)]
    pub warehouse_id: Option<String>,
}

/// Everything the backend client returned for one dashboard load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub warehouses: Vec<Warehouse>,
    pub inventory: Vec<InventoryLine>,
    pub orders: Vec<Order>,
}
