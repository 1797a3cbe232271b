use crate::engine::MetricsEngine;
use crate::index::RecordIndex;
use crate::report::UNKNOWN;
use core_types::{InventoryLine, StockStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Narrows the inventory table. Every unset field matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    /// Case-insensitive substring of the product name or SKU.
    pub search: Option<String>,
    pub warehouse_id: Option<String>,
    pub status: Option<StockStatus>,
}

/// The summary cards above the inventory table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_lines: usize,
    pub total_value: Decimal,
    /// Lines classified `low` or `critical`.
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

/// An inventory line that needs restocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub line_id: String,
    pub product_name: String,
    pub warehouse_name: String,
    pub status: StockStatus,
    pub quantity_available: i64,
    pub reorder_point: u32,
    pub reorder_quantity: u32,
}

impl MetricsEngine {
    /// Lines matching `filter`, in input order.
    pub fn filter_inventory<'l>(
        &self,
        lines: &'l [InventoryLine],
        index: &RecordIndex<'_>,
        filter: &InventoryFilter,
    ) -> Vec<&'l InventoryLine> {
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        lines
            .iter()
            .filter(|line| {
                let product = index.product(&line.product_id);

                if let Some(needle) = &needle {
                    let hit = product.is_some_and(|p| {
                        p.name.to_lowercase().contains(needle.as_str())
                            || p.sku.to_lowercase().contains(needle.as_str())
                    });
                    if !hit {
                        return false;
                    }
                }

                if let Some(warehouse_id) = &filter.warehouse_id {
                    if &line.warehouse_id != warehouse_id {
                        return false;
                    }
                }

                match filter.status {
                    Some(status) => self.classify_stock_status(line, product) == status,
                    None => true,
                }
            })
            .collect()
    }

    pub fn inventory_summary<'l, I>(
        &self,
        lines: I,
        index: &RecordIndex<'_>,
    ) -> InventorySummary
    where
        I: IntoIterator<Item = &'l InventoryLine>,
    {
        let mut summary = InventorySummary::default();

        for line in lines {
            let product = index.product(&line.product_id);
            summary.total_lines += 1;

            let unit_price = product.map(|p| p.unit_price).unwrap_or(Decimal::ZERO);
            summary.total_value = summary
                .total_value
                .saturating_add(Decimal::from(line.quantity_on_hand).saturating_mul(unit_price));

            match self.classify_stock_status(line, product) {
                StockStatus::Low | StockStatus::Critical => summary.low_stock_count += 1,
                StockStatus::OutOfStock => summary.out_of_stock_count += 1,
                StockStatus::Normal => {}
            }
        }

        summary
    }

    /// Every line that needs reordering, most severe first, ties by line id.
    pub fn low_stock_alerts(
        &self,
        lines: &[InventoryLine],
        index: &RecordIndex<'_>,
    ) -> Vec<StockAlert> {
        let mut alerts: Vec<StockAlert> = lines
            .iter()
            .filter_map(|line| {
                let product = index.product(&line.product_id);
                let status = self.classify_stock_status(line, product);
                if !status.needs_reorder() {
                    return None;
                }

                Some(StockAlert {
                    line_id: line.id.clone(),
                    product_name: product.map_or_else(|| UNKNOWN.to_string(), |p| p.name.clone()),
                    warehouse_name: index
                        .warehouse(&line.warehouse_id)
                        .map_or_else(|| UNKNOWN.to_string(), |w| w.name.clone()),
                    status,
                    quantity_available: line.available(),
                    reorder_point: self.effective_reorder_point(product),
                    reorder_quantity: product.map(|p| p.reorder_quantity).unwrap_or(0),
                })
            })
            .collect();

        alerts.sort_by(|a, b| a.status.cmp(&b.status).then_with(|| a.line_id.cmp(&b.line_id)));

        if !alerts.is_empty() {
            tracing::info!(alerts = alerts.len(), "Inventory lines need reordering.");
        }
        alerts
    }
}
