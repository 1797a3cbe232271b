use crate::error::AnalyticsError;
use crate::index::RecordIndex;
use crate::report::{
    DashboardStats, InventoryReportRow, NOT_AVAILABLE, UNKNOWN, WarehouseReportRow,
    WarehouseSummary,
};
use core_types::{InventoryLine, Order, Product, StockLabel, StockStatus, Warehouse};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Reorder point assumed for an inventory line whose product cannot be resolved.
pub const DEFAULT_REORDER_POINT: u32 = 10;

/// The thresholds behind the four-way stock classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockThresholds {
    /// Used in place of the product's reorder point when the product is unresolved.
    pub fallback_reorder_point: u32,
    /// On-hand at or below `reorder_point * critical_ratio` is critical.
    pub critical_ratio: Decimal,
}

impl StockThresholds {
    pub fn new(
        fallback_reorder_point: u32,
        critical_ratio: Decimal,
    ) -> Result<Self, AnalyticsError> {
        if critical_ratio < Decimal::ZERO || critical_ratio > Decimal::ONE {
            return Err(AnalyticsError::InvalidThreshold(format!(
                "critical_ratio must be between 0 and 1, got {critical_ratio}"
            )));
        }
        Ok(Self {
            fallback_reorder_point,
            critical_ratio,
        })
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            fallback_reorder_point: DEFAULT_REORDER_POINT,
            critical_ratio: dec!(0.5),
        }
    }
}

/// `current / capacity * 100`, or exactly zero when `capacity` is zero.
///
/// Not clamped: a warehouse over capacity reports more than 100.
pub fn utilization_pct(current: u64, capacity: u64) -> Decimal {
    if capacity == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(current) * dec!(100) / Decimal::from(capacity)
}

/// A stateless calculator for deriving display values from warehouse records.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    thresholds: StockThresholds,
}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: StockThresholds) -> Self {
        Self { thresholds }
    }

    /// The reorder point that applies to a line, given its (possibly unresolved) product.
    pub fn effective_reorder_point(&self, product: Option<&Product>) -> u32 {
        product
            .map(|p| p.reorder_point)
            .unwrap_or(self.thresholds.fallback_reorder_point)
    }

    /// Classifies one inventory line.
    ///
    /// Checks run from most to least severe: nothing available, on-hand at or
    /// below the critical fraction of the reorder point, on-hand at or below the
    /// reorder point.
    pub fn classify_stock_status(
        &self,
        line: &InventoryLine,
        product: Option<&Product>,
    ) -> StockStatus {
        if line.available() <= 0 {
            return StockStatus::OutOfStock;
        }

        let reorder_point = Decimal::from(self.effective_reorder_point(product));
        let on_hand = Decimal::from(line.quantity_on_hand);

        if on_hand <= reorder_point * self.thresholds.critical_ratio {
            StockStatus::Critical
        } else if on_hand <= reorder_point {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Percentage of a warehouse's capacity in use. See [`utilization_pct`].
    pub fn compute_utilization(&self, warehouse: &Warehouse) -> Decimal {
        utilization_pct(warehouse.current_utilization, warehouse.capacity)
    }

    /// The main entry point for the dashboard.
    ///
    /// # Arguments
    ///
    /// * `products` - Every product in the account. Also used to resolve inventory lines.
    /// * `orders` - Every order in the account.
    /// * `warehouses` - Every warehouse in the account.
    /// * `lines` - Every inventory line in the account.
    ///
    /// # Returns
    ///
    /// A `DashboardStats` snapshot. Counts and sums are commutative, so the result
    /// does not depend on the order of any input.
    pub fn aggregate_dashboard_stats(
        &self,
        products: &[Product],
        orders: &[Order],
        warehouses: &[Warehouse],
        lines: &[InventoryLine],
    ) -> DashboardStats {
        let index = RecordIndex::build(products, warehouses);
        let mut stats = DashboardStats::new();

        stats.total_products = products.len();
        stats.total_orders = orders.len();
        stats.total_warehouses = warehouses.len();

        self.calculate_stock(lines, &index, &mut stats);
        self.calculate_orders(orders, &mut stats);
        self.calculate_space(warehouses, &mut stats);

        tracing::debug!(
            products = stats.total_products,
            orders = stats.total_orders,
            warehouses = stats.total_warehouses,
            lines = lines.len(),
            "Dashboard stats aggregated."
        );

        stats
    }

    /// Low-stock count and inventory valuation.
    fn calculate_stock(
        &self,
        lines: &[InventoryLine],
        index: &RecordIndex<'_>,
        stats: &mut DashboardStats,
    ) {
        for line in lines {
            let product = index.product(&line.product_id);
            if product.is_none() {
                tracing::debug!(
                    line_id = %line.id,
                    product_id = %line.product_id,
                    "Unresolved product; using defaults."
                );
            }

            if self.classify_stock_status(line, product).needs_reorder() {
                stats.low_stock_items += 1;
            }

            let unit_price = product.map(|p| p.unit_price).unwrap_or(Decimal::ZERO);
            let value = Decimal::from(line.quantity_on_hand).saturating_mul(unit_price);
            stats.inventory_value = stats.inventory_value.saturating_add(value);
        }
    }

    /// Pending count and recognised revenue.
    fn calculate_orders(&self, orders: &[Order], stats: &mut DashboardStats) {
        for order in orders {
            if order.status.is_open() {
                stats.pending_orders += 1;
            }
            if order.status.recognises_revenue() {
                stats.total_revenue = stats.total_revenue.saturating_add(order.total_amount);
            }
        }
    }

    /// Fleet-wide utilization: total used over total capacity.
    fn calculate_space(&self, warehouses: &[Warehouse], stats: &mut DashboardStats) {
        let (used, capacity) = fleet_totals(warehouses);
        stats.utilization_rate = utilization_pct(used, capacity);
    }

    /// Flattens one inventory line for the inventory report.
    ///
    /// Unresolved relations print as `"Unknown"` (names) and `"N/A"` (SKU) and
    /// contribute a zero price and a zero reorder point.
    pub fn build_inventory_report_row(
        &self,
        line: &InventoryLine,
        product: Option<&Product>,
        warehouse: Option<&Warehouse>,
    ) -> InventoryReportRow {
        let unit_price = product.map(|p| p.unit_price).unwrap_or(Decimal::ZERO);
        let reorder_point = product.map(|p| p.reorder_point).unwrap_or(0);
        let quantity_available = line.available();

        let status = if quantity_available <= i64::from(reorder_point) {
            StockLabel::LowStock
        } else {
            StockLabel::InStock
        };

        InventoryReportRow {
            product_name: product.map_or_else(|| UNKNOWN.to_string(), |p| p.name.clone()),
            sku: product.map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.sku.clone()),
            warehouse_name: warehouse.map_or_else(|| UNKNOWN.to_string(), |w| w.name.clone()),
            quantity_on_hand: line.quantity_on_hand,
            quantity_reserved: line.quantity_reserved,
            quantity_available,
            unit_price,
            total_value: Decimal::from(line.quantity_on_hand).saturating_mul(unit_price),
            reorder_point,
            status,
            last_updated: line.updated_at,
        }
    }

    /// Summarises one warehouse and the inventory lines stored in it.
    pub fn build_warehouse_report_row<'a, I>(
        &self,
        warehouse: &Warehouse,
        lines: I,
    ) -> WarehouseReportRow
    where
        I: IntoIterator<Item = &'a InventoryLine>,
    {
        let total_items = lines
            .into_iter()
            .fold(0i64, |sum, line| sum.saturating_add(line.quantity_on_hand));

        WarehouseReportRow {
            name: warehouse.name.clone(),
            address: warehouse.formatted_address(),
            manager_name: or_not_available(warehouse.manager_name.as_deref()),
            capacity: warehouse.capacity,
            current_utilization: warehouse.current_utilization,
            utilization_percentage: self.compute_utilization(warehouse),
            total_items,
            status: warehouse.status,
            phone: or_not_available(warehouse.phone.as_deref()),
            email: or_not_available(warehouse.email.as_deref()),
        }
    }

    /// Inventory report rows for every line, in input order.
    pub fn inventory_report(
        &self,
        lines: &[InventoryLine],
        index: &RecordIndex<'_>,
    ) -> Vec<InventoryReportRow> {
        let rows: Vec<_> = lines
            .iter()
            .map(|line| {
                self.build_inventory_report_row(
                    line,
                    index.product(&line.product_id),
                    index.warehouse(&line.warehouse_id),
                )
            })
            .collect();

        tracing::info!(rows = rows.len(), "Inventory report built.");
        rows
    }

    /// Warehouse report rows sorted by warehouse name.
    ///
    /// Lines are grouped by warehouse id in a single pass; lines pointing at an
    /// unknown warehouse are simply not counted anywhere.
    pub fn warehouse_report(
        &self,
        warehouses: &[Warehouse],
        lines: &[InventoryLine],
    ) -> Vec<WarehouseReportRow> {
        let mut by_warehouse: HashMap<&str, Vec<&InventoryLine>> = HashMap::new();
        for line in lines {
            by_warehouse.entry(line.warehouse_id.as_str()).or_default().push(line);
        }

        let mut sorted: Vec<&Warehouse> = warehouses.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let rows: Vec<_> = sorted
            .into_iter()
            .map(|warehouse| {
                let own = by_warehouse
                    .get(warehouse.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                self.build_warehouse_report_row(warehouse, own.iter().copied())
            })
            .collect();

        tracing::info!(rows = rows.len(), "Warehouse report built.");
        rows
    }

    /// The summary cards above the warehouse list.
    ///
    /// `average_utilization` is the unweighted mean of each warehouse's own
    /// percentage, so a small full site counts as much as a large empty one.
    /// The dashboard's `utilization_rate` is the capacity-weighted figure.
    pub fn warehouse_summary(&self, warehouses: &[Warehouse]) -> WarehouseSummary {
        let (total_used, total_capacity) = fleet_totals(warehouses);

        let average_utilization = if warehouses.is_empty() {
            Decimal::ZERO
        } else {
            let sum = warehouses
                .iter()
                .map(|w| self.compute_utilization(w))
                .fold(Decimal::ZERO, Decimal::saturating_add);
            sum / Decimal::from(warehouses.len())
        };

        WarehouseSummary {
            total_warehouses: warehouses.len(),
            total_capacity,
            total_used,
            average_utilization,
        }
    }
}

/// `(Σ current_utilization, Σ capacity)`, saturating at `u64::MAX`.
fn fleet_totals(warehouses: &[Warehouse]) -> (u64, u64) {
    warehouses.iter().fold((0u64, 0u64), |(used, capacity), w| {
        (
            used.saturating_add(w.current_utilization),
            capacity.saturating_add(w.capacity),
        )
    })
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_types::{OrderPriority, OrderStatus, RecordStatus};

    pub(crate) fn product(id: &str, reorder_point: u32, unit_price: Decimal) -> Product {
        Product {
            id: id.to_string(),
            sku: format!("SKU-{id}"),
            name: format!("Product {id}"),
            description: None,
            category_id: None,
            unit_price,
            reorder_point,
            reorder_quantity: reorder_point * 2,
            status: RecordStatus::Active,
        }
    }

    pub(crate) fn warehouse(id: &str, name: &str, capacity: u64, current: u64) -> Warehouse {
        Warehouse {
            id: id.to_string(),
            name: name.to_string(),
            address: "123 Industrial Blvd".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip_code: "60601".to_string(),
            manager_name: None,
            phone: None,
            email: None,
            capacity,
            current_utilization: current,
            status: RecordStatus::Active,
        }
    }

    pub(crate) fn line(
        id: &str,
        product_id: &str,
        warehouse_id: &str,
        on_hand: i64,
        reserved: i64,
    ) -> InventoryLine {
        InventoryLine {
            id: id.to_string(),
            product_id: product_id.to_string(),
            warehouse_id: warehouse_id.to_string(),
            location: None,
            quantity_on_hand: on_hand,
            quantity_reserved: reserved,
            quantity_available: None,
            updated_at: None,
        }
    }

    pub(crate) fn order(id: &str, status: OrderStatus, total: Decimal) -> Order {
        Order {
            id: id.to_string(),
            order_number: format!("ORD-{id}"),
            customer_name: "Acme Corp".to_string(),
            customer_email: None,
            order_date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            required_date: None,
            shipped_date: None,
            status,
            priority: OrderPriority::Normal,
            total_amount: total,
            warehouse_id: None,
        }
    }

    /// Classifies a line of product `p1` held in `w1`.
    fn status_of(
        engine: &MetricsEngine,
        on_hand: i64,
        reserved: i64,
        product: Option<&Product>,
    ) -> StockStatus {
        engine.classify_stock_status(&line("i", "p1", "w1", on_hand, reserved), product)
    }

    #[test]
    fn nothing_available_is_out_of_stock() {
        let engine = MetricsEngine::new();
        let p = product("p1", 50, dec!(10));

        assert_eq!(status_of(&engine, 5, 5, Some(&p)), StockStatus::OutOfStock);
        assert_eq!(status_of(&engine, 0, 0, Some(&p)), StockStatus::OutOfStock);
        assert_eq!(status_of(&engine, 500, 600, Some(&p)), StockStatus::OutOfStock);
    }

    #[test]
    fn stored_available_takes_precedence() {
        let engine = MetricsEngine::new();
        let p = product("p1", 50, dec!(10));
        let mut l = line("i1", "p1", "w1", 100, 0);
        l.quantity_available = Some(0);

        assert_eq!(engine.classify_stock_status(&l, Some(&p)), StockStatus::OutOfStock);
    }

    #[test]
    fn extreme_quantities_do_not_panic() {
        let engine = MetricsEngine::new();
        let mut stored = line("i1", "gone", "w1", i64::MIN, 1);
        stored.quantity_available = Some(0);
        let derived = line("i2", "gone", "w1", i64::MIN, 1);

        assert_eq!(engine.classify_stock_status(&stored, None), StockStatus::OutOfStock);
        assert_eq!(engine.classify_stock_status(&derived, None), StockStatus::OutOfStock);

        let row = engine.build_inventory_report_row(&derived, None, None);
        assert_eq!(row.quantity_available, i64::MIN);
        assert_eq!(row.status, StockLabel::LowStock);
    }

    #[test]
    fn half_the_reorder_point_is_critical() {
        let engine = MetricsEngine::new();
        let p = product("p1", 50, dec!(10));

        assert_eq!(status_of(&engine, 15, 5, Some(&p)), StockStatus::Critical);
        assert_eq!(status_of(&engine, 25, 0, Some(&p)), StockStatus::Critical);
        assert_eq!(status_of(&engine, 26, 0, Some(&p)), StockStatus::Low);
    }

    #[test]
    fn below_reorder_point_is_low() {
        let engine = MetricsEngine::new();
        let p = product("p1", 50, dec!(10));

        assert_eq!(status_of(&engine, 30, 5, Some(&p)), StockStatus::Low);
        assert_eq!(status_of(&engine, 50, 0, Some(&p)), StockStatus::Low);
        assert_eq!(status_of(&engine, 51, 0, Some(&p)), StockStatus::Normal);
    }

    #[test]
    fn unresolved_product_uses_fallback_reorder_point() {
        let engine = MetricsEngine::new();

        assert_eq!(status_of(&engine, 5, 0, None), StockStatus::Critical);
        assert_eq!(status_of(&engine, 10, 0, None), StockStatus::Low);
        assert_eq!(status_of(&engine, 11, 0, None), StockStatus::Normal);
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let thresholds = StockThresholds::new(40, dec!(0.25)).unwrap();
        let engine = MetricsEngine::with_thresholds(thresholds);

        assert_eq!(status_of(&engine, 10, 0, None), StockStatus::Critical);
        assert_eq!(status_of(&engine, 11, 0, None), StockStatus::Low);
    }

    #[test]
    fn critical_ratio_out_of_range_is_rejected() {
        assert!(matches!(
            StockThresholds::new(10, dec!(1.5)),
            Err(AnalyticsError::InvalidThreshold(_))
        ));
        assert!(StockThresholds::new(10, dec!(-0.1)).is_err());
        assert!(StockThresholds::new(10, Decimal::ONE).is_ok());
    }

    #[test]
    fn utilization_is_a_plain_percentage() {
        let engine = MetricsEngine::new();
        let main = warehouse("w1", "Main", 10_000, 7_800);

        assert_eq!(engine.compute_utilization(&main), dec!(78));
    }

    #[test]
    fn zero_capacity_utilization_is_zero() {
        let engine = MetricsEngine::new();
        let empty = warehouse("w1", "Empty", 0, 0);
        let odd = warehouse("w2", "Odd", 0, 500);

        assert_eq!(engine.compute_utilization(&empty), Decimal::ZERO);
        assert_eq!(engine.compute_utilization(&odd), Decimal::ZERO);
    }

    #[test]
    fn over_capacity_is_not_clamped() {
        let engine = MetricsEngine::new();
        let full = warehouse("w1", "Full", 1_000, 1_250);

        assert_eq!(engine.compute_utilization(&full), dec!(125));
    }

    #[test]
    fn revenue_counts_delivered_orders_only() {
        let engine = MetricsEngine::new();
        let orders = vec![
            order("o1", OrderStatus::Pending, dec!(100)),
            order("o2", OrderStatus::Delivered, dec!(200)),
            order("o3", OrderStatus::Shipped, dec!(50)),
        ];

        let stats = engine.aggregate_dashboard_stats(&[], &orders, &[], &[]);
        assert_eq!(stats.total_revenue, dec!(200));
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.total_orders, 3);
    }

    #[test]
    fn fleet_utilization_is_total_over_total() {
        let engine = MetricsEngine::new();
        let warehouses = vec![
            warehouse("w1", "A", 10_000, 7_800),
            warehouse("w2", "B", 8_000, 5_600),
            warehouse("w3", "C", 12_000, 9_600),
        ];

        let stats = engine.aggregate_dashboard_stats(&[], &[], &warehouses, &[]);
        let expected = Decimal::from(23_000) * dec!(100) / Decimal::from(30_000);
        assert_eq!(stats.utilization_rate, expected);
        assert_eq!(stats.utilization_rate.round_dp(1), dec!(76.7));
        assert_eq!(stats.total_warehouses, 3);
    }

    #[test]
    fn fleet_without_capacity_has_zero_utilization() {
        let engine = MetricsEngine::new();
        let warehouses = vec![warehouse("w1", "A", 0, 0)];

        let with_empty = engine.aggregate_dashboard_stats(&[], &[], &warehouses, &[]);
        let with_none = engine.aggregate_dashboard_stats(&[], &[], &[], &[]);
        assert_eq!(with_empty.utilization_rate, Decimal::ZERO);
        assert_eq!(with_none.utilization_rate, Decimal::ZERO);
    }

    #[test]
    fn inventory_value_and_low_stock_count() {
        let engine = MetricsEngine::new();
        let products = vec![product("p1", 50, dec!(99.99)), product("p2", 5, dec!(2.50))];
        let lines = vec![
            line("i1", "p1", "w1", 15, 5),   // critical, 15 * 99.99
            line("i2", "p2", "w1", 100, 0),  // normal, 100 * 2.50
            line("i3", "gone", "w1", 40, 0), // unresolved, normal against fallback 10, valued at 0
            line("i4", "p2", "w1", 3, 3),    // out of stock
        ];

        let stats = engine.aggregate_dashboard_stats(&products, &[], &[], &lines);
        assert_eq!(stats.inventory_value, dec!(1499.85) + dec!(250) + dec!(7.50));
        assert_eq!(stats.low_stock_items, 2);
        assert_eq!(stats.total_products, 2);
    }

    #[test]
    fn dashboard_ignores_input_order() {
        let engine = MetricsEngine::new();
        let mut products = vec![product("p1", 50, dec!(99.99)), product("p2", 5, dec!(2.50))];
        let mut orders = vec![
            order("o1", OrderStatus::Delivered, dec!(10.10)),
            order("o2", OrderStatus::Processing, dec!(5)),
            order("o3", OrderStatus::Delivered, dec!(0.05)),
        ];
        let mut warehouses = vec![warehouse("w1", "A", 100, 30), warehouse("w2", "B", 300, 50)];
        let mut lines = vec![
            line("i1", "p1", "w1", 15, 5),
            line("i2", "p2", "w2", 100, 0),
            line("i3", "p2", "w2", 1, 0),
        ];

        let forward = engine.aggregate_dashboard_stats(&products, &orders, &warehouses, &lines);

        products.reverse();
        orders.reverse();
        warehouses.reverse();
        lines.reverse();
        let backward = engine.aggregate_dashboard_stats(&products, &orders, &warehouses, &lines);

        assert_eq!(forward, backward);
    }

    #[test]
    fn inventory_row_for_missing_product() {
        let engine = MetricsEngine::new();
        let w = warehouse("w1", "Main", 10_000, 7_800);
        let orphan = line("i1", "gone", "w1", 15, 5);

        let row = engine.build_inventory_report_row(&orphan, None, Some(&w));
        assert_eq!(row.sku, "N/A");
        assert_eq!(row.product_name, "Unknown");
        assert_eq!(row.warehouse_name, "Main");
        assert_eq!(row.total_value, Decimal::ZERO);
        assert_eq!(row.reorder_point, 0);
        assert_eq!(row.status, StockLabel::InStock);
    }

    #[test]
    fn inventory_row_uses_two_valued_label() {
        let engine = MetricsEngine::new();
        let p = product("p1", 50, dec!(99.99));
        let short = line("i1", "p1", "w1", 15, 5);
        let stocked = line("i2", "p1", "w1", 80, 10);

        let low = engine.build_inventory_report_row(&short, Some(&p), None);
        assert_eq!(low.status, StockLabel::LowStock);
        assert_eq!(low.warehouse_name, "Unknown");
        assert_eq!(low.quantity_available, 10);
        assert_eq!(low.total_value, dec!(1499.85));

        let fine = engine.build_inventory_report_row(&stocked, Some(&p), None);
        assert_eq!(fine.status, StockLabel::InStock);
    }

    #[test]
    fn warehouse_row_sums_items_and_defaults_contacts() {
        let engine = MetricsEngine::new();
        let mut w = warehouse("w1", "Main", 10_000, 7_800);
        w.manager_name = Some("Dana Reyes".to_string());
        w.email = Some(String::new());
        let lines = vec![line("i1", "p1", "w1", 15, 5), line("i2", "p2", "w1", 100, 0)];

        let row = engine.build_warehouse_report_row(&w, &lines);
        assert_eq!(row.address, "123 Industrial Blvd, Chicago, IL 60601");
        assert_eq!(row.manager_name, "Dana Reyes");
        assert_eq!(row.phone, "N/A");
        assert_eq!(row.email, "N/A");
        assert_eq!(row.utilization_percentage, dec!(78));
        assert_eq!(row.total_items, 115);
    }

    #[test]
    fn warehouse_report_groups_lines_and_sorts_by_name() {
        let engine = MetricsEngine::new();
        let warehouses = vec![warehouse("w1", "West", 100, 10), warehouse("w2", "East", 0, 0)];
        let lines = vec![
            line("i1", "p1", "w1", 5, 0),
            line("i2", "p1", "w2", 7, 0),
            line("i3", "p2", "w1", 3, 0),
            line("i4", "p2", "nowhere", 99, 0),
        ];

        let rows = engine.warehouse_report(&warehouses, &lines);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "East");
        assert_eq!(rows[0].total_items, 7);
        assert_eq!(rows[0].utilization_percentage, Decimal::ZERO);
        assert_eq!(rows[1].name, "West");
        assert_eq!(rows[1].total_items, 8);
    }

    #[test]
    fn warehouse_summary_averages_each_site() {
        let engine = MetricsEngine::new();
        let warehouses = vec![
            warehouse("w1", "A", 10_000, 7_800),
            warehouse("w2", "B", 8_000, 5_600),
            warehouse("w3", "C", 12_000, 9_600),
        ];

        let summary = engine.warehouse_summary(&warehouses);
        assert_eq!(summary.total_warehouses, 3);
        assert_eq!(summary.total_capacity, 30_000);
        assert_eq!(summary.total_used, 23_000);
        // (78 + 70 + 80) / 3
        assert_eq!(summary.average_utilization, dec!(76));
    }

    #[test]
    fn warehouse_summary_of_nothing_is_zeroed() {
        let summary = MetricsEngine::new().warehouse_summary(&[]);

        assert_eq!(summary, WarehouseSummary::default());
    }

    #[test]
    fn inventory_report_keeps_input_order() {
        let engine = MetricsEngine::new();
        let products = vec![product("p1", 50, dec!(1))];
        let warehouses = vec![warehouse("w1", "Main", 100, 10)];
        let lines = vec![line("i1", "p1", "w1", 1, 0), line("i2", "gone", "w9", 2, 0)];
        let index = RecordIndex::build(&products, &warehouses);

        let rows = engine.inventory_report(&lines, &index);
        assert_eq!(rows[0].product_name, "Product p1");
        assert_eq!(rows[0].warehouse_name, "Main");
        assert_eq!(rows[1].product_name, "Unknown");
        assert_eq!(rows[1].warehouse_name, "Unknown");
    }
}
