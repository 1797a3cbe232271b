use analytics::{
    DashboardStats, InventoryReportRow, InventorySummary, OrderSummary, RecordIndex, SalesReport,
    StockAlert, WarehouseReportRow, WarehouseSummary,
};
use core_types::Order;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn money(value: Decimal) -> String {
    format!("${:.2}", value.round_dp(2))
}

fn percent(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

fn right(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

pub fn dashboard(stats: &DashboardStats) -> Table {
    let mut table = new_table(["Metric", "Value"]);
    table.add_row(vec![Cell::new("Total Products"), right(stats.total_products)]);
    table.add_row(vec![Cell::new("Total Orders"), right(stats.total_orders)]);
    table.add_row(vec![Cell::new("Warehouses"), right(stats.total_warehouses)]);
    table.add_row(vec![Cell::new("Low Stock Items"), right(stats.low_stock_items)]);
    table.add_row(vec![Cell::new("Pending Orders"), right(stats.pending_orders)]);
    table.add_row(vec![Cell::new("Total Revenue"), right(money(stats.total_revenue))]);
    table.add_row(vec![Cell::new("Inventory Value"), right(money(stats.inventory_value))]);
    table.add_row(vec![Cell::new("Utilization"), right(percent(stats.utilization_rate))]);
    table
}

pub fn inventory(rows: &[InventoryReportRow]) -> Table {
    let mut table = new_table([
        "Product", "SKU", "Warehouse", "On Hand", "Reserved", "Available", "Unit Price",
        "Value", "Reorder At", "Status",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.product_name),
            Cell::new(&row.sku),
            Cell::new(&row.warehouse_name),
            right(row.quantity_on_hand),
            right(row.quantity_reserved),
            right(row.quantity_available),
            right(money(row.unit_price)),
            right(money(row.total_value)),
            right(row.reorder_point),
            Cell::new(row.status),
        ]);
    }
    table
}

pub fn inventory_summary(summary: &InventorySummary) -> Table {
    let mut table = new_table(["Lines", "Total Value", "Low Stock", "Out of Stock"]);
    table.add_row(vec![
        right(summary.total_lines),
        right(money(summary.total_value)),
        right(summary.low_stock_count),
        right(summary.out_of_stock_count),
    ]);
    table
}

pub fn warehouses(rows: &[WarehouseReportRow]) -> Table {
    let mut table = new_table([
        "Warehouse", "Address", "Manager", "Capacity", "Used", "Utilization", "Items",
        "Status", "Phone", "Email",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.address),
            Cell::new(&row.manager_name),
            right(row.capacity),
            right(row.current_utilization),
            right(percent(row.utilization_percentage)),
            right(row.total_items),
            Cell::new(row.status),
            Cell::new(&row.phone),
            Cell::new(&row.email),
        ]);
    }
    table
}

pub fn warehouse_summary(summary: &WarehouseSummary) -> Table {
    let mut table = new_table(["Warehouses", "Total Capacity", "Total Used", "Avg Utilization"]);
    table.add_row(vec![
        right(summary.total_warehouses),
        right(summary.total_capacity),
        right(summary.total_used),
        right(percent(summary.average_utilization)),
    ]);
    table
}

pub fn orders(orders: &[&Order], index: &RecordIndex<'_>) -> Table {
    let mut table = new_table([
        "Order", "Customer", "Email", "Date", "Status", "Priority", "Warehouse", "Total",
    ]);
    for order in orders {
        let warehouse = order
            .warehouse_id
            .as_deref()
            .and_then(|id| index.warehouse(id))
            .map_or("", |w| w.name.as_str());
        table.add_row(vec![
            Cell::new(&order.order_number),
            Cell::new(&order.customer_name),
            Cell::new(order.customer_email.as_deref().unwrap_or("")),
            Cell::new(order.order_date.format("%Y-%m-%d")),
            Cell::new(order.status),
            Cell::new(order.priority),
            Cell::new(warehouse),
            right(money(order.total_amount)),
        ]);
    }
    table
}

pub fn order_summary(summary: &OrderSummary) -> Table {
    let mut table = new_table(["Orders", "Total Value", "Pending", "Processing"]);
    table.add_row(vec![
        right(summary.total_orders),
        right(money(summary.total_value)),
        right(summary.pending_count),
        right(summary.processing_count),
    ]);
    table
}

pub fn sales(report: &SalesReport) -> Table {
    let mut table = new_table([
        "Order", "Customer", "Date", "Status", "Priority", "Warehouse", "Total",
    ]);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.order_number),
            Cell::new(&row.customer_name),
            Cell::new(row.order_date.format("%Y-%m-%d")),
            Cell::new(row.status),
            Cell::new(row.priority),
            Cell::new(&row.warehouse_name),
            right(money(row.total_amount)),
        ]);
    }
    table
}

pub fn sales_summary(report: &SalesReport) -> Table {
    let mut table = new_table(["Orders", "Revenue", "Average Order"]);
    table.add_row(vec![
        right(report.summary.total_orders),
        right(money(report.summary.total_revenue)),
        right(money(report.summary.average_order_value)),
    ]);
    table
}

pub fn alerts(alerts: &[StockAlert]) -> Table {
    let mut table = new_table([
        "Line", "Product", "Warehouse", "Status", "Available", "Reorder At", "Reorder Qty",
    ]);
    for alert in alerts {
        table.add_row(vec![
            Cell::new(&alert.line_id),
            Cell::new(&alert.product_name),
            Cell::new(&alert.warehouse_name),
            Cell::new(alert.status),
            right(alert.quantity_available),
            right(alert.reorder_point),
            right(alert.reorder_quantity),
        ]);
    }
    table
}
