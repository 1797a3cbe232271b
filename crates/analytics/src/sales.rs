use crate::engine::MetricsEngine;
use crate::error::AnalyticsError;
use crate::index::RecordIndex;
use crate::report::UNKNOWN;
use chrono::{DateTime, Utc};
use core_types::{Order, OrderPriority, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which orders go into a sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportParams {
    /// Inclusive.
    pub start: DateTime<Utc>,
    /// Inclusive.
    pub end: DateTime<Utc>,
    pub warehouse_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRow {
    pub order_number: String,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub warehouse_name: String,
    pub total_amount: Decimal,
    pub shipped_date: Option<DateTime<Utc>>,
    pub required_date: Option<DateTime<Utc>>,
}

/// Totals over the listed orders, whatever their status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub parameters: SalesReportParams,
    pub summary: SalesSummary,
    pub rows: Vec<SalesReportRow>,
}

impl MetricsEngine {
    /// Lists the orders placed in the requested window, newest first.
    ///
    /// Returns `AnalyticsError::InvalidDateRange` when `start` is after `end`.
    pub fn sales_report(
        &self,
        orders: &[Order],
        index: &RecordIndex<'_>,
        params: SalesReportParams,
    ) -> Result<SalesReport, AnalyticsError> {
        if params.start > params.end {
            return Err(AnalyticsError::InvalidDateRange {
                start: params.start,
                end: params.end,
            });
        }

        let mut selected: Vec<&Order> = orders
            .iter()
            .filter(|o| o.order_date >= params.start && o.order_date <= params.end)
            .filter(|o| match &params.warehouse_id {
                Some(id) => o.warehouse_id.as_ref() == Some(id),
                None => true,
            })
            .collect();
        selected.sort_by(|a, b| b.order_date.cmp(&a.order_date));

        let rows: Vec<SalesReportRow> = selected
            .into_iter()
            .map(|order| SalesReportRow {
                order_number: order.order_number.clone(),
                customer_name: order.customer_name.clone(),
                order_date: order.order_date,
                status: order.status,
                priority: order.priority,
                warehouse_name: order
                    .warehouse_id
                    .as_deref()
                    .and_then(|id| index.warehouse(id))
                    .map_or_else(|| UNKNOWN.to_string(), |w| w.name.clone()),
                total_amount: order.total_amount,
                shipped_date: order.shipped_date,
                required_date: order.required_date,
            })
            .collect();

        let summary = summarise(&rows);
        tracing::info!(
            orders = summary.total_orders,
            revenue = %summary.total_revenue,
            "Sales report built."
        );

        Ok(SalesReport {
            parameters: params,
            summary,
            rows,
        })
    }
}

fn summarise(rows: &[SalesReportRow]) -> SalesSummary {
    let total_revenue = rows
        .iter()
        .fold(Decimal::ZERO, |sum, row| sum.saturating_add(row.total_amount));

    let average_order_value = if rows.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(rows.len())
    };

    SalesSummary {
        total_orders: rows.len(),
        total_revenue,
        average_order_value,
    }
}
