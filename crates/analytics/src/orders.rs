use crate::engine::MetricsEngine;
use core_types::{Order, OrderPriority, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Narrows the order list. Every unset field matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    /// Case-insensitive substring of the order number, customer name or email.
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,
}

/// The summary cards above the order list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_orders: usize,
    /// Sum over every listed order, whatever its status.
    pub total_value: Decimal,
    pub pending_count: usize,
    pub processing_count: usize,
}

impl MetricsEngine {
    /// Orders matching `filter`, in input order.
    pub fn filter_orders<'o>(&self, orders: &'o [Order], filter: &OrderFilter) -> Vec<&'o Order> {
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        orders
            .iter()
            .filter(|order| {
                if let Some(needle) = &needle {
                    let hit = order.order_number.to_lowercase().contains(needle.as_str())
                        || order.customer_name.to_lowercase().contains(needle.as_str())
                        || order
                            .customer_email
                            .as_deref()
                            .is_some_and(|e| e.to_lowercase().contains(needle.as_str()));
                    if !hit {
                        return false;
                    }
                }

                filter.status.is_none_or(|status| order.status == status)
                    && filter.priority.is_none_or(|priority| order.priority == priority)
            })
            .collect()
    }

    pub fn order_summary<'o, I>(&self, orders: I) -> OrderSummary
    where
        I: IntoIterator<Item = &'o Order>,
    {
        let mut summary = OrderSummary::default();

        for order in orders {
            summary.total_orders += 1;
            summary.total_value = summary.total_value.saturating_add(order.total_amount);

            match order.status {
                OrderStatus::Pending => summary.pending_count += 1,
                OrderStatus::Processing => summary.processing_count += 1,
                _ => {}
            }
        }

        summary
    }
}
