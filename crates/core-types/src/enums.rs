use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Orders that still need warehouse work: pending or processing.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }

    /// Revenue is recognised on delivery only.
    pub fn recognises_revenue(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(CoreError::UnknownVariant {
                kind: "order status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::Low => "low",
            OrderPriority::Normal => "normal",
            OrderPriority::High => "high",
            OrderPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderPriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(OrderPriority::Low),
            "normal" => Ok(OrderPriority::Normal),
            "high" => Ok(OrderPriority::High),
            "urgent" => Ok(OrderPriority::Urgent),
            _ => Err(CoreError::UnknownVariant {
                kind: "order priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Active/inactive flag shared by products and warehouses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-way stock classification used for alerting and inventory browsing.
///
/// Variants are declared from most to least severe, so the derived `Ord`
/// sorts the most urgent lines first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    Critical,
    Low,
    Normal,
}

impl StockStatus {
    /// True for every status below `Normal`.
    pub fn needs_reorder(&self) -> bool {
        !matches!(self, StockStatus::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Normal => "normal",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "out-of-stock" | "out_of_stock" => Ok(StockStatus::OutOfStock),
            "critical" => Ok(StockStatus::Critical),
            "low" => Ok(StockStatus::Low),
            "normal" => Ok(StockStatus::Normal),
            _ => Err(CoreError::UnknownVariant {
                kind: "stock status",
                value: s.to_string(),
            }),
        }
    }
}

/// Two-way label printed on inventory report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLabel {
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "In Stock")]
    InStock,
}

impl StockLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockLabel::LowStock => "Low Stock",
            StockLabel::InStock => "In Stock",
        }
    }
}

impl fmt::Display for StockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_orders_are_pending_or_processing() {
        assert!(OrderStatus::Pending.is_open());
        assert!(OrderStatus::Processing.is_open());
        assert!(!OrderStatus::Shipped.is_open());
        assert!(!OrderStatus::Delivered.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }

    #[test]
    fn only_delivered_recognises_revenue() {
        let recognised: Vec<_> = [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
        .into_iter()
        .filter(|s| s.recognises_revenue())
        .collect();
        assert_eq!(recognised, vec![OrderStatus::Delivered]);
    }

    #[test]
    fn stock_status_sorts_most_severe_first() {
        let mut statuses = vec![
            StockStatus::Normal,
            StockStatus::Low,
            StockStatus::OutOfStock,
            StockStatus::Critical,
        ];
        statuses.sort();
        assert_eq!(
            statuses,
            vec![
                StockStatus::OutOfStock,
                StockStatus::Critical,
                StockStatus::Low,
                StockStatus::Normal,
            ]
        );
    }

    #[test]
    fn stock_status_parses_cli_spellings() {
        assert_eq!("Out-Of-Stock".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
        assert_eq!("out_of_stock".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
        assert_eq!(" critical ".parse::<StockStatus>().unwrap(), StockStatus::Critical);
        assert!("overflowing".parse::<StockStatus>().is_err());
    }

    #[test]
    fn order_filters_parse_cli_spellings() {
        assert_eq!("Processing".parse::<OrderStatus>().unwrap(), OrderStatus::Processing);
        assert_eq!("canceled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert_eq!(" urgent".parse::<OrderPriority>().unwrap(), OrderPriority::Urgent);

        let err = "returned".parse::<OrderStatus>().unwrap_err();
        assert!(err.to_string().contains("returned"));
        assert!("asap".parse::<OrderPriority>().is_err());
    }

    #[test]
    fn labels_serialize_as_display_text() {
        assert_eq!(serde_json::to_string(&StockLabel::LowStock).unwrap(), "\"Low Stock\"");
        assert_eq!(serde_json::to_string(&StockStatus::OutOfStock).unwrap(), "\"out-of-stock\"");
    }
}
