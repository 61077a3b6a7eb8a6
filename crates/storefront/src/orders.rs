//! Mock order history.
//!
//! The dashboard's orders tab shows a fixed list of past orders; nothing in
//! the app creates new ones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lilies_core::{Money, OrderStatus};

/// A past order, as displayed on the orders tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Display id, e.g. `ORD-001`.
    pub id: String,
    /// Date the order was placed.
    pub placed_on: NaiveDate,
    /// Number of items in the order.
    pub item_count: u32,
    /// Order total including delivery.
    pub total: Money,
    /// Current delivery status.
    pub status: OrderStatus,
}

/// The order history shown on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// History with the given orders, newest first.
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The mock history shown on the orders tab.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            order("ORD-001", 2024, 12, 20, 2, 5500, OrderStatus::Delivered),
            order("ORD-002", 2024, 12, 19, 3, 4800, OrderStatus::InTransit),
            order("ORD-003", 2024, 12, 18, 1, 2500, OrderStatus::Delivered),
        ])
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders currently in transit (the sidebar badge).
    #[must_use]
    pub fn in_transit_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::InTransit)
            .count()
    }
}

fn order(
    id: &str,
    year: i32,
    month: u32,
    day: u32,
    item_count: u32,
    total_naira: i64,
    status: OrderStatus,
) -> Order {
    Order {
        id: id.to_owned(),
        placed_on: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        item_count,
        total: Money::naira(total_naira),
        status,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_history() {
        let history = OrderHistory::sample();
        assert_eq!(history.orders().len(), 3);
        assert_eq!(history.orders().first().unwrap().id, "ORD-001");
        assert_eq!(
            history.orders().first().unwrap().total,
            Money::naira(5500)
        );
    }

    #[test]
    fn test_in_transit_count() {
        assert_eq!(OrderHistory::sample().in_transit_count(), 1);
        assert_eq!(OrderHistory::default().in_transit_count(), 0);
    }
}
