//! Status enums for various entities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Delivery status of a placed order.
///
/// The serialized labels match what the dashboard displays ("In Transit",
/// not `IN_TRANSIT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order accepted but not yet handed to a rider.
    #[default]
    Pending,
    /// Order is on its way to the customer.
    #[serde(rename = "In Transit")]
    InTransit,
    /// Order has reached the customer.
    Delivered,
}

impl OrderStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::InTransit.to_string(), "In Transit");
        assert_eq!(OrderStatus::Delivered.to_string(), "Delivered");
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"In Transit\"");
        let status: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
    }
}
