//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Delivery order status.
///
/// An order starts out `pending` and normally walks toward `delivered`,
/// with `cancelled` as the other terminal state. No transition graph is
/// enforced: any status may overwrite any prior one. Callers wanting a
/// strict state machine must layer it on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Coarse delivery progress for tracking views, as a percentage.
    #[must_use]
    pub const fn progress_percent(self) -> u8 {
        match self {
            Self::Confirmed => 20,
            Self::Preparing => 40,
            Self::Delivering => 80,
            _ => 10,
        }
    }

    /// Whether the order still needs attention (shown in "active" views).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Confirmed | Self::Preparing | Self::Delivering
        )
    }

    /// Whether the order has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The wire representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "delivering" => Ok(Self::Delivering),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
