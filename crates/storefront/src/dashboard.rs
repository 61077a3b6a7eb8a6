//! Dashboard presentation state.
//!
//! The pieces of dashboard behavior that are not the cart: the active tab
//! and the time-of-day greeting.

use chrono::{Local, Timelike};

/// Tabs on the dashboard sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    /// The menu grid.
    #[default]
    Dashboard,
    /// The logged-in user's profile.
    Profile,
    /// Past orders.
    Orders,
    /// The cart view.
    Cart,
}

impl DashboardTab {
    /// All tabs, in sidebar order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Profile, Self::Orders, Self::Cart];
}

/// Greeting for a given hour of the day (0-23).
#[must_use]
pub const fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Greeting for the current local time.
#[must_use]
pub fn greeting_now() -> &'static str {
    greeting(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_tabs() {
        assert_eq!(DashboardTab::default(), DashboardTab::Dashboard);
        assert_eq!(
            DashboardTab::ALL,
            [
                DashboardTab::Dashboard,
                DashboardTab::Profile,
                DashboardTab::Orders,
                DashboardTab::Cart,
            ]
        );
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(17), "Good Afternoon");
        assert_eq!(greeting(18), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }
}
