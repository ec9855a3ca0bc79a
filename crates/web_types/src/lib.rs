//! Shared data types for the referral dashboard UI.
//!
//! This crate defines the presentational data structures rendered by
//! the frontend: referral rows, stat-card content, and the mock
//! datasets that stand in for a backend. There is no persistence and
//! no fetching; every dataset here is static. The types still derive
//! `Serialize`/`Deserialize` because they mirror the JSON wire shape
//! a real referral backend would serve; swapping the mocks for a
//! fetch must not change any shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a referral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    /// The referred user completed signup and the reward is earned.
    Completed,
    /// Signup started but the reward is not yet earned.
    Pending,
}

impl ReferralStatus {
    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ReferralStatus::Completed => "Completed",
            ReferralStatus::Pending => "Pending",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReferralStatus::Completed => "status-badge completed",
            ReferralStatus::Pending => "status-badge pending",
        }
    }
}

/// A single referral as shown in the recent-referrals table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: ReferralStatus,
    /// Reward in whole dollars.
    pub reward_usd: u32,
    /// ISO date (`YYYY-MM-DD`) the referral was made.
    pub date: String,
}

/// Content of one dashboard stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatHighlight {
    pub description: String,
    pub value: String,
    /// Period-over-period trend shown in the header badge, e.g. "+18.2%".
    pub trend: String,
    pub footer_main: String,
    pub footer_sub: String,
}

impl StatHighlight {
    pub fn new(
        description: &str,
        value: &str,
        trend: &str,
        footer_main: &str,
        footer_sub: &str,
    ) -> Self {
        Self {
            description: description.to_string(),
            value: value.to_string(),
            trend: trend.to_string(),
            footer_main: footer_main.to_string(),
            footer_sub: footer_sub.to_string(),
        }
    }
}

/// Render an ISO date as a short `Mon D` form ("Jan 15").
///
/// Unparsable input is returned unchanged so a bad mock row degrades
/// to its raw date instead of failing the render.
pub fn short_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Mock stat cards for the dashboard header grid.
pub fn dashboard_stats() -> Vec<StatHighlight> {
    vec![
        StatHighlight::new(
            "Total Earnings",
            "$12,450.00",
            "+18.2%",
            "Earnings up this month",
            "Revenue from all sources",
        ),
        StatHighlight::new(
            "Active Referrals",
            "156",
            "+12%",
            "Growing referral network",
            "Active referral partners",
        ),
        StatHighlight::new(
            "Commission Rate",
            "15.5%",
            "+2.1%",
            "Above average rate",
            "Industry benchmark: 12%",
        ),
        StatHighlight::new(
            "Total Purchases",
            "2,847",
            "+8.7%",
            "Purchase volume increasing",
            "Transactions this period",
        ),
    ]
}

/// Mock rows for the recent-referrals table.
pub fn mock_referrals() -> Vec<Referral> {
    fn referral(id: u32, name: &str, email: &str, status: ReferralStatus, date: &str) -> Referral {
        Referral {
            id,
            name: name.to_string(),
            email: email.to_string(),
            status,
            reward_usd: 20,
            date: date.to_string(),
        }
    }

    vec![
        referral(
            1,
            "John Doe",
            "john.doe@example.com",
            ReferralStatus::Completed,
            "2024-01-15",
        ),
        referral(
            2,
            "Jane Smith",
            "jane.smith@example.com",
            ReferralStatus::Pending,
            "2024-01-14",
        ),
        referral(
            3,
            "Mike Wilson",
            "mike.wilson@example.com",
            ReferralStatus::Completed,
            "2024-01-12",
        ),
        referral(
            4,
            "Sarah Johnson",
            "sarah.johnson@example.com",
            ReferralStatus::Completed,
            "2024-01-10",
        ),
        referral(
            5,
            "Alex Brown",
            "alex.brown@example.com",
            ReferralStatus::Pending,
            "2024-01-08",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date_formats_iso_dates() {
        assert_eq!(short_date("2024-01-15"), "Jan 15");
        assert_eq!(short_date("2024-12-03"), "Dec 3");
    }

    #[test]
    fn test_short_date_passes_through_garbage() {
        assert_eq!(short_date("not-a-date"), "not-a-date");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn test_status_badge_classes() {
        assert_eq!(
            ReferralStatus::Completed.badge_class(),
            "status-badge completed"
        );
        assert_eq!(ReferralStatus::Pending.badge_class(), "status-badge pending");
    }

    #[test]
    fn test_mock_referrals_have_valid_dates() {
        for referral in mock_referrals() {
            assert_ne!(short_date(&referral.date), referral.date);
        }
    }

    #[test]
    fn test_dashboard_has_four_stat_cards() {
        assert_eq!(dashboard_stats().len(), 4);
    }
}
