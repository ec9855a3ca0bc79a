//! Reusable UI components.

mod icons;
mod referral_link;
mod referrals_table;
mod stat_card;

pub use referral_link::ReferralLinkCard;
pub use referrals_table::RecentReferrals;
pub use stat_card::StatCard;
