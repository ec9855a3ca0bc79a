//! Recent referrals table component.

use web_types::{short_date, Referral};
use yew::prelude::*;

use crate::components::icons;

/// Properties for RecentReferrals component.
#[derive(Properties, PartialEq)]
pub struct RecentReferralsProps {
    /// Referral rows to display.
    #[prop_or_else(web_types::mock_referrals)]
    pub referrals: Vec<Referral>,
}

/// Recent referrals card with progress table.
#[function_component(RecentReferrals)]
pub fn recent_referrals(props: &RecentReferralsProps) -> Html {
    html! {
        <div class="card referral-card">
            <div class="card-header">
                <h2 class="card-title">{"Recent Referrals"}</h2>
                <p class="card-description">{"Track your referral progress and earnings"}</p>
            </div>
            if props.referrals.is_empty() {
                <p class="empty-note">{"No referrals yet. Share your link to get started!"}</p>
            } else {
                <table class="referrals-table">
                    <thead>
                        <tr>
                            <th>{"Referral"}</th>
                            <th>{"Status"}</th>
                            <th>{"Date"}</th>
                            <th class="numeric">{"Reward"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.referrals.iter().map(referral_row) }
                    </tbody>
                </table>
            }
        </div>
    }
}

fn referral_row(referral: &Referral) -> Html {
    html! {
        <tr key={referral.id}>
            <td>
                <div class="referral-name">{ &referral.name }</div>
                <div class="referral-email">{ &referral.email }</div>
            </td>
            <td>
                <span class={referral.status.badge_class()}>
                    { referral.status.label() }
                </span>
            </td>
            <td>
                <span class="referral-date">
                    { icons::calendar_icon() }
                    { short_date(&referral.date) }
                </span>
            </td>
            <td class="numeric">{ format!("${}", referral.reward_usd) }</td>
        </tr>
    }
}
