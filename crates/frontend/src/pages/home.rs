//! Referral dashboard page.

use yew::prelude::*;

use crate::components::{RecentReferrals, ReferralLinkCard, StatCard};

/// Dashboard page: stat cards above the referral section.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let stats = web_types::dashboard_stats();

    html! {
        <div>
            <h1>{"Referral Program"}</h1>
            <p class="text-secondary" style="margin-bottom: 2rem;">
                {"Share your link, track referrals, earn rewards"}
            </p>

            <div class="stats-grid">
                { for stats.iter().map(|stat| html! {
                    <StatCard stat={stat.clone()} />
                })}
            </div>

            <section class="referral-section">
                <ReferralLinkCard />
                <RecentReferrals />
            </section>
        </div>
    }
}
