//! Statistics card component.

use web_types::StatHighlight;
use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: StatHighlight,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let stat = &props.stat;

    html! {
        <div class="card stat-card">
            <div class="stat-header">
                <div class="stat-description">{ &stat.description }</div>
                <span class="trend-badge">{ &stat.trend }</span>
            </div>
            <div class="stat-value">{ &stat.value }</div>
            <div class="stat-footer">
                <div class="stat-footer-main">{ &stat.footer_main }</div>
                <div class="stat-footer-sub">{ &stat.footer_sub }</div>
            </div>
        </div>
    }
}
