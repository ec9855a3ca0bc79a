//! Inline SVG icons (lucide outlines).

use yew::prelude::*;

fn icon(paths: Html) -> Html {
    html! {
        <svg
            class="icon"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { paths }
        </svg>
    }
}

pub fn copy_icon() -> Html {
    icon(html! {
        <>
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
        </>
    })
}

pub fn check_icon() -> Html {
    icon(html! { <path d="M20 6 9 17l-5-5" /> })
}

pub fn share_icon() -> Html {
    icon(html! {
        <>
            <circle cx="18" cy="5" r="3" />
            <circle cx="6" cy="12" r="3" />
            <circle cx="18" cy="19" r="3" />
            <line x1="8.59" x2="15.42" y1="13.51" y2="17.49" />
            <line x1="15.41" x2="8.59" y1="6.51" y2="10.49" />
        </>
    })
}

pub fn smartphone_icon() -> Html {
    icon(html! {
        <>
            <rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
            <path d="M12 18h.01" />
        </>
    })
}

pub fn calendar_icon() -> Html {
    icon(html! {
        <>
            <path d="M8 2v4" />
            <path d="M16 2v4" />
            <rect width="18" height="18" x="3" y="4" rx="2" />
            <path d="M3 10h18" />
        </>
    })
}
