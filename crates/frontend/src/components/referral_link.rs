//! Referral link widget: read-only link field, copy action, share
//! action.
//!
//! Capabilities are detected once per mount (and again when the link
//! prop changes). The copy acknowledgement window and the in-flight
//! share guard are [`CopiedAck`] and [`ShareGuard`] values owned by
//! this instance; a repeat copy restarts the window, and a stale
//! reset timer is a no-op until the latest window has elapsed, so the
//! check mark never flickers.

use gloo_timers::callback::Timeout;
use share_core::{
    copy_text, detect, share_link, CapabilitySnapshot, CopiedAck, Notice, ShareGuard, ShareTarget,
    COPIED_FEEDBACK_MS,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::icons;
use crate::env::BrowserEnv;
use crate::notify::{ToastAction, Toasts};

fn default_referral_link() -> String {
    "https://app.example.com/ref/john-doe-abc123".to_string()
}

/// Properties for ReferralLinkCard component.
#[derive(Properties, PartialEq)]
pub struct ReferralLinkCardProps {
    /// The referral link to display and share.
    #[prop_or_else(default_referral_link)]
    pub referral_link: String,
}

/// Referral link card with copy and share actions.
#[function_component(ReferralLinkCard)]
pub fn referral_link_card(props: &ReferralLinkCardProps) -> Html {
    let toasts = use_context::<Toasts>().expect("toast context not provided");
    let caps = use_state(CapabilitySnapshot::default);
    let copied = use_state(|| false);
    let sharing = use_state(ShareGuard::default);
    let ack = use_mut_ref(CopiedAck::default);
    let copied_timer = use_mut_ref(|| None::<Timeout>);

    {
        let caps = caps.clone();
        use_effect_with(props.referral_link.clone(), move |link| {
            caps.set(detect(&BrowserEnv, link));
        });
    }

    let on_copy = {
        let link = props.referral_link.clone();
        let toasts = toasts.clone();
        let copied = copied.clone();
        let ack = ack.clone();
        let copied_timer = copied_timer.clone();

        Callback::from(move |_| {
            let link = link.clone();
            let toasts = toasts.clone();
            let copied = copied.clone();
            let ack = ack.clone();
            let copied_timer = copied_timer.clone();

            spawn_local(async move {
                let mut push = |notice: Notice| toasts.dispatch(ToastAction::Push(notice));
                let result = copy_text(&BrowserEnv, &link, &mut push).await;
                if result.success {
                    ack.borrow_mut().mark(BrowserEnv.now_ms());
                    copied.set(true);
                    let ack = ack.clone();
                    let copied = copied.clone();
                    // Replacing the previous timer cancels it; the ack
                    // deadline additionally ignores any stale fire, so
                    // a repeat copy extends the feedback window.
                    *copied_timer.borrow_mut() =
                        Some(Timeout::new(COPIED_FEEDBACK_MS, move || {
                            if !ack.borrow_mut().expire(BrowserEnv.now_ms()) {
                                copied.set(false);
                            }
                        }));
                }
            });
        })
    };

    let on_share = {
        let link = props.referral_link.clone();
        let toasts = toasts.clone();
        let caps = caps.clone();
        let sharing = sharing.clone();

        Callback::from(move |_| {
            // Single in-flight share per widget instance.
            let mut guard = *sharing;
            if !guard.try_begin() {
                return;
            }
            sharing.set(guard);

            let target = ShareTarget::for_link(link.clone());
            let toasts = toasts.clone();
            let caps_now = *caps;
            let sharing = sharing.clone();

            spawn_local(async move {
                let mut push = |notice: Notice| toasts.dispatch(ToastAction::Push(notice));
                let result = share_link(&BrowserEnv, &target, &caps_now, &mut push).await;
                if !result.success {
                    web_sys::console::error_1(
                        &format!("Share flow failed: {}", result.message).into(),
                    );
                }
                // Back to idle on every exit path, cancellation included.
                let mut guard = *sharing;
                guard.finish();
                sharing.set(guard);
            });
        })
    };

    html! {
        <div class="card referral-card">
            <div class="card-header">
                <h2 class="card-title">{"Your Referral Link"}</h2>
                <p class="card-description">
                    {"Share this link to earn $20 for each successful referral"}
                </p>
            </div>
            <div class="referral-link-row">
                <div class="link-input-wrap">
                    <input
                        class="link-input"
                        type="text"
                        value={props.referral_link.clone()}
                        readonly=true
                    />
                    // Copy affordance is hidden on mobile; the share
                    // button covers it there.
                    if !caps.is_mobile {
                        <button
                            class="icon-button copy-button"
                            onclick={on_copy}
                            title={if *copied { "Copied!" } else { "Copy link" }}
                            aria-label={if *copied { "Copied!" } else { "Copy referral link" }}
                        >
                            { if *copied { icons::check_icon() } else { icons::copy_icon() } }
                        </button>
                    }
                </div>
                <button
                    class="btn btn-primary share-button"
                    onclick={on_share}
                    disabled={sharing.is_sharing()}
                >
                    if sharing.is_sharing() {
                        <span class="spinner"></span>
                        {"Sharing..."}
                    } else {
                        { if caps.is_mobile { icons::smartphone_icon() } else { icons::share_icon() } }
                        {"Share"}
                    }
                </button>
            </div>
        </div>
    }
}
