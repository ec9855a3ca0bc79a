//! Toast notification surface.
//!
//! The toast queue is an injected reducer context, never an ambient
//! singleton: components that emit notices take the handle from
//! context and dispatch into it, and [`ToastHost`] is the only
//! renderer. Each toast dismisses itself after its duration (default
//! 3000 ms) or on click.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use share_core::{Notice, NoticeLevel};
use yew::prelude::*;

/// Fallback duration for notices that carry none.
const DEFAULT_TOAST_MS: u32 = 3000;

/// Handle components use to push and dismiss toasts.
pub type Toasts = UseReducerHandle<ToastQueue>;

/// A queued toast with its dismissal id.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u32,
    pub notice: Notice,
}

/// Queue of visible toasts, newest last.
#[derive(Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub items: Vec<ActiveToast>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Push(notice) => {
                let mut items = self.items.clone();
                items.push(ActiveToast {
                    id: self.next_id,
                    notice,
                });
                Rc::new(Self {
                    next_id: self.next_id + 1,
                    items,
                })
            }
            ToastAction::Dismiss(id) => Rc::new(Self {
                next_id: self.next_id,
                items: self
                    .items
                    .iter()
                    .filter(|toast| toast.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "toast info",
        NoticeLevel::Success => "toast success",
        NoticeLevel::Error => "toast error",
    }
}

/// Renders the toast queue from context.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_context::<Toasts>().expect("toast context not provided");

    html! {
        <div class="toast-stack">
            { for toasts.items.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: ActiveToast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toasts = use_context::<Toasts>().expect("toast context not provided");
    let id = props.toast.id;
    let notice = &props.toast.notice;

    {
        let toasts = toasts.clone();
        let duration = notice.duration_ms.unwrap_or(DEFAULT_TOAST_MS);
        use_effect_with(id, move |_| {
            let timer = Timeout::new(duration, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            });
            // Cancel the timer if the toast is dismissed early.
            move || drop(timer)
        });
    }

    let on_click = Callback::from(move |_| toasts.dispatch(ToastAction::Dismiss(id)));

    html! {
        <div class={level_class(notice.level)} onclick={on_click}>
            <div class="toast-title">{ &notice.title }</div>
            if let Some(description) = &notice.description {
                <div class="toast-description">{ description }</div>
            }
        </div>
    }
}
