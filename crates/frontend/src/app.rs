//! Main application component with routing and providers.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::notify::{ToastHost, ToastQueue, Toasts};
use crate::pages::HomePage;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component. The toast queue is provided as
/// context here; nothing below holds it as a global.
#[function_component(App)]
pub fn app() -> Html {
    let toasts = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<Toasts> context={toasts}>
            <BrowserRouter>
                <div class="app-container">
                    <Sidebar />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
                <ToastHost />
            </BrowserRouter>
        </ContextProvider<Toasts>>
    }
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Home} classes="nav-brand">
                {"Referral Hub"}
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Home}>
                            {"Referrals"}
                        </Link<Route>>
                    </li>
                    <li>
                        <a href="#">{"Rewards"}</a>
                    </li>
                    <li>
                        <a href="#">{"Tasks"}</a>
                    </li>
                </ul>
            </nav>
            <nav class="nav-secondary">
                <ul class="nav-links">
                    <li><a href="#">{"Get Help"}</a></li>
                    <li><a href="#">{"Search"}</a></li>
                </ul>
            </nav>
        </aside>
    }
}
