//! TicketDesk frontend
//!
//! Context-driven layout:
//! - `web::router`: History-API router with the route guard injected
//! - `auth`: session context shared by every component
//! - `components`: pages and the navbar
//!
//! Page state and behavior live in `ticketdesk::viewmodels`; components only
//! render it and start the async work.

mod auth;
mod components {
    pub mod auth_form;
    pub mod dashboard;
    pub mod navbar;
    pub mod pricing;
    pub mod tickets;
}
pub(crate) mod web;

use leptos::prelude::*;
use ticketdesk::AppRoute;

use crate::auth::{AuthContext, init_auth};
use crate::components::auth_form::{LoginPage, RegisterPage};
use crate::components::dashboard::DashboardPage;
use crate::components::navbar::Navbar;
use crate::components::pricing::PricingPage;
use crate::components::tickets::TicketsPage;
use crate::web::router::{Link, Router, RouterOutlet};

/// Maps a route the guard has allowed to its page
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Pricing => view! { <PricingPage /> }.into_any(),
        AppRoute::Home | AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Tickets => view! { <TicketsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Home class="btn btn-primary mt-6">"Back to dashboard"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    init_auth(&auth_ctx);

    let guard_state = auth_ctx.guard_state_signal();

    view! {
        <Router guard_state=guard_state>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <main class="container mx-auto px-4">
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
