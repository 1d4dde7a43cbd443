use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketdesk::AppRoute;
use ticketdesk::viewmodels::dashboard::{DashboardState, greeting, load_dashboard};

use crate::auth::use_auth;
use crate::components::tickets::status_badge;
use crate::web::router::Link;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(DashboardState::default());

    let api = auth.api();
    spawn_local(async move {
        let result = load_dashboard(&api).await;
        state.try_update(|s| s.apply_load(result));
    });

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <div class="p-8 text-center">"Loading..."</div> }
        >
            <div class="max-w-5xl mx-auto space-y-6 py-6">
                <h1 class="text-3xl font-bold">{move || greeting(auth.user().as_ref())}</h1>

                <div class="grid gap-6 md:grid-cols-2">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">"Subscription"</h2>
                            <div>
                                <span class="badge badge-primary badge-lg">
                                    {move || state.with(|s| s.plan_badge())}
                                </span>
                            </div>
                            <p>{move || state.with(|s| s.status_label())}</p>
                            <div class="card-actions justify-end">
                                <Link to=AppRoute::Pricing class="btn btn-primary btn-sm">
                                    {move || state.with(|s| s.subscription_action())}
                                </Link>
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">"Recent Tickets"</h2>
                            <Show
                                when=move || state.with(|s| s.empty_message().is_none())
                                fallback=move || view! {
                                    <p class="text-base-content/60">
                                        {state.with(|s| s.empty_message().unwrap_or_default())}
                                    </p>
                                }
                            >
                                <ul class="space-y-2">
                                    <For
                                        each=move || state.with(|s| s.tickets.clone())
                                        key=|t| format!("{}:{}", t.id, t.status.as_str())
                                        let:ticket
                                    >
                                        <li class="flex justify-between items-center">
                                            <span>{ticket.title.clone()}</span>
                                            {status_badge(ticket.status)}
                                        </li>
                                    </For>
                                </ul>
                            </Show>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"Quick Actions"</h2>
                        <div class="card-actions">
                            <Link to=AppRoute::Tickets class="btn btn-outline">"Create Ticket"</Link>
                            <Link to=AppRoute::Pricing class="btn btn-outline">"Upgrade"</Link>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
