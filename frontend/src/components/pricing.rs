use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketdesk::viewmodels::pricing::{
    PlanOutcome, PricingState, format_price, plan_action, run_plan_action,
};
use ticketdesk_shared::Plan;

use crate::auth::use_auth;
use crate::web::router::{current_origin, redirect_external, use_router};

#[component]
pub fn PricingPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(PricingState::default());

    let api = auth.api();
    spawn_local(async move {
        let result = api.plans().await;
        state.try_update(|s| s.apply_plans(result));
    });

    view! {
        <div class="max-w-6xl mx-auto space-y-6 py-6">
            <h1 class="text-3xl font-bold text-center">"Choose your plan"</h1>

            {move || {
                state.with(|s| s.error.clone())
                    .map(|msg| {
                        view! {
                            <div role="alert" class="alert alert-error">
                                <span>{msg}</span>
                            </div>
                        }
                    })
            }}

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="p-8 text-center">"Loading..."</div> }
            >
                <div class="grid gap-6 md:grid-cols-3">
                    <For
                        each=move || state.with(|s| s.plans.clone())
                        key=|p| p.id.clone()
                        let:plan
                    >
                        <PlanCard plan=plan state=state />
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan, state: RwSignal<PricingState>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let card_plan = plan.clone();
    let action = move || plan_action(&card_plan, auth.user().as_ref(), auth.is_authenticated());

    let click_plan = plan.clone();
    let click_action = action.clone();
    let on_click = move |_| {
        let action = click_action();
        if !state.try_update(|s| s.begin_action(&click_plan)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let session = auth.session();
            let result = run_plan_action(&session, &action, &current_origin()).await;
            match state.try_update(|s| s.finish_action(&action, result)) {
                Some(PlanOutcome::Redirect(url)) => redirect_external(&url),
                Some(PlanOutcome::Navigate(route)) => router.navigate(route),
                Some(PlanOutcome::Stay) | None => {}
            }
        });
    };

    let label_plan = plan.clone();
    let label_action = action.clone();
    let disabled = move || !action().is_enabled() || state.with(|s| s.pending.is_some());

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{plan.name.clone()}</h2>
                <p class="text-3xl font-bold">{format_price(&plan)}</p>
                <ul class="list-disc list-inside space-y-1">
                    {plan.features
                        .iter()
                        .map(|f| view! { <li>{f.clone()}</li> })
                        .collect_view()}
                </ul>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" disabled=disabled on:click=on_click>
                        {move || {
                            if state.with(|s| s.is_pending(&label_plan)) {
                                "Processing...".to_string()
                            } else {
                                label_action().label(&label_plan)
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
