use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketdesk::viewmodels::tickets::{
    LOADING_TICKETS, MutationOutcome, NO_TICKETS, TicketAction, TicketsState, create_ticket,
    fetch_tickets, perform,
};
use ticketdesk_shared::{Ticket, TicketPriority, TicketStatus};

use crate::auth::{AuthContext, use_auth};
use crate::web::alert;

pub fn status_badge(status: TicketStatus) -> impl IntoView {
    let class = match status {
        TicketStatus::Open => "badge badge-info",
        TicketStatus::InProgress => "badge badge-warning",
        TicketStatus::Resolved => "badge badge-success",
        TicketStatus::Closed => "badge badge-ghost",
    };
    view! { <span class=class>{status.label()}</span> }
}

fn priority_badge(priority: TicketPriority) -> impl IntoView {
    let class = match priority {
        TicketPriority::Low => "badge badge-outline",
        TicketPriority::Medium => "badge badge-outline badge-info",
        TicketPriority::High => "badge badge-outline badge-warning",
        TicketPriority::Urgent => "badge badge-outline badge-error",
    };
    view! { <span class=class>{priority.label()}</span> }
}

/// Reload the list into `state`
async fn refresh(auth: AuthContext, state: RwSignal<TicketsState>) {
    let result = fetch_tickets(&auth.api()).await;
    state.try_update(|s| s.apply_list(result));
}

async fn handle_outcome(auth: AuthContext, state: RwSignal<TicketsState>, outcome: Option<MutationOutcome>) {
    match outcome {
        Some(MutationOutcome::Refresh) => refresh(auth, state).await,
        Some(MutationOutcome::Alert(message)) => alert(message),
        None => {}
    }
}

#[component]
pub fn TicketsPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(TicketsState::default());

    spawn_local(refresh(auth, state));

    view! {
        <div class="max-w-5xl mx-auto space-y-6 py-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">"Support Tickets"</h1>
                <button class="btn btn-primary" on:click=move |_| state.update(|s| s.toggle_form())>
                    {move || state.with(|s| s.toggle_label())}
                </button>
            </div>

            <Show when=move || state.with(|s| s.form_open)>
                <TicketForm state=state />
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="p-8 text-center">{LOADING_TICKETS}</div> }
            >
                <Show
                    when=move || state.with(|s| !s.tickets.is_empty())
                    fallback=|| view! { <p class="text-center text-base-content/60">{NO_TICKETS}</p> }
                >
                    <div class="grid gap-4">
                        <For
                            each=move || state.with(|s| s.tickets.clone())
                            key=|t| format!("{}:{}", t.id, t.status.as_str())
                            let:ticket
                        >
                            <TicketCard ticket=ticket state=state />
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn TicketForm(state: RwSignal<TicketsState>) -> impl IntoView {
    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(req) = state.try_update(|s| s.begin_create()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = create_ticket(&auth.api(), &req).await;
            let outcome = state.try_update(|s| s.finish_create(&result));
            handle_outcome(auth, state, outcome).await;
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <div class="form-control">
                    <label class="label" for="title">
                        <span class="label-text">"Title"</span>
                    </label>
                    <input
                        id="title"
                        type="text"
                        class="input input-bordered"
                        on:input=move |ev| state.update(|s| s.draft.title = event_target_value(&ev))
                        prop:value=move || state.with(|s| s.draft.title.clone())
                        required
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="description">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        id="description"
                        class="textarea textarea-bordered"
                        rows="4"
                        on:input=move |ev| state.update(|s| s.draft.description = event_target_value(&ev))
                        prop:value=move || state.with(|s| s.draft.description.clone())
                        required
                    ></textarea>
                </div>

                <div class="form-control">
                    <label class="label" for="priority">
                        <span class="label-text">"Priority"</span>
                    </label>
                    <select
                        id="priority"
                        class="select select-bordered"
                        on:change=move |ev| {
                            if let Some(priority) = TicketPriority::parse(&event_target_value(&ev)) {
                                state.update(|s| s.draft.priority = priority);
                            }
                        }
                        prop:value=move || state.with(|s| s.draft.priority.as_str())
                    >
                        {TicketPriority::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-control mt-4">
                    <button
                        class="btn btn-primary"
                        type="submit"
                        disabled=move || state.with(|s| s.submitting)
                    >
                        {move || state.with(|s| s.submit_label())}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn TicketCard(ticket: Ticket, state: RwSignal<TicketsState>) -> impl IntoView {
    let auth = use_auth();
    let id = ticket.id.clone();

    let run = move |action: TicketAction| {
        if !state.try_update(|s| s.begin_action(&action)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = perform(&auth.api(), &action).await;
            let outcome = state.try_update(|s| s.finish_action(&action, &result));
            handle_outcome(auth, state, outcome).await;
        });
    };

    let status_id = id.clone();
    let on_status = move |ev: leptos::ev::Event| {
        if let Some(status) = TicketStatus::parse(&event_target_value(&ev)) {
            run(TicketAction::SetStatus(status_id.clone(), status));
        }
    };
    let delete_id = id.clone();
    let on_delete = move |_| run(TicketAction::Delete(delete_id.clone()));
    let busy = move || state.with(|s| s.is_busy(&id));

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-start gap-2">
                    <h2 class="card-title">{ticket.title.clone()}</h2>
                    {priority_badge(ticket.priority)}
                </div>
                <p>{ticket.description.clone()}</p>
                <div class="flex flex-wrap justify-between items-center gap-2">
                    <div class="flex items-center gap-2">
                        {status_badge(ticket.status)}
                        <span class="text-sm text-base-content/60">{ticket.created_date()}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <select
                            class="select select-bordered select-sm"
                            disabled=busy.clone()
                            on:change=on_status
                            prop:value=ticket.status.as_str()
                        >
                            {TicketStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                        <button class="btn btn-error btn-outline btn-sm" disabled=busy on:click=on_delete>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
