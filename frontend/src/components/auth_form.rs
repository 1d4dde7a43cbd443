//! Login and registration pages
//!
//! One component renders both; `AuthFormKind` picks the endpoint, labels and
//! fallback message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketdesk::viewmodels::auth_form::{AuthFormKind, AuthFormState, submit};

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthFormPage kind=AuthFormKind::Login /> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthFormPage kind=AuthFormKind::Register /> }
}

#[component]
fn AuthFormPage(kind: AuthFormKind) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let form = RwSignal::new(AuthFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(|f| f.begin_submit()).unwrap_or(false) {
            return;
        }

        let entered = form.get_untracked();
        let session = auth.session();
        spawn_local(async move {
            let result = submit(kind, &entered, &session).await;
            if let Some(next) = form.try_update(|f| f.finish(kind, &result)).flatten() {
                router.navigate(next);
            }
        });
    };

    let submitting = move || form.with(|f| f.submitting);
    let (alternate_route, alternate_label) = kind.alternate();

    view! {
        <div class="hero min-h-[80vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">{kind.title()}</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || {
                            form.with(|f| f.error.clone())
                                .map(|msg| {
                                    view! {
                                        <div role="alert" class="alert alert-error text-sm py-2">
                                            <span>{msg}</span>
                                        </div>
                                    }
                                })
                        }}

                        <Show when=move || kind == AuthFormKind::Register>
                            <div class="form-control">
                                <label class="label" for="name">
                                    <span class="label-text">"Name"</span>
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    class="input input-bordered"
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.name.clone())
                                    required
                                />
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                class="input input-bordered"
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.email.clone())
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.password.clone())
                                required
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled=submitting>
                                {move || kind.submit_label(submitting())}
                            </button>
                        </div>

                        <p class="text-center text-sm mt-2">
                            <Link to=alternate_route class="link link-primary">{alternate_label}</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
