use leptos::prelude::*;
use ticketdesk::AppRoute;
use ticketdesk::viewmodels::navbar::{BRAND, after_logout, nav_links, user_label};

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        auth.logout();
        router.navigate(after_logout());
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">{BRAND}</Link>
            </div>
            <div class="flex-none gap-2">
                {move || {
                    nav_links(auth.is_authenticated())
                        .into_iter()
                        .map(|link| {
                            let class = if link.primary { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" };
                            view! { <Link to=link.route class=class>{link.label}</Link> }
                        })
                        .collect_view()
                }}
                {move || {
                    auth.user().map(|user| {
                        view! {
                            <span class="badge badge-outline">{user_label(&user)}</span>
                            <button class="btn btn-outline btn-error btn-sm" on:click=on_logout>
                                "Logout"
                            </button>
                        }
                    })
                }}
            </div>
        </div>
    }
}
