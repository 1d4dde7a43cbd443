//! Router service
//!
//! Wraps the History API: every `window.history` call lives here. The
//! requested route is kept in a signal and every render goes through the
//! route guard, so a protected page never mounts before the session has
//! resolved.

use leptos::prelude::*;
use ticketdesk::guard::{self, GuardDecision, GuardState};
use ticketdesk::AppRoute;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for guard redirects so Back does not return to the blocked page
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// `https://host:port` of the running app
pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Leave the app, e.g. for a hosted checkout page
pub fn redirect_external(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("failed to redirect to {}: {:?}", url, e);
        }
    }
}

/// Router service.
///
/// The guard state is injected as a signal so the router does not depend on
/// the auth module.
#[derive(Clone, Copy)]
pub struct RouterService {
    /// Route requested by the URL, before the guard has looked at it
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Session state as the guard sees it (injected)
    guard_state: Signal<GuardState>,
}

impl RouterService {
    /// Create the service, starting from the route in the address bar.
    ///
    /// # Arguments
    /// * `guard_state` - session state signal, injected by the app root
    fn new(guard_state: Signal<GuardState>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            guard_state,
        }
    }

    /// What the outlet should show for the current route and session.
    ///
    /// Tracks both the route and the guard state.
    ///
    /// # Returns
    /// `Loading` while a gated route waits for the session, otherwise
    /// `Render` of the route the redirect chain settles on
    pub fn decision(&self) -> GuardDecision {
        guard::resolve(self.current_route.get(), self.guard_state.get())
    }

    /// User navigation: push a history entry, then let the guard settle it.
    ///
    /// Navigating to the route already shown is a no-op.
    ///
    /// # Arguments
    /// * `route` - requested route; the guard may still redirect it
    pub fn navigate(&self, route: AppRoute) {
        if self.current_route.get_untracked() == route {
            return;
        }
        log::debug!("navigate to {}", route);
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// Back/forward buttons go through the same guard
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // The listener lives as long as the page
        closure.forget();
    }

    /// Re-run the guard whenever the route or the session changes and
    /// rewrite the URL when it redirects.
    fn setup_guard_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let guard_state = self.guard_state;

        Effect::new(move |_| {
            let route = current_route.get();
            let state = guard_state.get();

            if let GuardDecision::Render(target) = guard::resolve(route, state) {
                if target != route {
                    log::info!("guard redirect {} -> {} ({:?})", route, target, state);
                    replace_history_state(target.to_path());
                    set_route.set(target);
                }
            }
        });
    }
}

/// Build the router, hook up popstate and the guard, and put it in context
fn provide_router(guard_state: Signal<GuardState>) -> RouterService {
    let router = RouterService::new(guard_state);

    router.init_popstate_listener();
    router.setup_guard_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Provides the router context; place it at the root of the app.
///
/// # Arguments
/// * `guard_state` - session state the guard decides on
#[component]
pub fn Router(guard_state: Signal<GuardState>, children: Children) -> impl IntoView {
    provide_router(guard_state);

    children()
}

/// Shown while the session is still being restored
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="ml-3">"Loading..."</span>
        </div>
    }
}

/// Renders the view for the guarded current route.
///
/// The decision is memoized, so the page is only rebuilt when the guard
/// picks a different view. Session updates that keep the same decision and
/// the URL rewrite after a redirect leave the mounted page alone.
///
/// # Arguments
/// * `matcher` - maps a route the guard allows to its page
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    let decision = Memo::new(move |_| router.decision());

    move || match decision.get() {
        GuardDecision::Render(route) => matcher(route),
        GuardDecision::Loading | GuardDecision::Redirect(_) => {
            view! { <LoadingPlaceholder /> }.into_any()
        }
    }
}

/// In-app anchor. Keeps a real `href` but navigates through the router.
///
/// # Arguments
/// * `to` - target route
/// * `class` - CSS classes for the `<a>`
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
