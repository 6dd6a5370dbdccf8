use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use super::context::use_session;
use crate::shared::notifications::use_notifications;

/// Renders its children only with a token present, otherwise redirects to `/login`
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                notifications.error("Please log in first");
                view! {
                    <Redirect
                        path="/login"
                        options=NavigateOptions { replace: true, ..Default::default() }
                    />
                }
            }
        >
            {children()}
        </Show>
    }
}
