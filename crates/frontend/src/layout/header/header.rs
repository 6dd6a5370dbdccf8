use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::{api, use_session};

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let (user_name, set_user_name) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let token = session.token();
            match api::fetch_profile(token.as_deref()).await {
                Ok(profile) => {
                    set_user_name.try_set(profile.name);
                }
                Err(e) => {
                    log::warn!("Failed to load user name: {}", e);
                    session.handle_error(&e);
                }
            }
        });
    });

    let logout = move |_: leptos::ev::MouseEvent| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Log out?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        navigate("/login", Default::default());
        session.clear();
        notifications.info("Logged out");
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Blog Admin"</span>
            </div>
            <div class="header__actions">
                <span class="header__user">{move || user_name.get()}</span>
                <button class="button button--ghost" aria-label="Log out" on:click=logout>
                    {icon("logout")}
                    " Log out"
                </button>
            </div>
        </header>
    }
}
