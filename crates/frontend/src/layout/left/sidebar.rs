use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

/// (path, label, icon)
const MENU_ITEMS: [(&str, &str, &str); 3] = [
    ("/", "Home", "home"),
    ("/article", "Articles", "article"),
    ("/publish", "Publish", "publish"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU_ITEMS
                .into_iter()
                .map(|(path, label, icon_name)| {
                    view! {
                        <A href=path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || location.pathname.get() == path
                            >
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
