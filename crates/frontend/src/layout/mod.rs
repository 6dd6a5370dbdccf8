pub mod header;
pub mod left;

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Signed-in application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +-----------+------------------------------+
/// |  Sidebar  |   Content (nested route)     |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Sidebar />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
