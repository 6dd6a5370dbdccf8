use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::UserStatsDashboard;
use crate::domain::a001_article::ui::list::ArticleList;
use crate::domain::a001_article::ui::publish::PublishPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

/// Shell behind the login guard
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="card">"Page not found"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("/") view=ProtectedLayout>
                    <Route path=path!("") view=UserStatsDashboard />
                    <Route path=path!("article") view=ArticleList />
                    <Route path=path!("publish") view=PublishPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
