use contracts::system::profile::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_user_stats::state::ProfileState;
use crate::shared::components::bar_chart::BarChart;
use crate::system::auth::{api, use_session};

/// Home page: profile card and statistics chart
#[component]
pub fn UserStatsDashboard() -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(ProfileState::Loading);

    let load = move || {
        state.set(ProfileState::Loading);
        spawn_local(async move {
            let token = session.token();
            let result = api::fetch_profile(token.as_deref()).await;
            if let Err(e) = &result {
                log::error!("Failed to load profile: {}", e);
                session.handle_error(e);
            }
            state.try_set(ProfileState::from_result(result));
        });
    };

    Effect::new(move |_| load());

    let bars = Signal::derive(move || state.with(|s| s.bars()));

    view! {
        <div class="dashboard">
            {move || match state.get() {
                ProfileState::Loading => view! { <div class="card">"Loading profile..."</div> }.into_any(),
                ProfileState::Failed(message) => view! {
                    <div class="card error-message">
                        <p>{format!("Could not load the profile: {}", message)}</p>
                        <button class="button button--secondary" on:click=move |_| load()>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                ProfileState::Loaded(profile) => profile_card(profile).into_any(),
            }}
            <div class="card">
                <div class="card-header">"Statistics"</div>
                <BarChart bars=bars/>
            </div>
        </div>
    }
}

fn profile_card(profile: UserProfile) -> impl IntoView {
    let avatar = match profile.photo.clone().filter(|p| !p.is_empty()) {
        Some(src) => view! { <img class="avatar" src=src alt=""/> }.into_any(),
        None => {
            let initial = profile.name.chars().next().unwrap_or('?').to_string();
            view! { <div class="avatar avatar--placeholder">{initial}</div> }.into_any()
        }
    };
    let intro = profile
        .intro
        .clone()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or_else(|| "No introduction yet".to_string());

    view! {
        <div class="card profile-card">
            {avatar}
            <div class="profile-card__body">
                <h2>{profile.name.clone()}</h2>
                <p class="profile-card__intro">{intro}</p>
                <div class="stat-tiles">
                    {UserProfile::STAT_LABELS
                        .iter()
                        .zip(profile.stats())
                        .map(|(label, value)| {
                            view! {
                                <div class="stat-tile">
                                    <div class="stat-tile__value">{value}</div>
                                    <div class="stat-tile__label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
