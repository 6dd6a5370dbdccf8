pub mod state;

use contracts::domain::a001_article::{ArticleListItem, ArticleStatus};
use contracts::domain::common::{AggregateId, ArticleId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use self::state::{create_state, ArticleFilter};
use super::publish::RemoteOp;
use crate::domain::a001_article::api;
use crate::domain::a002_channel::use_channels;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{filter_range, format_pubdate};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::use_session;

const ALL_STATUSES: &str = "all";

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn ArticleList() -> impl IntoView {
    let state = create_state();
    let session = use_session();
    let notifications = use_notifications();
    let channels = use_channels();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Filter form inputs, applied on "Filter"
    let status_value = RwSignal::new(ALL_STATUSES.to_string());
    let channel_value = RwSignal::new(String::new());
    let begin_value = RwSignal::new(String::new());
    let end_value = RwSignal::new(String::new());

    let load_articles = move || {
        let query = state.with_untracked(|s| s.to_query());
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            let token = session.token();
            match api::fetch_articles(&query, token.as_deref()).await {
                Ok(page) => {
                    state.try_update(|s| s.receive(page));
                }
                Err(e) => {
                    log::error!("Failed to load articles: {}", e);
                    session.handle_error(&e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load_articles());

    let apply_filter = move |_: leptos::ev::MouseEvent| {
        let (begin_pubdate, end_pubdate) =
            match filter_range(&begin_value.get_untracked(), &end_value.get_untracked()) {
                Ok(range) => range,
                Err(e) => {
                    notifications.error(e);
                    return;
                }
            };
        let filter = ArticleFilter {
            status: status_value
                .get_untracked()
                .parse::<u8>()
                .ok()
                .and_then(|v| ArticleStatus::try_from(v).ok()),
            channel_id: channel_value.get_untracked().parse().ok(),
            begin_pubdate,
            end_pubdate,
        };
        state.update(|s| s.apply_filter(filter));
        load_articles();
    };

    let reset_filter = move |_: leptos::ev::MouseEvent| {
        status_value.set(ALL_STATUSES.to_string());
        channel_value.set(String::new());
        begin_value.set(String::new());
        end_value.set(String::new());
        state.update(|s| s.apply_filter(ArticleFilter::default()));
        load_articles();
    };

    let go_to_page = move |page: u32| {
        state.update(|s| s.set_page(page));
        load_articles();
    };

    let change_page_size = move |size: u32| {
        state.update(|s| s.set_per_page(size));
        load_articles();
    };

    let delete_article = move |id: ArticleId, title: String| {
        if !confirm(&format!("Delete \"{}\"?", title)) {
            return;
        }
        spawn_local(async move {
            let token = session.token();
            match api::delete_article(&id, token.as_deref()).await {
                Ok(_) => {
                    log::info!("Deleted article {}", id);
                    notifications.success("Article deleted");
                    state.try_update(|s| s.after_delete());
                    load_articles();
                }
                Err(e) => {
                    log::error!("Failed to delete article {}: {}", id, e);
                    session.handle_error(&e);
                    notifications.error(format!("{}: {}", RemoteOp::Delete.failure_message(), e));
                }
            }
        });
    };

    let row = move |item: ArticleListItem| {
        let id = item.id.clone();
        let title = item.title.clone();
        let edit_href = format!("/publish?id={}", urlencoding::encode(&item.id.as_string()));
        let thumbnail = match item.thumbnail() {
            Some(url) => view! { <img class="article-cover" src=url.to_string() alt=""/> }.into_any(),
            None => view! { <div class="article-cover article-cover--empty">"No cover"</div> }.into_any(),
        };
        view! {
            <tr>
                <td>{thumbnail}</td>
                <td class="article-title">{item.title.clone()}</td>
                <td>
                    <span class=format!("tag {}", item.status.tag_class())>{item.status.label()}</span>
                </td>
                <td>{format_pubdate(&item.pubdate)}</td>
                <td class="numeric">{item.read_count}</td>
                <td class="numeric">{item.comment_count}</td>
                <td class="numeric">{item.like_count}</td>
                <td class="actions">
                    <A href=edit_href attr:class="button button--icon" attr:title="Edit">
                        {icon("edit")}
                    </A>
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        on:click=move |_| delete_article(id.clone(), title.clone())
                    >
                        {icon("delete")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="article-list">
            <div class="card filter-card">
                <div class="filter-row">
                    <label>"Status"</label>
                    <RadioGroup value=status_value>
                        <Radio value=ALL_STATUSES label="All"/>
                        {ArticleStatus::filterable()
                            .into_iter()
                            .map(|s| view! { <Radio value=(s as u8).to_string() label=s.label()/> })
                            .collect_view()}
                    </RadioGroup>
                </div>
                <div class="filter-row">
                    <label for="filter-channel">"Channel"</label>
                    <select
                        id="filter-channel"
                        prop:value=move || channel_value.get()
                        on:change=move |ev| channel_value.set(event_target_value(&ev))
                    >
                        <option value="">"All channels"</option>
                        {move || {
                            channels
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="filter-row">
                    <label>"Published"</label>
                    <input
                        type="date"
                        prop:value=move || begin_value.get()
                        on:change=move |ev| begin_value.set(event_target_value(&ev))
                    />
                    <span>"to"</span>
                    <input
                        type="date"
                        prop:value=move || end_value.get()
                        on:change=move |ev| end_value.set(event_target_value(&ev))
                    />
                </div>
                <div class="filter-actions">
                    <button class="button button--primary" on:click=apply_filter>
                        "Filter"
                    </button>
                    <button class="button button--secondary" on:click=reset_filter>
                        "Reset"
                    </button>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    {move || format!("{} results match the filter", state.with(|s| s.total_count()))}
                </div>

                {move || error.get().map(|err| view! { <div class="error-message">{err}</div> })}

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Cover"</th>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Published"</th>
                            <th>"Reads"</th>
                            <th>"Comments"</th>
                            <th>"Likes"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() && state.with(|s| s.items().is_empty()) {
                                return view! {
                                    <tr><td colspan="8" class="table-placeholder">"Loading..."</td></tr>
                                }
                                .into_any();
                            }
                            let items = state.with(|s| s.items().to_vec());
                            if items.is_empty() {
                                view! {
                                    <tr><td colspan="8" class="table-placeholder">"No articles"</td></tr>
                                }
                                .into_any()
                            } else {
                                items.into_iter().map(row).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page()))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.total_count()))
                    page_size=Signal::derive(move || state.with(|s| s.per_page()))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>
        </div>
    }
}
