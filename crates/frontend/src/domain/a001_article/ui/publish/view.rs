use contracts::domain::a001_article::CoverMode;
use contracts::domain::a002_channel::Channel;
use contracts::domain::common::ChannelId;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

use super::controller::FormMode;
use super::upload::CoverUpload;
use super::view_model::PublishViewModel;
use crate::domain::a002_channel::use_channels;
use crate::shared::components::rich_text::RichTextEditor;

/// Value for the channel `<select>`. Empty until the chosen channel is
/// among the loaded options, since a browser ignores a value with no option.
pub fn channel_select_value(current: Option<ChannelId>, channels: &[Channel]) -> String {
    match current {
        Some(id) if channels.iter().any(|c| c.id == id) => id.to_string(),
        _ => String::new(),
    }
}

#[component]
pub fn PublishPage() -> impl IntoView {
    let query = use_query_map();
    let form_mode = FormMode::from_query(query.with_untracked(|q| q.get("id")).as_deref());
    let vm = PublishViewModel::new(form_mode);
    let channels = use_channels();
    let navigate = use_navigate();

    vm.load_if_needed();
    // Runs after the first render, so the inputs below exist
    Effect::new(move |_| vm.controls_ready());
    on_cleanup(move || vm.unmount());

    let mode_value = RwSignal::new(vm.state.with_untracked(|s| s.cover().mode()).as_key().to_string());

    // Radio -> controller
    Effect::new(move |prev: Option<String>| {
        let current = mode_value.get();
        if prev.is_some() {
            if let Some(mode) = CoverMode::from_key(&current) {
                vm.select_mode(mode);
            }
        }
        current
    });

    // Controller -> radio (hydration and reset replace the mode)
    Effect::new(move |_| {
        let key = vm.cover_mode().as_key().to_string();
        if mode_value.get_untracked() != key {
            mode_value.set(key);
        }
    });

    let title = move || vm.state.with(|s| s.fields().title.clone());
    // Re-applied when the channel list arrives after the article
    let channel = move || {
        let current = vm.state.with(|s| s.fields().channel_id);
        channels.with(|list| channel_select_value(current, list))
    };
    let content = Signal::derive(move || vm.state.with(|s| s.fields().content.clone()));
    let revision = Signal::derive(move || vm.state.with(|s| s.content_revision()));
    let cache = Signal::derive(move || vm.state.with(|s| s.cover().cache().to_vec()));
    let capacity = Signal::derive(move || vm.cover_mode().capacity());
    let submit_disabled = Signal::derive(move || {
        vm.is_submitting() || vm.state.with(|s| s.cover().has_pending_uploads())
    });

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        vm.save_command(move || navigate("/article", Default::default()));
    };

    view! {
        <div class="publish-page">
            <div class="page-header">
                <h2>{move || if vm.is_edit_mode() { "Edit article" } else { "Publish article" }}</h2>
            </div>

            <div class="form-row">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Enter the article title"
                    prop:value=title
                    on:input=move |ev| vm.set_title(event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <label for="channel">"Channel"</label>
                <select
                    id="channel"
                    prop:value=channel
                    on:change=move |ev| vm.set_channel(event_target_value(&ev).parse().ok())
                >
                    <option value="">"Select a channel"</option>
                    {move || {
                        channels
                            .get()
                            .into_iter()
                            .map(|c| {
                                let id = c.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || { vm.state.with(|s| s.fields().channel_id == Some(id)) }
                                    >
                                        {c.name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-row">
                <label>"Cover"</label>
                <div class="cover-field">
                    <RadioGroup value=mode_value>
                        {CoverMode::all()
                            .into_iter()
                            .map(|m| view! { <Radio value=m.as_key() label=m.label()/> })
                            .collect_view()}
                    </RadioGroup>
                    <Show when=move || vm.cover_mode().shows_upload()>
                        <CoverUpload
                            cache=cache
                            capacity=capacity
                            on_change=Callback::new(move |list| vm.on_upload(list))
                        />
                    </Show>
                </div>
            </div>

            <div class="form-row form-row--editor">
                <label>"Content"</label>
                <RichTextEditor
                    content=content
                    revision=revision
                    on_input=Callback::new(move |html| vm.set_content(html))
                    placeholder="Write the article"
                />
            </div>

            {move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <div class="form-actions">
                <button
                    type="button"
                    class="button button--primary"
                    disabled=move || submit_disabled.get()
                    on:click=on_submit
                >
                    {move || if vm.is_edit_mode() { "Update article" } else { "Publish article" }}
                </button>
            </div>
        </div>
    }
}
