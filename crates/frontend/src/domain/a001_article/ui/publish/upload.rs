//! Cover image upload widget.
//!
//! The widget works on the whole image cache, not on the part the active
//! mode shows: every change (new file, finished upload, removed thumbnail)
//! is reported as the full cache, so images hidden by a mode switch survive.

use contracts::shared::upload::UploadedImage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use super::controller::RemoteOp;
use super::cover_state::{ImageSlot, SlotStatus};
use crate::domain::a001_article::api;
use crate::shared::api_utils::ApiError;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::use_session;

/// Record the result of one upload. Returns `false` when the slot was
/// removed while the upload was running.
pub fn settle_upload(
    list: &mut [ImageSlot],
    uid: Uuid,
    result: &Result<UploadedImage, ApiError>,
) -> bool {
    let Some(slot) = list.iter_mut().find(|s| s.uid == uid) else {
        return false;
    };
    match result {
        Ok(uploaded) => slot.complete(uploaded.clone()),
        Err(_) => slot.fail(),
    }
    true
}

/// Number of newly chosen files that still fit
pub fn free_slots(current: usize, capacity: usize) -> usize {
    capacity.saturating_sub(current)
}

/// Thumbnails shown for a cache: the leading `capacity` images
pub fn shown(cache: &[ImageSlot], capacity: usize) -> Vec<ImageSlot> {
    cache.iter().take(capacity).cloned().collect()
}

#[component]
pub fn CoverUpload(
    /// Full image cache, including images the active mode hides
    #[prop(into)]
    cache: Signal<Vec<ImageSlot>>,
    #[prop(into)] capacity: Signal<usize>,
    on_change: Callback<Vec<ImageSlot>>,
) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();

    let handle_files = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };

        let mut list = cache.get_untracked();
        let capacity = capacity.get_untracked();
        let free = free_slots(list.len().min(capacity), capacity) as u32;
        let mut started = Vec::new();
        for i in 0..files.length().min(free) {
            if let Some(file) = files.get(i) {
                let slot = ImageSlot::uploading(file.name());
                started.push((slot.uid, file));
                list.push(slot);
            }
        }
        input.set_value("");
        if started.is_empty() {
            return;
        }
        on_change.run(list);

        for (uid, file) in started {
            spawn_local(async move {
                log::debug!("Uploading {}", file.name());
                let result = api::upload_image(file, session.token().as_deref()).await;
                if let Err(e) = &result {
                    session.handle_error(e);
                    notifications.error(format!("{}: {}", RemoteOp::Upload.failure_message(), e));
                }
                // Settled against the cache as it is now; the mode may have changed meanwhile
                let mut list = cache.get_untracked();
                if settle_upload(&mut list, uid, &result) {
                    on_change.run(list);
                }
            });
        }
    };

    let remove = move |uid: Uuid| {
        let list: Vec<ImageSlot> = cache
            .get_untracked()
            .into_iter()
            .filter(|s| s.uid != uid)
            .collect();
        on_change.run(list);
    };

    view! {
        <div class="cover-upload">
            <For
                each=move || cache.with(|c| shown(c, capacity.get()))
                key=|slot| (slot.uid, slot.status)
                children=move |slot: ImageSlot| {
                    let uid = slot.uid;
                    let body = match (slot.status, slot.resolved_url()) {
                        (SlotStatus::Uploading, _) => view! {
                            <span class="cover-upload__status">"Uploading..."</span>
                        }.into_any(),
                        (SlotStatus::Failed, _) => view! {
                            <span class="cover-upload__status cover-upload__status--error">"Failed"</span>
                        }.into_any(),
                        (SlotStatus::Done, Some(url)) => view! {
                            <img src=url.to_string() alt=slot.name.clone() />
                        }.into_any(),
                        (SlotStatus::Done, None) => view! { <></> }.into_any(),
                    };
                    view! {
                        <div class="cover-upload__item">
                            {body}
                            <button
                                type="button"
                                class="cover-upload__remove"
                                title="Remove"
                                on:click=move |_| remove(uid)
                            >
                                {icon("delete")}
                            </button>
                        </div>
                    }
                }
            />
            <Show when=move || { cache.with(Vec::len) < capacity.get() }>
                <label class="cover-upload__add">
                    {icon("plus")}
                    <input
                        type="file"
                        accept="image/*"
                        multiple=move || { capacity.get() > 1 }
                        on:change=handle_files
                    />
                </label>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_article::ui::publish::CoverState;
    use contracts::domain::a001_article::CoverMode;

    #[test]
    fn settle_completes_matching_slot() {
        let mut list = vec![ImageSlot::uploading("a.png"), ImageSlot::uploading("b.png")];
        let uid = list[1].uid;
        let done = settle_upload(
            &mut list,
            uid,
            &Ok(UploadedImage {
                url: "http://x/b.png".into(),
            }),
        );
        assert!(done);
        assert_eq!(list[1].resolved_url(), Some("http://x/b.png"));
        assert_eq!(list[0].status, SlotStatus::Uploading);
    }

    #[test]
    fn settle_marks_failure() {
        let mut list = vec![ImageSlot::uploading("a.png")];
        let uid = list[0].uid;
        assert!(settle_upload(&mut list, uid, &Err(ApiError::Network("offline".into()))));
        assert_eq!(list[0].status, SlotStatus::Failed);
        assert_eq!(list[0].resolved_url(), None);
    }

    #[test]
    fn settle_ignores_removed_slot() {
        let mut list = vec![ImageSlot::from_url("http://x/a.png")];
        let before = list.clone();
        assert!(!settle_upload(&mut list, Uuid::new_v4(), &Ok(UploadedImage { url: "u".into() })));
        assert_eq!(list, before);
    }

    fn done(url: &str) -> ImageSlot {
        let mut slot = ImageSlot::uploading(url);
        slot.complete(UploadedImage { url: url.into() });
        slot
    }

    #[test]
    fn upload_finishing_after_mode_switch_keeps_every_image() {
        let mut cover = CoverState::new();
        cover.select_mode(CoverMode::Triple);
        let pending = ImageSlot::uploading("b.png");
        let uid = pending.uid;
        cover.on_upload(vec![done("a"), pending, done("c")]);

        cover.select_mode(CoverMode::Single);
        let mut list = cover.cache().to_vec();
        assert!(settle_upload(
            &mut list,
            uid,
            &Ok(UploadedImage { url: "b".into() })
        ));
        cover.on_upload(list);
        assert_eq!(cover.cache().len(), 3);
        assert_eq!(cover.visible().len(), 1);

        cover.select_mode(CoverMode::Triple);
        assert!(!cover.has_pending_uploads());
        assert_eq!(cover.resolved_urls(), vec!["a", "b", "c"]);
    }

    #[test]
    fn shown_matches_the_visible_projection() {
        let mut cover = CoverState::new();
        cover.select_mode(CoverMode::Triple);
        cover.on_upload(vec![done("a"), done("b"), done("c")]);
        for mode in CoverMode::all() {
            cover.select_mode(mode);
            assert_eq!(shown(cover.cache(), mode.capacity()), cover.visible());
        }
    }

    #[test]
    fn free_slots_never_underflows() {
        assert_eq!(free_slots(0, 3), 3);
        assert_eq!(free_slots(2, 1), 0);
    }
}
