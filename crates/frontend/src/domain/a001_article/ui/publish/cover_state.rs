//! Cover mode reconciliation.
//!
//! The cache remembers every image the user chose; the visible list is the
//! slice of it the active mode admits. Mode switches only re-derive the
//! visible list, so switching back restores what was there before.

use contracts::domain::a001_article::CoverMode;
use contracts::shared::upload::UploadedImage;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    Uploading,
    Done,
    Failed,
}

/// One image of the cover, either uploaded in this session or loaded from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub uid: Uuid,
    pub name: String,
    pub status: SlotStatus,
    /// Pre-existing URL, set for images hydrated from the server
    pub url: Option<String>,
    pub upload_response: Option<UploadedImage>,
}

impl ImageSlot {
    /// Slot for an image that already lives on the server
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            uid: Uuid::new_v4(),
            name: file_name_of(&url),
            status: SlotStatus::Done,
            url: Some(url),
            upload_response: None,
        }
    }

    /// Slot for a file whose upload has just started
    pub fn uploading(name: impl Into<String>) -> Self {
        Self {
            uid: Uuid::new_v4(),
            name: name.into(),
            status: SlotStatus::Uploading,
            url: None,
            upload_response: None,
        }
    }

    pub fn complete(&mut self, uploaded: UploadedImage) {
        self.status = SlotStatus::Done;
        self.upload_response = Some(uploaded);
    }

    pub fn fail(&mut self) {
        self.status = SlotStatus::Failed;
    }

    /// URL to submit: a finished upload wins over a pre-existing URL
    pub fn resolved_url(&self) -> Option<&str> {
        self.upload_response
            .as_ref()
            .map(|r| r.url.as_str())
            .or(self.url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

fn file_name_of(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverState {
    mode: CoverMode,
    visible: Vec<ImageSlot>,
    cache: Vec<ImageSlot>,
}

impl Default for CoverState {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverState {
    /// Fresh state of a new form: single image, nothing chosen
    pub fn new() -> Self {
        Self {
            mode: CoverMode::Single,
            visible: Vec::new(),
            cache: Vec::new(),
        }
    }

    /// State loaded from a saved article. All images go to the cache.
    pub fn hydrated(mode: CoverMode, urls: &[String]) -> Self {
        let cache: Vec<ImageSlot> = urls.iter().map(ImageSlot::from_url).collect();
        let visible = project(mode, &cache);
        Self {
            mode,
            visible,
            cache,
        }
    }

    pub fn mode(&self) -> CoverMode {
        self.mode
    }

    pub fn visible(&self) -> &[ImageSlot] {
        &self.visible
    }

    pub fn cache(&self) -> &[ImageSlot] {
        &self.cache
    }

    /// Apply a radio selection. Returns `false` when the mode was already active.
    pub fn select_mode(&mut self, mode: CoverMode) -> bool {
        if mode == self.mode {
            return false;
        }
        log::debug!(
            "Cover mode {:?} -> {:?}, cache holds {}",
            self.mode,
            mode,
            self.cache.len()
        );
        self.mode = mode;
        self.visible = project(mode, &self.cache);
        true
    }

    /// Fold the upload widget's full list into the state.
    ///
    /// The widget owns the list, so it replaces both the cache and the
    /// visible images. The visible list is still capped by the mode.
    pub fn on_upload(&mut self, list: Vec<ImageSlot>) {
        self.cache = list;
        self.visible = project(self.mode, &self.cache);
    }

    /// URLs to submit, in display order. Slots without a URL are skipped.
    pub fn resolved_urls(&self) -> Vec<String> {
        if self.mode == CoverMode::None {
            return Vec::new();
        }
        self.visible
            .iter()
            .filter_map(|slot| slot.resolved_url().map(str::to_string))
            .collect()
    }

    pub fn has_pending_uploads(&self) -> bool {
        self.visible.iter().any(|s| s.status == SlotStatus::Uploading)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Visible images for a mode, derived from the cache
fn project(mode: CoverMode, cache: &[ImageSlot]) -> Vec<ImageSlot> {
    match mode {
        CoverMode::None => Vec::new(),
        CoverMode::Single => cache.iter().take(1).cloned().collect(),
        CoverMode::Triple => cache.iter().take(mode.capacity()).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(url: &str) -> ImageSlot {
        let mut slot = ImageSlot::uploading(url);
        slot.complete(UploadedImage { url: url.into() });
        slot
    }

    fn urls(slots: &[ImageSlot]) -> Vec<&str> {
        slots.iter().filter_map(ImageSlot::resolved_url).collect()
    }

    #[test]
    fn new_form_starts_in_single_mode_without_images() {
        let state = CoverState::new();
        assert_eq!(state.mode(), CoverMode::Single);
        assert!(state.visible().is_empty());
        assert!(state.cache().is_empty());
    }

    #[test]
    fn visible_list_never_exceeds_mode_capacity() {
        let mut state = CoverState::new();
        state.select_mode(CoverMode::Triple);
        state.on_upload(vec![uploaded("a"), uploaded("b"), uploaded("c")]);

        let modes = [
            CoverMode::None,
            CoverMode::Single,
            CoverMode::Triple,
            CoverMode::Single,
            CoverMode::None,
            CoverMode::Triple,
        ];
        for mode in modes {
            state.select_mode(mode);
            assert!(state.visible().len() <= mode.capacity());
        }
    }

    #[test]
    fn switching_back_to_triple_restores_the_cache() {
        let mut state = CoverState::new();
        state.select_mode(CoverMode::None);
        state.select_mode(CoverMode::Single);
        state.select_mode(CoverMode::Triple);
        state.on_upload(vec![uploaded("a"), uploaded("b"), uploaded("c")]);

        state.select_mode(CoverMode::Single);
        assert_eq!(urls(state.visible()), vec!["a"]);
        assert_eq!(state.cache().len(), 3);

        state.select_mode(CoverMode::Triple);
        assert_eq!(urls(state.visible()), vec!["a", "b", "c"]);
    }

    #[test]
    fn none_mode_hides_images_but_keeps_cache() {
        let mut state = CoverState::new();
        state.on_upload(vec![uploaded("a")]);
        state.select_mode(CoverMode::None);
        assert!(state.visible().is_empty());
        assert!(state.resolved_urls().is_empty());
        assert_eq!(state.cache().len(), 1);

        state.select_mode(CoverMode::Single);
        assert_eq!(state.resolved_urls(), vec!["a".to_string()]);
    }

    #[test]
    fn triple_shows_partial_cache() {
        let mut state = CoverState::new();
        state.on_upload(vec![uploaded("a")]);
        state.select_mode(CoverMode::Triple);
        assert_eq!(urls(state.visible()), vec!["a"]);
    }

    #[test]
    fn reselecting_active_mode_is_a_no_op() {
        let mut state = CoverState::new();
        state.on_upload(vec![uploaded("a")]);
        let before = state.clone();
        assert!(!state.select_mode(CoverMode::Single));
        assert_eq!(state, before);
    }

    #[test]
    fn mode_switches_do_not_mutate_the_cache() {
        let mut state = CoverState::new();
        state.select_mode(CoverMode::Triple);
        state.on_upload(vec![uploaded("a"), uploaded("b")]);
        let cache = state.cache().to_vec();
        for mode in [CoverMode::None, CoverMode::Single, CoverMode::Triple] {
            state.select_mode(mode);
            assert_eq!(state.cache(), cache.as_slice());
        }
    }

    #[test]
    fn upload_list_replaces_cache_and_visible() {
        let mut state = CoverState::new();
        state.select_mode(CoverMode::Triple);
        state.on_upload(vec![uploaded("a"), uploaded("b"), uploaded("c")]);

        // user removed the middle thumbnail
        let remaining: Vec<_> = state
            .visible()
            .iter()
            .filter(|s| s.resolved_url() != Some("b"))
            .cloned()
            .collect();
        state.on_upload(remaining);
        assert_eq!(urls(state.visible()), vec!["a", "c"]);
        assert_eq!(urls(state.cache()), vec!["a", "c"]);
    }

    #[test]
    fn resolution_prefers_upload_then_existing_url_and_drops_the_rest() {
        let mut replaced = ImageSlot::from_url("http://x/old.png");
        replaced.complete(UploadedImage {
            url: "http://x/new.png".into(),
        });
        let existing = ImageSlot::from_url("http://x/kept.png");
        let in_flight = ImageSlot::uploading("big.png");

        let mut state = CoverState::new();
        state.select_mode(CoverMode::Triple);
        state.on_upload(vec![replaced, in_flight, existing]);

        assert_eq!(
            state.resolved_urls(),
            vec!["http://x/new.png".to_string(), "http://x/kept.png".to_string()]
        );
        assert!(state.has_pending_uploads());
    }

    #[test]
    fn hydrated_state_uses_url_only_slots() {
        let images = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let state = CoverState::hydrated(CoverMode::Triple, &images);
        assert_eq!(state.mode(), CoverMode::Triple);
        assert_eq!(urls(state.visible()), vec!["a", "b", "c"]);
        assert!(state.visible().iter().all(|s| s.upload_response.is_none()));
    }

    #[test]
    fn reset_returns_to_single_and_empties_everything() {
        let mut state = CoverState::hydrated(CoverMode::Triple, &["a".to_string()]);
        state.reset();
        assert_eq!(state, CoverState::new());
    }
}
