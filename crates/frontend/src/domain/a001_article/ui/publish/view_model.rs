use contracts::domain::a001_article::CoverMode;
use contracts::domain::common::ChannelId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::{dispatch, FormError, FormMode, PublishController, SubmitOutcome};
use super::cover_state::ImageSlot;
use super::gateway::ArticleGateway;
use crate::domain::a001_article::api::HttpArticleGateway;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::system::auth::{use_session, Session};

/// ViewModel for the publish / edit form
#[derive(Clone, Copy)]
pub struct PublishViewModel {
    pub state: RwSignal<PublishController>,
    pub error: RwSignal<Option<String>>,
    gateway: HttpArticleGateway,
    session: Session,
    notifications: NotificationService,
}

impl PublishViewModel {
    pub fn new(form_mode: FormMode) -> Self {
        let session = use_session();
        Self {
            state: RwSignal::new(PublishController::new(form_mode)),
            error: RwSignal::new(None),
            gateway: HttpArticleGateway::new(session),
            session,
            notifications: use_notifications(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.with(|s| s.form_mode().is_edit())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn cover_mode(&self) -> CoverMode {
        self.state.with(|s| s.cover().mode())
    }

    /// Start fetching the article in edit mode
    pub fn load_if_needed(&self) {
        let Some((ticket, id)) = self.state.with_untracked(|s| s.begin_hydration()) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            log::debug!("Loading article {}", id);
            let result = this.gateway.fetch_article(&id).await;
            if let Some(Err(e)) = this.state.try_update(|s| s.receive_hydration(ticket, result)) {
                this.report(&e);
            }
        });
    }

    /// Inputs are mounted; pending hydration may be applied now
    pub fn controls_ready(&self) {
        self.state.update(|s| s.controls_ready());
    }

    pub fn unmount(&self) {
        self.state.try_update(|s| s.unmount());
    }

    pub fn set_title(&self, title: String) {
        self.state.update(|s| s.set_title(title));
    }

    pub fn set_channel(&self, channel_id: Option<ChannelId>) {
        self.state.update(|s| s.set_channel(channel_id));
    }

    pub fn set_content(&self, content: String) {
        self.state.update(|s| s.set_content(content));
    }

    pub fn select_mode(&self, mode: CoverMode) {
        self.state.update(|s| {
            s.select_mode(mode);
        });
    }

    pub fn on_upload(&self, list: Vec<ImageSlot>) {
        self.state.update(|s| s.on_upload(list));
    }

    /// Validate and send the form. `on_left` runs after a successful update.
    pub fn save_command(&self, on_left: impl FnOnce() + 'static) {
        let plan = match self.state.try_update(|s| s.begin_submit()) {
            Some(Ok(plan)) => plan,
            Some(Err(e)) => {
                self.report(&e);
                return;
            }
            None => return,
        };
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            let result = dispatch(&this.gateway, &plan).await;
            match this.state.try_update(|s| s.finish_submit(plan.ticket, result)) {
                Some(Ok(SubmitOutcome::Created)) => {
                    log::info!("Article published");
                    this.notifications.success("Article published");
                }
                Some(Ok(SubmitOutcome::Updated)) => {
                    log::info!("Article updated");
                    this.notifications.success("Article updated");
                    on_left();
                }
                Some(Ok(SubmitOutcome::Stale)) | None => {}
                Some(Err(e)) => this.report(&e),
            }
        });
    }

    fn report(&self, error: &FormError) {
        if let Some(api_error) = error.remote() {
            self.session.handle_error(api_error);
        }
        let text = error.to_string();
        self.error.try_set(Some(text.clone()));
        self.notifications.error(text);
    }
}
