//! Publish form controller.
//!
//! Owns the text fields, the [`CoverState`] and the create/edit submission
//! path. Remote calls are split into `begin_*` (pure, synchronous), the
//! request itself, and `receive_*`/`finish_*`, so the view model can run the
//! request on the browser executor while the controller lives in a signal.
//!
//! Each request carries a [`Ticket`]. `unmount` invalidates outstanding
//! tickets and late responses are dropped.

use contracts::domain::a001_article::{
    ArticleDto, ArticleFields, ArticleWire, CoverMode, DraftError, DraftPayload,
};
use contracts::domain::common::{AggregateId, ArticleId, ChannelId};
use contracts::shared::envelope::Ack;
use thiserror::Error;

use super::cover_state::{CoverState, ImageSlot};
use super::gateway::ArticleGateway;
use crate::shared::api_utils::ApiError;

/// Create or edit, fixed for the lifetime of one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ArticleId),
}

impl FormMode {
    /// Derive the mode from the `id` query parameter
    pub fn from_query(id: Option<&str>) -> Self {
        match id.map(ArticleId::from_string) {
            Some(Ok(id)) => FormMode::Edit(id),
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Remote operation named in failure notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    Create,
    Update,
    Fetch,
    Upload,
    Delete,
}

impl RemoteOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            RemoteOp::Create => "Failed to publish article",
            RemoteOp::Update => "Failed to update article",
            RemoteOp::Fetch => "Failed to load article",
            RemoteOp::Upload => "Image upload failed",
            RemoteOp::Delete => "Failed to delete article",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] DraftError),
    #[error("the article is still loading")]
    HydrationPending,
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error("images are still uploading")]
    UploadsPending,
    #[error("{}: {}", .op.failure_message(), .source)]
    Remote { op: RemoteOp, source: ApiError },
}

impl FormError {
    pub fn remote(&self) -> Option<&ApiError> {
        match self {
            FormError::Remote { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Create mode, nothing to load
    NotNeeded,
    /// Fetch in flight, or result waiting for the controls
    Pending,
    Ready,
    Failed,
}

/// Identifies the mount a request was issued from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(ArticleId),
}

/// Validated request ready to be dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitPlan {
    pub ticket: Ticket,
    pub target: SubmitTarget,
    pub article: ArticleWire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Article created; the form was reset for the next one
    Created,
    /// Article updated; the caller should leave the form
    Updated,
    /// Response arrived after unmount and was ignored
    Stale,
}

#[derive(Debug, Clone)]
pub struct PublishController {
    form_mode: FormMode,
    fields: ArticleFields,
    cover: CoverState,
    hydration: Hydration,
    controls_ready: bool,
    pending_article: Option<ArticleDto>,
    generation: u64,
    submitting: bool,
    content_revision: u64,
}

impl PublishController {
    pub fn new(form_mode: FormMode) -> Self {
        let hydration = if form_mode.is_edit() {
            Hydration::Pending
        } else {
            Hydration::NotNeeded
        };
        Self {
            form_mode,
            fields: ArticleFields::default(),
            cover: CoverState::new(),
            hydration,
            controls_ready: false,
            pending_article: None,
            generation: 0,
            submitting: false,
            content_revision: 0,
        }
    }

    pub fn form_mode(&self) -> &FormMode {
        &self.form_mode
    }

    pub fn fields(&self) -> &ArticleFields {
        &self.fields
    }

    pub fn cover(&self) -> &CoverState {
        &self.cover
    }

    pub fn hydration(&self) -> Hydration {
        self.hydration
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Bumped whenever content is replaced programmatically (hydration, reset),
    /// so the rich text editor knows to reload its markup.
    pub fn content_revision(&self) -> u64 {
        self.content_revision
    }

    pub fn set_title(&mut self, title: String) {
        self.fields.title = title;
    }

    pub fn set_channel(&mut self, channel_id: Option<ChannelId>) {
        self.fields.channel_id = channel_id;
    }

    /// Content typed by the user. Does not bump the revision.
    pub fn set_content(&mut self, content: String) {
        self.fields.content = content;
    }

    pub fn select_mode(&mut self, mode: CoverMode) -> bool {
        self.cover.select_mode(mode)
    }

    pub fn on_upload(&mut self, list: Vec<ImageSlot>) {
        self.cover.on_upload(list);
    }

    // ------------------------------------------------------------------
    // Hydration
    // ------------------------------------------------------------------

    /// Article to fetch for this mount, if any
    pub fn begin_hydration(&self) -> Option<(Ticket, ArticleId)> {
        match (&self.form_mode, self.hydration) {
            (FormMode::Edit(id), Hydration::Pending) => Some((self.ticket(), id.clone())),
            _ => None,
        }
    }

    /// Second phase of initialisation: the inputs exist now
    pub fn controls_ready(&mut self) {
        self.controls_ready = true;
        if let Some(article) = self.pending_article.take() {
            self.apply_article(article);
        }
    }

    pub fn receive_hydration(
        &mut self,
        ticket: Ticket,
        result: Result<ArticleDto, ApiError>,
    ) -> Result<(), FormError> {
        if self.is_stale(ticket) {
            log::debug!("Dropping stale article response");
            return Ok(());
        }
        match result {
            Ok(article) => {
                if self.controls_ready {
                    self.apply_article(article);
                } else {
                    self.pending_article = Some(article);
                }
                Ok(())
            }
            Err(source) => {
                // Stays in edit mode with empty fields; a later submit still targets update
                self.hydration = Hydration::Failed;
                Err(FormError::Remote {
                    op: RemoteOp::Fetch,
                    source,
                })
            }
        }
    }

    fn apply_article(&mut self, article: ArticleDto) {
        let (cover, fields) = article.split_cover();
        log::debug!(
            "Hydrating form: cover {:?} with {} images",
            cover.cover_type,
            cover.images.len()
        );
        self.cover = CoverState::hydrated(cover.cover_type, &cover.images);
        self.fields = fields;
        self.content_revision += 1;
        self.hydration = Hydration::Ready;
    }

    /// Invalidate every outstanding request of this mount
    pub fn unmount(&mut self) {
        self.generation += 1;
        self.submitting = false;
    }

    fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        ticket.0 != self.generation
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Validate the form and build the request. Nothing is sent on error.
    pub fn begin_submit(&mut self) -> Result<SubmitPlan, FormError> {
        if self.submitting {
            return Err(FormError::SubmissionInFlight);
        }
        if self.hydration == Hydration::Pending {
            return Err(FormError::HydrationPending);
        }
        if self.cover.has_pending_uploads() {
            return Err(FormError::UploadsPending);
        }

        let mode = self.cover.mode();
        let visible = self.cover.visible().len();
        if mode == CoverMode::Triple && visible < mode.capacity() {
            return Err(DraftError::IncompleteCoverSet {
                expected: mode.capacity(),
                actual: visible,
            }
            .into());
        }

        let article = DraftPayload::builder()
            .fields(&self.fields)
            .cover(mode, self.cover.resolved_urls())
            .build()
            .to_wire_format()?;

        let target = match &self.form_mode {
            FormMode::Create => SubmitTarget::Create,
            FormMode::Edit(id) => SubmitTarget::Update(id.clone()),
        };

        self.submitting = true;
        Ok(SubmitPlan {
            ticket: self.ticket(),
            target,
            article,
        })
    }

    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<Ack, ApiError>,
    ) -> Result<SubmitOutcome, FormError> {
        if self.is_stale(ticket) {
            log::debug!("Dropping stale submission response");
            return Ok(SubmitOutcome::Stale);
        }
        self.submitting = false;

        match (result, &self.form_mode) {
            (Ok(_), FormMode::Create) => {
                self.fields = ArticleFields::default();
                self.cover.reset();
                self.content_revision += 1;
                Ok(SubmitOutcome::Created)
            }
            (Ok(_), FormMode::Edit(_)) => Ok(SubmitOutcome::Updated),
            (Err(source), FormMode::Create) => Err(FormError::Remote {
                op: RemoteOp::Create,
                source,
            }),
            (Err(source), FormMode::Edit(_)) => Err(FormError::Remote {
                op: RemoteOp::Update,
                source,
            }),
        }
    }
}

/// Send a validated plan to the article resource
pub async fn dispatch<G>(gateway: &G, plan: &SubmitPlan) -> Result<Ack, ApiError>
where
    G: ArticleGateway + ?Sized,
{
    match &plan.target {
        SubmitTarget::Create => gateway.create_article(&plan.article).await,
        SubmitTarget::Update(id) => gateway.update_article(id, &plan.article).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_article::CoverDto;
    use contracts::shared::upload::UploadedImage;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Fetch(ArticleId),
        Create(ArticleWire),
        Update(ArticleId, ArticleWire),
    }

    struct FakeGateway {
        article: Result<ArticleDto, ApiError>,
        write_result: Result<Ack, ApiError>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeGateway {
        fn new() -> Self {
            Self {
                article: Err(ApiError::Network("no article".into())),
                write_result: Ok(Ack {
                    message: "OK".into(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with_article(article: ArticleDto) -> Self {
            Self {
                article: Ok(article),
                ..Self::new()
            }
        }

        fn failing_writes(mut self) -> Self {
            self.write_result = Err(ApiError::Status {
                status: 500,
                message: "boom".into(),
            });
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ArticleGateway for FakeGateway {
        async fn fetch_article(&self, id: &ArticleId) -> Result<ArticleDto, ApiError> {
            self.calls.borrow_mut().push(Call::Fetch(id.clone()));
            self.article.clone()
        }

        async fn create_article(&self, article: &ArticleWire) -> Result<Ack, ApiError> {
            self.calls.borrow_mut().push(Call::Create(article.clone()));
            self.write_result.clone()
        }

        async fn update_article(
            &self,
            id: &ArticleId,
            article: &ArticleWire,
        ) -> Result<Ack, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.clone(), article.clone()));
            self.write_result.clone()
        }
    }

    async fn hydrate(controller: &mut PublishController, gateway: &FakeGateway) -> Result<(), FormError> {
        match controller.begin_hydration() {
            Some((ticket, id)) => {
                let result = gateway.fetch_article(&id).await;
                controller.receive_hydration(ticket, result)
            }
            None => Ok(()),
        }
    }

    async fn submit(
        controller: &mut PublishController,
        gateway: &FakeGateway,
    ) -> Result<SubmitOutcome, FormError> {
        let plan = controller.begin_submit()?;
        let result = dispatch(gateway, &plan).await;
        controller.finish_submit(plan.ticket, result)
    }

    fn uploaded(url: &str) -> ImageSlot {
        let mut slot = ImageSlot::uploading(url);
        slot.complete(UploadedImage { url: url.into() });
        slot
    }

    fn filled_create_form() -> PublishController {
        let mut controller = PublishController::new(FormMode::Create);
        controller.controls_ready();
        controller.set_title("Title".into());
        controller.set_channel(Some(3));
        controller.set_content("<p>body</p>".into());
        controller
    }

    fn article_42() -> ArticleDto {
        ArticleDto {
            id: ArticleId::new("42"),
            title: "T".into(),
            channel_id: Some(5),
            content: "<p>x</p>".into(),
            cover: CoverDto {
                cover_type: CoverMode::Single,
                images: vec!["http://x/1.png".into()],
            },
            pub_date: None,
        }
    }

    #[test]
    fn form_mode_comes_from_query_id() {
        assert_eq!(FormMode::from_query(None), FormMode::Create);
        assert_eq!(FormMode::from_query(Some("")), FormMode::Create);
        assert_eq!(
            FormMode::from_query(Some("42")),
            FormMode::Edit(ArticleId::new("42"))
        );
    }

    #[tokio::test]
    async fn triple_with_two_images_fails_without_network_call() {
        let gateway = FakeGateway::new();
        let mut controller = filled_create_form();
        controller.select_mode(CoverMode::Triple);
        controller.on_upload(vec![uploaded("a"), uploaded("b")]);

        let err = submit(&mut controller, &gateway).await.unwrap_err();
        assert!(matches!(
            err,
            FormError::Validation(DraftError::IncompleteCoverSet { expected: 3, actual: 2 })
        ));
        assert!(gateway.calls().is_empty());
        assert!(!controller.is_submitting());
        assert_eq!(controller.cover().visible().len(), 2);
    }

    #[tokio::test]
    async fn none_mode_always_sends_empty_images() {
        let gateway = FakeGateway::new();
        let mut controller = filled_create_form();
        controller.select_mode(CoverMode::Triple);
        controller.on_upload(vec![uploaded("a"), uploaded("b"), uploaded("c")]);
        controller.select_mode(CoverMode::None);

        submit(&mut controller, &gateway).await.unwrap();
        match &gateway.calls()[0] {
            Call::Create(article) => {
                assert_eq!(article.cover.cover_type, CoverMode::None);
                assert!(article.cover.images.is_empty());
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn successful_create_resets_the_form() {
        let gateway = FakeGateway::new();
        let mut controller = filled_create_form();
        controller.select_mode(CoverMode::Triple);
        controller.on_upload(vec![uploaded("a"), uploaded("b"), uploaded("c")]);
        let revision = controller.content_revision();

        let outcome = submit(&mut controller, &gateway).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(controller.cover().mode(), CoverMode::Single);
        assert!(controller.cover().visible().is_empty());
        assert!(controller.cover().cache().is_empty());
        assert_eq!(controller.fields(), &ArticleFields::default());
        assert!(controller.content_revision() > revision);
    }

    #[tokio::test]
    async fn failed_create_preserves_everything() {
        let gateway = FakeGateway::new().failing_writes();
        let mut controller = filled_create_form();
        controller.on_upload(vec![uploaded("a")]);
        let before = (controller.fields().clone(), controller.cover().clone());

        let err = submit(&mut controller, &gateway).await.unwrap_err();
        assert!(matches!(err, FormError::Remote { op: RemoteOp::Create, .. }));
        assert!(err.to_string().starts_with("Failed to publish article"));
        assert_eq!((controller.fields().clone(), controller.cover().clone()), before);
        assert!(!controller.is_submitting());

        // retry without re-entering anything
        let gateway = FakeGateway::new();
        assert_eq!(
            submit(&mut controller, &gateway).await.unwrap(),
            SubmitOutcome::Created
        );
    }

    #[tokio::test]
    async fn failed_update_is_reported_as_update() {
        let gateway = FakeGateway::with_article(article_42()).failing_writes();
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        controller.controls_ready();
        hydrate(&mut controller, &gateway).await.unwrap();

        let err = submit(&mut controller, &gateway).await.unwrap_err();
        assert!(matches!(err, FormError::Remote { op: RemoteOp::Update, .. }));
        assert_eq!(controller.fields().title, "T");
    }

    #[tokio::test]
    async fn triple_hydration_yields_three_visible_images() {
        let mut article = article_42();
        article.cover = CoverDto {
            cover_type: CoverMode::Triple,
            images: vec!["a".into(), "b".into(), "c".into()],
        };
        let gateway = FakeGateway::with_article(article);
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        controller.controls_ready();
        hydrate(&mut controller, &gateway).await.unwrap();

        assert_eq!(controller.cover().mode(), CoverMode::Triple);
        assert_eq!(
            controller.cover().resolved_urls(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(controller.cover().cache().len(), 3);
        assert_eq!(controller.fields().title, "T");
        assert_eq!(controller.fields().channel_id, Some(5));
        assert_eq!(controller.fields().content, "<p>x</p>");
        assert_eq!(controller.hydration(), Hydration::Ready);
    }

    #[tokio::test]
    async fn edit_article_42_round_trip() {
        let gateway = FakeGateway::with_article(article_42());
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        controller.controls_ready();
        hydrate(&mut controller, &gateway).await.unwrap();

        assert_eq!(controller.fields().title, "T");
        assert_eq!(controller.fields().channel_id, Some(5));
        assert_eq!(controller.fields().content, "<p>x</p>");
        assert_eq!(controller.cover().mode(), CoverMode::Single);
        assert_eq!(controller.cover().resolved_urls(), vec!["http://x/1.png".to_string()]);

        let outcome = submit(&mut controller, &gateway).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            Call::Update(id, article) => {
                assert_eq!(id.value(), "42");
                assert_eq!(
                    serde_json::to_value(article).unwrap(),
                    serde_json::json!({
                        "title": "T",
                        "channel_id": 5,
                        "content": "<p>x</p>",
                        "cover": {"type": 1, "images": ["http://x/1.png"]}
                    })
                );
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn hydration_waits_for_controls() {
        let gateway = FakeGateway::with_article(article_42());
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        hydrate(&mut controller, &gateway).await.unwrap();

        assert_eq!(controller.hydration(), Hydration::Pending);
        assert!(controller.fields().title.is_empty());

        controller.controls_ready();
        assert_eq!(controller.hydration(), Hydration::Ready);
        assert_eq!(controller.fields().title, "T");
        assert_eq!(controller.content_revision(), 1);
    }

    #[tokio::test]
    async fn submission_is_blocked_while_hydrating() {
        let gateway = FakeGateway::new();
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        controller.controls_ready();
        controller.set_title("T".into());

        let err = submit(&mut controller, &gateway).await.unwrap_err();
        assert_eq!(err, FormError::HydrationPending);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn submission_waits_for_uploads() {
        let gateway = FakeGateway::new();
        let mut controller = filled_create_form();
        controller.select_mode(CoverMode::Single);
        controller.on_upload(vec![ImageSlot::uploading("a.png")]);

        let err = submit(&mut controller, &gateway).await.unwrap_err();
        assert_eq!(err, FormError::UploadsPending);
        assert!(!controller.is_submitting());
        assert!(gateway.calls().is_empty());

        controller.on_upload(vec![uploaded("a.png")]);
        submit(&mut controller, &gateway).await.unwrap();
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn failed_hydration_keeps_edit_mode() {
        let gateway = FakeGateway::new();
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        controller.controls_ready();

        let err = hydrate(&mut controller, &gateway).await.unwrap_err();
        assert!(matches!(err, FormError::Remote { op: RemoteOp::Fetch, .. }));
        assert_eq!(controller.hydration(), Hydration::Failed);
        assert!(controller.form_mode().is_edit());
        assert!(controller.fields().title.is_empty());

        controller.set_title("New".into());
        controller.set_channel(Some(1));
        controller.set_content("<p>c</p>".into());
        let plan = controller.begin_submit().unwrap();
        assert_eq!(plan.target, SubmitTarget::Update(ArticleId::new("42")));
    }

    #[test]
    fn stale_hydration_is_ignored_after_unmount() {
        let mut controller = PublishController::new(FormMode::Edit(ArticleId::new("42")));
        controller.controls_ready();
        let (ticket, _) = controller.begin_hydration().unwrap();
        controller.unmount();

        controller.receive_hydration(ticket, Ok(article_42())).unwrap();
        assert!(controller.fields().title.is_empty());
        assert_eq!(controller.hydration(), Hydration::Pending);
    }

    #[test]
    fn stale_submission_is_ignored_after_unmount() {
        let mut controller = filled_create_form();
        let plan = controller.begin_submit().unwrap();
        controller.unmount();

        let outcome = controller
            .finish_submit(plan.ticket, Ok(Ack::default()))
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(controller.fields().title, "Title");
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut controller = filled_create_form();
        let _plan = controller.begin_submit().unwrap();
        assert_eq!(
            controller.begin_submit().unwrap_err(),
            FormError::SubmissionInFlight
        );
    }

    #[test]
    fn create_mode_needs_no_hydration() {
        let controller = PublishController::new(FormMode::Create);
        assert_eq!(controller.hydration(), Hydration::NotNeeded);
        assert!(controller.begin_hydration().is_none());
    }
}
