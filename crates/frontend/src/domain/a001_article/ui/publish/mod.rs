//! Article publish / edit form
//!
//! MVVM split as in the other detail forms:
//! - cover_state.rs: cover mode state machine over the image cache
//! - controller.rs: fields, hydration and the submission pipeline (no UI)
//! - gateway.rs: remote operations the controller needs
//! - view_model.rs: controller in a signal, commands run on the browser executor
//! - view.rs / upload.rs: Leptos components

mod controller;
mod cover_state;
mod gateway;
mod upload;
mod view;
mod view_model;

pub use controller::{
    dispatch, FormError, FormMode, Hydration, PublishController, RemoteOp, SubmitOutcome,
    SubmitPlan, SubmitTarget, Ticket,
};
pub use cover_state::{CoverState, ImageSlot, SlotStatus};
pub use gateway::ArticleGateway;
pub use view::PublishPage;
pub use view_model::PublishViewModel;
