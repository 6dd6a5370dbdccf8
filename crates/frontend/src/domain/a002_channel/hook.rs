use contracts::domain::a002_channel::Channel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::system::auth::use_session;

/// Channel list fetched once per mount of the calling component.
/// Stays empty when the request fails.
pub fn use_channels() -> ReadSignal<Vec<Channel>> {
    let (channels, set_channels) = signal(Vec::<Channel>::new());
    let session = use_session();

    spawn_local(async move {
        match api::fetch_channels(session.token().as_deref()).await {
            Ok(list) => {
                log::debug!("Loaded {} channels", list.len());
                set_channels.try_set(list);
            }
            Err(e) => {
                session.handle_error(&e);
                log::error!("Failed to load channels: {}", e);
            }
        }
    });

    channels
}
