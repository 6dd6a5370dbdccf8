//! Toast notifications
//!
//! `NotificationService` is provided once by `App`; pages push messages
//! through it and `NotificationHost` renders them. Each message dismisses
//! itself after `ui.notification_ttl_ms`.

use crate::config::config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

impl NotificationLevel {
    fn class(self) -> &'static str {
        match self {
            NotificationLevel::Success => "toast toast--success",
            NotificationLevel::Info => "toast toast--info",
            NotificationLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub text: String,
}

/// Visible messages, oldest first
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    const MAX_VISIBLE: usize = 5;

    pub fn push(&mut self, level: NotificationLevel, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, level, text });
        if self.items.len() > Self::MAX_VISIBLE {
            self.items.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationLevel::Success, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NotificationLevel::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NotificationLevel::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, level: NotificationLevel, text: String) {
        if level == NotificationLevel::Error {
            log::warn!("{}", text);
        }
        let mut id = 0;
        self.queue.update(|q| id = q.push(level, text));

        let queue = self.queue;
        let ttl = config().ui.notification_ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the notification service
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.level.class() on:click=move |_| service.dismiss(id)>
                            {n.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
