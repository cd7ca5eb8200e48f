//! Transient user notifications.
//!
//! `Notifications` is provided once in `App` and used by every page to report
//! operation outcomes. Each notice disappears on its own after
//! [`AUTO_DISMISS_MS`], or earlier when the user closes it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::errors::AppError;

pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn css_modifier(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Warning => "notice--warning",
            NoticeKind::Error => "notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered queue of visible notices, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// No-op for an id that is already gone
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NoticeQueue>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeKind::Warning, text);
    }

    pub fn error(&self, err: &AppError) {
        self.push(NoticeKind::Error, err.to_string());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="notice-host">
            <For
                each=move || notifications.queue.get().items().to_vec()
                key=|n| n.id
                children=move |n: Notice| {
                    let id = n.id;
                    view! {
                        <div class=format!("notice {}", n.kind.css_modifier()) role="status">
                            <span class="notice__text">{n.text}</span>
                            <button
                                class="notice__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order_and_dismiss() {
        let mut q = NoticeQueue::default();
        let a = q.push(NoticeKind::Success, "Отель создан");
        let b = q.push(NoticeKind::Error, "Ошибка при сохранении: HTTP 500");
        assert_ne!(a, b);
        assert_eq!(q.items().len(), 2);
        assert_eq!(q.items()[0].text, "Отель создан");

        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);

        // already gone
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
    }
}
