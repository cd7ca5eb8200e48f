use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Заголовок таба в полосе табов
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| key.with_value(|k| tabs_store.active.with(|a| a.as_deref() == Some(k.as_str()))));

    // Заголовок может поменяться после открытия (номера отеля)
    let title = move || {
        key.with_value(|k| {
            tabs_store
                .opened
                .with(|tabs| tabs.iter().find(|t| &t.key == k).map(|t| t.title.clone()))
        })
        .unwrap_or_default()
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span>{title}</span>
            <button class="tab-close" title="Закрыть" on:click=on_close>"×"</button>
        </div>
    }
}
