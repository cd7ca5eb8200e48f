//! Application Shell - корневой layout приложения (Shell + Sidebar + Tabs)

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use leptos::prelude::*;

const START_TAB: &str = "home";

/// Инициализирует router integration (синхронизация `?active=` с активным табом)
/// и открывает стартовую страницу, если URL ничего не открыл.
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(START_TAB, tab_label_for_key(START_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
