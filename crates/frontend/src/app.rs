use crate::app_shell::AppShell;
use crate::domain::a003_facility::catalog::FacilityCatalog;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::ApiConfig;
use crate::shared::notifications::{NotificationHost, Notifications};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(ApiConfig::load());
    provide_context(Notifications::new());
    // Справочник удобств общий для всех вкладок номеров
    provide_context(FacilityCatalog::new());

    view! {
        <ConfigProvider>
            <AppShell />
            <NotificationHost />
        </ConfigProvider>
    }
}
