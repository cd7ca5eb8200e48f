//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::hotel_id_from_room_tab;
use crate::domain::a001_hotel::ui::list::HotelList;
use crate::domain::a002_room::ui::list::RoomPage;
use crate::system::pages::home::HomePage;
use crate::system::support::ui::SupportPage;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Неизвестные ключи (например, из устаревшей ссылки `?active=`) дают placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "home" => view! { <HomePage /> }.into_any(),
        "a001_hotel" => view! { <HotelList /> }.into_any(),
        "support" => view! { <SupportPage /> }.into_any(),
        k => match hotel_id_from_room_tab(k) {
            Some(hotel_id) => view! { <RoomPage hotel_id=hotel_id.to_string() /> }.into_any(),
            None => {
                log::warn!("Unknown tab type: {}", key);
                view! { <div class="placeholder">{"Страница не найдена"}</div> }.into_any()
            }
        },
    }
}
