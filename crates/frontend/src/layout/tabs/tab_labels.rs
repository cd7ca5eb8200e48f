//! Tab labels - единственный источник правды для заголовков табов.

use contracts::domain::a001_hotel::aggregate::Hotel;
use contracts::domain::a002_room::aggregate::Room;
use contracts::domain::common::AggregateRoot;

/// Prefix of the per-hotel room tab: `a002_room_{hotel_id}`
pub const ROOM_TAB_PREFIX: &str = "a002_room_";

/// Заголовок таба для статического ключа. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "home" => "Главная",
        "a001_hotel" => Hotel::list_name(),
        "support" => "Поддержка",
        k if k.starts_with(ROOM_TAB_PREFIX) => Room::list_name(),
        _ => "",
    }
}

pub fn room_tab_key(hotel_id: &str) -> String {
    format!("{}{}", ROOM_TAB_PREFIX, hotel_id)
}

/// Hotel id encoded in a room tab key; `None` for other keys or an empty id
pub fn hotel_id_from_room_tab(key: &str) -> Option<&str> {
    key.strip_prefix(ROOM_TAB_PREFIX).filter(|id| !id.is_empty())
}
