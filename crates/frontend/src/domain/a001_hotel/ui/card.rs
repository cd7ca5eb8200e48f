use contracts::domain::a001_hotel::aggregate::Hotel;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_hotel::facets::HotelSummary;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// "★★★☆☆"
pub fn stars(count: u8) -> String {
    let filled = usize::from(count.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn HotelCard(
    hotel: Hotel,
    /// A mutation on this hotel is in flight
    #[prop(into)]
    pending: Signal<bool>,
    on_edit: Callback<Hotel>,
    on_delete: Callback<Hotel>,
    on_open_rooms: Callback<Hotel>,
) -> impl IntoView {
    let summary = HotelSummary::derive(&hotel);
    let hotel = StoredValue::new(hotel);
    let h = hotel.get_value();

    let image = if h.image_url.is_empty() {
        view! { <div class="hotel-card__image hotel-card__image--empty">{icon("building")}</div> }
            .into_any()
    } else {
        view! { <img class="hotel-card__image" src=h.image_url.clone() alt=h.name.clone() /> }
            .into_any()
    };

    let room_types = summary
        .room_types
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");
    let amenities = summary.amenities.join(", ");

    view! {
        <div class="hotel-card" class:hotel-card--pending=move || pending.get()>
            {image}
            <div class="hotel-card__body">
                <div class="hotel-card__header">
                    <h3 class="hotel-card__title">{h.name.clone()}</h3>
                    <span class="hotel-card__stars" title=format!("Категория: {}", h.category)>
                        {stars(h.category_stars())}
                    </span>
                </div>
                <div class="hotel-card__meta">
                    <span>{icon("map-pin")} {h.city.clone()}</span>
                    <span>"Рейтинг: " {format!("{:.1}", h.rating)}</span>
                    <span>"Доступен с " {format_date(h.available_from_date)}</span>
                </div>

                <div class="hotel-card__summary">
                    {summary
                        .price_label()
                        .map(|p| view! { <div class="hotel-card__price">{p}</div> })}
                    <div class="hotel-card__rooms">
                        {format!("Номеров: {}", summary.room_count)}
                    </div>
                    {(!room_types.is_empty())
                        .then(|| view! { <div class="hotel-card__types">{room_types.clone()}</div> })}
                    {(!amenities.is_empty())
                        .then(|| view! { <div class="hotel-card__amenities">{amenities.clone()}</div> })}
                </div>

                <div class="hotel-card__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_open_rooms.run(hotel.get_value())
                    >
                        {icon("list")}
                        " Номера"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=pending
                        on_click=move |_| on_edit.run(hotel.get_value())
                    >
                        {icon("edit")}
                        " Изменить"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=pending
                        on_click=move |_| on_delete.run(hotel.get_value())
                    >
                        {icon("delete")}
                        " Удалить"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
