use contracts::domain::a001_hotel::aggregate::Hotel;
use leptos::prelude::*;
use thaw::*;

use super::view_model::HotelDetailsViewModel;
use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a001_hotel::ui::list::state::HotelListState;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::field_error::FieldError;
use crate::shared::date_utils::{to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::remote::use_remote;

/// Hotel create/edit modal
#[component]
pub fn HotelDetails(
    /// `None` creates a new hotel
    hotel: Option<Hotel>,
    state: RwSignal<HotelListState>,
    on_saved: Callback<Reconciliation>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = HotelDetailsViewModel::new(hotel.as_ref());
    let notifications = use_notifications();
    let remote = StoredValue::new(use_remote());

    let title = if vm.is_edit_mode() {
        "Редактирование отеля"
    } else {
        "Новый отель"
    };
    let saving = Signal::derive(move || vm.saving.get());

    let save = move || vm.save_command(remote.get_value(), state, notifications, on_saved);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Название *"</Label>
                        <Input value=vm.name placeholder="Например, Гранд Отель" />
                        <FieldError message=vm.field_error("name") />
                    </div>

                    <div class="form__group">
                        <Label>"Город *"</Label>
                        <Input value=vm.city placeholder="Москва" />
                        <FieldError message=vm.field_error("city") />
                    </div>

                    <div class="form__group">
                        <Label>"Категория *"</Label>
                        <Select value=vm.category>
                            <option value="">"-- Выберите --"</option>
                            <option value="1">"1 звезда"</option>
                            <option value="2">"2 звезды"</option>
                            <option value="3">"3 звезды"</option>
                            <option value="4">"4 звезды"</option>
                            <option value="5">"5 звёзд"</option>
                        </Select>
                        <FieldError message=vm.field_error("category") />
                    </div>

                    <div class="form__group">
                        <Label>"Доступен с *"</Label>
                        <DateInput
                            value=vm.available_from
                            min=to_input_value(Some(today()))
                            disabled=saving
                        />
                        <FieldError message=vm.field_error("availableFromDate") />
                    </div>

                    <div class="form__group">
                        <Label>"Рейтинг"</Label>
                        <Input value=vm.rating placeholder="0.0 - 5.0" />
                    </div>

                    <div class="form__group">
                        <Label>"Ссылка на изображение"</Label>
                        <Input value=vm.image_url placeholder="https://..." />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=saving
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save()
                        disabled=saving
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Сохранение..." } else { " Сохранить" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
