use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_room::aggregate::{Room, RoomType};
use leptos::prelude::*;
use thaw::*;

use super::view_model::RoomDetailsViewModel;
use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a002_room::ui::list::state::RoomListState;
use crate::domain::a003_facility::catalog::use_facility_catalog;
use crate::shared::components::field_error::FieldError;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::remote::use_remote;

/// Room create/edit modal with facility selection
#[component]
pub fn RoomDetails(
    hotel_id: HotelId,
    /// `None` adds a new room
    room: Option<Room>,
    state: RwSignal<RoomListState>,
    on_done: Callback<Reconciliation>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = RoomDetailsViewModel::new(hotel_id, room);
    let notifications = use_notifications();
    let catalog = use_facility_catalog();
    let remote = StoredValue::new(use_remote());
    let saving = Signal::derive(move || vm.saving.get());

    let save = move || {
        vm.save_command(
            remote.get_value(),
            state,
            catalog.items.get_untracked(),
            notifications,
            on_done,
        )
    };
    let delete = move || vm.delete_command(remote.get_value(), state, notifications, on_done);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{vm.title()}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Номер комнаты *"</Label>
                        <Input value=vm.room_number placeholder="101" />
                        <FieldError message=vm.field_error("roomNumber") />
                    </div>

                    <div class="form__group">
                        <Label>"Тип *"</Label>
                        <Select value=vm.room_type>
                            <option value="">"-- Выберите --"</option>
                            {RoomType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                .collect_view()}
                        </Select>
                        <FieldError message=vm.field_error("type") />
                    </div>

                    <div class="form__group">
                        <Label>"Цена за ночь, ₽ *"</Label>
                        <Input value=vm.price placeholder="0.00" />
                        <FieldError message=vm.field_error("price") />
                    </div>

                    <div class="form__group">
                        <Label>"Удобства"</Label>
                        {move || {
                            if let Some(err) = catalog.error.get() {
                                view! { <div class="form__error">{err}</div> }.into_any()
                            } else if !catalog.loaded.get() {
                                view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                            } else {
                                view! {
                                    <CheckboxGroup value=vm.facilities>
                                        <div class="facility-list">
                                            {catalog.items.get().into_iter().map(|f| {
                                                view! {
                                                    <Checkbox value=f.id.as_str().to_string() label=f.name.clone() />
                                                }
                                            }).collect_view()}
                                        </div>
                                    </CheckboxGroup>
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </div>

                <div class="modal-footer">
                    {vm.is_edit_mode().then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| delete()
                            disabled=saving
                        >
                            {icon("delete")}
                            " Удалить комнату"
                        </Button>
                    })}
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
                        {if vm.is_edit_mode() { " Сохранить" } else { " Создать" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
