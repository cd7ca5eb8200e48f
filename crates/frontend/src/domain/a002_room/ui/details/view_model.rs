use std::collections::HashSet;

use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_room::aggregate::{Room, RoomDto, RoomType};
use contracts::domain::a003_facility::aggregate::{Facility, FacilityId};
use contracts::shared::validation::{ValidationContext, ValidationErrors};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a001_hotel::sync::SyncController;
use crate::domain::a002_room::filter::parse_price_bound;
use crate::domain::a002_room::ui::list::state::RoomListState;
use crate::shared::date_utils;
use crate::shared::errors::AppError;
use crate::shared::mutation::EntityKey;
use crate::shared::notifications::Notifications;
use crate::shared::remote::HttpRemote;

/// Room form as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFormInput {
    pub room_number: String,
    /// Wire code of the room type; empty when nothing is selected
    pub room_type: String,
    pub price: String,
    pub facilities: HashSet<String>,
}

impl RoomFormInput {
    pub fn from_room(room: &Room) -> Self {
        Self {
            room_number: room.room_number.clone(),
            room_type: room.room_type.code().to_string(),
            price: room.price.to_string(),
            facilities: room.facility_ids().map(|id| id.as_str().to_string()).collect(),
        }
    }

    pub fn to_dto(&self, hotel_id: HotelId) -> RoomDto {
        RoomDto {
            room_number: self.room_number.clone(),
            room_type: RoomType::from_code(&self.room_type),
            price: parse_price_bound(&self.price),
            hotel_id,
        }
    }

    pub fn desired_facilities(&self) -> HashSet<FacilityId> {
        self.facilities.iter().map(FacilityId::new).collect()
    }
}

/// ViewModel of the room create/edit modal
#[derive(Clone, Copy)]
pub struct RoomDetailsViewModel {
    hotel_id: StoredValue<HotelId>,
    room: StoredValue<Option<Room>>,
    pub room_number: RwSignal<String>,
    pub room_type: RwSignal<String>,
    pub price: RwSignal<String>,
    pub facilities: RwSignal<HashSet<String>>,
    pub errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

impl RoomDetailsViewModel {
    pub fn new(hotel_id: HotelId, room: Option<Room>) -> Self {
        let input = room.as_ref().map(RoomFormInput::from_room).unwrap_or_default();
        Self {
            hotel_id: StoredValue::new(hotel_id),
            room: StoredValue::new(room),
            room_number: RwSignal::new(input.room_number),
            room_type: RwSignal::new(input.room_type),
            price: RwSignal::new(input.price),
            facilities: RwSignal::new(input.facilities),
            errors: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn title(&self) -> String {
        self.room.with_value(|r| match r {
            Some(r) => format!("Редактировать комнату {}", r.room_number),
            None => "Добавить комнату".to_string(),
        })
    }

    pub fn is_edit_mode(&self) -> bool {
        self.room.with_value(Option::is_some)
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| {
                e.as_ref()
                    .and_then(|e| e.for_field(field))
                    .map(str::to_string)
            })
        })
    }

    fn input(&self) -> RoomFormInput {
        RoomFormInput {
            room_number: self.room_number.get_untracked(),
            room_type: self.room_type.get_untracked(),
            price: self.price.get_untracked(),
            facilities: self.facilities.get_untracked(),
        }
    }

    fn key(&self) -> EntityKey {
        match self.room.with_value(|r| r.as_ref().map(|r| r.id.clone())) {
            Some(id) => EntityKey::Room(id),
            None => EntityKey::NewRoom(self.hotel_id.get_value()),
        }
    }

    fn begin(
        &self,
        state: RwSignal<RoomListState>,
        notifications: Notifications,
    ) -> Option<EntityKey> {
        let key = self.key();
        let mut started = Ok(());
        state.update(|s| started = s.mutations.begin(key.clone()));
        match started {
            Ok(()) => Some(key),
            Err(e) => {
                notifications.error(&e);
                None
            }
        }
    }

    /// Save the room record, then its facility links.
    pub fn save_command(
        &self,
        remote: HttpRemote,
        state: RwSignal<RoomListState>,
        catalog: Vec<Facility>,
        notifications: Notifications,
        on_done: Callback<Reconciliation>,
    ) {
        let hotel_id = self.hotel_id.get_value();
        let input = self.input();
        let dto = input.to_dto(hotel_id.clone());

        if let Err(e) = dto.validate(&ValidationContext::new(date_utils::today())) {
            log::debug!("Room form rejected: {}", e);
            self.errors.set(Some(e));
            return;
        }
        self.errors.set(None);

        let Some(key) = self.begin(state, notifications) else {
            return;
        };

        self.saving.set(true);
        let vm = *self;
        let previous: Option<Room> = self.room.get_value();
        spawn_local(async move {
            let sync = SyncController::new(remote);
            let result = sync
                .save_room(
                    &hotel_id,
                    previous.as_ref(),
                    &dto,
                    &input.desired_facilities(),
                    &catalog,
                )
                .await;
            state.update(|s| s.mutations.finish(key, &result));
            vm.saving.set(false);

            match result {
                Ok(saved) => {
                    notifications.success(if previous.is_some() {
                        "Комната успешно обновлена"
                    } else {
                        "Комната успешно создана"
                    });
                    if let Some(warning) = saved.facilities.warning() {
                        notifications.warning(warning);
                    }
                    on_done.run(saved.change);
                }
                Err(AppError::Validation(errors)) => vm.errors.set(Some(errors)),
                Err(e) => notifications.error(&e),
            }
        });
    }

    pub fn delete_command(
        &self,
        remote: HttpRemote,
        state: RwSignal<RoomListState>,
        notifications: Notifications,
        on_done: Callback<Reconciliation>,
    ) {
        let Some(room) = self.room.get_value() else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Удалить комнату?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let Some(key) = self.begin(state, notifications) else {
            return;
        };

        self.saving.set(true);
        let vm = *self;
        let hotel_id = self.hotel_id.get_value();
        spawn_local(async move {
            let sync = SyncController::new(remote);
            let result = sync.delete_room(&hotel_id, &room.id).await;
            state.update(|s| s.mutations.finish(key, &result));
            vm.saving.set(false);

            match result {
                Ok(change) => {
                    notifications.success("Комната удалена");
                    on_done.run(change);
                }
                Err(e) => notifications.error(&e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::store::tests::room;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_prefill_round_trips_to_same_dto() {
        let mut r = room("r1", "101", RoomType::Suite, 250.0);
        r.facilities = vec![Facility {
            id: FacilityId::new("f1"),
            name: "Wi-Fi".into(),
        }];
        let input = RoomFormInput::from_room(&r);
        assert_eq!(input.room_type, "SUITE");
        assert_eq!(input.to_dto(HotelId::new("h1")), r.to_dto(HotelId::new("h1")));
        assert!(input.desired_facilities().contains(&FacilityId::new("f1")));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let dto = RoomFormInput::default().to_dto(HotelId::new("h1"));
        assert_eq!(dto.room_type, None);
        assert_eq!(dto.price, None);

        let errors = dto.validate(&ctx()).unwrap_err();
        assert!(errors.for_field("roomNumber").is_some());
        assert!(errors.for_field("type").is_some());
        assert!(errors.for_field("price").is_some());
    }

    #[test]
    fn test_price_with_comma() {
        let input = RoomFormInput {
            room_number: "12".into(),
            room_type: "DOUBLE".into(),
            price: "99,5".into(),
            facilities: HashSet::new(),
        };
        let dto = input.to_dto(HotelId::new("h1"));
        assert_eq!(dto.price, Some(99.5));
        assert!(dto.validate(&ctx()).is_ok());
    }
}
