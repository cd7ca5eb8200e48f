use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId};
use contracts::domain::a002_room::aggregate::{Room, RoomType};
use leptos::prelude::*;

use crate::domain::a001_hotel::facets::room_types;
use crate::domain::a001_hotel::store::{HotelStore, Reconciliation};
use crate::domain::a002_room::filter::{sorted_rooms, RoomFilter};
use crate::shared::list_utils::sort_list;
use crate::shared::mutation::MutationTracker;

/// Room view of a single hotel; the store holds just that hotel.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomListState {
    pub hotel_id: HotelId,
    pub store: HotelStore,
    pub filter: RoomFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub mutations: MutationTracker,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl RoomListState {
    pub fn new(hotel_id: HotelId) -> Self {
        Self {
            hotel_id,
            store: HotelStore::default(),
            filter: RoomFilter::default(),
            sort_field: "room_number".to_string(),
            sort_ascending: true,
            mutations: MutationTracker::default(),
            is_loaded: false,
            is_loading: false,
            error: None,
        }
    }

    pub fn apply(&mut self, change: Reconciliation) {
        if matches!(change, Reconciliation::Loaded(_)) {
            self.is_loaded = true;
            self.is_loading = false;
            self.error = None;
        }
        self.store.reconcile(change);
    }

    pub fn load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn hotel(&self) -> Option<&Hotel> {
        self.store.get(&self.hotel_id)
    }

    /// All rooms in room-number order
    pub fn rooms(&self) -> Vec<Room> {
        sorted_rooms(self.hotel().map(|h| h.rooms.clone()).unwrap_or_default())
    }

    /// Filtered rooms in the user's chosen column order
    pub fn visible(&self) -> Vec<Room> {
        let mut rooms = self.filter.apply(&self.rooms());
        sort_list(&mut rooms, &self.sort_field, self.sort_ascending);
        rooms
    }

    pub fn room_type_facet(&self) -> Vec<RoomType> {
        self.hotel().map(|h| room_types(&h.rooms)).unwrap_or_default()
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

pub fn create_state(hotel_id: HotelId) -> RwSignal<RoomListState> {
    RwSignal::new(RoomListState::new(hotel_id))
}
