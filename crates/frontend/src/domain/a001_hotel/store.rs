//! Canonical in-memory list of hotels for the active view.
//!
//! The backend is the source of truth; this store only mirrors it.
//! [`HotelStore::reconcile`] is the single mutation entry point.

use std::collections::HashSet;

use contracts::domain::a001_hotel::aggregate::{Hotel, HotelId};
use contracts::domain::a002_room::aggregate::{Room, RoomId};

/// Outcome of a successful remote operation, to be folded into the store
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Initial or manual full load
    Loaded(Vec<Hotel>),
    /// Full reload after a hotel create/update; resets the list filters
    HotelSaved(Vec<Hotel>),
    HotelRemoved(HotelId),
    /// Replace the room with the same id, or append it
    RoomUpserted { hotel_id: HotelId, room: Room },
    RoomRemoved { hotel_id: HotelId, room_id: RoomId },
}

impl Reconciliation {
    /// Whether this outcome follows a hotel create/update
    pub fn resets_filters(&self) -> bool {
        matches!(self, Reconciliation::HotelSaved(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelStore {
    hotels: Vec<Hotel>,
}

impl HotelStore {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        let mut store = Self::default();
        store.replace_all(hotels);
        store
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn get(&self, id: &HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|h| &h.id == id)
    }

    /// Hotel owning the given room
    pub fn owner_of(&self, room_id: &RoomId) -> Option<&Hotel> {
        self.hotels
            .iter()
            .find(|h| h.rooms.iter().any(|r| &r.id == room_id))
    }

    pub fn reconcile(&mut self, change: Reconciliation) {
        match change {
            Reconciliation::Loaded(hotels) | Reconciliation::HotelSaved(hotels) => {
                self.replace_all(hotels)
            }
            Reconciliation::HotelRemoved(id) => self.hotels.retain(|h| h.id != id),
            Reconciliation::RoomUpserted { hotel_id, room } => {
                let Some(hotel) = self.hotels.iter_mut().find(|h| h.id == hotel_id) else {
                    log::warn!("Room {} patched into unknown hotel {}", room.id, hotel_id);
                    return;
                };
                match hotel.rooms.iter_mut().find(|r| r.id == room.id) {
                    Some(slot) => *slot = room,
                    None => hotel.rooms.push(room),
                }
            }
            Reconciliation::RoomRemoved { hotel_id, room_id } => {
                if let Some(hotel) = self.hotels.iter_mut().find(|h| h.id == hotel_id) {
                    hotel.rooms.retain(|r| r.id != room_id);
                }
            }
        }
    }

    /// Replace the whole list; duplicate ids keep their first occurrence.
    fn replace_all(&mut self, hotels: Vec<Hotel>) {
        let mut seen = HashSet::with_capacity(hotels.len());
        let total = hotels.len();
        self.hotels = hotels
            .into_iter()
            .filter(|h| seen.insert(h.id.clone()))
            .collect();
        if self.hotels.len() != total {
            log::warn!(
                "Dropped {} hotel(s) with duplicate ids",
                total - self.hotels.len()
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_room::aggregate::RoomType;

    pub(crate) fn hotel(id: &str, name: &str, city: &str, category: &str, from: &str) -> Hotel {
        Hotel {
            id: HotelId::new(id),
            name: name.into(),
            city: city.into(),
            category: category.into(),
            available_from_date: NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap(),
            rating: 4.0,
            image_url: String::new(),
            rooms: vec![],
        }
    }

    pub(crate) fn room(id: &str, number: &str, room_type: RoomType, price: f64) -> Room {
        Room {
            id: RoomId::new(id),
            room_number: number.into(),
            room_type,
            price,
            facilities: vec![],
        }
    }

    fn ids(store: &HotelStore) -> Vec<&str> {
        store.hotels().iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_ids_are_unique_after_load() {
        let mut store = HotelStore::default();
        store.reconcile(Reconciliation::Loaded(vec![
            hotel("h1", "A", "Москва", "3", "2025-01-01"),
            hotel("h2", "B", "Казань", "4", "2025-01-01"),
            hotel("h1", "A-dup", "Сочи", "5", "2025-01-01"),
        ]));
        assert_eq!(ids(&store), vec!["h1", "h2"]);
        assert_eq!(store.get(&HotelId::new("h1")).unwrap().name, "A");
    }

    #[test]
    fn test_delete_hotel() {
        let mut store = HotelStore::new(vec![
            hotel("h1", "A", "Москва", "3", "2025-01-01"),
            hotel("h2", "B", "Казань", "4", "2025-01-01"),
        ]);
        store.reconcile(Reconciliation::HotelRemoved(HotelId::new("h1")));
        assert_eq!(ids(&store), vec!["h2"]);
    }

    #[test]
    fn test_room_patch_replace_append_remove() {
        let mut store = HotelStore::new(vec![hotel("h1", "A", "Москва", "3", "2025-01-01")]);
        let h1 = HotelId::new("h1");

        store.reconcile(Reconciliation::RoomUpserted {
            hotel_id: h1.clone(),
            room: room("r1", "101", RoomType::Single, 100.0),
        });
        store.reconcile(Reconciliation::RoomUpserted {
            hotel_id: h1.clone(),
            room: room("r2", "102", RoomType::Double, 150.0),
        });
        store.reconcile(Reconciliation::RoomUpserted {
            hotel_id: h1.clone(),
            room: room("r1", "101", RoomType::Suite, 300.0),
        });

        let rooms = &store.get(&h1).unwrap().rooms;
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].room_type, RoomType::Suite);
        assert_eq!(rooms[0].price, 300.0);
        assert_eq!(store.owner_of(&RoomId::new("r2")).unwrap().id, h1);

        store.reconcile(Reconciliation::RoomRemoved {
            hotel_id: h1.clone(),
            room_id: RoomId::new("r1"),
        });
        let rooms = &store.get(&h1).unwrap().rooms;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id.as_str(), "r2");
    }

    #[test]
    fn test_room_patch_into_unknown_hotel_is_ignored() {
        let mut store = HotelStore::new(vec![hotel("h1", "A", "Москва", "3", "2025-01-01")]);
        let before = store.clone();
        store.reconcile(Reconciliation::RoomUpserted {
            hotel_id: HotelId::new("nope"),
            room: room("r1", "1", RoomType::Single, 1.0),
        });
        assert_eq!(store, before);
    }
}
