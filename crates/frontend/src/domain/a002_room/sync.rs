//! Room CRUD and room–facility association.
//!
//! Room writes are reconciled by patching the owning hotel's room list,
//! never by a full reload. Facility links are synced after the room record
//! itself is saved; their failures are reported, not propagated.

use std::collections::HashSet;

use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_room::aggregate::{Room, RoomDto, RoomId};
use contracts::domain::a003_facility::aggregate::{Facility, FacilityId};
use futures::future::join_all;

use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a001_hotel::sync::SyncController;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::remote::RemoteApi;

/// Facility links to create and drop, each sorted by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityDiff {
    pub to_add: Vec<FacilityId>,
    pub to_remove: Vec<FacilityId>,
}

impl FacilityDiff {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

pub fn diff_facilities(current: &HashSet<FacilityId>, desired: &HashSet<FacilityId>) -> FacilityDiff {
    let mut to_add: Vec<FacilityId> = desired.difference(current).cloned().collect();
    let mut to_remove: Vec<FacilityId> = current.difference(desired).cloned().collect();
    to_add.sort();
    to_remove.sort();
    FacilityDiff { to_add, to_remove }
}

/// What the backend accepted out of a [`FacilityDiff`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacilitySyncReport {
    pub added: Vec<FacilityId>,
    pub removed: Vec<FacilityId>,
    pub failed: Vec<(FacilityId, AppError)>,
}

impl FacilitySyncReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Text for the warning notification shown on partial failure
    pub fn warning(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        Some(format!(
            "Номер сохранён, но не удалось обновить удобства ({})",
            self.failed.len()
        ))
    }
}

/// Outcome of [`SyncController::save_room`]
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSaved {
    /// Canonical room as returned by the backend, with facilities patched
    pub room: Room,
    pub change: Reconciliation,
    pub facilities: FacilitySyncReport,
}

impl<R: RemoteApi> SyncController<R> {
    /// Hotel header and its rooms for the room view, fetched concurrently.
    pub async fn load_hotel_rooms(&self, hotel_id: &HotelId) -> AppResult<Reconciliation> {
        let (hotel, rooms) = futures::join!(
            self.remote.fetch_hotel(hotel_id),
            self.remote.fetch_rooms(hotel_id)
        );
        let (mut hotel, rooms) = match (hotel, rooms) {
            (Ok(hotel), Ok(rooms)) => (hotel, rooms),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("Rooms of hotel {} failed to load: {}", hotel_id, e);
                return Err(e);
            }
        };
        log::debug!("Loaded {} room(s) of hotel {}", rooms.len(), hotel_id);
        hotel.rooms = rooms;
        Ok(Reconciliation::Loaded(vec![hotel]))
    }

    pub async fn create_room(&self, hotel_id: &HotelId, dto: &RoomDto) -> AppResult<Room> {
        let dto = RoomDto {
            room_number: dto.room_number.trim().to_string(),
            hotel_id: hotel_id.clone(),
            ..dto.clone()
        };
        dto.validate(&self.validation_context())?;

        log::info!("Creating room '{}' in hotel {}", dto.room_number, hotel_id);
        self.remote.create_room(&dto).await.map_err(|e| {
            log::error!("Room create failed: {}", e);
            e
        })
    }

    pub async fn update_room(&self, room_id: &RoomId, dto: &RoomDto) -> AppResult<Room> {
        let dto = RoomDto {
            room_number: dto.room_number.trim().to_string(),
            ..dto.clone()
        };
        dto.validate(&self.validation_context())?;

        log::info!("Updating room {}", room_id);
        self.remote.update_room(room_id, &dto).await.map_err(|e| {
            log::error!("Room {} update failed: {}", room_id, e);
            e
        })
    }

    pub async fn delete_room(&self, hotel_id: &HotelId, room_id: &RoomId) -> AppResult<Reconciliation> {
        log::info!("Deleting room {}", room_id);
        self.remote.delete_room(room_id).await.map_err(|e| {
            log::error!("Room {} delete failed: {}", room_id, e);
            e
        })?;
        Ok(Reconciliation::RoomRemoved {
            hotel_id: hotel_id.clone(),
            room_id: room_id.clone(),
        })
    }

    /// Issue one add per newly selected and one remove per deselected facility,
    /// concurrently. Returns the room with its facility list patched to what
    /// the backend accepted.
    pub async fn set_room_facilities(
        &self,
        room: &Room,
        desired: &HashSet<FacilityId>,
        catalog: &[Facility],
    ) -> (Room, FacilitySyncReport) {
        let current: HashSet<FacilityId> = room.facility_ids().cloned().collect();
        let mut report = FacilitySyncReport::default();
        let mut known = HashSet::new();
        for id in desired {
            if current.contains(id) || catalog.iter().any(|f| &f.id == id) {
                known.insert(id.clone());
            } else {
                log::warn!("Facility {} is not in the catalog, not linked", id);
                report.failed.push((
                    id.clone(),
                    AppError::Save(format!("удобство {} отсутствует в справочнике", id)),
                ));
            }
        }
        report.failed.sort_by(|a, b| a.0.cmp(&b.0));
        let diff = diff_facilities(&current, &known);

        if diff.is_empty() {
            return (room.clone(), report);
        }

        let adds = join_all(diff.to_add.iter().map(|id| async move {
            (id.clone(), self.remote.add_room_facility(&room.id, id).await)
        }));
        let removes = join_all(diff.to_remove.iter().map(|id| async move {
            (id.clone(), self.remote.remove_room_facility(&room.id, id).await)
        }));
        let (adds, removes) = futures::join!(adds, removes);

        for (id, outcome) in adds {
            match outcome {
                Ok(()) => report.added.push(id),
                Err(e) => report.failed.push((id, e)),
            }
        }
        for (id, outcome) in removes {
            match outcome {
                Ok(()) => report.removed.push(id),
                Err(e) => report.failed.push((id, e)),
            }
        }
        for (id, e) in &report.failed {
            log::warn!("Room {}: facility {} not synced: {}", room.id, id, e);
        }

        let mut patched = room.clone();
        patched.facilities.retain(|f| !report.removed.contains(&f.id));
        for id in &report.added {
            if let Some(facility) = catalog.iter().find(|f| &f.id == id) {
                patched.facilities.push(facility.clone());
            }
        }
        (patched, report)
    }

    /// Create or update the room record, then sync its facility links.
    /// `previous` is the room as it was before the edit, `None` for a new one.
    /// Only a failure of the room record itself fails the whole operation.
    pub async fn save_room(
        &self,
        hotel_id: &HotelId,
        previous: Option<&Room>,
        dto: &RoomDto,
        desired: &HashSet<FacilityId>,
        catalog: &[Facility],
    ) -> AppResult<RoomSaved> {
        let (saved, linked) = match previous {
            Some(prev) => (self.update_room(&prev.id, dto).await?, prev.facilities.clone()),
            None => (self.create_room(hotel_id, dto).await?, Vec::new()),
        };
        // Ответ PUT/POST не обязан содержать удобства: сравниваем с исходными связями
        let base = Room {
            facilities: linked,
            ..saved
        };
        let (room, facilities) = self.set_room_facilities(&base, desired, catalog).await;

        Ok(RoomSaved {
            change: Reconciliation::RoomUpserted {
                hotel_id: hotel_id.clone(),
                room: room.clone(),
            },
            room,
            facilities,
        })
    }
}
