//! The REST backend as seen by the sync layer.
//!
//! [`RemoteApi`] is the seam between reconciliation logic and the network:
//! [`HttpRemote`] forwards to the gloo-net functions in each aggregate's
//! `api` module and classifies their errors into [`AppError`].

use async_trait::async_trait;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelDto, HotelId};
use contracts::domain::a002_room::aggregate::{Room, RoomDto, RoomId};
use contracts::domain::a003_facility::aggregate::{Facility, FacilityDto, FacilityId};
use contracts::system::support::SupportMessageDto;

use crate::domain::{a001_hotel, a002_room, a003_facility};
use crate::shared::config::ApiConfig;
use crate::shared::errors::AppError;
use crate::system::support;

#[async_trait(?Send)]
pub trait RemoteApi {
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, AppError>;
    async fn fetch_hotel(&self, id: &HotelId) -> Result<Hotel, AppError>;
    async fn create_hotel(&self, dto: &HotelDto) -> Result<(), AppError>;
    async fn update_hotel(&self, id: &HotelId, dto: &HotelDto) -> Result<(), AppError>;
    async fn delete_hotel(&self, id: &HotelId) -> Result<(), AppError>;

    async fn fetch_rooms(&self, hotel_id: &HotelId) -> Result<Vec<Room>, AppError>;
    async fn create_room(&self, dto: &RoomDto) -> Result<Room, AppError>;
    async fn update_room(&self, id: &RoomId, dto: &RoomDto) -> Result<Room, AppError>;
    async fn delete_room(&self, id: &RoomId) -> Result<(), AppError>;

    async fn fetch_facilities(&self) -> Result<Vec<Facility>, AppError>;
    async fn create_facility(&self, dto: &FacilityDto) -> Result<Facility, AppError>;
    async fn add_room_facility(&self, room_id: &RoomId, facility_id: &FacilityId)
        -> Result<(), AppError>;
    async fn remove_room_facility(
        &self,
        room_id: &RoomId,
        facility_id: &FacilityId,
    ) -> Result<(), AppError>;

    async fn send_support_message(&self, dto: &SupportMessageDto) -> Result<(), AppError>;
}

/// gloo-net backed implementation
#[derive(Debug, Clone)]
pub struct HttpRemote {
    cfg: ApiConfig,
}

impl HttpRemote {
    pub fn new(cfg: ApiConfig) -> Self {
        Self { cfg }
    }
}

/// HTTP backend built from the `ApiConfig` in context
pub fn use_remote() -> HttpRemote {
    let cfg = leptos::prelude::use_context::<ApiConfig>().unwrap_or_default();
    HttpRemote::new(cfg)
}

#[async_trait(?Send)]
impl RemoteApi for HttpRemote {
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        a001_hotel::api::fetch_hotels(&self.cfg)
            .await
            .map_err(AppError::Fetch)
    }

    async fn fetch_hotel(&self, id: &HotelId) -> Result<Hotel, AppError> {
        a001_hotel::api::fetch_hotel(&self.cfg, id)
            .await
            .map_err(AppError::Fetch)
    }

    async fn create_hotel(&self, dto: &HotelDto) -> Result<(), AppError> {
        a001_hotel::api::create_hotel(&self.cfg, dto)
            .await
            .map_err(AppError::Save)
    }

    async fn update_hotel(&self, id: &HotelId, dto: &HotelDto) -> Result<(), AppError> {
        a001_hotel::api::update_hotel(&self.cfg, id, dto)
            .await
            .map_err(AppError::Save)
    }

    async fn delete_hotel(&self, id: &HotelId) -> Result<(), AppError> {
        a001_hotel::api::delete_hotel(&self.cfg, id)
            .await
            .map_err(AppError::Delete)
    }

    async fn fetch_rooms(&self, hotel_id: &HotelId) -> Result<Vec<Room>, AppError> {
        a002_room::api::fetch_rooms(&self.cfg, hotel_id)
            .await
            .map_err(AppError::Fetch)
    }

    async fn create_room(&self, dto: &RoomDto) -> Result<Room, AppError> {
        a002_room::api::create_room(&self.cfg, dto)
            .await
            .map_err(AppError::Save)
    }

    async fn update_room(&self, id: &RoomId, dto: &RoomDto) -> Result<Room, AppError> {
        a002_room::api::update_room(&self.cfg, id, dto)
            .await
            .map_err(AppError::Save)
    }

    async fn delete_room(&self, id: &RoomId) -> Result<(), AppError> {
        a002_room::api::delete_room(&self.cfg, id)
            .await
            .map_err(AppError::Delete)
    }

    async fn fetch_facilities(&self) -> Result<Vec<Facility>, AppError> {
        a003_facility::api::fetch_facilities(&self.cfg)
            .await
            .map_err(AppError::Fetch)
    }

    async fn create_facility(&self, dto: &FacilityDto) -> Result<Facility, AppError> {
        a003_facility::api::create_facility(&self.cfg, dto)
            .await
            .map_err(AppError::Save)
    }

    async fn add_room_facility(
        &self,
        room_id: &RoomId,
        facility_id: &FacilityId,
    ) -> Result<(), AppError> {
        a003_facility::api::add_to_room(&self.cfg, room_id, facility_id)
            .await
            .map_err(AppError::Save)
    }

    async fn remove_room_facility(
        &self,
        room_id: &RoomId,
        facility_id: &FacilityId,
    ) -> Result<(), AppError> {
        a003_facility::api::remove_from_room(&self.cfg, room_id, facility_id)
            .await
            .map_err(AppError::Delete)
    }

    async fn send_support_message(&self, dto: &SupportMessageDto) -> Result<(), AppError> {
        support::api::send_message(&self.cfg, dto)
            .await
            .map_err(AppError::Save)
    }
}
