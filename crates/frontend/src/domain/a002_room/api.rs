use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_room::aggregate::{Room, RoomDto, RoomId};
use gloo_net::http::Request;

use crate::shared::api_utils::{resource_url, segment};
use crate::shared::config::ApiConfig;

/// Fetch rooms of one hotel
pub async fn fetch_rooms(cfg: &ApiConfig, hotel_id: &HotelId) -> Result<Vec<Room>, String> {
    let url = resource_url(cfg, &format!("/rooms/hotel/{}", segment(hotel_id.as_str())));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch rooms: {}", response.status()));
    }

    response
        .json::<Vec<Room>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create room; the backend answers with the canonical record
pub async fn create_room(cfg: &ApiConfig, dto: &RoomDto) -> Result<Room, String> {
    let response = Request::post(&resource_url(cfg, "/rooms"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create room: {}", response.status()));
    }

    response
        .json::<Room>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update room; the backend answers with the canonical record
pub async fn update_room(cfg: &ApiConfig, id: &RoomId, dto: &RoomDto) -> Result<Room, String> {
    let url = resource_url(cfg, &format!("/rooms/{}", segment(id.as_str())));
    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update room: {}", response.status()));
    }

    response
        .json::<Room>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete room
pub async fn delete_room(cfg: &ApiConfig, id: &RoomId) -> Result<(), String> {
    let url = resource_url(cfg, &format!("/rooms/{}", segment(id.as_str())));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete room: {}", response.status()));
    }

    Ok(())
}
