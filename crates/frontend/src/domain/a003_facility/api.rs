use contracts::domain::a002_room::aggregate::RoomId;
use contracts::domain::a003_facility::aggregate::{Facility, FacilityDto, FacilityId};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, segment};
use crate::shared::config::ApiConfig;

/// Fetch the global facility catalog
pub async fn fetch_facilities(cfg: &ApiConfig) -> Result<Vec<Facility>, String> {
    let response = Request::get(&api_url(cfg, "/facilities"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch facilities: {}", response.status()));
    }

    response
        .json::<Vec<Facility>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create catalog entry
pub async fn create_facility(cfg: &ApiConfig, dto: &FacilityDto) -> Result<Facility, String> {
    let response = Request::post(&api_url(cfg, "/facilities"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create facility: {}", response.status()));
    }

    response
        .json::<Facility>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Attach a facility to a room
pub async fn add_to_room(
    cfg: &ApiConfig,
    room_id: &RoomId,
    facility_id: &FacilityId,
) -> Result<(), String> {
    let url = api_url(
        cfg,
        &format!(
            "/facilities/{}/add/{}",
            segment(room_id.as_str()),
            segment(facility_id.as_str())
        ),
    );
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to add facility: {}", response.status()));
    }

    Ok(())
}

/// Detach a facility from a room
pub async fn remove_from_room(
    cfg: &ApiConfig,
    room_id: &RoomId,
    facility_id: &FacilityId,
) -> Result<(), String> {
    let url = api_url(
        cfg,
        &format!(
            "/facilities/{}/remove/{}",
            segment(room_id.as_str()),
            segment(facility_id.as_str())
        ),
    );
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to remove facility: {}", response.status()));
    }

    Ok(())
}
