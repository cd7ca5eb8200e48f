use contracts::domain::a001_hotel::aggregate::{Hotel, HotelDto, HotelId};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::{resource_url, segment};
use crate::shared::config::ApiConfig;

/// Fetch all hotels with nested rooms
pub async fn fetch_hotels(cfg: &ApiConfig) -> Result<Vec<Hotel>, String> {
    let response = Request::get(&resource_url(cfg, "/hotels"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch hotels: {}", response.status()));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(parse_hotel_list(body))
}

/// Fetch a single hotel
pub async fn fetch_hotel(cfg: &ApiConfig, id: &HotelId) -> Result<Hotel, String> {
    let url = resource_url(cfg, &format!("/hotels/{}", segment(id.as_str())));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch hotel: {}", response.status()));
    }

    response
        .json::<Hotel>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new hotel
pub async fn create_hotel(cfg: &ApiConfig, dto: &HotelDto) -> Result<(), String> {
    let response = Request::post(&resource_url(cfg, "/hotels"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create hotel: {}", response.status()));
    }

    Ok(())
}

/// Update hotel
pub async fn update_hotel(cfg: &ApiConfig, id: &HotelId, dto: &HotelDto) -> Result<(), String> {
    let url = resource_url(cfg, &format!("/hotels/{}", segment(id.as_str())));
    let response = Request::put(&url)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update hotel: {}", response.status()));
    }

    Ok(())
}

/// Delete hotel
pub async fn delete_hotel(cfg: &ApiConfig, id: &HotelId) -> Result<(), String> {
    let url = resource_url(cfg, &format!("/hotels/{}", segment(id.as_str())));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete hotel: {}", response.status()));
    }

    Ok(())
}

/// Decode a hotel-list body without failing the whole load.
///
/// A body that is not an array yields an empty list; elements that do not
/// decode as a [`Hotel`] are dropped with a warning.
pub fn parse_hotel_list(body: Value) -> Vec<Hotel> {
    let Value::Array(items) = body else {
        log::warn!("Hotel list response is not an array; treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Hotel>(item) {
            Ok(hotel) => Some(hotel),
            Err(e) => {
                log::warn!("Skipping malformed hotel at index {}: {}", idx, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_non_array_is_empty() {
        assert!(parse_hotel_list(json!({"error": "oops"})).is_empty());
        assert!(parse_hotel_list(Value::Null).is_empty());
        assert!(parse_hotel_list(json!("text")).is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_elements() {
        let body = json!([
            {"id": "h1", "name": "A", "city": "Казань", "category": "3",
             "availableFromDate": "2025-03-01", "rooms": []},
            {"id": "h2", "name": "B"},
            {"id": "h3", "name": "C", "city": "Сочи", "category": "5",
             "availableFromDate": "2025-04-01"}
        ]);
        let hotels = parse_hotel_list(body);
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h3"]);
    }
}
