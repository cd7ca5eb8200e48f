//! Distinct-value sets derived from the current hotel list.
//!
//! Everything here is a pure function of its input; nothing is cached
//! beyond the reactive memo that calls it.

use contracts::domain::a001_hotel::aggregate::Hotel;
use contracts::domain::a002_room::aggregate::{Room, RoomType};

/// Filter option lists for the hotel view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFacets {
    pub cities: Vec<String>,
    pub categories: Vec<String>,
    /// Autocomplete options for the name search, one per hotel
    pub names: Vec<String>,
}

impl HotelFacets {
    pub fn derive(hotels: &[Hotel]) -> Self {
        Self {
            cities: distinct(hotels.iter().map(|h| h.city.clone())),
            categories: distinct(hotels.iter().map(|h| h.category.clone())),
            names: hotels.iter().map(|h| h.name.clone()).collect(),
        }
    }
}

/// Values shown on a hotel card
#[derive(Debug, Clone, PartialEq)]
pub struct HotelSummary {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub room_types: Vec<RoomType>,
    pub amenities: Vec<String>,
    pub room_count: usize,
}

impl HotelSummary {
    pub fn derive(hotel: &Hotel) -> Self {
        let prices = hotel.rooms.iter().map(|r| r.price);
        let min_price = prices.clone().reduce(f64::min);
        let max_price = prices.reduce(f64::max);

        Self {
            min_price,
            max_price,
            room_types: room_types(&hotel.rooms),
            amenities: distinct(
                hotel
                    .rooms
                    .iter()
                    .flat_map(|r| r.facilities.iter().map(|f| f.name.clone())),
            ),
            room_count: hotel.rooms.len(),
        }
    }

    /// `"100 ₽ за ночь"` or `"100 – 250 ₽ за ночь"`; `None` without rooms.
    pub fn price_label(&self) -> Option<String> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) if min == max => Some(format!("{} ₽ за ночь", min)),
            (Some(min), Some(max)) => Some(format!("{} – {} ₽ за ночь", min, max)),
            _ => None,
        }
    }
}

/// Distinct room types in first-seen order
pub fn room_types(rooms: &[Room]) -> Vec<RoomType> {
    let mut out: Vec<RoomType> = Vec::new();
    for room in rooms {
        if !out.contains(&room.room_type) {
            out.push(room.room_type);
        }
    }
    out
}

/// First-seen order, duplicates dropped
fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
