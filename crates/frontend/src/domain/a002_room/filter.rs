//! Room-scoped filter and ordering.
//!
//! Same contract as the hotel filter: predicates type, min price, max price,
//! room number, in that order, intersected; unset means no narrowing.

use std::cmp::Ordering;

use contracts::domain::a002_room::aggregate::{Room, RoomType};

use crate::shared::list_utils::{natural_cmp, sort_list, Sortable};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    pub room_type: Option<RoomType>,
    /// Inclusive
    pub min_price: Option<f64>,
    /// Inclusive
    pub max_price: Option<f64>,
    /// Case-insensitive substring of the room number
    pub number_query: String,
}

impl RoomFilter {
    pub fn is_empty(&self) -> bool {
        self.room_type.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.number_query.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, room: &Room) -> bool {
        let query = self.number_query.trim().to_lowercase();

        self.room_type.map_or(true, |t| room.room_type == t)
            && self.min_price.map_or(true, |min| room.price >= min)
            && self.max_price.map_or(true, |max| room.price <= max)
            && (query.is_empty() || room.room_number.to_lowercase().contains(&query))
    }

    pub fn apply(&self, rooms: &[Room]) -> Vec<Room> {
        rooms.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Parse a price bound typed by the user; blank or garbage means unset.
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim().replace(',', ".");
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Sortable for Room {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "room_number" => natural_cmp(&self.room_number, &other.room_number),
            "type" => self.room_type.cmp(&other.room_type),
            "price" => self.price.total_cmp(&other.price),
            _ => Ordering::Equal,
        }
    }
}

/// Rooms in numeric-aware room-number order
pub fn sorted_rooms(mut rooms: Vec<Room>) -> Vec<Room> {
    sort_list(&mut rooms, "room_number", true);
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::store::tests::room;

    fn rooms() -> Vec<Room> {
        vec![
            room("r1", "101", RoomType::Single, 50.0),
            room("r2", "102", RoomType::Double, 100.0),
            room("r3", "201", RoomType::Double, 150.0),
            room("r4", "202", RoomType::Suite, 200.0),
            room("r5", "301A", RoomType::Family, 250.0),
        ]
    }

    fn prices(rooms: &[Room]) -> Vec<f64> {
        rooms.iter().map(|r| r.price).collect()
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let f = RoomFilter {
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..Default::default()
        };
        assert_eq!(prices(&f.apply(&rooms())), vec![100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let f = RoomFilter::default();
        assert!(f.is_empty());
        assert_eq!(f.apply(&rooms()), rooms());
    }

    #[test]
    fn test_type_and_number_query() {
        let f = RoomFilter {
            room_type: Some(RoomType::Double),
            number_query: "20".into(),
            ..Default::default()
        };
        let ids: Vec<_> = f.apply(&rooms()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].as_str(), "r3");

        let f = RoomFilter {
            number_query: "301a".into(),
            ..Default::default()
        };
        assert_eq!(f.apply(&rooms()).len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut f = RoomFilter {
            room_type: Some(RoomType::Suite),
            min_price: Some(1.0),
            ..Default::default()
        };
        f.reset();
        assert!(f.is_empty());
    }

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound(" 150 "), Some(150.0));
        assert_eq!(parse_price_bound("99,5"), Some(99.5));
        assert_eq!(parse_price_bound(""), None);
        assert_eq!(parse_price_bound("abc"), None);
    }

    #[test]
    fn test_sorted_by_room_number() {
        let sorted = sorted_rooms(vec![
            room("a", "2", RoomType::Single, 1.0),
            room("b", "10", RoomType::Single, 1.0),
            room("c", "1", RoomType::Single, 1.0),
        ]);
        let numbers: Vec<_> = sorted.iter().map(|r| r.room_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let mut list = rooms();
        sort_list(&mut list, "price", false);
        assert_eq!(prices(&list), vec![250.0, 200.0, 150.0, 100.0, 50.0]);
    }
}
