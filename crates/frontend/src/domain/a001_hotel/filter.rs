//! Hotel list filter.
//!
//! Predicates are applied in the fixed order city, category, date, name and
//! combined by intersection. An unset parameter does not narrow the result,
//! so the default filter is the identity.

use chrono::NaiveDate;
use contracts::domain::a001_hotel::aggregate::Hotel;

use crate::shared::date_utils::parse_input_value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    /// Exact match
    pub city: Option<String>,
    /// Exact match
    pub category: Option<String>,
    /// `available_from_date` must be strictly before this date
    pub available_before: Option<NaiveDate>,
    /// Case-insensitive substring of the hotel name
    pub name_query: String,
}

impl HotelFilter {
    /// Build from the raw filter-bar values; blank selects and an unparseable
    /// date mean "unset".
    pub fn from_inputs(city: &str, category: &str, available_before: &str, name: &str) -> Self {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            city: non_blank(city),
            category: non_blank(category),
            available_before: parse_input_value(available_before),
            name_query: name.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn active_count(&self) -> usize {
        [
            self.city.is_some(),
            self.category.is_some(),
            self.available_before.is_some(),
            !self.name_query.trim().is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        // Пробелы по краям непустого запроса значимы, пустой запрос не фильтрует
        let query = match self.name_query.trim().is_empty() {
            true => String::new(),
            false => self.name_query.to_lowercase(),
        };

        self.city.as_ref().map_or(true, |c| &hotel.city == c)
            && self.category.as_ref().map_or(true, |c| &hotel.category == c)
            && self
                .available_before
                .map_or(true, |cutoff| hotel.available_from_date < cutoff)
            && (query.is_empty() || hotel.name.to_lowercase().contains(&query))
    }

    pub fn apply(&self, hotels: &[Hotel]) -> Vec<Hotel> {
        hotels.iter().filter(|h| self.matches(h)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::store::tests::hotel;

    fn sample() -> Vec<Hotel> {
        vec![
            hotel("h1", "Гранд Отель", "Москва", "5", "2025-03-01"),
            hotel("h2", "Морской бриз", "Сочи", "4", "2025-05-15"),
            hotel("h3", "Grand Palace", "Сочи", "5", "2025-06-01"),
            hotel("h4", "Уют", "Казань", "3", "2025-02-10"),
        ]
    }

    fn ids(hotels: &[Hotel]) -> Vec<&str> {
        hotels.iter().map(|h| h.id.as_str()).collect()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let hotels = sample();
        let filter = HotelFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&hotels), hotels);
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn test_single_predicates() {
        let hotels = sample();

        let f = HotelFilter {
            city: Some("Сочи".into()),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h2", "h3"]);

        let f = HotelFilter {
            category: Some("5".into()),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h1", "h3"]);

        let f = HotelFilter {
            name_query: "GRAND".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h3"]);

        let f = HotelFilter {
            name_query: "гранд".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h1"]);
    }

    #[test]
    fn test_date_cutoff_is_strict() {
        let hotels = sample();
        let f = HotelFilter {
            available_before: Some(date("2025-05-15")),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h1", "h4"]);
    }

    #[test]
    fn test_combination_is_intersection() {
        let hotels = sample();
        let city = HotelFilter {
            city: Some("Сочи".into()),
            ..Default::default()
        };
        let category = HotelFilter {
            category: Some("5".into()),
            ..Default::default()
        };
        let both = HotelFilter {
            city: Some("Сочи".into()),
            category: Some("5".into()),
            ..Default::default()
        };

        let expected: Vec<Hotel> = city
            .apply(&hotels)
            .into_iter()
            .filter(|h| category.apply(&hotels).contains(h))
            .collect();
        assert_eq!(both.apply(&hotels), expected);
        assert_eq!(ids(&expected), vec!["h3"]);
        assert_eq!(both.active_count(), 2);
    }

    #[test]
    fn test_from_inputs() {
        let f = HotelFilter::from_inputs("Сочи", "", "2025-05-15", "бриз");
        assert_eq!(f.city.as_deref(), Some("Сочи"));
        assert_eq!(f.category, None);
        assert_eq!(f.available_before, Some(date("2025-05-15")));
        assert!(f.apply(&sample()).is_empty());

        let f = HotelFilter::from_inputs("", " ", "not a date", "");
        assert!(f.is_empty());
    }

    #[test]
    fn test_whitespace_query_is_unset_and_reset_clears() {
        let hotels = sample();
        let mut f = HotelFilter {
            city: Some("Москва".into()),
            name_query: "   ".into(),
            ..Default::default()
        };
        assert_eq!(f.active_count(), 1);
        assert_eq!(ids(&f.apply(&hotels)), vec!["h1"]);

        f.reset();
        assert_eq!(f, HotelFilter::default());
        assert_eq!(f.apply(&hotels).len(), 4);
    }

    #[test]
    fn test_query_with_edge_spaces_is_matched_verbatim() {
        let hotels = sample();
        let f = HotelFilter {
            name_query: "grand ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h3"]);

        let f = HotelFilter {
            name_query: " отель".into(),
            ..Default::default()
        };
        assert_eq!(ids(&f.apply(&hotels)), vec!["h1"]);

        let f = HotelFilter {
            name_query: " уют".into(),
            ..Default::default()
        };
        assert!(f.apply(&hotels).is_empty());
    }
}
