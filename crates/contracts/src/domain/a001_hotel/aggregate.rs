use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_room::aggregate::Room;
use crate::domain::common::AggregateRoot;
use crate::shared::validation::{
    checks, validate_form, FieldRule, FieldValue, FormFields, ValidationContext, ValidationErrors,
    ValidationRules,
};
use crate::string_id;

// ============================================================================
// ID Type
// ============================================================================

string_id!(
    /// Уникальный идентификатор отеля
    HotelId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Отель вместе со списком номеров, как его отдаёт `GET /hotels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub city: String,
    /// Условно числовой код "1".."5"
    pub category: String,
    pub available_from_date: NaiveDate,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image_url: String,
    /// Порядок как пришёл с бэкенда, не значим
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// Число звёзд на карточке: первая группа цифр категории,
    /// ограниченная 1..=5, или 3, если цифр нет
    pub fn category_stars(&self) -> u8 {
        let digits: String = self
            .category
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        match digits.parse::<u64>() {
            Ok(n) => n.clamp(1, 5) as u8,
            Err(_) if digits.is_empty() => 3,
            // слишком длинная группа цифр считается большой
            Err(_) => 5,
        }
    }

    /// Заполнение формы редактирования из записи
    pub fn to_dto(&self) -> HotelDto {
        HotelDto {
            name: self.name.clone(),
            city: self.city.clone(),
            category: self.category.clone(),
            available_from_date: Some(self.available_from_date),
            rating: Some(self.rating),
            image_url: if self.image_url.is_empty() {
                None
            } else {
                Some(self.image_url.clone())
            },
        }
    }
}

impl AggregateRoot for Hotel {
    type Id = HotelId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "hotel"
    }

    fn element_name() -> &'static str {
        "Отель"
    }

    fn list_name() -> &'static str {
        "Отели"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления отеля (`POST /hotels`, `PUT /hotels/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub name: String,
    pub city: String,
    pub category: String,
    pub available_from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub const HOTEL_FORM_RULES: &[FieldRule] = &[
    FieldRule::new("name", "Название", ValidationRules::required().min_length(2)),
    FieldRule::new("city", "Город", ValidationRules::required().min_length(2)),
    FieldRule::new(
        "category",
        "Категория",
        ValidationRules::required().range(1.0, 5.0),
    ),
    FieldRule::new(
        "availableFromDate",
        "Дата доступности",
        ValidationRules::required().custom(checks::not_before_today),
    ),
];

impl FormFields for HotelDto {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::text(&self.name),
            "city" => FieldValue::text(&self.city),
            "category" => FieldValue::numeric_text(&self.category),
            "availableFromDate" => FieldValue::optional_date(self.available_from_date),
            _ => FieldValue::Empty,
        }
    }
}

impl HotelDto {
    /// Валидация данных формы
    pub fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        validate_form(self, HOTEL_FORM_RULES, ctx)
    }

    /// Очищенная от пробелов копия для отправки
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            category: self.category.trim().to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(category: &str) -> Hotel {
        Hotel {
            id: HotelId::new("h1"),
            name: "Гранд".into(),
            city: "Москва".into(),
            category: category.into(),
            available_from_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            rating: 4.5,
            image_url: String::new(),
            rooms: vec![],
        }
    }

    #[test]
    fn test_category_stars() {
        assert_eq!(hotel("4").category_stars(), 4);
        assert_eq!(hotel("5 звёзд").category_stars(), 5);
        assert_eq!(hotel("категория 9").category_stars(), 5);
        assert_eq!(hotel("0").category_stars(), 1);
        assert_eq!(hotel("люкс").category_stars(), 3);
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": "h1",
            "name": "Гранд",
            "city": "Москва",
            "category": "4",
            "availableFromDate": "2025-07-01",
            "rating": 4.2,
            "imageUrl": "https://img/1.png",
            "rooms": [
                {"id": "r1", "roomNumber": "101", "type": "DOUBLE", "price": 120.5,
                 "facilities": [{"id": "f1", "name": "Wi-Fi"}]}
            ]
        }"#;
        let h: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(h.id.as_str(), "h1");
        assert_eq!(h.available_from_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(h.rooms.len(), 1);
        assert_eq!(h.rooms[0].facilities[0].name, "Wi-Fi");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id":"h2","name":"A","city":"B","category":"3","availableFromDate":"2025-01-01"}"#;
        let h: Hotel = serde_json::from_str(json).unwrap();
        assert!(h.rooms.is_empty());
        assert_eq!(h.rating, 0.0);
        assert_eq!(h.image_url, "");
    }

    #[test]
    fn test_dto_validation() {
        let ctx = ValidationContext::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let mut dto = HotelDto {
            name: "Гранд".into(),
            city: "Сочи".into(),
            category: "5".into(),
            available_from_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..Default::default()
        };
        assert!(dto.validate(&ctx).is_ok());

        dto.category = "0".into();
        dto.city = "С".into();
        let errors = dto.validate(&ctx).unwrap_err();
        assert!(errors.for_field("category").is_some());
        assert!(errors.for_field("city").is_some());
        assert!(errors.for_field("name").is_none());
    }

    #[test]
    fn test_dto_serializes_camel_case_without_empty_optionals() {
        let dto = HotelDto {
            name: " Гранд ".into(),
            city: "Сочи".into(),
            category: "5".into(),
            available_from_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..Default::default()
        }
        .normalized();
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["name"], "Гранд");
        assert_eq!(v["availableFromDate"], "2025-06-10");
        assert!(v.get("rating").is_none());
        assert!(v.get("imageUrl").is_none());
    }
}
