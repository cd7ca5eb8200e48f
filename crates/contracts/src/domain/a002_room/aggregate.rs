use serde::{Deserialize, Serialize};

use crate::domain::a001_hotel::aggregate::HotelId;
use crate::domain::a003_facility::aggregate::{Facility, FacilityId};
use crate::domain::common::AggregateRoot;
use crate::shared::validation::{
    checks, validate_form, FieldRule, FieldValue, FormFields, ValidationContext, ValidationErrors,
    ValidationRules,
};
use crate::string_id;

string_id!(
    /// Уникальный идентификатор номера
    RoomId
);

/// Тип номера
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Family,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Family,
    ];

    /// Код на проводе, например `"SUITE"`
    pub fn code(&self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
            RoomType::Family => "FAMILY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Одноместная",
            RoomType::Double => "Двухместная",
            RoomType::Suite => "Люкс",
            RoomType::Family => "Семейная",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Номер отеля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    /// Сравнивается с учётом чисел ("2" < "10")
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price: f64,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

impl Room {
    pub fn facility_ids(&self) -> impl Iterator<Item = &FacilityId> {
        self.facilities.iter().map(|f| &f.id)
    }

    pub fn has_facility(&self, id: &FacilityId) -> bool {
        self.facilities.iter().any(|f| &f.id == id)
    }

    /// Заполнение формы редактирования из записи
    pub fn to_dto(&self, hotel_id: HotelId) -> RoomDto {
        RoomDto {
            room_number: self.room_number.clone(),
            room_type: Some(self.room_type),
            price: Some(self.price),
            hotel_id,
        }
    }
}

impl AggregateRoot for Room {
    type Id = RoomId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("№ {}", self.room_number)
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "room"
    }

    fn element_name() -> &'static str {
        "Номер"
    }

    fn list_name() -> &'static str {
        "Номера"
    }
}

/// DTO для `POST /rooms` и `PUT /rooms/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub price: Option<f64>,
    pub hotel_id: HotelId,
}

impl RoomDto {
    pub fn empty(hotel_id: HotelId) -> Self {
        Self {
            room_number: String::new(),
            room_type: None,
            price: None,
            hotel_id,
        }
    }

    pub fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        validate_form(self, ROOM_FORM_RULES, ctx)
    }
}

pub const ROOM_FORM_RULES: &[FieldRule] = &[
    FieldRule::new("roomNumber", "Номер комнаты", ValidationRules::required()),
    FieldRule::new("type", "Тип", ValidationRules::required()),
    FieldRule::new(
        "price",
        "Цена",
        ValidationRules::required().numeric().custom(checks::positive),
    ),
];

impl FormFields for RoomDto {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "roomNumber" => FieldValue::text(&self.room_number),
            "type" => match &self.room_type {
                Some(t) => FieldValue::Text(t.code()),
                None => FieldValue::Empty,
            },
            "price" => FieldValue::optional_number(self.price),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_room_type_wire_codes() {
        assert_eq!(serde_json::to_string(&RoomType::Family).unwrap(), "\"FAMILY\"");
        let t: RoomType = serde_json::from_str("\"SUITE\"").unwrap();
        assert_eq!(t, RoomType::Suite);
        assert_eq!(RoomType::from_code("double"), Some(RoomType::Double));
        assert_eq!(RoomType::from_code("PENTHOUSE"), None);
    }

    #[test]
    fn test_room_dto_wire_format() {
        let dto = RoomDto {
            room_number: "101".into(),
            room_type: Some(RoomType::Single),
            price: Some(99.9),
            hotel_id: HotelId::new("h1"),
        };
        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(v["roomNumber"], "101");
        assert_eq!(v["type"], "SINGLE");
        assert_eq!(v["hotelId"], "h1");
    }

    #[test]
    fn test_room_dto_validation() {
        let mut dto = RoomDto::empty(HotelId::new("h1"));
        let errors = dto.validate(&ctx()).unwrap_err();
        assert_eq!(errors.len(), 3);

        dto.room_number = "12".into();
        dto.room_type = Some(RoomType::Double);
        dto.price = Some(0.0);
        let errors = dto.validate(&ctx()).unwrap_err();
        assert_eq!(errors.for_field("price"), Some("Укажите цену больше 0"));

        dto.price = Some(0.1);
        assert!(dto.validate(&ctx()).is_ok());
    }
}
