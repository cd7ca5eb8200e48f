use serde::{Deserialize, Serialize};

use crate::string_id;

string_id!(
    /// Уникальный идентификатор удобства
    FacilityId
);

/// Удобство из глобального справочника; номера ссылаются на него, но не владеют им
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
}

/// DTO для `POST /api/facilities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityDto {
    pub name: String,
}

/// Справочник, которым заполняется пустой каталог удобств
pub const DEFAULT_FACILITIES: [&str; 4] = ["Wi-Fi", "Swimming pool", "Bar", "Dogs/Cats"];
