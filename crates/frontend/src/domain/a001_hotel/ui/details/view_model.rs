use contracts::domain::a001_hotel::aggregate::{Hotel, HotelDto, HotelId};
use contracts::shared::validation::{ValidationContext, ValidationErrors};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_hotel::store::Reconciliation;
use crate::domain::a001_hotel::sync::SyncController;
use crate::domain::a001_hotel::ui::list::state::HotelListState;
use crate::shared::date_utils::{self, parse_input_value, to_input_value};
use crate::shared::errors::AppError;
use crate::shared::mutation::EntityKey;
use crate::shared::notifications::Notifications;
use crate::shared::remote::HttpRemote;

/// Form fields exactly as typed; converted to a [`HotelDto`] on save
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFormInput {
    pub name: String,
    pub city: String,
    pub category: String,
    /// yyyy-mm-dd from the date input
    pub available_from: String,
    pub rating: String,
    pub image_url: String,
}

impl HotelFormInput {
    pub fn from_hotel(hotel: &Hotel) -> Self {
        let dto = hotel.to_dto();
        Self {
            name: dto.name,
            city: dto.city,
            category: dto.category,
            available_from: to_input_value(dto.available_from_date),
            rating: dto.rating.map(|r| r.to_string()).unwrap_or_default(),
            image_url: dto.image_url.unwrap_or_default(),
        }
    }

    /// Optional fields left blank (or not a number) are omitted from the payload.
    pub fn to_dto(&self) -> HotelDto {
        let image_url = self.image_url.trim();
        HotelDto {
            name: self.name.clone(),
            city: self.city.clone(),
            category: self.category.clone(),
            available_from_date: parse_input_value(&self.available_from),
            rating: self.rating.trim().replace(',', ".").parse::<f64>().ok(),
            image_url: if image_url.is_empty() {
                None
            } else {
                Some(image_url.to_string())
            },
        }
    }
}

/// ViewModel of the hotel create/edit modal
#[derive(Clone, Copy)]
pub struct HotelDetailsViewModel {
    id: StoredValue<Option<HotelId>>,
    pub name: RwSignal<String>,
    pub city: RwSignal<String>,
    pub category: RwSignal<String>,
    pub available_from: RwSignal<String>,
    pub rating: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

impl HotelDetailsViewModel {
    /// `None` opens an empty form for a new hotel
    pub fn new(hotel: Option<&Hotel>) -> Self {
        let input = hotel.map(HotelFormInput::from_hotel).unwrap_or_default();
        Self {
            id: StoredValue::new(hotel.map(|h| h.id.clone())),
            name: RwSignal::new(input.name),
            city: RwSignal::new(input.city),
            category: RwSignal::new(input.category),
            available_from: RwSignal::new(input.available_from),
            rating: RwSignal::new(input.rating),
            image_url: RwSignal::new(input.image_url),
            errors: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Inline message for one field, `None` while the field is fine
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| {
                e.as_ref()
                    .and_then(|e| e.for_field(field))
                    .map(str::to_string)
            })
        })
    }

    fn input(&self) -> HotelFormInput {
        HotelFormInput {
            name: self.name.get_untracked(),
            city: self.city.get_untracked(),
            category: self.category.get_untracked(),
            available_from: self.available_from.get_untracked(),
            rating: self.rating.get_untracked(),
            image_url: self.image_url.get_untracked(),
        }
    }

    /// Validate locally, then create or update through the sync layer.
    /// `on_saved` receives the reconciliation to fold into the list.
    pub fn save_command(
        &self,
        remote: HttpRemote,
        state: RwSignal<HotelListState>,
        notifications: Notifications,
        on_saved: Callback<Reconciliation>,
    ) {
        let dto = self.input().to_dto();

        // Невалидная форма не уходит в сеть
        if let Err(e) = dto.validate(&ValidationContext::new(date_utils::today())) {
            log::debug!("Hotel form rejected: {}", e);
            self.errors.set(Some(e));
            return;
        }
        self.errors.set(None);

        let id = self.id.get_value();
        let key = id
            .clone()
            .map(EntityKey::Hotel)
            .unwrap_or(EntityKey::NewHotel);

        let mut started = Ok(());
        state.update(|s| started = s.mutations.begin(key.clone()));
        if let Err(e) = started {
            notifications.error(&e);
            return;
        }

        self.saving.set(true);
        let vm = *self;
        spawn_local(async move {
            let sync = SyncController::new(remote);
            let result = match &id {
                Some(id) => sync.update_hotel(id, &dto).await,
                None => sync.create_hotel(&dto).await,
            };
            state.update(|s| s.mutations.finish(key, &result));
            vm.saving.set(false);

            match result {
                Ok(change) => {
                    notifications.success(if id.is_some() {
                        "Отель обновлен"
                    } else {
                        "Отель создан"
                    });
                    on_saved.run(change);
                }
                Err(AppError::Validation(errors)) => vm.errors.set(Some(errors)),
                Err(e) => notifications.error(&e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::store::tests::hotel;
    use chrono::NaiveDate;

    #[test]
    fn test_input_to_dto_omits_blank_optionals() {
        let input = HotelFormInput {
            name: "Гранд".into(),
            city: "Москва".into(),
            category: "4".into(),
            available_from: "2025-06-01".into(),
            rating: "  ".into(),
            image_url: "".into(),
        };
        let dto = input.to_dto();
        assert_eq!(dto.available_from_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(dto.rating, None);
        assert_eq!(dto.image_url, None);
    }

    #[test]
    fn test_rating_accepts_decimal_comma() {
        let input = HotelFormInput {
            rating: "4,5".into(),
            ..Default::default()
        };
        assert_eq!(input.to_dto().rating, Some(4.5));
    }

    #[test]
    fn test_prefill_from_hotel() {
        let h = hotel("h1", "Гранд", "Москва", "5", "2025-03-15");
        let input = HotelFormInput::from_hotel(&h);
        assert_eq!(input.name, "Гранд");
        assert_eq!(input.available_from, "2025-03-15");
        assert_eq!(input.to_dto().available_from_date, Some(h.available_from_date));
    }

    #[test]
    fn test_missing_date_fails_validation() {
        let input = HotelFormInput {
            name: "Гранд".into(),
            city: "Москва".into(),
            category: "4".into(),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let errors = input
            .to_dto()
            .validate(&ValidationContext::new(today))
            .unwrap_err();
        assert!(errors.for_field("availableFromDate").is_some());
        assert!(errors.for_field("name").is_none());
    }
}
