//! Remote CRUD orchestration for hotels.
//!
//! Each operation talks to the backend through [`RemoteApi`] and returns the
//! [`Reconciliation`] the caller folds into its [`HotelStore`](super::store::HotelStore).
//! Nothing is applied speculatively: on error the caller's state is untouched.
//! Room and facility operations live in `a002_room::sync`.

use chrono::NaiveDate;
use contracts::domain::a001_hotel::aggregate::{Hotel, HotelDto, HotelId};
use contracts::shared::validation::ValidationContext;

use super::store::Reconciliation;
use crate::shared::errors::AppResult;
use crate::shared::remote::RemoteApi;

pub struct SyncController<R: RemoteApi> {
    pub(crate) remote: R,
    today: NaiveDate,
}

impl<R: RemoteApi> SyncController<R> {
    pub fn new(remote: R) -> Self {
        Self::with_today(remote, chrono::Local::now().date_naive())
    }

    /// Fixed "today" for date validation
    pub fn with_today(remote: R, today: NaiveDate) -> Self {
        Self { remote, today }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub(crate) fn validation_context(&self) -> ValidationContext {
        ValidationContext::new(self.today)
    }

    /// Full fetch of the hotel collection
    pub async fn load(&self) -> AppResult<Reconciliation> {
        Ok(Reconciliation::Loaded(self.fetch_all().await?))
    }

    async fn fetch_all(&self) -> AppResult<Vec<Hotel>> {
        let hotels = self.remote.fetch_hotels().await.map_err(|e| {
            log::error!("Hotel list load failed: {}", e);
            e
        })?;
        log::debug!("Loaded {} hotel(s)", hotels.len());
        Ok(hotels)
    }

    pub async fn create_hotel(&self, dto: &HotelDto) -> AppResult<Reconciliation> {
        dto.validate(&self.validation_context())?;
        let dto = dto.normalized();

        log::info!("Creating hotel '{}'", dto.name);
        self.remote.create_hotel(&dto).await.map_err(|e| {
            log::error!("Hotel create failed: {}", e);
            e
        })?;
        self.reload_after_save().await
    }

    pub async fn update_hotel(&self, id: &HotelId, dto: &HotelDto) -> AppResult<Reconciliation> {
        dto.validate(&self.validation_context())?;
        let dto = dto.normalized();

        log::info!("Updating hotel {}", id);
        self.remote.update_hotel(id, &dto).await.map_err(|e| {
            log::error!("Hotel {} update failed: {}", id, e);
            e
        })?;
        self.reload_after_save().await
    }

    pub async fn delete_hotel(&self, id: &HotelId) -> AppResult<Reconciliation> {
        log::info!("Deleting hotel {}", id);
        self.remote.delete_hotel(id).await.map_err(|e| {
            log::error!("Hotel {} delete failed: {}", id, e);
            e
        })?;
        Ok(Reconciliation::HotelRemoved(id.clone()))
    }

    async fn reload_after_save(&self) -> AppResult<Reconciliation> {
        Ok(Reconciliation::HotelSaved(self.fetch_all().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::store::tests::hotel;
    use crate::domain::a001_hotel::store::HotelStore;
    use crate::shared::errors::AppError;
    use crate::shared::remote::mock::{Call, MockRemote};
    use futures::executor::block_on;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn controller(mock: MockRemote) -> SyncController<MockRemote> {
        SyncController::with_today(mock, today())
    }

    fn valid_dto() -> HotelDto {
        HotelDto {
            name: "  Новый отель ".into(),
            city: "Сочи".into(),
            category: "4".into(),
            available_from_date: Some(today()),
            ..Default::default()
        }
    }

    #[test]
    fn test_load() {
        let sync = controller(MockRemote::with_hotels(vec![
            hotel("h1", "A", "Москва", "3", "2025-01-01"),
            hotel("h2", "B", "Казань", "4", "2025-01-01"),
        ]));
        match block_on(sync.load()).unwrap() {
            Reconciliation::Loaded(hotels) => assert_eq!(hotels.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_load_failure_is_fetch_error() {
        let mock = MockRemote::default();
        mock.fail("FetchHotels");
        let sync = controller(mock);
        assert!(matches!(block_on(sync.load()), Err(AppError::Fetch(_))));
    }

    #[test]
    fn test_create_sends_trimmed_dto_and_reloads() {
        let sync = controller(MockRemote::default());
        let change = block_on(sync.create_hotel(&valid_dto())).unwrap();

        assert!(change.resets_filters());
        let Reconciliation::HotelSaved(hotels) = change else {
            panic!("expected HotelSaved");
        };
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Новый отель");
        assert_eq!(
            sync.remote().calls(),
            vec![Call::CreateHotel("Новый отель".into()), Call::FetchHotels]
        );
    }

    #[test]
    fn test_invalid_form_never_reaches_network() {
        let sync = controller(MockRemote::default());
        let dto = HotelDto {
            name: "A".into(),
            category: "7".into(),
            available_from_date: NaiveDate::from_ymd_opt(2025, 1, 9),
            ..Default::default()
        };
        let err = block_on(sync.create_hotel(&dto)).unwrap_err();
        let errors = err.validation().unwrap();
        assert!(errors.for_field("name").is_some());
        assert!(errors.for_field("city").is_some());
        assert!(errors.for_field("category").is_some());
        assert!(errors.for_field("availableFromDate").is_some());
        assert!(sync.remote().calls().is_empty());
    }

    #[test]
    fn test_failed_update_leaves_store_untouched() {
        let mock = MockRemote::with_hotels(vec![hotel("h1", "A", "Москва", "3", "2025-01-01")]);
        mock.fail("UpdateHotel");
        let sync = controller(mock);

        let store = HotelStore::new(sync.remote().hotels.borrow().clone());
        let before = store.clone();
        let err = block_on(sync.update_hotel(&HotelId::new("h1"), &valid_dto())).unwrap_err();
        assert!(matches!(err, AppError::Save(_)));
        assert_eq!(store, before);
        assert!(!sync.remote().calls().contains(&Call::FetchHotels));
    }

    #[test]
    fn test_delete_removes_from_store_and_filtered_view() {
        use crate::domain::a001_hotel::filter::HotelFilter;

        let hotels = vec![
            hotel("h1", "A", "Москва", "3", "2025-01-01"),
            hotel("h2", "B", "Москва", "4", "2025-01-01"),
        ];
        let sync = controller(MockRemote::with_hotels(hotels.clone()));
        let mut store = HotelStore::new(hotels);
        let filter = HotelFilter {
            city: Some("Москва".into()),
            ..Default::default()
        };

        let change = block_on(sync.delete_hotel(&HotelId::new("h1"))).unwrap();
        assert!(!change.resets_filters());
        store.reconcile(change);

        let ids: Vec<_> = store.hotels().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h2"]);
        let visible: Vec<_> = filter
            .apply(store.hotels())
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(visible, vec![HotelId::new("h2")]);
    }

    #[test]
    fn test_failed_delete_is_not_optimistic() {
        let mock = MockRemote::with_hotels(vec![hotel("h1", "A", "Москва", "3", "2025-01-01")]);
        mock.fail("DeleteHotel");
        let sync = controller(mock);
        let err = block_on(sync.delete_hotel(&HotelId::new("h1"))).unwrap_err();
        assert!(matches!(err, AppError::Delete(_)));
        assert_eq!(sync.remote().hotels.borrow().len(), 1);
    }
}
