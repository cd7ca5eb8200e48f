use contracts::domain::a001_hotel::aggregate::Hotel;
use leptos::prelude::*;

use crate::domain::a001_hotel::facets::HotelFacets;
use crate::domain::a001_hotel::filter::HotelFilter;
use crate::domain::a001_hotel::store::{HotelStore, Reconciliation};
use crate::shared::mutation::MutationTracker;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelListState {
    pub store: HotelStore,
    pub filter: HotelFilter,
    pub mutations: MutationTracker,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl HotelListState {
    /// Fold a successful remote outcome into the list.
    pub fn apply(&mut self, change: Reconciliation) {
        if change.resets_filters() {
            self.filter.reset();
        }
        if matches!(
            change,
            Reconciliation::Loaded(_) | Reconciliation::HotelSaved(_)
        ) {
            self.is_loaded = true;
            self.is_loading = false;
            self.error = None;
        }
        self.store.reconcile(change);
    }

    /// The store keeps its last good content.
    pub fn load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub fn filtered(&self) -> Vec<Hotel> {
        self.filter.apply(self.store.hotels())
    }

    pub fn facets(&self) -> HotelFacets {
        HotelFacets::derive(self.store.hotels())
    }
}

pub fn create_state() -> RwSignal<HotelListState> {
    RwSignal::new(HotelListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_hotel::store::tests::hotel;
    use contracts::domain::a001_hotel::aggregate::HotelId;

    fn loaded() -> HotelListState {
        let mut state = HotelListState::default();
        state.apply(Reconciliation::Loaded(vec![
            hotel("h1", "Гранд", "Москва", "5", "2025-01-01"),
            hotel("h2", "Бриз", "Сочи", "4", "2025-01-01"),
        ]));
        state.filter.city = Some("Сочи".into());
        state
    }

    #[test]
    fn test_hotel_save_resets_filters() {
        let mut state = loaded();
        assert_eq!(state.filtered().len(), 1);

        let reloaded = state.store.hotels().to_vec();
        state.apply(Reconciliation::HotelSaved(reloaded));
        assert!(state.filter.is_empty());
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_delete_keeps_filters() {
        let mut state = loaded();
        state.apply(Reconciliation::HotelRemoved(HotelId::new("h1")));
        assert_eq!(state.filter.city.as_deref(), Some("Сочи"));
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.facets().cities, vec!["Сочи"]);
    }

    #[test]
    fn test_load_failure_keeps_store() {
        let mut state = loaded();
        state.is_loading = true;
        state.load_failed("Ошибка загрузки: HTTP 500".into());
        assert_eq!(state.store.len(), 2);
        assert!(!state.is_loading);
        assert!(state.error.is_some());
    }
}
