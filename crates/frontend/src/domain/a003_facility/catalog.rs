use contracts::domain::a003_facility::aggregate::Facility;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::bootstrap::ensure_catalog;
use crate::shared::remote::HttpRemote;

/// Facility catalog shared by all room forms; bootstrapped on first use
/// and kept for the rest of the session.
#[derive(Clone, Copy)]
pub struct FacilityCatalog {
    pub items: RwSignal<Vec<Facility>>,
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
}

impl FacilityCatalog {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Start the bootstrap unless it already ran or is running.
    pub fn ensure_loaded(&self, remote: HttpRemote) {
        if self.loaded.get_untracked() || self.loading.get_untracked() {
            return;
        }
        self.loading.set(true);

        let this = *self;
        spawn_local(async move {
            match ensure_catalog(&remote).await {
                Ok(list) => {
                    log::debug!("Facility catalog ready: {} item(s)", list.len());
                    this.items.set(list);
                    this.loaded.set(true);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Facility catalog load failed: {}", e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }
}

pub fn use_facility_catalog() -> FacilityCatalog {
    use_context::<FacilityCatalog>().expect("FacilityCatalog not found in context")
}
