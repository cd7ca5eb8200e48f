use contracts::domain::a003_facility::aggregate::{Facility, FacilityDto, DEFAULT_FACILITIES};
use futures::future::join_all;

use crate::shared::errors::AppResult;
use crate::shared::remote::RemoteApi;

/// Fetch the facility catalog, seeding it with [`DEFAULT_FACILITIES`] first
/// if the backend has none. Seed failures are logged; the refetch happens anyway.
pub async fn ensure_catalog<R: RemoteApi + ?Sized>(remote: &R) -> AppResult<Vec<Facility>> {
    let catalog = remote.fetch_facilities().await?;
    if !catalog.is_empty() {
        return Ok(catalog);
    }

    log::info!("Facility catalog is empty, seeding defaults");
    let results = join_all(DEFAULT_FACILITIES.iter().map(|name| async move {
        let dto = FacilityDto {
            name: name.to_string(),
        };
        (*name, remote.create_facility(&dto).await)
    }))
    .await;

    for (name, result) in results {
        if let Err(e) = result {
            log::warn!("Seeding facility '{}' failed: {}", name, e);
        }
    }

    remote.fetch_facilities().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::mock::{Call, MockRemote};
    use contracts::domain::a003_facility::aggregate::FacilityId;
    use futures::executor::block_on;

    fn names(catalog: &[Facility]) -> Vec<&str> {
        catalog.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog_is_seeded() {
        let mock = MockRemote::default();
        let catalog = block_on(ensure_catalog(&mock)).unwrap();
        assert_eq!(names(&catalog), DEFAULT_FACILITIES.to_vec());

        // second run sees a populated catalog and creates nothing
        let again = block_on(ensure_catalog(&mock)).unwrap();
        assert_eq!(again, catalog);
        let creates = mock
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::CreateFacility(_)))
            .count();
        assert_eq!(creates, 4);
    }

    #[test]
    fn test_populated_catalog_is_untouched() {
        let mock = MockRemote::default();
        *mock.facilities.borrow_mut() = vec![Facility {
            id: FacilityId::new("f1"),
            name: "Sauna".into(),
        }];
        let catalog = block_on(ensure_catalog(&mock)).unwrap();
        assert_eq!(names(&catalog), vec!["Sauna"]);
        assert_eq!(mock.calls(), vec![Call::FetchFacilities]);
    }

    #[test]
    fn test_failed_seed_still_refetches() {
        let mock = MockRemote::default();
        mock.fail("CreateFacility(\"Bar\")");
        let catalog = block_on(ensure_catalog(&mock)).unwrap();
        assert_eq!(names(&catalog), vec!["Wi-Fi", "Swimming pool", "Dogs/Cats"]);
        assert_eq!(mock.calls().last(), Some(&Call::FetchFacilities));
    }
}
