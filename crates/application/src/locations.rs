use std::sync::Arc;

use rentfolio_core::{AppError, AppResult, NonEmptyString};
use rentfolio_domain::{Location, LocationId, would_create_cycle};
use tracing::debug;

use crate::ports::PortfolioStore;

/// Guards mutations of the location forest.
///
/// Every reparent passes the cycle gate before the store is touched, which
/// is the only thing keeping the forest acyclic.
#[derive(Clone)]
pub struct LocationService {
    store: Arc<dyn PortfolioStore>,
}

impl LocationService {
    /// Creates a location service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self { store }
    }

    /// Creates a location after validating its name and parent.
    pub async fn create(
        &self,
        name: &str,
        parent_id: Option<LocationId>,
    ) -> AppResult<Location> {
        let name = NonEmptyString::new(name)?;

        if let Some(parent) = parent_id
            && self.store.find_location(parent).await?.is_none()
        {
            return Err(AppError::NotFound(format!(
                "parent location '{parent}' does not exist"
            )));
        }

        self.store.create_location(name.as_str(), parent_id).await
    }

    /// Moves a location under a new parent, or to the root when `None`.
    ///
    /// Rejects the edit before anything is persisted when the new parent is
    /// unknown or when the move would make the forest cyclic.
    pub async fn reparent(
        &self,
        id: LocationId,
        new_parent_id: Option<LocationId>,
    ) -> AppResult<Location> {
        let all = self.store.list_locations().await?;

        if !all.iter().any(|location| location.id == id) {
            return Err(AppError::NotFound(format!("location '{id}' does not exist")));
        }

        if let Some(parent) = new_parent_id {
            if !all.iter().any(|location| location.id == parent) {
                return Err(AppError::NotFound(format!(
                    "parent location '{parent}' does not exist"
                )));
            }
            if would_create_cycle(id, parent, &all) {
                return Err(AppError::Conflict(format!(
                    "moving location '{id}' under '{parent}' would create a cycle"
                )));
            }
        }

        debug!(location = %id, "reparenting location");
        self.store.update_location_parent(id, new_parent_id).await
    }

    /// Deletes a location that has no children.
    pub async fn delete(&self, id: LocationId) -> AppResult<()> {
        let all = self.store.list_locations().await?;

        if !all.iter().any(|location| location.id == id) {
            return Err(AppError::NotFound(format!("location '{id}' does not exist")));
        }

        if all
            .iter()
            .any(|location| location.parent_id == Some(id))
        {
            return Err(AppError::Conflict(format!(
                "location '{id}' still has child locations"
            )));
        }

        self.store.delete_location(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use rentfolio_core::{AppError, AppResult, UserId};
    use rentfolio_domain::{
        Asset, Category, Location, LocationId, ManagementAssignment, Property, PropertyId,
        TenantId, Tenancy, TenancyId, Unit, UnitId, Vendor,
    };
    use tokio::sync::Mutex;

    use crate::ports::PortfolioStore;

    use super::LocationService;

    struct FakeLocationStore {
        locations: Mutex<Vec<Location>>,
    }

    impl FakeLocationStore {
        fn with_chain() -> (Self, LocationId, LocationId, LocationId) {
            let house = Location {
                id: LocationId::new(),
                name: "House".to_owned(),
                parent_id: None,
            };
            let garage = Location {
                id: LocationId::new(),
                name: "Garage".to_owned(),
                parent_id: Some(house.id),
            };
            let shelf = Location {
                id: LocationId::new(),
                name: "Shelf".to_owned(),
                parent_id: Some(garage.id),
            };
            let ids = (house.id, garage.id, shelf.id);
            (
                Self {
                    locations: Mutex::new(vec![house, garage, shelf]),
                },
                ids.0,
                ids.1,
                ids.2,
            )
        }
    }

    #[async_trait]
    impl PortfolioStore for FakeLocationStore {
        async fn categories_for_owner(&self, _owner: Option<UserId>) -> AppResult<Vec<Category>> {
            Ok(Vec::new())
        }

        async fn list_locations(&self) -> AppResult<Vec<Location>> {
            Ok(self.locations.lock().await.clone())
        }

        async fn list_vendors(&self) -> AppResult<Vec<Vendor>> {
            Ok(Vec::new())
        }

        async fn active_properties_for_owner(&self, _owner: UserId) -> AppResult<Vec<Property>> {
            Ok(Vec::new())
        }

        async fn active_properties_by_ids(
            &self,
            _ids: &[PropertyId],
        ) -> AppResult<Vec<Property>> {
            Ok(Vec::new())
        }

        async fn active_assignments_for_manager(
            &self,
            _manager: UserId,
        ) -> AppResult<Vec<ManagementAssignment>> {
            Ok(Vec::new())
        }

        async fn units_by_ids(&self, _ids: &[UnitId]) -> AppResult<Vec<Unit>> {
            Ok(Vec::new())
        }

        async fn units_for_properties(
            &self,
            _property_ids: &[PropertyId],
        ) -> AppResult<Vec<Unit>> {
            Ok(Vec::new())
        }

        async fn tenancies_for_units(&self, _unit_ids: &[UnitId]) -> AppResult<Vec<Tenancy>> {
            Ok(Vec::new())
        }

        async fn active_tenancies_for_tenant(
            &self,
            _tenant_id: TenantId,
        ) -> AppResult<Vec<Tenancy>> {
            Ok(Vec::new())
        }

        async fn rental_assets_for_properties(
            &self,
            _property_ids: &[PropertyId],
        ) -> AppResult<Vec<Asset>> {
            Ok(Vec::new())
        }

        async fn tenant_assets_for_tenancies(
            &self,
            _tenancy_ids: &[TenancyId],
        ) -> AppResult<Vec<Asset>> {
            Ok(Vec::new())
        }

        async fn list_assets(&self) -> AppResult<Vec<Asset>> {
            Ok(Vec::new())
        }

        async fn find_location(&self, id: LocationId) -> AppResult<Option<Location>> {
            Ok(self
                .locations
                .lock()
                .await
                .iter()
                .find(|location| location.id == id)
                .cloned())
        }

        async fn create_location(
            &self,
            name: &str,
            parent_id: Option<LocationId>,
        ) -> AppResult<Location> {
            let location = Location {
                id: LocationId::new(),
                name: name.to_owned(),
                parent_id,
            };
            self.locations.lock().await.push(location.clone());
            Ok(location)
        }

        async fn update_location_parent(
            &self,
            id: LocationId,
            parent_id: Option<LocationId>,
        ) -> AppResult<Location> {
            let mut locations = self.locations.lock().await;
            let Some(location) = locations.iter_mut().find(|location| location.id == id) else {
                return Err(AppError::NotFound(format!(
                    "location '{id}' does not exist"
                )));
            };
            location.parent_id = parent_id;
            Ok(location.clone())
        }

        async fn delete_location(&self, id: LocationId) -> AppResult<()> {
            self.locations
                .lock()
                .await
                .retain(|location| location.id != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn reparent_into_own_subtree_is_rejected() {
        let (store, house, _garage, shelf) = FakeLocationStore::with_chain();
        let service = LocationService::new(Arc::new(store));

        let result = service.reparent(house, Some(shelf)).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn reparent_to_unrelated_parent_persists() {
        let (store, _house, garage, shelf) = FakeLocationStore::with_chain();
        let store = Arc::new(store);
        let service = LocationService::new(store.clone());

        let attic = service.create("Attic", None).await;
        assert!(attic.is_ok());
        let attic_id = attic.map(|location| location.id).unwrap_or_else(|_| {
            unreachable!();
        });

        let result = service.reparent(shelf, Some(attic_id)).await;
        assert!(result.is_ok());
        assert!(result.is_ok_and(|location| location.parent_id == Some(attic_id)));

        // The old parent keeps its own link untouched.
        let garage_record = store.find_location(garage).await;
        assert!(garage_record.is_ok_and(|record| record.is_some()));
    }

    #[tokio::test]
    async fn reparent_of_unknown_location_is_not_found() {
        let (store, house, ..) = FakeLocationStore::with_chain();
        let service = LocationService::new(Arc::new(store));

        let result = service.reparent(LocationId::new(), Some(house)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_rejects_blank_names_and_missing_parents() {
        let (store, ..) = FakeLocationStore::with_chain();
        let service = LocationService::new(Arc::new(store));

        assert!(matches!(
            service.create("   ", None).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.create("Cellar", Some(LocationId::new())).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_refuses_locations_with_children() {
        let (store, _house, garage, shelf) = FakeLocationStore::with_chain();
        let service = LocationService::new(Arc::new(store));

        let blocked = service.delete(garage).await;
        assert!(matches!(blocked, Err(AppError::Conflict(_))));

        let leaf = service.delete(shelf).await;
        assert!(leaf.is_ok());
    }
}
