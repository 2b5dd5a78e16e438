use std::collections::HashMap;

use async_trait::async_trait;
use rentfolio_application::PortfolioStore;
use rentfolio_core::{AppError, AppResult, UserId};
use rentfolio_domain::{
    Asset, AssetId, AssetOwnerType, AssignmentStatus, Category, CategoryId, Location, LocationId,
    ManagementAssignment, ManagementAssignmentId, Property, PropertyId, PropertyStatus, TenantId,
    Tenancy, TenancyId, TenancyStatus, Unit, UnitId, Vendor, VendorId,
};
use tokio::sync::RwLock;

/// In-memory portfolio store implementation.
///
/// Backs tests and embedded callers; listing methods sort by name so results
/// are deterministic across runs, matching what a remote store would return
/// with a sort key.
#[derive(Debug, Default)]
pub struct InMemoryPortfolioStore {
    categories: RwLock<HashMap<CategoryId, Category>>,
    locations: RwLock<HashMap<LocationId, Location>>,
    vendors: RwLock<HashMap<VendorId, Vendor>>,
    properties: RwLock<HashMap<PropertyId, Property>>,
    units: RwLock<HashMap<UnitId, Unit>>,
    tenancies: RwLock<HashMap<TenancyId, Tenancy>>,
    assignments: RwLock<HashMap<ManagementAssignmentId, ManagementAssignment>>,
    assets: RwLock<HashMap<AssetId, Asset>>,
}

impl InMemoryPortfolioStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a category.
    pub async fn put_category(&self, category: Category) {
        self.categories.write().await.insert(category.id, category);
    }

    /// Inserts or replaces a location.
    pub async fn put_location(&self, location: Location) {
        self.locations.write().await.insert(location.id, location);
    }

    /// Inserts or replaces a vendor.
    pub async fn put_vendor(&self, vendor: Vendor) {
        self.vendors.write().await.insert(vendor.id, vendor);
    }

    /// Inserts or replaces a property.
    pub async fn put_property(&self, property: Property) {
        self.properties.write().await.insert(property.id, property);
    }

    /// Inserts or replaces a unit.
    pub async fn put_unit(&self, unit: Unit) {
        self.units.write().await.insert(unit.id, unit);
    }

    /// Inserts or replaces a tenancy.
    pub async fn put_tenancy(&self, tenancy: Tenancy) {
        self.tenancies.write().await.insert(tenancy.id, tenancy);
    }

    /// Inserts or replaces a management assignment.
    pub async fn put_assignment(&self, assignment: ManagementAssignment) {
        self.assignments
            .write()
            .await
            .insert(assignment.id, assignment);
    }

    /// Inserts or replaces an asset.
    pub async fn put_asset(&self, asset: Asset) {
        self.assets.write().await.insert(asset.id, asset);
    }
}

fn sorted_by_name<T, F>(mut values: Vec<T>, name: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    values.sort_by(|left, right| name(left).cmp(name(right)));
    values
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn categories_for_owner(&self, owner: Option<UserId>) -> AppResult<Vec<Category>> {
        let categories = self.categories.read().await;
        let values = categories
            .values()
            .filter(|category| match owner {
                Some(owner) => {
                    category.owner_user_id.is_none() || category.owner_user_id == Some(owner)
                }
                None => true,
            })
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |category| category.name.as_str()))
    }

    async fn list_locations(&self) -> AppResult<Vec<Location>> {
        let locations = self.locations.read().await;
        Ok(sorted_by_name(
            locations.values().cloned().collect(),
            |location| location.name.as_str(),
        ))
    }

    async fn list_vendors(&self) -> AppResult<Vec<Vendor>> {
        let vendors = self.vendors.read().await;
        Ok(sorted_by_name(
            vendors.values().cloned().collect(),
            |vendor| vendor.name.as_str(),
        ))
    }

    async fn active_properties_for_owner(&self, owner: UserId) -> AppResult<Vec<Property>> {
        let properties = self.properties.read().await;
        let values = properties
            .values()
            .filter(|property| {
                property.owner_user_id == owner && property.status == PropertyStatus::Active
            })
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |property| property.name.as_str()))
    }

    async fn active_properties_by_ids(&self, ids: &[PropertyId]) -> AppResult<Vec<Property>> {
        let properties = self.properties.read().await;
        let values = properties
            .values()
            .filter(|property| {
                ids.contains(&property.id) && property.status == PropertyStatus::Active
            })
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |property| property.name.as_str()))
    }

    async fn active_assignments_for_manager(
        &self,
        manager: UserId,
    ) -> AppResult<Vec<ManagementAssignment>> {
        let assignments = self.assignments.read().await;
        Ok(assignments
            .values()
            .filter(|assignment| {
                assignment.manager_user_id == manager
                    && assignment.status == AssignmentStatus::Active
            })
            .cloned()
            .collect())
    }

    async fn units_by_ids(&self, ids: &[UnitId]) -> AppResult<Vec<Unit>> {
        let units = self.units.read().await;
        let values = units
            .values()
            .filter(|unit| ids.contains(&unit.id))
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |unit| unit.name.as_str()))
    }

    async fn units_for_properties(&self, property_ids: &[PropertyId]) -> AppResult<Vec<Unit>> {
        let units = self.units.read().await;
        let values = units
            .values()
            .filter(|unit| property_ids.contains(&unit.property_id))
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |unit| unit.name.as_str()))
    }

    async fn tenancies_for_units(&self, unit_ids: &[UnitId]) -> AppResult<Vec<Tenancy>> {
        let tenancies = self.tenancies.read().await;
        Ok(tenancies
            .values()
            .filter(|tenancy| unit_ids.contains(&tenancy.unit_id))
            .cloned()
            .collect())
    }

    async fn active_tenancies_for_tenant(&self, tenant_id: TenantId) -> AppResult<Vec<Tenancy>> {
        let tenancies = self.tenancies.read().await;
        Ok(tenancies
            .values()
            .filter(|tenancy| {
                tenancy.tenant_id == tenant_id && tenancy.status == TenancyStatus::Active
            })
            .cloned()
            .collect())
    }

    async fn rental_assets_for_properties(
        &self,
        property_ids: &[PropertyId],
    ) -> AppResult<Vec<Asset>> {
        let assets = self.assets.read().await;
        let values = assets
            .values()
            .filter(|asset| {
                asset.owner_type == AssetOwnerType::Rental
                    && asset
                        .property_id
                        .is_some_and(|id| property_ids.contains(&id))
            })
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |asset| asset.name.as_str()))
    }

    async fn tenant_assets_for_tenancies(
        &self,
        tenancy_ids: &[TenancyId],
    ) -> AppResult<Vec<Asset>> {
        let assets = self.assets.read().await;
        let values = assets
            .values()
            .filter(|asset| {
                asset.owner_type == AssetOwnerType::Tenant
                    && asset
                        .tenancy_id
                        .is_some_and(|id| tenancy_ids.contains(&id))
            })
            .cloned()
            .collect();
        Ok(sorted_by_name(values, |asset| asset.name.as_str()))
    }

    async fn list_assets(&self) -> AppResult<Vec<Asset>> {
        let assets = self.assets.read().await;
        Ok(sorted_by_name(assets.values().cloned().collect(), |asset| {
            asset.name.as_str()
        }))
    }

    async fn find_location(&self, id: LocationId) -> AppResult<Option<Location>> {
        Ok(self.locations.read().await.get(&id).cloned())
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
        self.locations
            .write()
            .await
            .insert(location.id, location.clone());
        Ok(location)
    }

    async fn update_location_parent(
        &self,
        id: LocationId,
        parent_id: Option<LocationId>,
    ) -> AppResult<Location> {
        let mut locations = self.locations.write().await;
        let Some(location) = locations.get_mut(&id) else {
            return Err(AppError::NotFound(format!(
                "location '{id}' does not exist"
            )));
        };
        location.parent_id = parent_id;
        Ok(location.clone())
    }

    async fn delete_location(&self, id: LocationId) -> AppResult<()> {
        if self.locations.write().await.remove(&id).is_none() {
            return Err(AppError::NotFound(format!(
                "location '{id}' does not exist"
            )));
        }
        Ok(())
    }
}
