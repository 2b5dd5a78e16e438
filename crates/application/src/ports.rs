use async_trait::async_trait;
use rentfolio_core::{AppResult, UserId};
use rentfolio_domain::{
    Asset, Category, Location, LocationId, ManagementAssignment, Property, PropertyId, TenantId,
    Tenancy, TenancyId, Unit, UnitId, Vendor,
};

/// Port over the remote entity store backing the scoping engine.
///
/// Each method maps to one list, filter, or mutation call against the store.
/// Id-slice arguments carry "value in set" semantics; listing methods that
/// mention a status are pre-filtered by the store. Calls are network-backed
/// and fail with [`rentfolio_core::AppError::Store`].
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Lists categories owned by `owner`, or every category when `None`.
    async fn categories_for_owner(&self, owner: Option<UserId>) -> AppResult<Vec<Category>>;

    /// Lists every location.
    async fn list_locations(&self) -> AppResult<Vec<Location>>;

    /// Lists every vendor.
    async fn list_vendors(&self) -> AppResult<Vec<Vendor>>;

    /// Lists active properties owned by the given identity.
    async fn active_properties_for_owner(&self, owner: UserId) -> AppResult<Vec<Property>>;

    /// Lists active properties whose id is in the given set.
    async fn active_properties_by_ids(&self, ids: &[PropertyId]) -> AppResult<Vec<Property>>;

    /// Lists active management assignments held by the given manager.
    async fn active_assignments_for_manager(
        &self,
        manager: UserId,
    ) -> AppResult<Vec<ManagementAssignment>>;

    /// Lists units whose id is in the given set.
    async fn units_by_ids(&self, ids: &[UnitId]) -> AppResult<Vec<Unit>>;

    /// Lists units belonging to any of the given properties.
    async fn units_for_properties(&self, property_ids: &[PropertyId]) -> AppResult<Vec<Unit>>;

    /// Lists tenancies on any of the given units, regardless of status.
    async fn tenancies_for_units(&self, unit_ids: &[UnitId]) -> AppResult<Vec<Tenancy>>;

    /// Lists active tenancies held by the given tenant record.
    async fn active_tenancies_for_tenant(&self, tenant_id: TenantId) -> AppResult<Vec<Tenancy>>;

    /// Lists rental-owned assets linked to any of the given properties.
    async fn rental_assets_for_properties(
        &self,
        property_ids: &[PropertyId],
    ) -> AppResult<Vec<Asset>>;

    /// Lists tenant-owned assets linked to any of the given tenancies.
    async fn tenant_assets_for_tenancies(
        &self,
        tenancy_ids: &[TenancyId],
    ) -> AppResult<Vec<Asset>>;

    /// Lists every asset.
    async fn list_assets(&self) -> AppResult<Vec<Asset>>;

    /// Finds a single location by id.
    async fn find_location(&self, id: LocationId) -> AppResult<Option<Location>>;

    /// Creates a location under the given parent.
    async fn create_location(
        &self,
        name: &str,
        parent_id: Option<LocationId>,
    ) -> AppResult<Location>;

    /// Rewrites the parent link of a location and returns the updated record.
    async fn update_location_parent(
        &self,
        id: LocationId,
        parent_id: Option<LocationId>,
    ) -> AppResult<Location>;

    /// Deletes a location.
    async fn delete_location(&self, id: LocationId) -> AppResult<()>;
}
