use std::collections::HashSet;
use std::sync::Arc;

use rentfolio_core::AppResult;
use rentfolio_domain::{Principal, Property, PropertyId, Role, UnitId};
use tracing::{debug, warn};

use crate::ports::PortfolioStore;

/// Resolves the set of properties a principal may see.
///
/// The visibility set is derived from ownership, assignment, and tenancy
/// edges on every call; nothing is cached across principals.
#[derive(Clone)]
pub struct PropertyScopeResolver {
    store: Arc<dyn PortfolioStore>,
}

impl PropertyScopeResolver {
    /// Creates a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self { store }
    }

    /// Returns the active properties visible to the principal, sorted by
    /// name for deterministic downstream rendering.
    ///
    /// Every branch short-circuits to an empty result as soon as an
    /// intermediate relation comes back empty, without issuing the
    /// dependent fetches.
    pub async fn visible_properties(&self, principal: &Principal) -> AppResult<Vec<Property>> {
        let properties = match principal.role {
            Role::PropertyManager => self.managed_properties(principal).await?,
            Role::Admin | Role::Landlord => {
                self.store
                    .active_properties_for_owner(principal.user_id)
                    .await?
            }
            Role::Tenant => self.occupied_properties(principal).await?,
        };

        debug!(
            role = principal.role.as_str(),
            count = properties.len(),
            "resolved property scope"
        );
        Ok(tidy(properties))
    }

    async fn managed_properties(&self, principal: &Principal) -> AppResult<Vec<Property>> {
        let assignments = self
            .store
            .active_assignments_for_manager(principal.user_id)
            .await?;
        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let property_ids = distinct_property_ids(
            assignments
                .iter()
                .map(|assignment| assignment.property_id),
        );
        self.store.active_properties_by_ids(&property_ids).await
    }

    async fn occupied_properties(&self, principal: &Principal) -> AppResult<Vec<Property>> {
        let Some(tenant_id) = principal.tenant_id else {
            return Ok(Vec::new());
        };

        let tenancies = self.store.active_tenancies_for_tenant(tenant_id).await?;
        if tenancies.is_empty() {
            return Ok(Vec::new());
        }

        let unit_ids: Vec<UnitId> = tenancies.iter().map(|tenancy| tenancy.unit_id).collect();
        let units = self.store.units_by_ids(&unit_ids).await?;
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let property_ids = distinct_property_ids(units.iter().map(|unit| unit.property_id));
        self.store.active_properties_by_ids(&property_ids).await
    }
}

fn distinct_property_ids(ids: impl Iterator<Item = PropertyId>) -> Vec<PropertyId> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

/// Drops records the store handed back without a usable name, then orders
/// the rest by name (id as tiebreaker) so equal snapshots render equally.
fn tidy(mut properties: Vec<Property>) -> Vec<Property> {
    properties.retain(|property| {
        if property.name.trim().is_empty() {
            warn!(property_id = %property.id, "dropping blank-named property from scope");
            return false;
        }
        true
    });
    properties.sort_by(|left, right| {
        left.name
            .cmp(&right.name)
            .then_with(|| left.id.cmp(&right.id))
    });
    properties
}
