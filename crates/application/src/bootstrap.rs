use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use rentfolio_core::AppResult;
use rentfolio_domain::{
    Asset, Category, Location, Principal, Property, PropertyId, Role, Tenancy, TenancyId,
    TenancyStatus, Unit, UnitId, Vendor,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::ports::PortfolioStore;
use crate::scope::PropertyScopeResolver;

/// Everything a session needs to render, loaded in one scoped pass.
///
/// A snapshot is consistent for a single bootstrap call and is meant to be
/// consumed and discarded, never cached across principals.
#[derive(Debug, Clone, Serialize)]
pub struct ScopedSnapshot {
    /// Principal the snapshot was scoped for; `None` for the empty snapshot.
    pub principal: Option<Principal>,
    /// Visible properties, hygiene-filtered and name-sorted.
    pub properties: Vec<Property>,
    /// Categories visible to the principal.
    pub categories: Vec<Category>,
    /// Full location forest.
    pub locations: Vec<Location>,
    /// Full vendor list.
    pub vendors: Vec<Vendor>,
    /// Assets within the principal's scope.
    pub assets: Vec<Asset>,
    /// Tenancies on the visible properties' units.
    pub tenancies: Vec<Tenancy>,
    /// Units on the visible properties.
    pub units: Vec<Unit>,
    /// When the load settled.
    pub loaded_at: DateTime<Utc>,
}

impl ScopedSnapshot {
    fn empty() -> Self {
        Self {
            principal: None,
            properties: Vec::new(),
            categories: Vec::new(),
            locations: Vec::new(),
            vendors: Vec::new(),
            assets: Vec::new(),
            tenancies: Vec::new(),
            units: Vec::new(),
            loaded_at: Utc::now(),
        }
    }
}

type SharedBootstrap = Shared<BoxFuture<'static, AppResult<Arc<ScopedSnapshot>>>>;

/// Coordinates the per-session scoped load as one deduplicated operation.
///
/// One orchestrator instance belongs to one session and holds at most one
/// bootstrap in flight: calls made while a load is pending join it instead
/// of issuing duplicate store fetches, and every joined caller observes the
/// identical outcome. The in-flight handle is cleared once the operation
/// settles, success or failure, leaving the orchestrator free for a fresh
/// attempt.
pub struct BootstrapOrchestrator {
    store: Arc<dyn PortfolioStore>,
    scope: PropertyScopeResolver,
    inflight: Mutex<Option<SharedBootstrap>>,
}

impl BootstrapOrchestrator {
    /// Creates an orchestrator over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self {
            scope: PropertyScopeResolver::new(Arc::clone(&store)),
            store,
            inflight: Mutex::new(None),
        }
    }

    /// Loads the scoped snapshot for the session principal.
    ///
    /// A missing principal yields an empty snapshot, not an error. Any store
    /// failure aborts the whole load and is surfaced to every caller that
    /// joined it; no partial snapshot is ever returned.
    pub async fn bootstrap(
        &self,
        principal: Option<Principal>,
    ) -> AppResult<Arc<ScopedSnapshot>> {
        let Some(principal) = principal else {
            return Ok(Arc::new(ScopedSnapshot::empty()));
        };

        let operation = {
            let mut inflight = self.inflight.lock().await;
            if let Some(pending) = inflight.as_ref() {
                debug!("joining in-flight bootstrap");
                pending.clone()
            } else {
                let operation =
                    load(Arc::clone(&self.store), self.scope.clone(), principal)
                        .boxed()
                        .shared();
                *inflight = Some(operation.clone());
                operation
            }
        };

        let outcome = operation.clone().await;

        // Only the handle for this very operation is cleared; a newer load
        // registered by a later caller stays in place.
        let mut inflight = self.inflight.lock().await;
        if inflight
            .as_ref()
            .is_some_and(|pending| Shared::ptr_eq(pending, &operation))
        {
            *inflight = None;
        }

        outcome
    }
}

async fn load(
    store: Arc<dyn PortfolioStore>,
    scope: PropertyScopeResolver,
    principal: Principal,
) -> AppResult<Arc<ScopedSnapshot>> {
    let category_owner = if principal.role.is_admin() {
        None
    } else {
        Some(principal.user_id)
    };

    let (categories, locations, vendors, properties) = tokio::try_join!(
        store.categories_for_owner(category_owner),
        store.list_locations(),
        store.list_vendors(),
        scope.visible_properties(&principal),
    )?;

    let property_ids: Vec<PropertyId> = properties.iter().map(|property| property.id).collect();
    let units = if property_ids.is_empty() {
        Vec::new()
    } else {
        store.units_for_properties(&property_ids).await?
    };

    let unit_ids: Vec<UnitId> = units.iter().map(|unit| unit.id).collect();
    let tenancies = if unit_ids.is_empty() {
        Vec::new()
    } else {
        store.tenancies_for_units(&unit_ids).await?
    };

    let assets = scoped_assets(&store, &principal, &property_ids, &tenancies).await?;

    debug!(
        properties = properties.len(),
        units = units.len(),
        tenancies = tenancies.len(),
        assets = assets.len(),
        "bootstrap load settled"
    );

    Ok(Arc::new(ScopedSnapshot {
        principal: Some(principal),
        properties,
        categories,
        locations,
        vendors,
        assets,
        tenancies,
        units,
        loaded_at: Utc::now(),
    }))
}

async fn scoped_assets(
    store: &Arc<dyn PortfolioStore>,
    principal: &Principal,
    property_ids: &[PropertyId],
    tenancies: &[Tenancy],
) -> AppResult<Vec<Asset>> {
    match principal.role {
        Role::Landlord | Role::PropertyManager => {
            if property_ids.is_empty() {
                Ok(Vec::new())
            } else {
                store.rental_assets_for_properties(property_ids).await
            }
        }
        Role::Tenant => {
            if property_ids.is_empty() {
                return Ok(Vec::new());
            }

            let own_tenancy_ids: Vec<TenancyId> = tenancies
                .iter()
                .filter(|tenancy| {
                    tenancy.status == TenancyStatus::Active
                        && principal
                            .tenant_id
                            .is_some_and(|tenant_id| tenant_id == tenancy.tenant_id)
                })
                .map(|tenancy| tenancy.id)
                .collect();

            let (mut assets, rental) = tokio::try_join!(
                store.tenant_assets_for_tenancies(&own_tenancy_ids),
                store.rental_assets_for_properties(property_ids),
            )?;
            assets.extend(rental);
            Ok(assets)
        }
        Role::Admin => store.list_assets().await,
    }
}
