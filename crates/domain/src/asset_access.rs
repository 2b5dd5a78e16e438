//! Point-wise asset permission decisions.
//!
//! Implemented as one explicit truth table over role, ownership type, and
//! access kind so every combination is spelled out rather than implied.

use crate::portfolio::{
    Asset, AssetOwnerType, Principal, Property, PropertyId, Tenancy, TenancyId, TenancyStatus,
};
use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessKind {
    Read,
    Write,
}

/// Returns whether the principal may read the asset.
///
/// `visible_properties` must be the principal's own visibility set and
/// `active_tenancies` the principal's active tenancies; mixing in another
/// principal's scope produces wrong answers, not errors.
#[must_use]
pub fn can_read(
    principal: &Principal,
    asset: &Asset,
    visible_properties: &[Property],
    active_tenancies: &[Tenancy],
) -> bool {
    evaluate(
        AccessKind::Read,
        principal,
        asset,
        visible_properties,
        active_tenancies,
    )
}

/// Returns whether the principal may mutate the asset.
#[must_use]
pub fn can_write(
    principal: &Principal,
    asset: &Asset,
    visible_properties: &[Property],
    active_tenancies: &[Tenancy],
) -> bool {
    evaluate(
        AccessKind::Write,
        principal,
        asset,
        visible_properties,
        active_tenancies,
    )
}

fn evaluate(
    kind: AccessKind,
    principal: &Principal,
    asset: &Asset,
    visible_properties: &[Property],
    active_tenancies: &[Tenancy],
) -> bool {
    match (principal.role, asset.owner_type, kind) {
        (Role::Admin, _, _) => true,

        // Managers and landlords act only on the rental side, and only
        // within their visibility set.
        (Role::Landlord | Role::PropertyManager, AssetOwnerType::Rental, _) => asset
            .property_id
            .is_some_and(|id| property_is_visible(id, visible_properties)),
        (Role::Landlord | Role::PropertyManager, AssetOwnerType::Tenant, _) => false,

        // Tenants own their tenant-side assets outright.
        (Role::Tenant, AssetOwnerType::Tenant, _) => asset
            .tenancy_id
            .is_some_and(|id| has_matching_active_tenancy(id, active_tenancies)),

        // Rental assets on an occupied property are tenant-readable but
        // never tenant-writable.
        (Role::Tenant, AssetOwnerType::Rental, AccessKind::Read) => {
            active_tenancies
                .iter()
                .any(|tenancy| tenancy.status == TenancyStatus::Active)
                && asset
                    .property_id
                    .is_some_and(|id| property_is_visible(id, visible_properties))
        }
        (Role::Tenant, AssetOwnerType::Rental, AccessKind::Write) => false,
    }
}

fn property_is_visible(id: PropertyId, visible_properties: &[Property]) -> bool {
    visible_properties.iter().any(|property| property.id == id)
}

fn has_matching_active_tenancy(id: TenancyId, active_tenancies: &[Tenancy]) -> bool {
    active_tenancies
        .iter()
        .any(|tenancy| tenancy.id == id && tenancy.status == TenancyStatus::Active)
}
