//! Domain types and pure scoping engines for Rentfolio.

#![forbid(unsafe_code)]

/// Asset read/write permission truth table.
pub mod asset_access;
/// Cycle-safe location forest operations.
pub mod location;
/// Portfolio entities and the session principal.
pub mod portfolio;
/// Principal role parsing and predicates.
pub mod role;

pub use asset_access::{can_read, can_write};
pub use location::{Location, LocationEntry, LocationId, breadcrumb, hierarchical_list, would_create_cycle};
pub use portfolio::{
    Asset, AssetId, AssetOwnerType, AssignmentStatus, Category, CategoryId, ManagementAssignment,
    ManagementAssignmentId, Principal, Property, PropertyId, PropertyStatus, TenantId, Tenancy,
    TenancyId, TenancyStatus, Unit, UnitId, Vendor, VendorId,
};
pub use role::Role;
