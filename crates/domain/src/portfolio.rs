//! Portfolio entities mirrored from the entity store, plus the session
//! principal whose access gets scoped over them.

use std::fmt::{Display, Formatter};

use rentfolio_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// Unique identifier for a property record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(Uuid);

impl PropertyId {
    /// Creates a random property identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a property identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PropertyId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PropertyId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a unit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(Uuid);

impl UnitId {
    /// Creates a random unit identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a unit identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for UnitId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a tenancy record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenancyId(Uuid);

impl TenancyId {
    /// Creates a random tenancy identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a tenancy identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for TenancyId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a tenant-person record.
///
/// Distinct from [`UserId`]: a tenant record is the store-side person a
/// tenancy points at, while the user id identifies the authenticated login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(Uuid);

impl TenantId {
    /// Creates a random tenant identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a tenant identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for TenantId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for an asset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(Uuid);

impl AssetId {
    /// Creates a random asset identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an asset identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for AssetId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a category record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Creates a random category identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a category identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a vendor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(Uuid);

impl VendorId {
    /// Creates a random vendor identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a vendor identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for VendorId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Unique identifier for a management-assignment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagementAssignmentId(Uuid);

impl ManagementAssignmentId {
    /// Creates a random assignment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an assignment identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for ManagementAssignmentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lifecycle status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Property is live and in scope.
    Active,
    /// Property is retired; never surfaced by scoping.
    Archived,
}

/// Lifecycle status of a tenancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenancyStatus {
    /// Occupancy is current; the tenancy participates in scoping.
    Active,
    /// Occupancy has ended.
    Ended,
}

/// Lifecycle status of a management assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Delegation is current; the assignment participates in scoping.
    Active,
    /// Delegation has been revoked or expired.
    Ended,
}

/// Classifies whether an asset belongs to the property side or the occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOwnerType {
    /// Belongs to the property owner; linked through `property_id`.
    Rental,
    /// Belongs to the occupying tenant; linked through `tenancy_id`.
    Tenant,
}

/// Rental property owned by a landlord or admin identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Stable property id.
    pub id: PropertyId,
    /// Identity that owns the property.
    pub owner_user_id: UserId,
    /// Display name; blank names are dropped by scope hygiene.
    pub name: String,
    /// Lifecycle status.
    pub status: PropertyStatus,
}

/// Rentable unit belonging to exactly one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable unit id.
    pub id: UnitId,
    /// Parent property.
    pub property_id: PropertyId,
    /// Display name.
    pub name: String,
}

/// Time-bounded occupancy link between a tenant record and a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenancy {
    /// Stable tenancy id.
    pub id: TenancyId,
    /// Occupied unit.
    pub unit_id: UnitId,
    /// Occupying tenant record.
    pub tenant_id: TenantId,
    /// Lifecycle status; only active tenancies grant scope.
    pub status: TenancyStatus,
}

/// Delegation record granting a property manager authority over a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementAssignment {
    /// Stable assignment id.
    pub id: ManagementAssignmentId,
    /// Property under management.
    pub property_id: PropertyId,
    /// Delegated manager identity.
    pub manager_user_id: UserId,
    /// Lifecycle status; only active assignments grant scope.
    pub status: AssignmentStatus,
}

/// Physical asset tracked against either a property or a tenancy.
///
/// `owner_type` decides which link is authoritative; the other link, if
/// present, is ignored by every permission and scoping decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable asset id.
    pub id: AssetId,
    /// Display name.
    pub name: String,
    /// Which side of the rental relationship owns the asset.
    pub owner_type: AssetOwnerType,
    /// Owning property, authoritative for rental-owned assets.
    pub property_id: Option<PropertyId>,
    /// Owning tenancy, authoritative for tenant-owned assets.
    pub tenancy_id: Option<TenancyId>,
}

/// Asset category, either global or private to one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category id.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Owning identity; `None` marks a global category.
    pub owner_user_id: Option<UserId>,
}

/// Service vendor available to every principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Stable vendor id.
    pub id: VendorId,
    /// Display name.
    pub name: String,
}

/// The authenticated actor whose access is being scoped.
///
/// Supplied by the caller from an external authentication result and trusted
/// as already authenticated. Immutable for the duration of a scoping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Authenticated login identity.
    pub user_id: UserId,
    /// Resolved role.
    pub role: Role,
    /// Linked tenant record, set when the principal occupies a unit.
    pub tenant_id: Option<TenantId>,
}

impl Principal {
    /// Creates a principal from authentication and tenancy data.
    #[must_use]
    pub fn new(user_id: UserId, role: Role, tenant_id: Option<TenantId>) -> Self {
        Self {
            user_id,
            role,
            tenant_id,
        }
    }
}
