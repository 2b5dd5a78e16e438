use std::str::FromStr;

use rentfolio_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Closed set of principal roles understood by the scoping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator with unrestricted access.
    Admin,
    /// Owner of one or more properties.
    Landlord,
    /// Delegated manager assigned to properties by their owners.
    PropertyManager,
    /// Occupant linked to units through active tenancies.
    Tenant,
}

impl Role {
    /// Parses a raw role value from a session record.
    ///
    /// Input is trimmed and lower-cased; `property_manager` and
    /// `propertymanager` both resolve to the manager role. Unknown or empty
    /// values are rejected rather than defaulted, so an unvetted session
    /// record can never widen its own scope.
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "landlord" => Ok(Self::Landlord),
            "propertymanager" | "property_manager" => Ok(Self::PropertyManager),
            "tenant" => Ok(Self::Tenant),
            _ => Err(AppError::Validation(format!(
                "unknown role value '{}'",
                raw.trim()
            ))),
        }
    }

    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Landlord => "landlord",
            Self::PropertyManager => "property_manager",
            Self::Tenant => "tenant",
        }
    }

    /// Returns whether this is the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns whether this is the landlord role.
    #[must_use]
    pub fn is_landlord(&self) -> bool {
        matches!(self, Self::Landlord)
    }

    /// Returns whether this is the property-manager role.
    #[must_use]
    pub fn is_property_manager(&self) -> bool {
        matches!(self, Self::PropertyManager)
    }

    /// Returns whether this is the tenant role.
    #[must_use]
    pub fn is_tenant(&self) -> bool {
        matches!(self, Self::Tenant)
    }

    /// Returns whether this role manages properties directly or by delegation.
    #[must_use]
    pub fn is_landlord_or_manager(&self) -> bool {
        matches!(self, Self::Landlord | Self::PropertyManager)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn known_roles_parse_case_insensitively() {
        assert_eq!(Role::parse("Admin").ok(), Some(Role::Admin));
        assert_eq!(Role::parse("  landlord ").ok(), Some(Role::Landlord));
        assert_eq!(Role::parse("TENANT").ok(), Some(Role::Tenant));
    }

    #[test]
    fn manager_role_accepts_both_spellings() {
        assert_eq!(
            Role::parse("propertymanager").ok(),
            Some(Role::PropertyManager)
        );
        assert_eq!(
            Role::parse("PROPERTY_MANAGER").ok(),
            Some(Role::PropertyManager)
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::parse("superuser").is_err());
        assert!(Role::parse("").is_err());
        assert!(Role::parse("   ").is_err());
    }

    #[test]
    fn storage_values_round_trip() {
        for role in [
            Role::Admin,
            Role::Landlord,
            Role::PropertyManager,
            Role::Tenant,
        ] {
            assert_eq!(Role::parse(role.as_str()).ok(), Some(role));
        }
    }

    #[test]
    fn predicates_match_variants() {
        assert!(Role::Admin.is_admin());
        assert!(Role::Landlord.is_landlord_or_manager());
        assert!(Role::PropertyManager.is_landlord_or_manager());
        assert!(!Role::Tenant.is_landlord_or_manager());
        assert!(Role::Tenant.is_tenant());
    }
}
