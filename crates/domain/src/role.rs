// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access roles.
//!
//! Roles form a closed set and every capability check dispatches
//! exhaustively over it; there is no string comparison at call sites.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of access roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// An unauthenticated visitor browsing the catalog.
    Guest,
    /// An authenticated client who books appointments.
    Client,
    /// A shop operator managing one barbershop.
    BarberAdmin,
    /// A platform operator managing all barbershops.
    SuperAdmin,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Client => "client",
            Self::BarberAdmin => "barber_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Returns true if this role may create and view its own appointments.
    #[must_use]
    pub const fn can_book(&self) -> bool {
        match self {
            Self::Guest => false,
            Self::Client | Self::BarberAdmin | Self::SuperAdmin => true,
        }
    }

    /// Returns true if this role may view the shop-wide appointment list.
    #[must_use]
    pub const fn can_view_admin_dashboard(&self) -> bool {
        match self {
            Self::Guest | Self::Client => false,
            Self::BarberAdmin | Self::SuperAdmin => true,
        }
    }

    /// Returns true if this role may manage every barbershop on the platform.
    #[must_use]
    pub const fn can_manage_barbershops(&self) -> bool {
        match self {
            Self::Guest | Self::Client | Self::BarberAdmin => false,
            Self::SuperAdmin => true,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "client" => Ok(Self::Client),
            "barber_admin" => Ok(Self::BarberAdmin),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_round_trip() {
        let roles = vec![
            Role::Guest,
            Role::Client,
            Role::BarberAdmin,
            Role::SuperAdmin,
        ];

        for role in roles {
            let s = role.as_str();
            match Role::from_str(s) {
                Ok(parsed) => assert_eq!(role, parsed),
                Err(e) => panic!("Failed to parse role string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_role_string() {
        assert!(Role::from_str("administrator").is_err());
    }

    #[test]
    fn test_guest_cannot_book() {
        assert!(!Role::Guest.can_book());
        assert!(Role::Client.can_book());
    }

    #[test]
    fn test_dashboard_access_is_admin_only() {
        assert!(!Role::Guest.can_view_admin_dashboard());
        assert!(!Role::Client.can_view_admin_dashboard());
        assert!(Role::BarberAdmin.can_view_admin_dashboard());
        assert!(Role::SuperAdmin.can_view_admin_dashboard());
    }

    #[test]
    fn test_platform_management_is_super_admin_only() {
        assert!(!Role::BarberAdmin.can_manage_barbershops());
        assert!(Role::SuperAdmin.can_manage_barbershops());
    }
}
