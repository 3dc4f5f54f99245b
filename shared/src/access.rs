//! Role-based access vocabulary
//!
//! The backend assigns every user exactly one role out of a closed
//! set. Authorization on the client happens in two forms:
//!
//! - **Hierarchy check** (`is_at_least`): "at least this privileged",
//!   using the fixed order ADMIN > MANAGER > EMPLOYEE.
//! - **Allow-list check** (`is_allowed`): exact membership in a set of
//!   permitted roles, independent of rank. An empty allow-list means
//!   authentication alone suffices.
//!
//! A role string outside the closed set carries zero privilege.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRole {
    Admin,
    Manager,
    Employee,
}

impl AccessRole {
    /// Numeric rank in the role hierarchy. Higher outranks lower.
    pub const fn rank(self) -> u8 {
        match self {
            AccessRole::Admin => 3,
            AccessRole::Manager => 2,
            AccessRole::Employee => 1,
        }
    }

    /// Wire representation of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessRole::Admin => "ADMIN",
            AccessRole::Manager => "MANAGER",
            AccessRole::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for AccessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for AccessRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(AccessRole::Admin),
            "MANAGER" => Ok(AccessRole::Manager),
            "EMPLOYEE" => Ok(AccessRole::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Rank of an optional role. Absent or unrecognized roles rank 0.
pub fn rank_of(role: Option<AccessRole>) -> u8 {
    role.map(AccessRole::rank).unwrap_or(0)
}

/// Hierarchy form: true iff `role` is at least as privileged as
/// `required`.
pub fn is_at_least(role: Option<AccessRole>, required: AccessRole) -> bool {
    rank_of(role) >= required.rank()
}

/// Allow-list form: true iff the list is empty (authentication alone
/// suffices) or `role` is a member.
pub fn is_allowed(role: Option<AccessRole>, allowed: &[AccessRole]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match role {
        Some(r) => allowed.contains(&r),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AccessRole; 3] = [AccessRole::Admin, AccessRole::Manager, AccessRole::Employee];

    #[test]
    fn hierarchy_is_total_order() {
        assert!(AccessRole::Admin.rank() > AccessRole::Manager.rank());
        assert!(AccessRole::Manager.rank() > AccessRole::Employee.rank());
        assert!(AccessRole::Employee.rank() > 0);
    }

    #[test]
    fn is_at_least_matches_rank_over_all_pairs() {
        for user in ALL {
            for required in ALL {
                assert_eq!(
                    is_at_least(Some(user), required),
                    user.rank() >= required.rank(),
                    "user={user} required={required}"
                );
            }
        }
    }

    #[test]
    fn missing_role_has_zero_privilege() {
        for required in ALL {
            assert!(!is_at_least(None, required));
        }
        assert_eq!(rank_of(None), 0);
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert!("SUPERVISOR".parse::<AccessRole>().is_err());
        assert!("admin".parse::<AccessRole>().is_err());
        assert_eq!("MANAGER".parse::<AccessRole>(), Ok(AccessRole::Manager));
    }

    #[test]
    fn empty_allow_list_always_permits() {
        for user in ALL {
            assert!(is_allowed(Some(user), &[]));
        }
        assert!(is_allowed(None, &[]));
    }

    #[test]
    fn allow_list_is_exact_membership() {
        let allowed = [AccessRole::Manager, AccessRole::Admin];
        assert!(is_allowed(Some(AccessRole::Admin), &allowed));
        assert!(is_allowed(Some(AccessRole::Manager), &allowed));
        // ADMIN outranks EMPLOYEE but rank does not apply here
        assert!(!is_allowed(Some(AccessRole::Employee), &allowed));
        assert!(!is_allowed(None, &allowed));
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&AccessRole::Employee).unwrap();
        assert_eq!(json, "\"EMPLOYEE\"");
        let role: AccessRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, AccessRole::Admin);
    }
}
