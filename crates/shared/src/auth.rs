//! Authentication claims and capability checks.
//!
//! Margin does not issue tokens; the deployment's identity service does.
//! This module carries the claims shape plus the capability mapping used to
//! gate expense visibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Organization ID (current context).
    pub org: Uuid,
    /// User's role in the organization.
    pub role: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, org_id: Uuid, role: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            org: org_id,
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the organization ID from claims.
    #[must_use]
    pub const fn organization_id(&self) -> Uuid {
        self.org
    }

    /// Returns true if the role in these claims grants the capability.
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        capability.granted_to(&self.role)
    }
}

/// Capabilities derived from organization roles.
///
/// The role claim is the contract with the identity service; capability
/// mapping is owned here so route handlers never match on raw role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// View and open expense records awaiting or past approval.
    ApproveExpenses,
}

impl Capability {
    /// Returns true if the given role holds this capability.
    #[must_use]
    pub fn granted_to(self, role: &str) -> bool {
        match self {
            Self::ApproveExpenses => matches!(role, "owner" | "admin" | "approver"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("owner", true)]
    #[case("admin", true)]
    #[case("approver", true)]
    #[case("member", false)]
    #[case("", false)]
    fn approve_expenses_by_role(#[case] role: &str, #[case] expected: bool) {
        assert_eq!(Capability::ApproveExpenses.granted_to(role), expected);
    }

    #[test]
    fn claims_capability_uses_role() {
        let expires = Utc::now() + chrono::Duration::minutes(15);
        let claims = Claims::new(Uuid::new_v4(), Uuid::new_v4(), "approver", expires);
        assert!(claims.has_capability(Capability::ApproveExpenses));

        let member = Claims::new(Uuid::new_v4(), Uuid::new_v4(), "member", expires);
        assert!(!member.has_capability(Capability::ApproveExpenses));
    }
}
