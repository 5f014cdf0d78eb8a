//! Access policies for protected paths. The table below is the single
//! authority consulted by the route guard and by role-conditional navigation;
//! any path under a protected prefix with no satisfying identity is denied.
//! Paths outside the table are public.

use crate::features::auth::session::Identity;

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_MANAGER: &str = "Manager";

#[derive(Clone, Copy, Debug)]
pub enum Requirement {
    /// Any authenticated identity.
    Authenticated,
    /// An identity holding at least one of the listed roles.
    AnyRole(&'static [&'static str]),
}

pub struct PolicyEntry {
    pub prefix: &'static str,
    pub requirement: Requirement,
}

/// Protected-path table. Longest-prefix entries first where prefixes nest.
pub const ACCESS_POLICIES: &[PolicyEntry] = &[
    PolicyEntry {
        prefix: "/admin",
        requirement: Requirement::AnyRole(&[ROLE_ADMIN, ROLE_MANAGER]),
    },
    PolicyEntry {
        prefix: "/staff",
        requirement: Requirement::AnyRole(&[ROLE_ADMIN]),
    },
    PolicyEntry {
        prefix: "/user",
        requirement: Requirement::Authenticated,
    },
    PolicyEntry {
        prefix: "/order",
        requirement: Requirement::Authenticated,
    },
    PolicyEntry {
        prefix: "/checkout",
        requirement: Requirement::Authenticated,
    },
];

/// The policy entry governing `path`, or `None` for public paths.
pub fn required_for(path: &str) -> Option<&'static PolicyEntry> {
    ACCESS_POLICIES
        .iter()
        .find(|entry| matches_prefix(entry.prefix, path))
}

fn matches_prefix(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// True iff the identity satisfies the entry's requirement. An absent
/// identity satisfies nothing.
pub fn is_authorized(identity: Option<&Identity>, entry: &PolicyEntry) -> bool {
    let Some(identity) = identity else {
        return false;
    };

    match entry.requirement {
        Requirement::Authenticated => true,
        Requirement::AnyRole(required) => required.iter().any(|name| identity.has_role(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::roles::RoleName;

    fn identity_with(roles: &[&str]) -> Identity {
        Identity {
            id: "7b6e".to_string(),
            email: "ada@mercato.store".to_string(),
            display_name: "Ada".to_string(),
            token: "tok".to_string(),
            roles: roles.iter().map(|name| RoleName::from(*name)).collect(),
            issued_at: 0,
        }
    }

    #[test]
    fn prefix_matching_requires_a_segment_boundary() {
        assert!(required_for("/user").is_some());
        assert!(required_for("/user/orders").is_some());
        assert!(required_for("/username").is_none());
        assert!(required_for("/").is_none());
        assert!(required_for("/products").is_none());
    }

    #[test]
    fn absent_identity_is_never_authorized() {
        let entry = required_for("/user/orders").expect("protected");
        assert!(!is_authorized(None, entry));
    }

    #[test]
    fn authenticated_requirement_accepts_any_identity() {
        let entry = required_for("/checkout").expect("protected");
        assert!(is_authorized(Some(&identity_with(&[])), entry));
    }

    #[test]
    fn role_requirement_needs_an_intersection() {
        let entry = required_for("/admin/products").expect("protected");
        assert!(!is_authorized(Some(&identity_with(&[])), entry));
        assert!(!is_authorized(Some(&identity_with(&["Support"])), entry));
        assert!(is_authorized(Some(&identity_with(&["Manager"])), entry));
        assert!(is_authorized(Some(&identity_with(&["Admin"])), entry));
    }

    #[test]
    fn staff_management_is_admin_only() {
        let entry = required_for("/staff/7b6e").expect("protected");
        assert!(!is_authorized(Some(&identity_with(&["Manager"])), entry));
        assert!(is_authorized(Some(&identity_with(&["Admin"])), entry));
    }
}
