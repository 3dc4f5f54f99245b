//! Route guard
//!
//! Combines the session with the role policy to decide whether a
//! navigation may proceed. The two denial targets differ on purpose:
//! a failed hierarchy check lands on the dashboard (the page exists,
//! the user just lacks rank), while a failed allow-list check lands on
//! the unauthorized page.

use std::sync::Arc;

use shared::access::{self, AccessRole};

use crate::session::SessionStore;

/// Access requirement attached to a route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteRequirement {
    /// Any logged-in user may enter.
    Authenticated,
    /// Hierarchy form: the user's role must rank at least this high.
    AtLeast(AccessRole),
    /// Allow-list form: exact membership, rank does not apply. An
    /// empty list degenerates to `Authenticated`.
    AnyOf(Vec<AccessRole>),
}

/// Outcome of evaluating a route against the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Session restore has not completed; render a loading state
    /// instead of redirecting.
    Checking,
    Allowed,
    /// Not logged in. Carries the originally requested path so the
    /// login flow can return there.
    RedirectToLogin { return_to: String },
    /// Logged in but below the required rank.
    RedirectToDashboard,
    /// Logged in but not on the allow-list.
    Unauthorized,
}

/// Evaluates route requirements against the session.
#[derive(Clone)]
pub struct RouteGuard {
    session: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn evaluate(&self, requested_path: &str, requirement: &RouteRequirement) -> RouteDecision {
        if self.session.is_restoring() {
            return RouteDecision::Checking;
        }
        if !self.session.is_authenticated() {
            return RouteDecision::RedirectToLogin {
                return_to: requested_path.to_string(),
            };
        }
        let role = self.session.role();
        match requirement {
            RouteRequirement::Authenticated => RouteDecision::Allowed,
            RouteRequirement::AtLeast(required) => {
                if access::is_at_least(role, *required) {
                    RouteDecision::Allowed
                } else {
                    tracing::debug!(path = requested_path, "insufficient rank");
                    RouteDecision::RedirectToDashboard
                }
            }
            RouteRequirement::AnyOf(allowed) => {
                if access::is_allowed(role, allowed) {
                    RouteDecision::Allowed
                } else {
                    tracing::debug!(path = requested_path, "role not on allow-list");
                    RouteDecision::Unauthorized
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResourceClient;
    use crate::config::ClientConfig;
    use crate::http::HttpClient;
    use crate::session::Session;
    use tempfile::TempDir;

    fn guard_with_role(dir: &TempDir, role: Option<&str>) -> RouteGuard {
        let config = ClientConfig::default().with_data_dir(dir.path());
        let http = HttpClient::new(&config).unwrap();
        let session = Arc::new(SessionStore::new(ResourceClient::new(http), dir.path()));
        match role {
            Some(role) => {
                let content = serde_json::to_string(&Session {
                    user_id: 1,
                    username: "user".into(),
                    role: role.into(),
                    token: "tok".into(),
                })
                .unwrap();
                std::fs::write(dir.path().join("session.json"), content).unwrap();
                session.restore().unwrap();
            }
            None => {
                session.restore().unwrap();
            }
        }
        RouteGuard::new(session)
    }

    #[test]
    fn undetermined_session_yields_checking() {
        let dir = TempDir::new().unwrap();
        let config = ClientConfig::default().with_data_dir(dir.path());
        let http = HttpClient::new(&config).unwrap();
        let session = Arc::new(SessionStore::new(ResourceClient::new(http), dir.path()));
        let guard = RouteGuard::new(session);

        let decision = guard.evaluate("/employees", &RouteRequirement::Authenticated);
        assert_eq!(decision, RouteDecision::Checking);
    }

    #[test]
    fn anonymous_user_is_sent_to_login_with_return_path() {
        let dir = TempDir::new().unwrap();
        let guard = guard_with_role(&dir, None);

        let decision = guard.evaluate("/employees/7", &RouteRequirement::Authenticated);
        assert_eq!(
            decision,
            RouteDecision::RedirectToLogin {
                return_to: "/employees/7".into()
            }
        );
    }

    #[test]
    fn rank_check_redirects_to_dashboard_on_denial() {
        let dir = TempDir::new().unwrap();
        let guard = guard_with_role(&dir, Some("EMPLOYEE"));

        let requirement = RouteRequirement::AtLeast(AccessRole::Manager);
        assert_eq!(
            guard.evaluate("/reports", &requirement),
            RouteDecision::RedirectToDashboard
        );
    }

    #[test]
    fn rank_check_admits_equal_and_higher_ranks() {
        let requirement = RouteRequirement::AtLeast(AccessRole::Manager);
        for role in ["MANAGER", "ADMIN"] {
            let dir = TempDir::new().unwrap();
            let guard = guard_with_role(&dir, Some(role));
            assert_eq!(
                guard.evaluate("/reports", &requirement),
                RouteDecision::Allowed,
                "role={role}"
            );
        }
    }

    #[test]
    fn allow_list_denial_is_unauthorized_even_for_admin_rank() {
        let dir = TempDir::new().unwrap();
        let guard = guard_with_role(&dir, Some("ADMIN"));

        // Rank does not apply to the allow-list form.
        let requirement = RouteRequirement::AnyOf(vec![AccessRole::Employee]);
        assert_eq!(
            guard.evaluate("/my-attendance", &requirement),
            RouteDecision::Unauthorized
        );
    }

    #[test]
    fn empty_allow_list_admits_any_authenticated_user() {
        let dir = TempDir::new().unwrap();
        let guard = guard_with_role(&dir, Some("EMPLOYEE"));

        let decision = guard.evaluate("/profile", &RouteRequirement::AnyOf(Vec::new()));
        assert_eq!(decision, RouteDecision::Allowed);
    }

    #[test]
    fn unknown_role_fails_every_check_but_counts_as_logged_in() {
        let dir = TempDir::new().unwrap();
        let guard = guard_with_role(&dir, Some("SUPERVISOR"));

        assert_eq!(
            guard.evaluate("/dashboard", &RouteRequirement::Authenticated),
            RouteDecision::Allowed
        );
        assert_eq!(
            guard.evaluate(
                "/reports",
                &RouteRequirement::AtLeast(AccessRole::Employee)
            ),
            RouteDecision::RedirectToDashboard
        );
        assert_eq!(
            guard.evaluate(
                "/admin",
                &RouteRequirement::AnyOf(vec![AccessRole::Admin])
            ),
            RouteDecision::Unauthorized
        );
    }
}
