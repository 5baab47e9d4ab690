use crate::abstract_trait::DynCredentialStore;
use shared::domain::{
    navigation::{Access, AuthState, Destination},
    role::Role,
};
use tracing::debug;

pub const DASHBOARD_PREFIX: &str = "/dashboard";

/// Which roles may open each dashboard. Sub-paths inherit their dashboard's
/// roles.
pub const PROTECTED_ROUTES: [(&str, &[Role]); 4] = [
    ("/dashboard/admin", &[Role::Admin]),
    (
        "/dashboard/volunteer",
        &[Role::Volunteer, Role::VolunteerLeader],
    ),
    ("/dashboard/ngo-coordinator", &[Role::NgoCoordinator]),
    ("/dashboard/program-manager", &[Role::ProgramManager]),
];

/// Per-navigation access check. Reads the credential store on every call,
/// so a logout in another task is observed on the next check.
#[derive(Clone)]
pub struct RouteGuard {
    store: DynCredentialStore,
}

impl RouteGuard {
    pub fn new(store: DynCredentialStore) -> Self {
        Self { store }
    }

    pub fn state(&self) -> AuthState {
        match self.store.session() {
            Some(session) => AuthState::Authenticated(session.role),
            None => AuthState::Unauthenticated,
        }
    }

    pub fn authorize(&self, required: &[Role]) -> Access {
        let deny = Access::Deny {
            redirect_to: Destination::Login,
        };

        match self.store.session() {
            Some(session) if required.contains(&session.role) => Access::Allow,
            Some(session) => {
                debug!("Access denied: role {} not in {required:?}", session.role);
                deny
            }
            None => {
                debug!("Access denied: no session");
                deny
            }
        }
    }

    /// `None` when the path is not guarded at all.
    pub fn authorize_path(&self, path: &str) -> Option<Access> {
        if !is_dashboard_path(path) {
            return None;
        }

        match required_roles(path) {
            Some(roles) => Some(self.authorize(roles)),
            None => Some(Access::Deny {
                redirect_to: Destination::Login,
            }),
        }
    }
}

fn is_dashboard_path(path: &str) -> bool {
    path == DASHBOARD_PREFIX || path.starts_with("/dashboard/")
}

pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    PROTECTED_ROUTES
        .iter()
        .find(|(prefix, _)| {
            path == *prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .map(|(_, roles)| *roles)
}
