use shared::{
    domain::{
        navigation::{Destination, RouteDecision},
        responses::LoginResponse,
        role::Role,
    },
    errors::ServiceError,
};
use tracing::{info, warn};

pub const NGO_PENDING_NOTICE: &str = "Your NGO registration is pending admin approval.";

/// Maps a successful login to the first view the user should land on.
pub struct RoleRouter;

impl RoleRouter {
    pub fn route(login: &LoginResponse) -> Result<RouteDecision, ServiceError> {
        let role = login.role.parse::<Role>().map_err(|e| {
            warn!("⚠️ Refusing to route login: {e}");
            ServiceError::UnknownRole(e.0)
        })?;

        let decision = match role {
            Role::NgoCoordinator => match &login.ngo_profile {
                None => RouteDecision::to(Destination::NgoRegistrationForm),
                Some(profile) if profile.is_approved() => {
                    RouteDecision::to(Destination::NgoCoordinatorDashboard)
                }
                Some(_) => RouteDecision::with_notice(Destination::PublicHome, NGO_PENDING_NOTICE),
            },
            Role::Admin => RouteDecision::to(Destination::AdminDashboard),
            Role::Volunteer | Role::VolunteerLeader => {
                RouteDecision::to(Destination::VolunteerDashboard)
            }
            Role::ProgramManager => RouteDecision::to(Destination::ProgramManagerDashboard),
        };

        info!("🧭 Routing {role} to {}", decision.destination.path());
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::responses::NgoProfile;

    fn login(role: &str, status: Option<&str>) -> LoginResponse {
        LoginResponse {
            token: "tok".into(),
            role: role.into(),
            username: "user".into(),
            ngo_profile: status.map(|s| NgoProfile {
                organization_name: "Helping Hands".into(),
                verification_status: s.into(),
            }),
        }
    }

    #[test]
    fn coordinator_without_profile_goes_to_registration_form() {
        let decision = RoleRouter::route(&login("NGO_COORDINATOR", None)).unwrap();
        assert_eq!(
            decision,
            RouteDecision::to(Destination::NgoRegistrationForm),
        );
    }

    #[test]
    fn approved_status_is_case_insensitive() {
        let decision = RoleRouter::route(&login("NGO_COORDINATOR", Some("approved"))).unwrap();
        assert_eq!(decision.destination, Destination::NgoCoordinatorDashboard);
        assert!(decision.notice.is_none());
    }

    #[test]
    fn pending_coordinator_lands_home_with_notice() {
        let decision = RoleRouter::route(&login("NGO_COORDINATOR", Some("PENDING"))).unwrap();
        assert_eq!(decision.destination, Destination::PublicHome);
        assert_eq!(decision.notice.as_deref(), Some(NGO_PENDING_NOTICE));
    }

    #[test]
    fn rejected_coordinator_is_not_let_in() {
        let decision = RoleRouter::route(&login("NGO_COORDINATOR", Some("REJECTED"))).unwrap();
        assert_eq!(decision.destination, Destination::PublicHome);
    }

    #[test]
    fn fixed_roles_map_to_their_dashboards() {
        let cases = [
            ("ADMIN", Destination::AdminDashboard),
            ("VOLUNTEER", Destination::VolunteerDashboard),
            ("VOLUNTEER_LEADER", Destination::VolunteerDashboard),
            ("PROGRAM_MANAGER", Destination::ProgramManagerDashboard),
        ];

        for (role, expected) in cases {
            let decision = RoleRouter::route(&login(role, None)).unwrap();
            assert_eq!(decision.destination, expected, "role {role}");
        }
    }

    #[test]
    fn unknown_role_is_an_error() {
        let err = RoleRouter::route(&login("BOGUS", None)).unwrap_err();
        assert!(matches!(err, ServiceError::UnknownRole(ref label) if label == "BOGUS"));
    }
}
