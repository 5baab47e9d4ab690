mod common;

use auth::abstract_trait::CredentialStoreTrait;
use common::{spawn_backend, wire};
use shared::{
    domain::{
        requests::{CreateOpportunityRequest, NgoRegistrationRequest, RegisterRequest},
        responses::RoleBreakdown,
        role::{Role, VerificationStatus},
    },
    errors::ServiceError,
};

fn ngo_form() -> NgoRegistrationRequest {
    NgoRegistrationRequest {
        organization_name: "Helping Hands".into(),
        email: "contact@helpinghands.org".into(),
        phone_number: "+14155550123".into(),
        emergency_contact: "4155550199".into(),
        description: "Community kitchen".into(),
        mission_statement: "Feed everyone".into(),
        contact_info: String::new(),
        founded_date: None,
    }
}

#[tokio::test]
async fn bearer_header_follows_the_stored_token() {
    let backend = spawn_backend().await;
    let (deps, store) = wire(backend.base_url());

    deps.resource_client.list_volunteers().await.unwrap();
    assert!(backend.recorder.last().unwrap().authorization.is_none());

    store.save("tok123", "ADMIN", "root").unwrap();
    deps.resource_client.list_volunteers().await.unwrap();
    assert_eq!(
        backend.recorder.last().unwrap().authorization.as_deref(),
        Some("Bearer tok123")
    );

    store.clear().unwrap();
    deps.resource_client.list_ngos().await.unwrap();
    assert!(backend.recorder.last().unwrap().authorization.is_none());
}

#[tokio::test]
async fn volunteer_list_feeds_role_breakdown() {
    let backend = spawn_backend().await;
    let (deps, _store) = wire(backend.base_url());

    let users = deps.resource_client.list_volunteers().await.unwrap();
    let breakdown = RoleBreakdown::from_users(&users);

    assert_eq!(breakdown.total, 3);
    assert_eq!(breakdown.volunteer, 1);
    assert_eq!(breakdown.volunteer_leader, 1);
    assert_eq!(breakdown.admin, 1);
}

#[tokio::test]
async fn ngo_status_update_sends_verification_status() {
    let backend = spawn_backend().await;
    let (deps, store) = wire(backend.base_url());
    store.save("tok-root", "ADMIN", "root").unwrap();

    let ngos = deps.resource_client.list_ngos().await.unwrap();
    let pending: Vec<_> = ngos.iter().filter(|n| n.is_pending()).collect();
    assert_eq!(pending.len(), 1);

    deps.resource_client
        .update_ngo_status(pending[0].id, VerificationStatus::Approved)
        .await
        .unwrap();

    let seen = backend.recorder.last().unwrap();
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.path, "/ngos/update/10");
    assert_eq!(
        backend.recorder.bodies().last().unwrap()["verificationStatus"],
        "APPROVED"
    );
}

#[tokio::test]
async fn deleting_a_missing_ngo_is_not_found() {
    let backend = spawn_backend().await;
    let (deps, _store) = wire(backend.base_url());

    deps.resource_client.delete_ngo(10).await.unwrap();
    let err = deps.resource_client.delete_ngo(99).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref m) if m == "NGO not found"));
}

#[tokio::test]
async fn volunteer_admin_operations() {
    let backend = spawn_backend().await;
    let (deps, store) = wire(backend.base_url());
    store.save("tok-root", "ADMIN", "root").unwrap();

    let request = RegisterRequest::new("pm", "pm@example.org", "h", Role::ProgramManager);
    deps.resource_client.create_volunteer(&request).await.unwrap();
    assert_eq!(
        backend.recorder.bodies().last().unwrap()["role"],
        "PROGRAM_MANAGER"
    );

    deps.resource_client.delete_volunteer(2).await.unwrap();
    assert!(matches!(
        deps.resource_client.delete_volunteer(99).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn ngo_registration_posts_under_the_username() {
    let backend = spawn_backend().await;
    let (deps, store) = wire(backend.base_url());
    store.save("tok-carol", "NGO_COORDINATOR", "carol").unwrap();

    deps.resource_client
        .submit_ngo_registration("carol", &ngo_form())
        .await
        .unwrap();

    let seen = backend.recorder.last().unwrap();
    assert_eq!(seen.path, "/register/carol");
    let body = backend.recorder.bodies().last().cloned().unwrap();
    assert_eq!(body["organizationName"], "Helping Hands");
    assert_eq!(body["username"], "carol");
}

#[tokio::test]
async fn username_with_path_characters_stays_one_segment() {
    let backend = spawn_backend().await;
    let (deps, store) = wire(backend.base_url());
    store.save("tok-carol", "NGO_COORDINATOR", "team/a?b#c").unwrap();

    deps.resource_client
        .submit_ngo_registration("team/a?b#c", &ngo_form())
        .await
        .unwrap();

    let seen = backend.recorder.last().unwrap();
    assert_eq!(seen.path, "/register/team%2Fa%3Fb%23c");
    let body = backend.recorder.bodies().last().cloned().unwrap();
    assert_eq!(body["username"], "team/a?b#c");
}

#[tokio::test]
async fn invalid_ngo_form_is_rejected_locally() {
    let backend = spawn_backend().await;
    let (deps, _store) = wire(backend.base_url());

    let mut form = ngo_form();
    form.phone_number = "12ab".into();

    let err = deps
        .resource_client
        .submit_ngo_registration("carol", &form)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(ref m) if m.contains("phone_number")));
    assert!(backend.recorder.requests().is_empty());
}

#[tokio::test]
async fn opportunities_round_trip() {
    let backend = spawn_backend().await;
    let (deps, _store) = wire(backend.base_url());

    let list = deps.resource_client.list_opportunities().await.unwrap();
    assert_eq!(list[0].title, "Beach cleanup");

    let request = CreateOpportunityRequest {
        title: "Tree planting".into(),
        description: None,
        location: Some("Parramatta".into()),
        date: None,
        required_skills: None,
    };
    deps.resource_client
        .create_opportunity(&request)
        .await
        .unwrap();
    assert_eq!(
        backend.recorder.bodies().last().unwrap()["title"],
        "Tree planting"
    );
}
