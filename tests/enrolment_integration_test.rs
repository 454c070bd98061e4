// Integration tests for the enrol-then-register flow against a wire-level stub
use std::time::Duration;

use dompet_auth::enrolment::{CredentialRegistrar, DeviceEnroller, RegisterError};
use dompet_auth::models::Session;
use dompet_auth::provider::GoTrueClient;
use dompet_auth::settings::EnrolmentSettings;
use dompet_auth::testing::{
    MockAuthenticator, MockIdentityProvider, StubServer, TestFixtures,
};
use serde_json::json;

fn settings_for(stub: &StubServer) -> EnrolmentSettings {
    EnrolmentSettings {
        api_base_url: stub.base_url(),
        request_timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn test_enrol_then_register_sends_credential_over_the_wire() {
    let stub = StubServer::start(200, "{}").await;

    let enroller = DeviceEnroller::new(MockAuthenticator::approving("abc", b"ABC"));
    let credential = enroller.enrol("Pixel 9").await.expect("enrolment succeeds");

    let provider = MockIdentityProvider::signed_in("token-123");
    let registrar =
        CredentialRegistrar::new(provider, settings_for(&stub)).expect("registrar builds");
    registrar
        .register(credential)
        .await
        .expect("registration succeeds");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1, "exactly one registration request");
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.target, "/api/auth/biometric/enrol");
    assert_eq!(request.header("authorization"), Some("Bearer token-123"));
    assert!(
        request
            .header("content-type")
            .is_some_and(|value| value.contains("application/json")),
        "payload must be JSON"
    );
    assert_eq!(
        request.json_body(),
        json!({"device_id": "abc", "public_key": "QUJD"})
    );
}

#[tokio::test]
async fn test_register_preserves_backend_rejection_status() {
    for status in [400, 401, 500] {
        let stub = StubServer::start(status, r#"{"detail": "enrolment rejected"}"#).await;

        let provider = MockIdentityProvider::signed_in("token-123");
        let registrar =
            CredentialRegistrar::new(provider, settings_for(&stub)).expect("registrar builds");

        let err = registrar
            .register(TestFixtures::device_credential())
            .await
            .expect_err("registration must fail");
        match err {
            RegisterError::Rejected {
                status: seen,
                message,
            } => {
                assert_eq!(seen, Some(status), "status code must survive");
                assert!(message.contains("enrolment rejected"));
            }
            RegisterError::Unauthenticated => panic!("wrong error kind"),
        }
    }
}

#[tokio::test]
async fn test_register_without_session_never_touches_the_network() {
    let stub = StubServer::start(200, "{}").await;

    let provider = MockIdentityProvider::signed_out();
    let registrar =
        CredentialRegistrar::new(provider, settings_for(&stub)).expect("registrar builds");

    let result = registrar.register(TestFixtures::device_credential()).await;
    assert!(matches!(result, Err(RegisterError::Unauthenticated)));
    assert_eq!(stub.request_count(), 0, "no request may leave the process");
}

#[tokio::test]
async fn test_register_with_expired_session_never_touches_the_network() {
    let stub = StubServer::start(200, "{}").await;

    let provider = MockIdentityProvider::with_session(TestFixtures::expired_session());
    let registrar =
        CredentialRegistrar::new(provider, settings_for(&stub)).expect("registrar builds");

    let result = registrar.register(TestFixtures::device_credential()).await;
    assert!(matches!(result, Err(RegisterError::Unauthenticated)));
    assert_eq!(stub.request_count(), 0, "no request may leave the process");
}

#[tokio::test]
async fn test_register_with_gotrue_session_slot() {
    let stub = StubServer::start(200, "{}").await;

    // A real provider client, not a mock; only its session slot is used here
    let provider = GoTrueClient::new(&TestFixtures::provider_settings()).expect("client builds");
    provider.store_session(Session {
        access_token: "token-456".to_string(),
        expires_at: None,
    });

    let registrar =
        CredentialRegistrar::new(provider, settings_for(&stub)).expect("registrar builds");
    registrar
        .register(TestFixtures::device_credential())
        .await
        .expect("registration succeeds");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("authorization"), Some("Bearer token-456"));
}

#[tokio::test]
async fn test_register_transport_failure_has_no_status() {
    // Unreachable loopback port, connection is refused before any HTTP exchange
    let provider = MockIdentityProvider::signed_in("token-123");
    let registrar = CredentialRegistrar::new(provider, TestFixtures::enrolment_settings())
        .expect("registrar builds");

    let err = registrar
        .register(TestFixtures::device_credential())
        .await
        .expect_err("registration must fail");
    match err {
        RegisterError::Rejected { status, .. } => {
            assert_eq!(status, None, "transport failures carry no status code");
        }
        RegisterError::Unauthenticated => panic!("wrong error kind"),
    }
}
