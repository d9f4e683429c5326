//! Integration tests for parsing identity namespace data.

use scm_core::choice::Container;
use scm_core::ListResponse;
use scm_identity::models::{
    AuthenticationMethod, AuthenticationProfile, CertificateProfile, UsernameField,
};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_authentication_profile_list() {
    let json_data = load_fixture("authentication_profile_list.json");

    let page: ListResponse<AuthenticationProfile> = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| {
            panic!(
                "Failed to deserialize authentication profile data: {}\nJSON: {}",
                e, json_data
            )
        });

    assert_eq!(page.data.len(), 3);

    let saml = &page.data[0];
    match saml.method.as_ref() {
        Some(AuthenticationMethod::SamlIdp(idp)) => {
            assert_eq!(idp.server_profile.as_deref(), Some("okta-prod"));
            assert_eq!(idp.enable_single_logout, Some(true));
        }
        other => panic!("unexpected method: {other:?}"),
    }
    let lockout = saml.lockout.as_ref().unwrap();
    assert_eq!(lockout.failed_attempts, Some(5));
    assert_eq!(lockout.lockout_time, Some(30));

    let radius = &page.data[1];
    assert_eq!(radius.container, Container::Snippet("admin-access".into()));
    assert_eq!(
        radius.username_modifier.as_deref(),
        Some("%USERINPUT%@%USERDOMAIN%")
    );
    assert_eq!(radius.method.as_ref().map(AuthenticationMethod::member), Some("radius"));

    let kerberos = &page.data[2];
    assert_eq!(
        kerberos
            .single_sign_on
            .as_ref()
            .and_then(|sso| sso.service_principal.as_deref()),
        Some("HTTP/gp.example.com")
    );
}

#[test]
fn test_deserialize_certificate_profile_list() {
    let json_data = load_fixture("certificate_profile_list.json");

    let page: ListResponse<CertificateProfile> = serde_json::from_str(&json_data).unwrap();
    let profile = &page.data[0];

    assert_eq!(
        profile.username_field,
        Some(UsernameField::SubjectAlt("principal-name".into()))
    );
    assert_eq!(profile.use_crl, Some(true));
    assert_eq!(profile.block_unknown_cert, Some(false));
    assert!(profile.block_timeout_cert.is_none());

    let ca = &profile.ca_certificates.as_ref().unwrap()[0];
    assert_eq!(ca.name, "Corp-Root-CA");
    assert!(ca.ocsp_verify_certificate.is_none());
}
