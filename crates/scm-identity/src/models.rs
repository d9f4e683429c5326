//! Identity namespace models shared by client and operation inputs.

use scm_core::choice::{Container, Empty};
use scm_core::ListQuery;
use serde::{Deserialize, Serialize};

scm_core::resource_id!(
    AuthenticationProfileId,
    "Unique identifier of an authentication profile."
);
scm_core::resource_id!(
    CertificateProfileId,
    "Unique identifier of a certificate profile."
);

/// SAML identity provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamlIdp {
    /// SAML IdP server profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
    /// Certificate profile used to validate the IdP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_profile: Option<String>,
    /// Attribute carrying the username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name_username: Option<String>,
    /// Attribute carrying the user group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name_usergroup: Option<String>,
    /// Attribute carrying the access domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name_access_domain: Option<String>,
    /// Whether single logout is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_single_logout: Option<bool>,
    /// Certificate used to sign SAML requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_signing_certificate: Option<String>,
}

/// LDAP settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ldap {
    /// LDAP server profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
    /// Login attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_attribute: Option<String>,
    /// Days until password expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd_exp_days: Option<u32>,
}

/// RADIUS or TACACS+ settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerProfileRef {
    /// Server profile name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
    /// Retrieve user groups from the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkgroup: Option<bool>,
}

/// Kerberos settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Kerberos {
    /// Kerberos server profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile: Option<String>,
    /// Kerberos realm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
}

/// Cloud Identity Engine settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cloud {
    /// Cloud authentication profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

scm_core::one_of! {
    /// How users are authenticated.
    pub enum AuthenticationMethod {
        /// Local user database.
        LocalDatabase(Empty) = "local_database",
        /// SAML identity provider.
        SamlIdp(SamlIdp) = "saml_idp",
        /// LDAP directory.
        Ldap(Ldap) = "ldap",
        /// RADIUS server.
        Radius(ServerProfileRef) = "radius",
        /// TACACS+ server.
        Tacplus(ServerProfileRef) = "tacplus",
        /// Kerberos.
        Kerberos(Kerberos) = "kerberos",
        /// Cloud Identity Engine.
        Cloud(Cloud) = "cloud",
    }
}

/// Account lockout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lockout {
    /// Failed attempts before lockout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_attempts: Option<u32>,
    /// Lockout duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockout_time: Option<u32>,
}

/// Kerberos single sign-on settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SingleSignOn {
    /// Kerberos realm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    /// Service principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_principal: Option<String>,
    /// Keytab contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerberos_keytab: Option<String>,
}

/// Multi-factor authentication settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiFactorAuth {
    /// Whether MFA is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_enable: Option<bool>,
    /// MFA server profiles, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<Vec<String>>,
}

/// Authentication profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticationProfile {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AuthenticationProfileId>,
    /// Profile name.
    pub name: String,
    /// Authentication method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<AuthenticationMethod>,
    /// User domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_domain: Option<String>,
    /// Username modifier, e.g. `%USERINPUT%@%USERDOMAIN%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_modifier: Option<String>,
    /// Users and groups allowed to authenticate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_list: Option<Vec<String>>,
    /// Lockout settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockout: Option<Lockout>,
    /// Single sign-on settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_sign_on: Option<SingleSignOn>,
    /// Multi-factor authentication settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_factor_auth: Option<MultiFactorAuth>,
    /// Folder, snippet or device holding the profile.
    #[serde(flatten)]
    pub container: Container,
}

impl AuthenticationProfile {
    /// Create a profile with the given method and no optional settings.
    pub fn new(
        name: impl Into<String>,
        method: AuthenticationMethod,
        container: Container,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            method: Some(method),
            user_domain: None,
            username_modifier: None,
            allow_list: None,
            lockout: None,
            single_sign_on: None,
            multi_factor_auth: None,
            container,
        }
    }
}

/// CA certificate entry of a certificate profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaCertificate {
    /// CA certificate name.
    pub name: String,
    /// Default OCSP responder URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ocsp_url: Option<String>,
    /// Certificate used to verify OCSP responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocsp_verify_certificate: Option<String>,
    /// Template name or OID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

scm_core::one_of! {
    /// Certificate field the username is taken from.
    pub enum UsernameField {
        /// Subject field, e.g. `common-name`.
        Subject(String) = "subject",
        /// Subject alternative name, e.g. `email` or `principal-name`.
        SubjectAlt(String) = "subject_alt",
    }
}

/// Certificate profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateProfile {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CertificateProfileId>,
    /// Profile name.
    pub name: String,
    /// Trusted CA certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_certificates: Option<Vec<CaCertificate>>,
    /// Username source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_field: Option<UsernameField>,
    /// User domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Check revocation with CRLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_crl: Option<bool>,
    /// Check revocation with OCSP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ocsp: Option<bool>,
    /// CRL receive timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crl_receive_timeout: Option<String>,
    /// OCSP receive timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocsp_receive_timeout: Option<String>,
    /// Certificate status timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_status_timeout: Option<String>,
    /// Block sessions whose certificate status is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_unknown_cert: Option<bool>,
    /// Block sessions when the status check times out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_timeout_cert: Option<bool>,
    /// Block sessions when the certificate was not issued to the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_unauthenticated_cert: Option<bool>,
    /// Block sessions with expired certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_expired_cert: Option<bool>,
    /// Folder, snippet or device holding the profile.
    #[serde(flatten)]
    pub container: Container,
}

impl CertificateProfile {
    /// Create a profile with no optional settings.
    pub fn new(name: impl Into<String>, container: Container) -> Self {
        Self {
            id: None,
            name: name.into(),
            ca_certificates: None,
            username_field: None,
            domain: None,
            use_crl: None,
            use_ocsp: None,
            crl_receive_timeout: None,
            ocsp_receive_timeout: None,
            cert_status_timeout: None,
            block_unknown_cert: None,
            block_timeout_cert: None,
            block_unauthenticated_cert: None,
            block_expired_cert: None,
            container,
        }
    }
}

scm_core::collection_operations! {
    resource: AuthenticationProfile,
    id: AuthenticationProfileId,
    path: "/authentication-profiles",
    query: ListQuery;
    list ListAuthenticationProfiles;
    create CreateAuthenticationProfile;
    get GetAuthenticationProfile;
    update UpdateAuthenticationProfile;
    delete DeleteAuthenticationProfile;
}

scm_core::collection_operations! {
    resource: CertificateProfile,
    id: CertificateProfileId,
    path: "/certificate-profiles",
    query: ListQuery;
    list ListCertificateProfiles;
    create CreateCertificateProfile;
    get GetCertificateProfile;
    update UpdateCertificateProfile;
    delete DeleteCertificateProfile;
}
