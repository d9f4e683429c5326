//! Asynchronous identity namespace client.

use crate::models::{
    AuthenticationProfile, AuthenticationProfileId, CertificateProfile, CertificateProfileId,
    CreateAuthenticationProfile, CreateCertificateProfile, DeleteAuthenticationProfile,
    DeleteCertificateProfile, GetAuthenticationProfile, GetCertificateProfile,
    ListAuthenticationProfiles, ListCertificateProfiles, UpdateAuthenticationProfile,
    UpdateCertificateProfile,
};
use crate::Result;
use scm_core::host::IDENTITY_PREFIX;
use scm_core::{HostMap, ListQuery, ListResponse, ServiceClient, ServiceClientBuilder, Transport};
use std::sync::Arc;

const NAMESPACE: &str = "identity";

/// Built-in host table for the identity namespace.
#[must_use]
pub fn default_host_map() -> HostMap {
    HostMap::standard(IDENTITY_PREFIX)
}

/// Builder for [`IdentityClient`].
#[derive(Clone)]
pub struct IdentityClientBuilder {
    inner: ServiceClientBuilder,
}

impl IdentityClientBuilder {
    /// Create a builder over a shared transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ServiceClientBuilder::new(NAMESPACE, transport, default_host_map()),
        }
    }

    /// Replace the host table.
    #[must_use]
    pub fn with_host_map(mut self, hosts: HostMap) -> Self {
        self.inner = self.inner.with_host_map(hosts);
        self
    }

    /// Build the client.
    #[must_use]
    pub fn build(self) -> IdentityClient {
        IdentityClient {
            inner: self.inner.build(),
        }
    }
}

/// Asynchronous identity namespace client.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    inner: ServiceClient,
}

impl IdentityClient {
    /// Construct a client with the built-in host table.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        IdentityClientBuilder::new(transport).build()
    }

    /// Return the underlying service client.
    #[must_use]
    pub const fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// List authentication profiles.
    pub async fn list_authentication_profiles(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<AuthenticationProfile>> {
        self.inner.execute(&ListAuthenticationProfiles { query }).await
    }

    /// Create an authentication profile.
    pub async fn create_authentication_profile(
        &self,
        profile: &AuthenticationProfile,
    ) -> Result<AuthenticationProfile> {
        self.inner
            .execute(&CreateAuthenticationProfile { body: profile })
            .await
    }

    /// Fetch an authentication profile.
    pub async fn get_authentication_profile(
        &self,
        id: AuthenticationProfileId,
    ) -> Result<AuthenticationProfile> {
        self.inner.execute(&GetAuthenticationProfile { id }).await
    }

    /// Replace an authentication profile.
    pub async fn update_authentication_profile(
        &self,
        id: AuthenticationProfileId,
        profile: &AuthenticationProfile,
    ) -> Result<AuthenticationProfile> {
        self.inner
            .execute(&UpdateAuthenticationProfile { id, body: profile })
            .await
    }

    /// Delete an authentication profile.
    pub async fn delete_authentication_profile(&self, id: AuthenticationProfileId) -> Result<()> {
        self.inner
            .execute(&DeleteAuthenticationProfile { id })
            .await
            .map(|_| ())
    }

    /// List certificate profiles.
    pub async fn list_certificate_profiles(
        &self,
        query: &ListQuery,
    ) -> Result<ListResponse<CertificateProfile>> {
        self.inner.execute(&ListCertificateProfiles { query }).await
    }

    /// Create a certificate profile.
    pub async fn create_certificate_profile(
        &self,
        profile: &CertificateProfile,
    ) -> Result<CertificateProfile> {
        self.inner
            .execute(&CreateCertificateProfile { body: profile })
            .await
    }

    /// Fetch a certificate profile.
    pub async fn get_certificate_profile(
        &self,
        id: CertificateProfileId,
    ) -> Result<CertificateProfile> {
        self.inner.execute(&GetCertificateProfile { id }).await
    }

    /// Replace a certificate profile.
    pub async fn update_certificate_profile(
        &self,
        id: CertificateProfileId,
        profile: &CertificateProfile,
    ) -> Result<CertificateProfile> {
        self.inner
            .execute(&UpdateCertificateProfile { id, body: profile })
            .await
    }

    /// Delete a certificate profile.
    pub async fn delete_certificate_profile(&self, id: CertificateProfileId) -> Result<()> {
        self.inner
            .execute(&DeleteCertificateProfile { id })
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthenticationMethod, Ldap, UsernameField};
    use scm_core::choice::Container;
    use scm_core::host::{SASE_HOST, STRATA_HOST};
    use scm_core::{Error, ErrorKind, HttpTransport};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer, host: &str) -> IdentityClient {
        let transport = HttpTransport::builder(server.uri())
            .unwrap()
            .with_host(host)
            .build()
            .unwrap();
        IdentityClient::new(Arc::new(transport))
    }

    #[tokio::test]
    async fn create_ldap_authentication_profile() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/config/identity/v1/authentication-profiles"))
            .and(body_json(json!({
                "name": "corp-ldap",
                "method": { "ldap": { "server_profile": "corp", "login_attribute": "uid" } },
                "folder": "Mobile Users"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": AuthenticationProfileId::new_v4(),
                "name": "corp-ldap",
                "method": { "ldap": { "server_profile": "corp", "login_attribute": "uid" } },
                "folder": "Mobile Users"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, STRATA_HOST);
        let profile = AuthenticationProfile::new(
            "corp-ldap",
            AuthenticationMethod::Ldap(Ldap {
                server_profile: Some("corp".into()),
                login_attribute: Some("uid".into()),
                passwd_exp_days: None,
            }),
            Container::Folder("Mobile Users".into()),
        );

        let created = client.create_authentication_profile(&profile).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.method, profile.method);
    }

    #[tokio::test]
    async fn list_authentication_profiles_on_sase_host() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sse/config/v1/authentication-profiles"))
            .and(query_param("folder", "Shared"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "name": "local", "method": { "local_database": {} }, "folder": "Shared" },
                    { "name": "cie", "method": { "cloud": { "profile": "cie" } }, "folder": "Shared" }
                ],
                "limit": 200,
                "offset": 0,
                "total": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, SASE_HOST);
        let page = client
            .list_authentication_profiles(&ListQuery::folder("Shared"))
            .await
            .unwrap();

        let members: Vec<_> = page
            .data
            .iter()
            .filter_map(|profile| profile.method.as_ref().map(AuthenticationMethod::member))
            .collect();
        assert_eq!(members, vec!["local_database", "cloud"]);
    }

    #[tokio::test]
    async fn malformed_profile_is_decode_error() {
        let server = MockServer::start().await;
        let id = AuthenticationProfileId::new_v4();
        Mock::given(method("GET"))
            .and(path(format!("/config/identity/v1/authentication-profiles/{id}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "broken",
                "method": { "ldap": {}, "kerberos": {} },
                "folder": "Shared"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server, STRATA_HOST);
        let err = client.get_authentication_profile(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn certificate_profile_crud() {
        let server = MockServer::start().await;
        let id = CertificateProfileId::new_v4();
        let item_path = format!("/config/identity/v1/certificate-profiles/{id}");
        let stored = json!({
            "id": id,
            "name": "gp-users",
            "username_field": { "subject": "common-name" },
            "ca_certificates": [{ "name": "Root-CA" }],
            "folder": "Mobile Users"
        });

        Mock::given(method("POST"))
            .and(path("/config/identity/v1/certificate-profiles"))
            .respond_with(ResponseTemplate::new(201).set_body_json(stored.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(item_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(item_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(item_path.as_str()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, STRATA_HOST);
        let mut profile =
            CertificateProfile::new("gp-users", Container::Folder("Mobile Users".into()));
        profile.username_field = Some(UsernameField::Subject("common-name".into()));

        let created = client.create_certificate_profile(&profile).await.unwrap();
        assert_eq!(created.id, Some(id));
        assert_eq!(created.ca_certificates.as_ref().map(Vec::len), Some(1));

        let fetched = client.get_certificate_profile(id).await.unwrap();
        assert_eq!(fetched.username_field, profile.username_field);

        client
            .update_certificate_profile(id, &fetched)
            .await
            .unwrap();
        client.delete_certificate_profile(id).await.unwrap();
    }

    #[tokio::test]
    async fn unauthorized_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config/identity/v1/certificate-profiles"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "_errors": [{ "code": "E016", "message": "Not Authorized" }]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server, STRATA_HOST);
        let err = client
            .list_certificate_profiles(&ListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
        assert!(err.is_transport());
    }
}
