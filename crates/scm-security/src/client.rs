//! Asynchronous security namespace client.

use crate::models::{
    CreateSecurityRule, DeleteSecurityRule, GetSecurityRule, ListSecurityRules, SecurityRule,
    SecurityRuleId, UpdateSecurityRule,
};
use crate::Result;
use scm_core::host::SECURITY_PREFIX;
use scm_core::{
    HostMap, ListResponse, Position, RuleListQuery, ServiceClient, ServiceClientBuilder, Transport,
};
use std::sync::Arc;

const NAMESPACE: &str = "security";

/// Built-in host table for the security namespace.
#[must_use]
pub fn default_host_map() -> HostMap {
    HostMap::standard(SECURITY_PREFIX)
}

/// Builder for [`SecurityClient`].
#[derive(Clone)]
pub struct SecurityClientBuilder {
    inner: ServiceClientBuilder,
}

impl SecurityClientBuilder {
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
    pub fn build(self) -> SecurityClient {
        SecurityClient {
            inner: self.inner.build(),
        }
    }
}

/// Asynchronous security namespace client.
#[derive(Debug, Clone)]
pub struct SecurityClient {
    inner: ServiceClient,
}

impl SecurityClient {
    /// Construct a client with the built-in host table.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        SecurityClientBuilder::new(transport).build()
    }

    /// Return the underlying service client.
    #[must_use]
    pub const fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// List security rules in one rulebase.
    pub async fn list_security_rules(
        &self,
        query: &RuleListQuery,
    ) -> Result<ListResponse<SecurityRule>> {
        self.inner.execute(&ListSecurityRules { query }).await
    }

    /// Create a security rule in the given rulebase.
    pub async fn create_security_rule(
        &self,
        rule: &SecurityRule,
        position: Position,
    ) -> Result<SecurityRule> {
        self.inner
            .execute(&CreateSecurityRule {
                body: rule,
                position,
            })
            .await
    }

    /// Fetch a security rule.
    pub async fn get_security_rule(&self, id: SecurityRuleId) -> Result<SecurityRule> {
        self.inner.execute(&GetSecurityRule { id }).await
    }

    /// Replace a security rule.
    pub async fn update_security_rule(
        &self,
        id: SecurityRuleId,
        rule: &SecurityRule,
    ) -> Result<SecurityRule> {
        self.inner
            .execute(&UpdateSecurityRule { id, body: rule })
            .await
    }

    /// Delete a security rule.
    pub async fn delete_security_rule(&self, id: SecurityRuleId) -> Result<()> {
        self.inner
            .execute(&DeleteSecurityRule { id })
            .await
            .map(|_| ())
    }
}
