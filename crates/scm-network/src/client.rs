//! Asynchronous network namespace client.

use crate::models::{
    CreateQosPolicyRule, CreateZone, DeleteQosPolicyRule, DeleteZone, GetQosPolicyRule, GetZone,
    ListQosPolicyRules, ListZones, QosPolicyRule, QosPolicyRuleId, UpdateQosPolicyRule,
    UpdateZone, Zone, ZoneId,
};
use crate::Result;
use scm_core::host::NETWORK_PREFIX;
use scm_core::{
    HostMap, ListQuery, ListResponse, Position, RuleListQuery, ServiceClient,
    ServiceClientBuilder, Transport,
};
use std::sync::Arc;

const NAMESPACE: &str = "network";

/// Built-in host table for the network namespace.
#[must_use]
pub fn default_host_map() -> HostMap {
    HostMap::standard(NETWORK_PREFIX)
}

/// Builder for [`NetworkClient`].
#[derive(Clone)]
pub struct NetworkClientBuilder {
    inner: ServiceClientBuilder,
}

impl NetworkClientBuilder {
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
    pub fn build(self) -> NetworkClient {
        NetworkClient {
            inner: self.inner.build(),
        }
    }
}

/// Asynchronous network namespace client.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    inner: ServiceClient,
}

impl NetworkClient {
    /// Construct a client with the built-in host table.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        NetworkClientBuilder::new(transport).build()
    }

    /// Return the underlying service client.
    #[must_use]
    pub const fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// List security zones.
    pub async fn list_zones(&self, query: &ListQuery) -> Result<ListResponse<Zone>> {
        self.inner.execute(&ListZones { query }).await
    }

    /// Create a security zone.
    pub async fn create_zone(&self, zone: &Zone) -> Result<Zone> {
        self.inner.execute(&CreateZone { body: zone }).await
    }

    /// Fetch a security zone.
    pub async fn get_zone(&self, id: ZoneId) -> Result<Zone> {
        self.inner.execute(&GetZone { id }).await
    }

    /// Replace a security zone.
    pub async fn update_zone(&self, id: ZoneId, zone: &Zone) -> Result<Zone> {
        self.inner.execute(&UpdateZone { id, body: zone }).await
    }

    /// Delete a security zone.
    pub async fn delete_zone(&self, id: ZoneId) -> Result<()> {
        self.inner.execute(&DeleteZone { id }).await.map(|_| ())
    }

    /// List QoS policy rules in one rulebase.
    pub async fn list_qos_policy_rules(
        &self,
        query: &RuleListQuery,
    ) -> Result<ListResponse<QosPolicyRule>> {
        self.inner.execute(&ListQosPolicyRules { query }).await
    }

    /// Create a QoS policy rule in the given rulebase.
    pub async fn create_qos_policy_rule(
        &self,
        rule: &QosPolicyRule,
        position: Position,
    ) -> Result<QosPolicyRule> {
        self.inner
            .execute(&CreateQosPolicyRule {
                body: rule,
                position,
            })
            .await
    }

    /// Fetch a QoS policy rule.
    pub async fn get_qos_policy_rule(&self, id: QosPolicyRuleId) -> Result<QosPolicyRule> {
        self.inner.execute(&GetQosPolicyRule { id }).await
    }

    /// Replace a QoS policy rule.
    pub async fn update_qos_policy_rule(
        &self,
        id: QosPolicyRuleId,
        rule: &QosPolicyRule,
    ) -> Result<QosPolicyRule> {
        self.inner
            .execute(&UpdateQosPolicyRule { id, body: rule })
            .await
    }

    /// Delete a QoS policy rule.
    pub async fn delete_qos_policy_rule(&self, id: QosPolicyRuleId) -> Result<()> {
        self.inner
            .execute(&DeleteQosPolicyRule { id })
            .await
            .map(|_| ())
    }
}
