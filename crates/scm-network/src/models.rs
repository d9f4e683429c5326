//! Network namespace models and operation inputs.

use scm_core::choice::{Container, Empty};
use scm_core::query::QueryParams;
use scm_core::{HttpMethod, ListQuery, Operation, Position, RuleListQuery};
use serde::{Deserialize, Serialize};

scm_core::resource_id!(ZoneId, "Unique identifier of a security zone.");
scm_core::resource_id!(QosPolicyRuleId, "Unique identifier of a QoS policy rule.");

scm_core::one_of! {
    /// Interface type of a zone and the interfaces bound to it.
    pub enum ZoneNetworkKind {
        /// Tap interfaces.
        Tap(Vec<String>) = "tap",
        /// Virtual wire interfaces.
        VirtualWire(Vec<String>) = "virtual_wire",
        /// Layer 2 interfaces.
        Layer2(Vec<String>) = "layer2",
        /// Layer 3 interfaces.
        Layer3(Vec<String>) = "layer3",
        /// Tunnel zone.
        Tunnel(Empty) = "tunnel",
        /// External (virtual system) zones.
        External(Vec<String>) = "external",
    }
}

/// Network settings of a zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneNetwork {
    /// Interface type and members.
    #[serde(flatten)]
    pub kind: ZoneNetworkKind,
    /// Zone protection profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_protection_profile: Option<String>,
    /// Whether packet buffer protection is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_packet_buffer_protection: Option<bool>,
    /// Log forwarding profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_setting: Option<String>,
}

impl From<ZoneNetworkKind> for ZoneNetwork {
    fn from(kind: ZoneNetworkKind) -> Self {
        Self {
            kind,
            zone_protection_profile: None,
            enable_packet_buffer_protection: None,
            log_setting: None,
        }
    }
}

/// Include and exclude lists for user or device identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acl {
    /// Addresses to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_list: Option<Vec<String>>,
    /// Addresses to exclude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_list: Option<Vec<String>>,
}

/// Security zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ZoneId>,
    /// Zone name.
    pub name: String,
    /// Whether user identification is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_user_identification: Option<bool>,
    /// Whether device identification is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_device_identification: Option<bool>,
    /// DoS protection profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dos_profile: Option<String>,
    /// DoS log forwarding profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dos_log_setting: Option<String>,
    /// Network settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<ZoneNetwork>,
    /// User identification ACL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_acl: Option<Acl>,
    /// Device identification ACL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_acl: Option<Acl>,
    /// Folder, snippet or device holding the zone.
    #[serde(flatten)]
    pub container: Container,
}

impl Zone {
    /// Create a zone bound to `network`.
    pub fn new(name: impl Into<String>, network: ZoneNetworkKind, container: Container) -> Self {
        Self {
            id: None,
            name: name.into(),
            enable_user_identification: None,
            enable_device_identification: None,
            dos_profile: None,
            dos_log_setting: None,
            network: Some(network.into()),
            user_acl: None,
            device_acl: None,
            container,
        }
    }
}

/// Codepoint value for `af`, `cs` and `tos` entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodepointValue {
    /// Codepoint name, e.g. `af11` or `cs3`.
    pub codepoint: String,
}

/// Custom codepoint definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomCodepoint {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codepoint_name: Option<String>,
    /// Six-bit binary value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_value: Option<String>,
}

/// Wrapper for a custom codepoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomCodepointValue {
    /// Codepoint definition.
    pub codepoint: CustomCodepoint,
}

scm_core::one_of! {
    /// Codepoint family.
    pub enum CodepointType {
        /// Expedited forwarding.
        Ef(Empty) = "ef",
        /// Assured forwarding.
        Af(CodepointValue) = "af",
        /// Class selector.
        Cs(CodepointValue) = "cs",
        /// IP precedence.
        Tos(CodepointValue) = "tos",
        /// Custom codepoint.
        Custom(CustomCodepointValue) = "custom",
    }
}

/// DSCP/ToS codepoint match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Codepoint {
    /// Entry name.
    pub name: String,
    /// Codepoint family and value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub codepoint_type: Option<CodepointType>,
}

scm_core::one_of! {
    /// DSCP/ToS match criteria.
    pub enum DscpTos {
        /// Match any codepoint.
        Any(Empty) = "any",
        /// Match the listed codepoints.
        Codepoints(Vec<Codepoint>) = "codepoints",
    }
}

/// QoS rule action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QosAction {
    /// QoS class assigned to matching traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// QoS policy rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QosPolicyRule {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QosPolicyRuleId>,
    /// Rule name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Action applied to matching traffic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<QosAction>,
    /// Schedule name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// DSCP/ToS match criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dscp_tos: Option<DscpTos>,
    /// Folder, snippet or device holding the rule.
    #[serde(flatten)]
    pub container: Container,
}

impl QosPolicyRule {
    /// Create a rule assigning `class` to matching traffic.
    pub fn new(name: impl Into<String>, class: impl Into<String>, container: Container) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            action: Some(QosAction {
                class: Some(class.into()),
            }),
            schedule: None,
            dscp_tos: None,
            container,
        }
    }
}

scm_core::collection_operations! {
    resource: Zone, id: ZoneId, path: "/zones", query: ListQuery;
    list ListZones;
    create CreateZone;
    get GetZone;
    update UpdateZone;
    delete DeleteZone;
}

scm_core::collection_operations! {
    resource: QosPolicyRule, id: QosPolicyRuleId, path: "/qos-policy-rules", query: RuleListQuery;
    list ListQosPolicyRules;
    get GetQosPolicyRule;
    update UpdateQosPolicyRule;
    delete DeleteQosPolicyRule;
}

/// `POST /qos-policy-rules?position=...`
#[derive(Debug, Clone, Copy)]
pub struct CreateQosPolicyRule<'a> {
    /// Rule to create.
    pub body: &'a QosPolicyRule,
    /// Rulebase to add the rule to.
    pub position: Position,
}

impl Operation for CreateQosPolicyRule<'_> {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/qos-policy-rules";
    type Body = QosPolicyRule;
    type Output = QosPolicyRule;

    fn query(&self) -> QueryParams {
        QueryParams::new().with("position", self.position)
    }

    fn body(&self) -> Option<&QosPolicyRule> {
        Some(self.body)
    }
}
