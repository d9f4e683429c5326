//! Security namespace models and operation inputs.

use scm_core::choice::Container;
use scm_core::query::QueryParams;
use scm_core::{HttpMethod, Operation, Position, RuleListQuery};
use serde::{Deserialize, Serialize};
use std::fmt;

scm_core::resource_id!(SecurityRuleId, "Unique identifier of a security rule.");

/// Action taken on traffic matching a security rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityAction {
    /// Permit the session.
    Allow,
    /// Block using the application's default deny action.
    Deny,
    /// Silently drop.
    Drop,
    /// Send a TCP reset to the client.
    ResetClient,
    /// Send a TCP reset to the server.
    ResetServer,
    /// Send a TCP reset to both ends.
    ResetBoth,
}

impl SecurityAction {
    /// Wire value of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::Drop => "drop",
            Self::ResetClient => "reset-client",
            Self::ResetServer => "reset-server",
            Self::ResetBoth => "reset-both",
        }
    }
}

impl fmt::Display for SecurityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security profiles applied to allowed traffic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSetting {
    /// Security profile groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<String>>,
}

/// Security policy rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecurityRule {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SecurityRuleId>,
    /// Rule name.
    pub name: String,
    /// Whether the rule is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags attached to the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<String>>,
    /// Source zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<String>>,
    /// Destination zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,
    /// Source addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
    /// Destination addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vec<String>>,
    /// Source users and groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_user: Option<Vec<String>>,
    /// Applications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Vec<String>>,
    /// Services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<String>>,
    /// URL categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    /// Action on match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<SecurityAction>,
    /// Log forwarding profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_setting: Option<String>,
    /// Security profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_setting: Option<ProfileSetting>,
    /// Folder, snippet or device holding the rule.
    #[serde(flatten)]
    pub container: Container,
}

fn any() -> Option<Vec<String>> {
    Some(vec!["any".to_string()])
}

impl SecurityRule {
    /// Create a rule matching any traffic with the given action.
    pub fn new(name: impl Into<String>, action: SecurityAction, container: Container) -> Self {
        Self {
            id: None,
            name: name.into(),
            disabled: None,
            description: None,
            tag: None,
            from: any(),
            to: any(),
            source: any(),
            destination: any(),
            source_user: any(),
            application: any(),
            service: Some(vec!["application-default".to_string()]),
            category: any(),
            action: Some(action),
            log_setting: None,
            profile_setting: None,
            container,
        }
    }
}

scm_core::collection_operations! {
    resource: SecurityRule, id: SecurityRuleId, path: "/security-rules", query: RuleListQuery;
    list ListSecurityRules;
    get GetSecurityRule;
    update UpdateSecurityRule;
    delete DeleteSecurityRule;
}

/// `POST /security-rules?position=...`
#[derive(Debug, Clone, Copy)]
pub struct CreateSecurityRule<'a> {
    /// Rule to create.
    pub body: &'a SecurityRule,
    /// Rulebase to add the rule to.
    pub position: Position,
}

impl Operation for CreateSecurityRule<'_> {
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/security-rules";
    type Body = SecurityRule;
    type Output = SecurityRule;

    fn query(&self) -> QueryParams {
        QueryParams::new().with("position", self.position)
    }

    fn body(&self) -> Option<&SecurityRule> {
        Some(self.body)
    }
}
