//! Integration tests for parsing security namespace data.

use scm_core::choice::Container;
use scm_core::ListResponse;
use scm_security::models::{SecurityAction, SecurityRule};
use std::fs;
use std::path::PathBuf;

fn load_fixture(name: &str) -> String {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_security_rule_list() {
    let json_data = load_fixture("security_rule_list.json");

    let page: ListResponse<SecurityRule> = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize security rule list data: {}\nJSON: {}",
            e, json_data
        )
    });
    assert_eq!(page.total, 3);
    assert!(!page.has_more());

    let web = &page.data[0];
    assert_eq!(web.action, Some(SecurityAction::Allow));
    assert_eq!(
        web.application.as_deref(),
        Some(&["web-browsing".to_string(), "ssl".to_string()][..])
    );
    assert_eq!(
        web.profile_setting.as_ref().and_then(|p| p.group.clone()),
        Some(vec!["best-practice".to_string()])
    );
    assert_eq!(web.container, Container::Folder("Texas".into()));

    let quic = &page.data[1];
    assert_eq!(quic.action, Some(SecurityAction::ResetBoth));
    assert_eq!(quic.disabled, Some(false));
    assert!(quic.source.is_none());
    assert_eq!(quic.container, Container::Snippet("baseline".into()));

    let deny = &page.data[2];
    assert_eq!(deny.action, Some(SecurityAction::Drop));
    assert_eq!(deny.container, Container::Device("fw-hq-01".into()));
}

#[test]
fn test_rule_without_container_is_rejected() {
    let result = serde_json::from_str::<SecurityRule>(r#"{ "name": "orphan", "action": "allow" }"#);
    assert!(result.is_err());
}

#[test]
fn test_rule_with_two_containers_is_rejected() {
    let result = serde_json::from_str::<SecurityRule>(
        r#"{ "name": "twice", "action": "allow", "folder": "Texas", "snippet": "baseline" }"#,
    );
    assert!(result.is_err());
}
