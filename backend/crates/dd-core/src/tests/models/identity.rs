use crate::Identity;
use crate::models::identity::ANONYMOUS_NAME;

#[test]
fn test_identity_new_issues_token() {
    let identity = Identity::new("Ana".to_string(), "ana@example.com".to_string());

    assert_eq!(identity.name, "Ana");
    assert_eq!(identity.email, "ana@example.com");
    assert!(!identity.session_token.is_empty());
    assert_eq!(identity.created_at, identity.updated_at);
}

#[test]
fn test_identities_never_share_tokens() {
    let a = Identity::anonymous();
    let b = Identity::anonymous();

    assert_ne!(a.id, b.id);
    assert_ne!(a.session_token, b.session_token);
}

#[test]
fn test_anonymous_identity_placeholders() {
    let identity = Identity::anonymous();

    assert_eq!(identity.name, ANONYMOUS_NAME);
    assert_eq!(identity.email, format!("{}@session.local", identity.id));
}

#[test]
fn test_session_token_is_not_serialized() {
    let identity = Identity::anonymous();
    let json = serde_json::to_value(&identity).unwrap();

    assert!(json.get("session_token").is_none());
    assert_eq!(json["id"], identity.id.to_string());
}
