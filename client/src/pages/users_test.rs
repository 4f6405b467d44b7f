use super::*;

fn valid_draft() -> UserDraft {
    UserDraft {
        username: " jdoe ".to_owned(),
        email: "jdoe@example.com".to_owned(),
        password: "Secret123".to_owned(),
        ..UserDraft::default()
    }
}

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn email_needs_local_part_domain_and_suffix() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@.co"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("plain"));
}

#[test]
fn email_rejects_whitespace() {
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email(""));
}

// =============================================================================
// validate_user
// =============================================================================

#[test]
fn default_draft_is_staff() {
    assert_eq!(UserDraft::default().role, UserRole::Staff);
}

#[test]
fn empty_draft_reports_every_required_field() {
    let errors = validate_user(&UserDraft::default()).unwrap_err();
    assert_eq!(errors.username, Some("Username required"));
    assert_eq!(errors.email, Some("Email required"));
    assert_eq!(errors.password, Some("Password required"));
}

#[test]
fn short_username_and_bad_email_are_flagged() {
    let draft = UserDraft { username: "jo".to_owned(), email: "jo@nowhere".to_owned(), ..valid_draft() };
    let errors = validate_user(&draft).unwrap_err();
    assert_eq!(errors.username, Some("Min 3 characters"));
    assert_eq!(errors.email, Some("Invalid email"));
    assert_eq!(errors.password, None);
}

#[test]
fn password_strength_rules_apply_in_order() {
    let check = |password: &str| validate_user(&UserDraft { password: password.to_owned(), ..valid_draft() });
    assert_eq!(check("Ab1").unwrap_err().password, Some("Min 8 characters"));
    assert_eq!(check("lowercase1").unwrap_err().password, Some("Must include uppercase and number"));
    assert_eq!(check("NoDigitsHere").unwrap_err().password, Some("Must include uppercase and number"));
    assert!(check("Upper123").is_ok());
}

#[test]
fn valid_draft_builds_trimmed_request() {
    let draft = UserDraft { first_name: " Jane ".to_owned(), last_name: "  ".to_owned(), role: UserRole::Manager, ..valid_draft() };
    let request = validate_user(&draft).unwrap();
    assert_eq!(request.username, "jdoe");
    assert_eq!(request.first_name.as_deref(), Some("Jane"));
    assert_eq!(request.last_name, None);
    assert_eq!(request.role, UserRole::Manager);
    assert_eq!(request.password, "Secret123");
}

// =============================================================================
// display helpers
// =============================================================================

#[test]
fn enabled_chip_labels() {
    assert_eq!(enabled_chip(true), ("Active", Tone::Success));
    assert_eq!(enabled_chip(false), ("Disabled", Tone::Neutral));
}

#[test]
fn caption_mentions_admin_scope() {
    assert_eq!(users_caption(4), "4 users \u{b7} Admin access only");
}
