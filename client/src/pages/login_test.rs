use super::*;

#[test]
fn validate_login_trims_username() {
    let request = validate_login("  admin ", "Admin@123").unwrap();
    assert_eq!(request.username, "admin");
    assert_eq!(request.password, "Admin@123");
}

#[test]
fn validate_login_keeps_password_verbatim() {
    let request = validate_login("staff", " spaced ").unwrap();
    assert_eq!(request.password, " spaced ");
}

#[test]
fn validate_login_requires_both_fields() {
    let errors = validate_login("   ", "").unwrap_err();
    assert_eq!(errors.username, Some("Username is required"));
    assert_eq!(errors.password, Some("Password is required"));

    let errors = validate_login("admin", "").unwrap_err();
    assert_eq!(errors.username, None);
    assert!(!errors.is_empty());
}

#[test]
fn welcome_message_names_user() {
    assert_eq!(welcome_message("manager"), "Welcome back, manager!");
}

#[test]
fn demo_accounts_cover_every_role() {
    let names: Vec<&str> = DEMO_ACCOUNTS.iter().map(|(u, _)| *u).collect();
    assert_eq!(names, vec!["admin", "manager", "staff"]);
}
