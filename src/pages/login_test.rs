use super::*;

#[test]
fn validate_accepts_trimmed_credentials() {
    let (user, pass) = validate_login_input("  admin  ", " admin123 ").unwrap();
    assert_eq!(user, "admin");
    assert_eq!(pass, "admin123");
}

#[test]
fn validate_rejects_empty_username() {
    assert!(validate_login_input("", "secret").is_err());
    assert!(validate_login_input("   ", "secret").is_err());
}

#[test]
fn validate_rejects_empty_password() {
    assert!(validate_login_input("admin", "").is_err());
    assert!(validate_login_input("admin", "   ").is_err());
}

#[test]
fn validate_passes_through_inner_whitespace() {
    let (user, _) = validate_login_input("two words", "p w").unwrap();
    assert_eq!(user, "two words");
}
