use crate::domain::entities::user::{User, UserRole};

#[test]
fn test_new_user_is_unverified() {
    let user = User::new("a@x.com", "$2b$12$hash");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role, UserRole::User);
    assert!(!user.is_verified);
}

#[test]
fn test_verify_updates_timestamps() {
    let mut user = User::new("a@x.com", "$2b$12$hash");
    let before = user.updated_at;
    user.verify();
    assert!(user.is_verified);
    assert!(user.updated_at >= before);
}

#[test]
fn test_password_hash_not_serialized() {
    let user = User::new("a@x.com", "$2b$12$hash");
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("$2b$12$hash"));
}
