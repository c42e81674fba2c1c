use gdpr_obfuscator::errors::ObfuscatorError;
use gdpr_obfuscator::policy::{Mode, ObfuscationPolicy};

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn token_policy_rejects_empty_key() {
    let err = ObfuscationPolicy::token(Vec::new(), fields(&["email"]), "id", 16).unwrap_err();
    assert!(matches!(err, ObfuscatorError::Config(_)));
}

#[test]
fn token_policy_rejects_out_of_range_length() {
    let zero = ObfuscationPolicy::token(b"k".to_vec(), fields(&["email"]), "id", 0);
    let over = ObfuscationPolicy::token(b"k".to_vec(), fields(&["email"]), "id", 65);
    assert!(matches!(zero.unwrap_err(), ObfuscatorError::Config(_)));
    assert!(matches!(over.unwrap_err(), ObfuscatorError::Config(_)));
}

#[test]
fn full_digest_length_is_accepted() {
    let policy = ObfuscationPolicy::token(b"k".to_vec(), fields(&["email"]), "id", 64).unwrap();
    assert_eq!(policy.obfuscate("1", "email").unwrap().len(), 64);
}

#[test]
fn sensitive_fields_must_be_non_empty() {
    let none = ObfuscationPolicy::token(b"k".to_vec(), Vec::new(), "id", 16);
    assert!(matches!(none.unwrap_err(), ObfuscatorError::Config(_)));

    let blank = ObfuscationPolicy::mask(fields(&["email", ""]), "id", "***");
    assert!(matches!(blank.unwrap_err(), ObfuscatorError::Config(_)));
}

#[test]
fn identifier_field_must_be_non_empty() {
    let err = ObfuscationPolicy::token(b"k".to_vec(), fields(&["email"]), "", 16).unwrap_err();
    assert!(matches!(err, ObfuscatorError::Config(_)));
}

#[test]
fn mask_policy_permits_empty_mask_and_needs_no_key() {
    let policy = ObfuscationPolicy::mask(fields(&["email"]), "id", "").unwrap();
    assert_eq!(policy.mode(), Mode::Mask);
    assert_eq!(policy.obfuscate("1", "email").unwrap(), "");
}

#[test]
fn mask_mode_ignores_the_identifier() {
    let policy = ObfuscationPolicy::mask(fields(&["email"]), "id", "REDACTED").unwrap();
    // Even an empty identifier is fine; no hashing happens.
    assert_eq!(policy.obfuscate("", "email").unwrap(), "REDACTED");
}

#[test]
fn sensitivity_is_exact_and_case_sensitive() {
    let policy = ObfuscationPolicy::mask(fields(&["email"]), "id", "***").unwrap();
    assert!(policy.is_sensitive("email"));
    assert!(!policy.is_sensitive("Email"));
    assert!(!policy.is_sensitive("email_address"));
    assert!(!policy.is_sensitive("mail"));
}

#[test]
fn token_mode_dispatches_to_the_generator() {
    let policy =
        ObfuscationPolicy::token(b"secret".to_vec(), fields(&["email"]), "id", 16).unwrap();
    let direct = gdpr_obfuscator::token::generate(b"secret", "42", "email", 16).unwrap();
    assert_eq!(policy.obfuscate("42", "email").unwrap(), direct);
}
