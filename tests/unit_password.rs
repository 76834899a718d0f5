use quadro::utils::password::{DUMMY_HASH, hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    let result = verify_password(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    let result = verify_password("wrongpassword", &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let password = "Password123";
    let hash = hash_password(password).unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}

#[test]
fn test_dummy_hash_is_well_formed_and_matches_nothing() {
    // The not-found login path verifies against this hash; it must
    // parse cleanly (no error short-circuit) and never match.
    for password in ["", "password", "admin123", "s3cr3t!"] {
        let result = verify_password(password, DUMMY_HASH);
        assert!(result.is_ok());
        assert!(!result.unwrap());
    }
}

#[test]
#[ignore = "timing-sensitive; run manually"]
fn test_dummy_verification_cost_resembles_real_verification() {
    use std::time::Instant;

    let hash = hash_password("realpassword").unwrap();

    let samples = 5;
    let mut real = Vec::with_capacity(samples);
    let mut dummy = Vec::with_capacity(samples);

    for _ in 0..samples {
        let start = Instant::now();
        let _ = verify_password("guess", &hash);
        real.push(start.elapsed());

        let start = Instant::now();
        let _ = verify_password("guess", DUMMY_HASH);
        dummy.push(start.elapsed());
    }

    real.sort();
    dummy.sort();
    let real_median = real[samples / 2];
    let dummy_median = dummy[samples / 2];

    // Same cost factor, so the two paths should be within the same
    // order of magnitude. A user-existence oracle would show orders of
    // magnitude difference (parse failure vs full key derivation).
    let ratio = dummy_median.as_secs_f64() / real_median.as_secs_f64();
    assert!(
        (0.2..5.0).contains(&ratio),
        "dummy/real verification ratio out of range: {ratio}"
    );
}
