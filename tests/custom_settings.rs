//! Installing process-wide settings from a config file.
//!
//! Runs in its own test binary because the global settings can only be set
//! once per process.

use shopcheck::prelude::*;
use std::io::Write;

const CONFIG: &str = r#"
[username]
min_length = 3
max_length = 8

[user_input]
min_age = 21

[driving.minimum_ages]
US = 16
UK = 17
DE = 18

[[coupons]]
code = "SPRING"
discount = 0.5

[[coupons]]
code = "SAVE10"
discount = 0.1
"#;

#[test]
fn installed_settings_drive_the_free_functions() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    let installed = settings.clone().install().unwrap();
    assert_eq!(installed, &settings);

    // Catalog
    let codes: Vec<&str> = get_coupons().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["SPRING", "SAVE10"]);
    assert_eq!(calculate_discount(100, "SPRING"), Outcome::Success(50.0));
    assert_eq!(calculate_discount(100, "SAVE20"), Outcome::Success(100.0));

    // Thresholds
    assert!(is_valid_username("abc"));
    assert!(!is_valid_username("dipesh98x"));
    assert!(validate_user_input("dipesh98", 20).is_failure());
    assert!(validate_user_input("dipesh98", 21).is_success());
    assert_eq!(can_drive(18, "DE"), Outcome::Success(true));
    assert_eq!(can_drive(17, "DE"), Outcome::Success(false));

    // Second install is rejected and leaves the first in place.
    let err = Settings::default().install().unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyInitialized));
    assert_eq!(Settings::global(), &settings);
}
