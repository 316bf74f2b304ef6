// tests/version_rules_test.rs
use actions_kit::version::{
    check_version_increments_by_one, get_major_minor_version, match_semver, IncrementCheck,
};
use actions_kit::ActionsKitError;

#[test]
fn test_match_round_trips_numeric_prefix() {
    for input in ["0.1.0", "1.9.10", "2.5.12", "10.0.3", "0.0.0"] {
        let v = match_semver(input, false).expect("should match");
        assert_eq!(format!("{}.{}.{}", v.major, v.minor, v.patch), input);
    }
}

#[test]
fn test_minor_bump_resets_patch() {
    assert!(
        check_version_increments_by_one("1.9.10", "1.10.0", IncrementCheck::default()).unwrap()
    );
}

#[test]
fn test_patch_change_without_reset_raises() {
    let result = check_version_increments_by_one("0.1.0", "0.2.1", IncrementCheck::default());
    assert!(matches!(result, Err(ActionsKitError::Validation(_))));
}

#[test]
fn test_missing_v_prefix_raises_format_error() {
    let opts = IncrementCheck {
        with_leading_v: true,
        ..Default::default()
    };
    let err = check_version_increments_by_one("1", "10", opts).unwrap_err();
    match err {
        ActionsKitError::Format(msg) => {
            assert!(msg.contains("does not start with 'v'"));
            assert!(msg.contains("semver.org"));
        }
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_major_minor_truncation() {
    assert_eq!(
        get_major_minor_version("2.1.3-alpha", false),
        Some("2.1".to_string())
    );
    assert_eq!(get_major_minor_version("invalid_version", false), None);
}

#[test]
fn test_fields_compare_as_integers_not_strings() {
    // "10" > "9" numerically even though it sorts lower as a string
    assert!(check_version_increments_by_one("1.9.9", "1.9.10", IncrementCheck::default()).unwrap());

    let result = check_version_increments_by_one("1.9.9", "1.9.100", IncrementCheck::default());
    assert!(result.is_err());
}

#[test]
fn test_verdict_is_idempotent() {
    let opts = IncrementCheck {
        error_on_false: false,
        ..Default::default()
    };
    for (current, next) in [("1.0.0", "1.0.1"), ("1.0.0", "2.1.0"), ("0.9.0", "0.10.0")] {
        let runs: Vec<bool> = (0..3)
            .map(|_| check_version_increments_by_one(current, next, opts).unwrap())
            .collect();
        assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

#[test]
fn test_prerelease_versions_parse_before_arithmetic() {
    // malformed prerelease must be rejected by the grammar, not compared
    let result =
        check_version_increments_by_one("1.0.0", "nonsense-1.0.1", IncrementCheck::default());
    assert!(matches!(result, Err(ActionsKitError::Format(_))));
}
