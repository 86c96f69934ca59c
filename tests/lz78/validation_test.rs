use lzentropy::estimators::{
    InputValidator, ValidationError, estimate_entropy_rate, estimate_entropy_rate_with_validator,
};

#[test]
fn short_samples_are_rejected_by_default() {
    let err = estimate_entropy_rate(&[0, 1, 0], false).unwrap_err();
    assert_eq!(err, ValidationError::SampleTooShort { len: 3, min: 5 });
    // The message names the configured minimum.
    assert!(err.to_string().contains("5 outcomes"));
}

#[test]
fn skip_validation_allows_short_samples() {
    let h = estimate_entropy_rate(&[0, 1, 0], true).unwrap();
    assert!(h > 0.0);
}

#[test]
fn minimum_size_is_per_validator_not_global() {
    let strict = InputValidator::new(100);
    let lenient = InputValidator::new(2);
    let data: Vec<i32> = (0..50).map(|i| i % 3).collect();
    assert!(estimate_entropy_rate_with_validator(&data, &strict, false).is_err());
    assert!(estimate_entropy_rate_with_validator(&data, &lenient, false).is_ok());
    // Custom validators never touch the default configuration.
    assert_eq!(InputValidator::default().min_sample_size(), 5);
}

#[test]
fn skipping_validation_never_changes_the_estimate() {
    let data = vec![0, 1, 1, 0, 1, 0, 0, 1, 1, 0];
    let validated = estimate_entropy_rate(&data, false).unwrap();
    let unvalidated = estimate_entropy_rate(&data, true).unwrap();
    assert_eq!(validated.to_bits(), unvalidated.to_bits());
}
