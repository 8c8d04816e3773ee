use keyspace::stats::compute;
use rstest::rstest;

#[test]
fn test_fresh_space_of_ten() {
    let stats = compute(10, 0);
    assert_eq!(stats.total, 10);
    assert_eq!(stats.remaining, 10);
    assert_eq!(stats.checked, 0);
    assert_eq!(stats.probability_next, 10.0);
    assert_eq!(stats.probability_within_3, 30.0);
    assert_eq!(stats.probability_within_5, 50.0);
    assert_eq!(stats.probability_within_10, 100.0);
    assert_eq!(stats.expected_attempts, 5.5);
    assert_eq!(stats.best_case, 1);
    assert_eq!(stats.worst_case, 10);
}

#[test]
fn test_exhausted_space_zeroes_everything() {
    let stats = compute(10, 10);
    assert_eq!(stats.remaining, 0);
    assert_eq!(stats.probability_next, 0.0);
    assert_eq!(stats.probability_within_3, 0.0);
    assert_eq!(stats.probability_within_5, 0.0);
    assert_eq!(stats.probability_within_10, 0.0);
    assert_eq!(stats.expected_attempts, 0.0);
    assert_eq!(stats.best_case, 0);
    assert_eq!(stats.worst_case, 0);
}

#[test]
fn test_over_reported_checked_clamps_to_zero_remaining() {
    let stats = compute(5, 9);
    assert_eq!(stats.remaining, 0);
    assert_eq!(stats.probability_next, 0.0);
}

// Exact two-decimal rounding is contractual: 100/3 = 33.333... -> 33.33,
// 100/6 = 16.666... -> 16.67.
#[rstest]
#[case(3, 0, 33.33, 100.0, 2.0)]
#[case(6, 0, 16.67, 50.0, 3.5)]
#[case(7, 0, 14.29, 42.86, 4.0)]
#[case(10, 9, 100.0, 100.0, 1.0)]
#[case(200, 0, 0.5, 1.5, 100.5)]
fn test_rounding_contract(
    #[case] total: usize,
    #[case] checked: usize,
    #[case] expected_next: f64,
    #[case] expected_within_3: f64,
    #[case] expected_attempts: f64,
) {
    let stats = compute(total, checked);
    assert_eq!(stats.probability_next, expected_next);
    assert_eq!(stats.probability_within_3, expected_within_3);
    assert_eq!(stats.expected_attempts, expected_attempts);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn test_within_k_never_exceeds_hundred(#[case] remaining: usize) {
    let stats = compute(remaining, 0);
    assert!(stats.probability_within_10 <= 100.0);
    assert_eq!(stats.probability_within_10, 100.0);
}

#[test]
fn test_single_remaining_candidate_is_certain() {
    let stats = compute(2, 1);
    assert_eq!(stats.remaining, 1);
    assert_eq!(stats.probability_next, 100.0);
    assert_eq!(stats.expected_attempts, 1.0);
    assert_eq!(stats.worst_case, 1);
}
