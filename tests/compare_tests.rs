use docmark::grade::{Verdict, compare_elements};

#[test]
fn both_empty_is_perfect_match() {
    let outcome = compare_elements::<String>(&[], &[], "Paragraph");
    assert_eq!(outcome.match_ratio, 100.0);
    assert!(outcome.differences.is_empty());
    assert_eq!(outcome.total, 0);
}

#[test]
fn missing_candidate_is_zero_match() {
    let outcome = compare_elements(&["a".to_string()], &[], "Paragraph");
    assert_eq!(outcome.match_ratio, 0.0);
    assert!(outcome.differences.is_empty());
}

#[test]
fn missing_reference_is_zero_match() {
    let outcome = compare_elements(&[], &["a".to_string()], "Paragraph");
    assert_eq!(outcome.match_ratio, 0.0);
    assert!(outcome.differences.is_empty());
}

#[test]
fn identical_sequences_match_fully() {
    let elements: Vec<u32> = vec![1, 2, 3, 4, 5];
    let outcome = compare_elements(&elements, &elements.clone(), "Cell");
    assert_eq!(outcome.match_ratio, 100.0);
    assert!(outcome.differences.is_empty());
    assert_eq!(outcome.matched, 5);
    assert_eq!(outcome.total, 5);
}

#[test]
fn longer_candidate_tail_is_ignored() {
    let reference = vec![1, 2];
    let candidate = vec![1, 2, 3, 4];
    let outcome = compare_elements(&reference, &candidate, "Cell");
    assert_eq!(outcome.match_ratio, 100.0);
    assert!(outcome.differences.is_empty());
}

#[test]
fn shorter_candidate_counts_against_reference_length() {
    let reference = vec![1, 2, 3, 4];
    let candidate = vec![1, 2];
    let outcome = compare_elements(&reference, &candidate, "Cell");
    // Two matches over four reference elements; the missing tail is not a
    // recorded difference, it just never matches.
    assert_eq!(outcome.match_ratio, 50.0);
    assert!(outcome.differences.is_empty());
    assert_eq!(outcome.total, 4);
}

#[test]
fn mismatches_are_recorded_one_based() {
    let reference = vec![10, 20, 30];
    let candidate = vec![10, 99, 30];
    let outcome = compare_elements(&reference, &candidate, "Cell");

    assert_eq!(outcome.differences.len(), 1);
    let difference = &outcome.differences[0];
    assert_eq!(difference.position, "2");
    assert_eq!(difference.expected, "20");
    assert_eq!(difference.actual, "99");
    assert_eq!(difference.verdict, Verdict::Incorrect);
}

/// Deterministic linear congruential generator for the bounds check.
fn next(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

#[test]
fn ratios_stay_in_bounds_over_generated_sequences() {
    let mut seed = 0x5eed;
    for _ in 0..500 {
        let reference: Vec<u64> = (0..next(&mut seed) % 8).map(|_| next(&mut seed) % 3).collect();
        let candidate: Vec<u64> = (0..next(&mut seed) % 8).map(|_| next(&mut seed) % 3).collect();

        let outcome = compare_elements(&reference, &candidate, "Cell");
        assert!(outcome.match_ratio >= 0.0, "ratio below zero");
        assert!(outcome.match_ratio <= 100.0, "ratio above hundred");
        assert!(outcome.matched <= outcome.total.max(1));
    }
}
