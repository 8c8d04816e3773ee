use serde::{Deserialize, Serialize};

/// Likelihood statistics over the remaining candidate space.
///
/// Percentages carry exactly 2 decimal places and `expected_attempts`
/// exactly 1; the rounding is part of the observable contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub remaining: usize,
    pub checked: usize,
    pub probability_next: f64,
    pub probability_within_3: f64,
    pub probability_within_5: f64,
    pub probability_within_10: f64,
    pub expected_attempts: f64,
    pub best_case: usize,
    pub worst_case: usize,
}

/// Computes statistics for a space of `total` candidates with `checked`
/// already eliminated.
///
/// `remaining` saturates at zero if a caller over-reports `checked`.
/// An exhausted space reports every probability field as 0. Otherwise the
/// model is a uniform draw without replacement: the expected number of
/// attempts to hit the answer among `r` remaining candidates is `(r+1)/2`.
pub fn compute(total: usize, checked: usize) -> Stats {
    let remaining = total.saturating_sub(checked);

    if remaining == 0 {
        return Stats {
            total,
            remaining: 0,
            checked,
            probability_next: 0.0,
            probability_within_3: 0.0,
            probability_within_5: 0.0,
            probability_within_10: 0.0,
            expected_attempts: 0.0,
            best_case: 0,
            worst_case: 0,
        };
    }

    let r = remaining as f64;
    let within = |k: f64| round2((k / r * 100.0).min(100.0));

    Stats {
        total,
        remaining,
        checked,
        probability_next: round2(100.0 / r),
        probability_within_3: within(3.0),
        probability_within_5: within(5.0),
        probability_within_10: within(10.0),
        expected_attempts: round1((r + 1.0) / 2.0),
        best_case: 1,
        worst_case: remaining,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
