//! Closed-form square-sum identities.
//!
//! Computes the square of the sum `(1 + 2 + ... + n)²`, the sum of
//! squares `1² + 2² + ... + n²`, and their difference, all via exact
//! closed forms rather than accumulation loops.
//!
//! # Formulas
//!
//! - Triangular number: `1 + ... + n = n(n+1)/2` (Gauss).
//! - Square pyramidal number: `1² + ... + n² = n(n+1)(2n+1)/6`.
//!
//! # Overflow
//!
//! All functions use plain `u64` arithmetic. [`square_of_sum`] grows as
//! `n⁴/4` and overflows for `n > 92_681`; the other two functions stay
//! exact well beyond that. Inputs are expected to be modest.

/// Computes the square of the sum of the first `n` natural numbers.
///
/// Uses the triangular-number identity `1 + ... + n = n(n+1)/2`, then
/// squares the result.
///
/// # Complexity
/// Time: O(1), Space: O(1)
///
/// # Examples
/// ```
/// use pythagoras::squares::square_of_sum;
/// assert_eq!(square_of_sum(5), 225); // (1+2+3+4+5)² = 15²
/// assert_eq!(square_of_sum(0), 0);
/// ```
pub fn square_of_sum(n: u64) -> u64 {
    let sum = n * (n + 1) / 2;
    sum * sum
}

/// Computes the sum of the squares of the first `n` natural numbers.
///
/// Uses the square pyramidal number formula `n(n+1)(2n+1)/6`. The
/// product of three consecutive-ish factors is always divisible by 6,
/// so the division is exact.
///
/// # Complexity
/// Time: O(1), Space: O(1)
///
/// # Examples
/// ```
/// use pythagoras::squares::sum_of_squares;
/// assert_eq!(sum_of_squares(5), 55); // 1 + 4 + 9 + 16 + 25
/// assert_eq!(sum_of_squares(0), 0);
/// ```
pub fn sum_of_squares(n: u64) -> u64 {
    n * (n + 1) * (2 * n + 1) / 6
}

/// Computes the difference between the square of the sum and the sum of
/// the squares of the first `n` natural numbers.
///
/// Always non-negative: the square of the sum additionally contains all
/// the cross terms `2ij` for `i < j`.
///
/// # Examples
/// ```
/// use pythagoras::squares::difference;
/// assert_eq!(difference(10), 2640); // 3025 - 385
/// ```
pub fn difference(n: u64) -> u64 {
    square_of_sum(n) - sum_of_squares(n)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn closed_forms_match_accumulation(n in 0_u64..2_000) {
            let sum: u64 = (1..=n).sum();
            let sum_sq: u64 = (1..=n).map(|i| i * i).sum();
            prop_assert_eq!(square_of_sum(n), sum * sum);
            prop_assert_eq!(sum_of_squares(n), sum_sq);
        }

        #[test]
        fn difference_equals_cross_terms(n in 0_u64..500) {
            // (Σi)² − Σi² = Σ_{i<j} 2ij
            let mut cross = 0_u64;
            for i in 1..=n {
                for j in (i + 1)..=n {
                    cross += 2 * i * j;
                }
            }
            prop_assert_eq!(difference(n), cross);
        }

        #[test]
        fn difference_is_monotone(n in 1_u64..2_000) {
            prop_assert!(difference(n) >= difference(n - 1));
        }
    }
}
