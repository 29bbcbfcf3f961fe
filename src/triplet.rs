//! Pythagorean triplet enumeration.
//!
//! Finds all triplets `(a, b, c)` with `a² + b² = c²` whose sides fall in
//! a given range ([`range`]) or whose perimeter equals a given value
//! ([`sum`]).
//!
//! # Algorithm
//!
//! Every Pythagorean triplet is a unique integer multiple `k` of a
//! primitive triplet, and every primitive triplet arises from exactly one
//! coprime pair `(m, n)` with `m > n ≥ 1`, `gcd(m, n) = 1`, `m − n` odd,
//! via Euclid's formula:
//!
//! ```text
//! a = m² − n²,  b = 2mn,  c = m² + n²
//! ```
//!
//! Both searches walk the coprime pairs in increasing `m` (and increasing
//! `n` within each `m`), cut the walk off with a monotone bound derived
//! from the caller's limit, scale the surviving primitives, and sort the
//! results lexicographically. Uniqueness of the `(m, n, k)` decomposition
//! means no duplicate triplets can be produced.
//!
//! Reference: Euclid, *Elements*, Book X, Lemma 1 before Proposition 29;
//! see also Sierpiński (1962), *Pythagorean Triangles*, ch. 1–2.

use crate::error::Error;

/// A Pythagorean triplet `(a, b, c)` with `a ≤ b ≤ c` and `a² + b² = c²`.
///
/// Constructed only by the enumeration functions in this module, which
/// guarantee both invariants. Field order makes the derived `Ord` the
/// lexicographic order used for result sequences.
///
/// # Examples
/// ```
/// use pythagoras::triplet::range;
/// let ts = range(1, 10).unwrap();
/// assert_eq!(ts[0].a, 3);
/// assert_eq!(ts[0].perimeter(), 12);
/// assert!(ts[0].is_primitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triplet {
    /// Shortest side.
    pub a: u64,
    /// Middle side.
    pub b: u64,
    /// Hypotenuse.
    pub c: u64,
}

impl Triplet {
    /// Returns the perimeter `a + b + c`.
    pub fn perimeter(&self) -> u64 {
        self.a + self.b + self.c
    }

    /// Returns `true` if the sides share no common factor.
    pub fn is_primitive(&self) -> bool {
        gcd(gcd(self.a, self.b), self.c) == 1
    }

    /// Scales every side by `k`.
    fn scaled(self, k: u64) -> Triplet {
        Triplet {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
        }
    }
}

/// Generating parameters for a primitive Pythagorean triplet.
///
/// Invariants: `m > n ≥ 1`, `gcd(m, n) = 1`, and `m − n` is odd. Under
/// these conditions Euclid's formula yields each primitive triplet
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoprimePair {
    /// Larger parameter.
    pub m: u64,
    /// Smaller parameter.
    pub n: u64,
}

impl CoprimePair {
    /// Builds the primitive triplet for this pair via Euclid's formula,
    /// with the legs ordered so that `a ≤ b`.
    ///
    /// # Examples
    /// ```
    /// use pythagoras::triplet::CoprimePair;
    /// let t = CoprimePair { m: 2, n: 1 }.primitive_triplet();
    /// assert_eq!((t.a, t.b, t.c), (3, 4, 5));
    /// // m = 4, n = 1 gives legs 15 and 8; the smaller comes first.
    /// let t = CoprimePair { m: 4, n: 1 }.primitive_triplet();
    /// assert_eq!((t.a, t.b, t.c), (8, 15, 17));
    /// ```
    pub fn primitive_triplet(&self) -> Triplet {
        let odd_leg = self.m * self.m - self.n * self.n;
        let even_leg = 2 * self.m * self.n;
        Triplet {
            a: odd_leg.min(even_leg),
            b: odd_leg.max(even_leg),
            c: self.m * self.m + self.n * self.n,
        }
    }

    /// Returns the perimeter of the primitive triplet, `2m(m + n)`.
    ///
    /// Algebraically `(m² − n²) + 2mn + (m² + n²)`; kept factored so the
    /// perimeter search can test divisibility without building the
    /// triplet.
    pub fn primitive_perimeter(&self) -> u64 {
        2 * self.m * (self.m + self.n)
    }
}

/// Iterator over all coprime pairs, ordered by increasing `m` and, within
/// each `m`, increasing `n`.
///
/// The sequence is infinite in principle; callers bound it with
/// [`Iterator::take_while`] on a quantity that is monotone in `m` (such
/// as the smallest hypotenuse `m² + 1` or the smallest perimeter
/// `2m(m + 1)` reachable at the current `m`). Each iterator owns its
/// cursor, so separate calls never interfere.
///
/// # Examples
/// ```
/// use pythagoras::triplet::{CoprimePair, CoprimePairs};
/// let first: Vec<CoprimePair> = CoprimePairs::new().take(4).collect();
/// assert_eq!(first[0], CoprimePair { m: 2, n: 1 });
/// assert_eq!(first[1], CoprimePair { m: 3, n: 2 });
/// assert_eq!(first[2], CoprimePair { m: 4, n: 1 });
/// assert_eq!(first[3], CoprimePair { m: 4, n: 3 });
/// ```
#[derive(Debug, Clone)]
pub struct CoprimePairs {
    m: u64,
    n: u64,
}

impl CoprimePairs {
    /// Creates a fresh iterator positioned at the first pair, `(2, 1)`.
    pub fn new() -> Self {
        Self { m: 2, n: 1 }
    }
}

impl Default for CoprimePairs {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CoprimePairs {
    type Item = CoprimePair;

    fn next(&mut self) -> Option<CoprimePair> {
        loop {
            if self.n >= self.m {
                self.m += 1;
                // m − n must be odd, so n has the opposite parity of m.
                self.n = if self.m % 2 == 0 { 1 } else { 2 };
                continue;
            }
            let candidate = CoprimePair {
                m: self.m,
                n: self.n,
            };
            self.n += 2;
            if gcd(candidate.m, candidate.n) == 1 {
                return Some(candidate);
            }
        }
    }
}

/// Finds all Pythagorean triplets whose sides all lie in `min..=max`.
///
/// Results are sorted lexicographically by `(a, b, c)` and contain no
/// duplicates.
///
/// # Algorithm
/// Walks coprime pairs while the smallest hypotenuse reachable at the
/// current `m` (`m² + 1`) still fits under `max`, scales each primitive
/// triplet by every `k ≥ 1` keeping the hypotenuse within `max`, and
/// keeps the scaled triplets whose shortest side reaches `min`.
///
/// # Complexity
/// Time: O(max · log max) over the generated candidates, Space: O(result)
///
/// # Errors
/// [`Error::InvalidRange`] if `min == 0` or `min > max`. An empty result
/// (e.g. `range(1, 4)`) is `Ok`, not an error.
///
/// # Examples
/// ```
/// use pythagoras::triplet::{range, Triplet};
/// let ts = range(1, 10).unwrap();
/// assert_eq!(
///     ts,
///     vec![
///         Triplet { a: 3, b: 4, c: 5 },
///         Triplet { a: 6, b: 8, c: 10 },
///     ]
/// );
/// ```
pub fn range(min: u64, max: u64) -> Result<Vec<Triplet>, Error> {
    if min == 0 || min > max {
        return Err(Error::InvalidRange { min, max });
    }

    let mut found = Vec::new();
    for pair in CoprimePairs::new().take_while(|p| p.m * p.m + 1 <= max) {
        let primitive = pair.primitive_triplet();
        let mut k = 1;
        while k * primitive.c <= max {
            if k * primitive.a >= min {
                found.push(primitive.scaled(k));
            }
            k += 1;
        }
    }
    found.sort_unstable();
    Ok(found)
}

/// Finds all Pythagorean triplets with perimeter exactly `perimeter`.
///
/// Results are sorted lexicographically by `(a, b, c)` and contain no
/// duplicates.
///
/// # Algorithm
/// Walks coprime pairs while the smallest primitive perimeter reachable
/// at the current `m` (`2m(m + 1)`) does not exceed the target. A pair
/// contributes exactly when its primitive perimeter `2m(m + n)` divides
/// the target; the quotient is the unique scaling factor.
///
/// # Errors
/// [`Error::InvalidPerimeter`] if `perimeter == 0`. Perimeters below 12,
/// the perimeter of (3, 4, 5), yield `Ok(vec![])`.
///
/// # Examples
/// ```
/// use pythagoras::triplet::{sum, Triplet};
/// assert_eq!(
///     sum(1000).unwrap(),
///     vec![Triplet { a: 200, b: 375, c: 425 }]
/// );
/// assert!(sum(11).unwrap().is_empty());
/// ```
pub fn sum(perimeter: u64) -> Result<Vec<Triplet>, Error> {
    if perimeter == 0 {
        return Err(Error::InvalidPerimeter { perimeter });
    }

    let mut found = Vec::new();
    for pair in CoprimePairs::new().take_while(|p| 2 * p.m * (p.m + 1) <= perimeter) {
        let primitive_perimeter = pair.primitive_perimeter();
        if perimeter % primitive_perimeter == 0 {
            let k = perimeter / primitive_perimeter;
            found.push(pair.primitive_triplet().scaled(k));
        }
    }
    found.sort_unstable();
    Ok(found)
}

/// Greatest common divisor by the Euclidean algorithm.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u64, b: u64, c: u64) -> Triplet {
        Triplet { a, b, c }
    }

    // --- coprime pair generation ---

    #[test]
    fn test_coprime_prefix() {
        let expected = [
            (2, 1),
            (3, 2),
            (4, 1),
            (4, 3),
            (5, 2),
            (5, 4),
            (6, 1),
            (6, 5),
            (7, 2),
            (7, 4),
            (7, 6),
        ];
        for (pair, &(m, n)) in CoprimePairs::new().zip(expected.iter()) {
            assert_eq!(pair.m, m);
            assert_eq!(pair.n, n);
        }
    }

    #[test]
    fn test_coprime_invariants() {
        for pair in CoprimePairs::new().take(500) {
            assert!(pair.m > pair.n);
            assert!(pair.n >= 1);
            assert_eq!(gcd(pair.m, pair.n), 1);
            assert_eq!((pair.m - pair.n) % 2, 1, "m - n must be odd: {pair:?}");
        }
    }

    #[test]
    fn test_primitive_triplet() {
        assert_eq!(
            CoprimePair { m: 2, n: 1 }.primitive_triplet(),
            t(3, 4, 5)
        );
        assert_eq!(
            CoprimePair { m: 3, n: 2 }.primitive_triplet(),
            t(5, 12, 13)
        );
        // Odd leg larger than even leg: legs must still come out ordered.
        assert_eq!(
            CoprimePair { m: 4, n: 1 }.primitive_triplet(),
            t(8, 15, 17)
        );
    }

    #[test]
    fn test_primitive_perimeter_matches_triplet() {
        for pair in CoprimePairs::new().take(100) {
            assert_eq!(
                pair.primitive_perimeter(),
                pair.primitive_triplet().perimeter()
            );
        }
    }

    // --- range ---

    #[test]
    fn test_range_1_10() {
        assert_eq!(range(1, 10).unwrap(), vec![t(3, 4, 5), t(6, 8, 10)]);
    }

    #[test]
    fn test_range_11_20() {
        assert_eq!(range(11, 20).unwrap(), vec![t(12, 16, 20)]);
    }

    #[test]
    fn test_range_below_smallest_triplet() {
        assert_eq!(range(1, 4).unwrap(), vec![]);
    }

    #[test]
    fn test_range_min_excludes_short_sides() {
        // (3,4,5) has a = 3 < 4, so only its multiples survive.
        assert_eq!(range(4, 10).unwrap(), vec![t(6, 8, 10)]);
    }

    #[test]
    fn test_range_invalid() {
        assert_eq!(
            range(0, 10),
            Err(Error::InvalidRange { min: 0, max: 10 })
        );
        assert_eq!(
            range(5, 2),
            Err(Error::InvalidRange { min: 5, max: 2 })
        );
    }

    #[test]
    fn test_range_idempotent() {
        assert_eq!(range(1, 100).unwrap(), range(1, 100).unwrap());
    }

    // --- sum ---

    #[test]
    fn test_sum_180() {
        assert_eq!(
            sum(180).unwrap(),
            vec![t(18, 80, 82), t(30, 72, 78), t(45, 60, 75)]
        );
    }

    #[test]
    fn test_sum_1000() {
        assert_eq!(sum(1000).unwrap(), vec![t(200, 375, 425)]);
    }

    #[test]
    fn test_sum_minimum_perimeter() {
        assert_eq!(sum(12).unwrap(), vec![t(3, 4, 5)]);
    }

    #[test]
    fn test_sum_below_minimum_is_empty() {
        for p in 1..12 {
            assert_eq!(sum(p).unwrap(), vec![], "sum({p}) should be empty");
        }
    }

    #[test]
    fn test_sum_no_solution() {
        // 13 is odd and too small for any scaled primitive.
        assert_eq!(sum(13).unwrap(), vec![]);
    }

    #[test]
    fn test_sum_invalid() {
        assert_eq!(sum(0), Err(Error::InvalidPerimeter { perimeter: 0 }));
    }

    #[test]
    fn test_sum_idempotent() {
        assert_eq!(sum(840).unwrap(), sum(840).unwrap());
    }

    // --- triplet accessors ---

    #[test]
    fn test_primitivity() {
        assert!(t(3, 4, 5).is_primitive());
        assert!(t(5, 12, 13).is_primitive());
        assert!(!t(6, 8, 10).is_primitive());
    }
}
