//! # pythagoras
//!
//! Exact integer arithmetic for two classic number problems: the
//! difference between the square of a sum and the sum of squares, and
//! enumeration of Pythagorean triplets by side range or perimeter.
//!
//! ## Modules
//!
//! - [`squares`] — Closed-form square-sum identities
//! - [`triplet`] — Pythagorean triplet enumeration via Euclid's formula
//! - [`error`] — Input-validation errors
//!
//! ## Design Philosophy
//!
//! - **Exact arithmetic**: everything is `u64`; no floating point, no
//!   approximation
//! - **No hidden state**: every enumeration builds its own iterator, so
//!   repeated and concurrent calls are independent
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod error;
pub mod squares;
pub mod triplet;
