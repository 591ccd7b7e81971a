//! Stock predicates and the sample rule set.
//!
//! The functions here are plain `fn(i64) -> bool` values suitable for
//! [`RangeLabelGenerator::add_predicate_label`].

use crate::error::LabelError;
use crate::generator::RangeLabelGenerator;

pub const RICKY_LABEL: &str = "Ricky";
pub const BOBBY_LABEL: &str = "Bobby";
pub const TEEN_LABEL: &str = "Teen";
pub const PRIME_LABEL: &str = "Prime";
pub const POSITIVE_LABEL: &str = "Positive";
pub const NEGATIVE_LABEL: &str = "Negative";
pub const MEANING_LABEL: &str = "The meaning of life, the universe, and everything";

/// 13 through 19 inclusive.
#[must_use]
pub fn is_teen(value: i64) -> bool {
    (13..=19).contains(&value)
}

/// Trial division primality test. Values below 2 are not prime.
#[must_use]
pub fn is_prime(value: i64) -> bool {
    if value < 2 {
        return false;
    }
    let mut i = 2;
    while i <= value / i {
        if value % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Zero and above.
#[must_use]
pub fn is_non_negative(value: i64) -> bool {
    value >= 0
}

#[must_use]
pub fn is_negative(value: i64) -> bool {
    value < 0
}

#[must_use]
pub fn is_meaning_of_life(value: i64) -> bool {
    value == 42
}

/// Generator over `lower_bound..=upper_bound` carrying the sample rules.
///
/// Rules, in order: multiples of 3 ("Ricky"), multiples of 5 ("Bobby"),
/// teens, primes, non-negatives ("Positive"), negatives and 42.
pub fn sample_generator(
    lower_bound: i64,
    upper_bound: i64,
) -> Result<RangeLabelGenerator, LabelError> {
    let mut gen = RangeLabelGenerator::new(lower_bound, upper_bound)?;
    gen.add_divisor_label(3, RICKY_LABEL)?;
    gen.add_divisor_label(5, BOBBY_LABEL)?;
    gen.add_predicate_label(is_teen, TEEN_LABEL);
    gen.add_predicate_label(is_prime, PRIME_LABEL);
    gen.add_predicate_label(is_non_negative, POSITIVE_LABEL);
    gen.add_predicate_label(is_negative, NEGATIVE_LABEL);
    gen.add_predicate_label(is_meaning_of_life, MEANING_LABEL);
    Ok(gen)
}
