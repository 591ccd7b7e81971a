//! Labeling rules.
//!
//! A `Rule` pairs a match condition with the label emitted when the
//! condition holds. Divisor rules test even divisibility; predicate rules
//! call a caller-supplied function.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boxed caller-supplied match condition.
pub type Predicate = Box<dyn Fn(i64) -> bool + Send + Sync>;

/// How a rule was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Matches values evenly divisible by the divisor.
    Divisor(i64),
    /// Matches values accepted by a caller-supplied predicate.
    Predicate,
}

enum Matcher {
    Divisor(i64),
    Predicate(Predicate),
}

/// A match condition paired with the label it contributes.
pub struct Rule {
    matcher: Matcher,
    label: String,
}

impl Rule {
    pub(crate) fn divisor(divisor: i64, label: String) -> Self {
        Self {
            matcher: Matcher::Divisor(divisor),
            label,
        }
    }

    pub(crate) fn predicate(predicate: Predicate, label: String) -> Self {
        Self {
            matcher: Matcher::Predicate(predicate),
            label,
        }
    }

    /// Label emitted when this rule matches.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self.matcher {
            Matcher::Divisor(d) => RuleKind::Divisor(d),
            Matcher::Predicate(_) => RuleKind::Predicate,
        }
    }

    /// Test the rule against `value`.
    ///
    /// # Panics
    ///
    /// Panics for a divisor rule with divisor 0.
    #[inline]
    #[must_use]
    pub fn matches(&self, value: i64) -> bool {
        match &self.matcher {
            // wrapping_rem keeps i64::MIN % -1 at 0 but still faults on 0.
            Matcher::Divisor(d) => value.wrapping_rem(*d) == 0,
            Matcher::Predicate(p) => p(value),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind())
            .field("label", &self.label)
            .finish()
    }
}
