//! Range label generator.
//!
//! `RangeLabelGenerator` walks an inclusive `i64` range one value per call.
//! Each produced value is tested against the registered rules in
//! registration order; matching labels are returned, or the value's decimal
//! text when nothing matches.
//!
//! The generator has two states. It is active while the cursor is at or
//! below the upper bound and completed once the upper bound has been
//! produced. Completion is terminal.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::constants::{DEFAULT_LOWER_BOUND, LABEL_SEPARATOR};
use crate::error::LabelError;
use crate::rule::Rule;
use crate::steps::Step;

/// Stateful generator over an inclusive integer range.
///
/// # Example
/// ```
/// use labelgen_core::RangeLabelGenerator;
///
/// let mut gen = RangeLabelGenerator::new(3, 6).unwrap();
/// gen.add_divisor_label(3, "Ricky").unwrap();
/// let mut lines = Vec::new();
/// while !gen.is_completed() {
///     lines.push(gen.produce_line().unwrap());
/// }
/// assert_eq!(lines, ["Ricky", "4", "5", "Ricky"]);
/// ```
#[derive(Debug)]
pub struct RangeLabelGenerator {
    lower_bound: i64,
    upper_bound: i64,
    cursor: i64,
    /// Set when the cursor could not step past `i64::MAX`.
    exhausted: bool,
    rules: Vec<Rule>,
    divisors: HashSet<i64>,
}

impl RangeLabelGenerator {
    /// Create a generator over `lower_bound..=upper_bound`.
    ///
    /// The range must hold at least two values: equal bounds are rejected
    /// along with inverted ones.
    pub fn new(lower_bound: i64, upper_bound: i64) -> Result<Self, LabelError> {
        if lower_bound >= upper_bound {
            return Err(LabelError::InvalidRange {
                lower: lower_bound,
                upper: upper_bound,
            });
        }

        debug!(lower_bound, upper_bound, "Generator created");
        Ok(Self {
            lower_bound,
            upper_bound,
            cursor: lower_bound,
            exhausted: false,
            rules: Vec::new(),
            divisors: HashSet::new(),
        })
    }

    /// Create a generator over `1..=upper_bound`.
    pub fn with_upper_bound(upper_bound: i64) -> Result<Self, LabelError> {
        Self::new(DEFAULT_LOWER_BOUND, upper_bound)
    }

    #[must_use]
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// Whether every value in the range has been produced.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.exhausted || self.cursor > self.upper_bound
    }

    /// The next value to be produced.
    #[must_use]
    pub fn current_value(&self) -> i64 {
        self.cursor
    }

    /// Number of values in the range, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.upper_bound
            .abs_diff(self.lower_bound)
            .saturating_add(1)
    }

    /// Number of values not yet produced, saturating at `u64::MAX`.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        if self.is_completed() {
            0
        } else {
            self.upper_bound.abs_diff(self.cursor).saturating_add(1)
        }
    }

    /// Registered rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Label every multiple of `divisor` with `label`.
    ///
    /// Each divisor may be registered once per generator; the label plays
    /// no part in the duplicate check. Zero and negative divisors are
    /// accepted. A zero divisor panics when the first value is evaluated.
    pub fn add_divisor_label(
        &mut self,
        divisor: i64,
        label: impl Into<String>,
    ) -> Result<(), LabelError> {
        if !self.divisors.insert(divisor) {
            warn!(divisor, "Duplicate divisor rule rejected");
            return Err(LabelError::DuplicateRule { divisor });
        }

        let label = label.into();
        debug!(divisor, label = %label, "Divisor rule added");
        self.rules.push(Rule::divisor(divisor, label));
        Ok(())
    }

    /// Label every value accepted by `predicate` with `label`.
    ///
    /// Registering the same predicate twice adds two rules, so a matching
    /// value carries the label twice.
    pub fn add_predicate_label<F>(&mut self, predicate: F, label: impl Into<String>)
    where
        F: Fn(i64) -> bool + Send + Sync + 'static,
    {
        let label = label.into();
        debug!(label = %label, "Predicate rule added");
        self.rules.push(Rule::predicate(Box::new(predicate), label));
    }

    /// Evaluate the rules against `value` without moving the cursor.
    ///
    /// Returns the labels of all matching rules in registration order, or
    /// the decimal text of `value` when no rule matches.
    #[must_use]
    pub fn labels_for(&self, value: i64) -> Vec<String> {
        let mut labels: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(value))
            .map(|rule| rule.label().to_owned())
            .collect();
        if labels.is_empty() {
            labels.push(value.to_string());
        }
        labels
    }

    /// Produce the current value's step and advance the cursor.
    pub fn produce_step(&mut self) -> Result<Step, LabelError> {
        if self.is_completed() {
            warn!(
                upper_bound = self.upper_bound,
                "Production attempted after completion"
            );
            return Err(LabelError::SequenceExhausted {
                upper: self.upper_bound,
            });
        }

        let value = self.cursor;
        let labels = self.labels_for(value);
        trace!(value, labels = ?labels, "Step produced");
        self.advance();
        Ok(Step { value, labels })
    }

    /// Produce the labels for the current value and advance the cursor.
    pub fn produce_labels(&mut self) -> Result<Vec<String>, LabelError> {
        self.produce_step().map(|step| step.labels)
    }

    /// Produce the current value's labels joined by single spaces.
    pub fn produce_line(&mut self) -> Result<String, LabelError> {
        self.produce_labels()
            .map(|labels| labels.join(LABEL_SEPARATOR).trim().to_owned())
    }

    fn advance(&mut self) {
        match self.cursor.checked_add(1) {
            Some(next) => self.cursor = next,
            None => self.exhausted = true,
        }
        if self.is_completed() {
            debug!(upper_bound = self.upper_bound, "Sequence completed");
        }
    }
}
