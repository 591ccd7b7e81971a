//! Produced steps and the borrowing step iterator.

use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::constants::LABEL_SEPARATOR;
use crate::generator::RangeLabelGenerator;

/// One produced value together with its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The value the labels were computed for.
    pub value: i64,
    /// Matching labels in rule order, or the value's decimal text.
    pub labels: Vec<String>,
}

impl Step {
    /// Labels joined by single spaces, trimmed.
    #[must_use]
    pub fn line(&self) -> String {
        self.labels.join(LABEL_SEPARATOR).trim().to_owned()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

/// Iterator over the steps a generator has yet to produce.
///
/// Yields `None` once the generator completes, and on every call after.
///
/// # Example
/// ```
/// use labelgen_core::RangeLabelGenerator;
///
/// let mut gen = RangeLabelGenerator::new(1, 15).unwrap();
/// gen.add_divisor_label(3, "Fizz").unwrap();
/// gen.add_divisor_label(5, "Buzz").unwrap();
/// let last = gen.steps().last().unwrap();
/// assert_eq!(last.value, 15);
/// assert_eq!(last.line(), "Fizz Buzz");
/// ```
pub struct Steps<'a> {
    generator: &'a mut RangeLabelGenerator,
}

impl RangeLabelGenerator {
    /// Iterate over the remaining steps, advancing this generator.
    pub fn steps(&mut self) -> Steps<'_> {
        Steps { generator: self }
    }
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.generator.is_completed() {
            return None;
        }
        self.generator.produce_step().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.remaining();
        match usize::try_from(remaining) {
            Ok(n) if remaining != u64::MAX => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Steps<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_line_joins_labels() {
        let step = Step {
            value: 15,
            labels: vec!["Ricky".into(), "Bobby".into()],
        };
        assert_eq!(step.line(), "Ricky Bobby");
        assert_eq!(step.to_string(), "Ricky Bobby");
    }

    #[test]
    fn steps_yield_values_in_order() {
        let mut gen = RangeLabelGenerator::new(3, 6).unwrap();
        gen.add_divisor_label(3, "Ricky").unwrap();
        let steps: Vec<Step> = gen.steps().collect();
        let values: Vec<i64> = steps.iter().map(|s| s.value).collect();
        let lines: Vec<String> = steps.iter().map(Step::line).collect();
        assert_eq!(values, [3, 4, 5, 6]);
        assert_eq!(lines, ["Ricky", "4", "5", "Ricky"]);
        assert!(gen.is_completed());
    }

    #[test]
    fn steps_are_fused() {
        let mut gen = RangeLabelGenerator::new(0, 1).unwrap();
        let mut steps = gen.steps();
        assert!(steps.next().is_some());
        assert!(steps.next().is_some());
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }

    #[test]
    fn steps_resume_from_cursor() {
        let mut gen = RangeLabelGenerator::new(1, 5).unwrap();
        gen.produce_line().unwrap();
        gen.produce_line().unwrap();
        let values: Vec<i64> = gen.steps().map(|s| s.value).collect();
        assert_eq!(values, [3, 4, 5]);
    }

    #[test]
    fn size_hint_is_exact() {
        let mut gen = RangeLabelGenerator::new(10, 19).unwrap();
        let mut steps = gen.steps();
        assert_eq!(steps.size_hint(), (10, Some(10)));
        steps.next();
        assert_eq!(steps.size_hint(), (9, Some(9)));
    }

    #[test]
    fn size_hint_unbounded_for_full_range() {
        let mut gen = RangeLabelGenerator::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(gen.steps().size_hint().1, None);
    }

    #[test]
    fn produce_step_reports_value() {
        let mut gen = RangeLabelGenerator::new(-5, 0).unwrap();
        gen.add_divisor_label(6, "Harold").unwrap();
        let last = gen.steps().last().unwrap();
        assert_eq!(
            last,
            Step {
                value: 0,
                labels: vec!["Harold".into()],
            }
        );
    }

    #[test]
    fn step_serializes_to_json() {
        let step = Step {
            value: 42,
            labels: vec!["Ricky".into(), "Positive".into()],
        };
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"value":42,"labels":["Ricky","Positive"]}"#);
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
