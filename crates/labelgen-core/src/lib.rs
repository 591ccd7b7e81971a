//! # labelgen-core
//!
//! Bounded integer range generator that labels each value through
//! registered rules: `FizzBuzz` generalized to arbitrary divisors and
//! arbitrary predicates.
//!
//! # Example
//! ```
//! use labelgen_core::RangeLabelGenerator;
//!
//! let mut gen = RangeLabelGenerator::with_upper_bound(15).unwrap();
//! gen.add_divisor_label(3, "Fizz").unwrap();
//! gen.add_divisor_label(5, "Buzz").unwrap();
//! gen.add_predicate_label(|x| x == 7, "Lucky");
//!
//! let lines: Vec<String> = gen.steps().map(|step| step.line()).collect();
//! assert_eq!(lines[6], "Lucky");
//! assert_eq!(lines[14], "Fizz Buzz");
//! assert!(gen.is_completed());
//! ```

pub mod constants;
pub mod error;
pub mod generator;
pub mod predicates;
pub mod rule;
pub mod shared;
pub mod steps;

// Re-exports
pub use constants::{DEFAULT_LOWER_BOUND, LABEL_SEPARATOR};
pub use error::LabelError;
pub use generator::RangeLabelGenerator;
pub use rule::{Predicate, Rule, RuleKind};
pub use shared::SharedLabelGenerator;
pub use steps::{Step, Steps};
