//! Thread-safe handle around a generator.
//!
//! `RangeLabelGenerator` takes `&mut self` for every state change, so it
//! cannot be driven from several threads directly. `SharedLabelGenerator`
//! wraps it in a mutex; each call holds the lock for exactly one operation,
//! so every value in the range is produced exactly once no matter how many
//! threads pull from the handle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::LabelError;
use crate::generator::RangeLabelGenerator;
use crate::steps::Step;

/// Cloneable, lock-protected generator handle.
#[derive(Debug, Clone)]
pub struct SharedLabelGenerator {
    inner: Arc<Mutex<RangeLabelGenerator>>,
}

impl SharedLabelGenerator {
    #[must_use]
    pub fn new(generator: RangeLabelGenerator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.inner.lock().is_completed()
    }

    #[must_use]
    pub fn current_value(&self) -> i64 {
        self.inner.lock().current_value()
    }

    pub fn add_divisor_label(
        &self,
        divisor: i64,
        label: impl Into<String>,
    ) -> Result<(), LabelError> {
        self.inner.lock().add_divisor_label(divisor, label)
    }

    pub fn add_predicate_label<F>(&self, predicate: F, label: impl Into<String>)
    where
        F: Fn(i64) -> bool + Send + Sync + 'static,
    {
        self.inner.lock().add_predicate_label(predicate, label);
    }

    pub fn produce_step(&self) -> Result<Step, LabelError> {
        self.inner.lock().produce_step()
    }

    pub fn produce_labels(&self) -> Result<Vec<String>, LabelError> {
        self.inner.lock().produce_labels()
    }

    pub fn produce_line(&self) -> Result<String, LabelError> {
        self.inner.lock().produce_line()
    }

    /// Recover the generator if this is the last handle.
    #[must_use]
    pub fn into_inner(self) -> Option<RangeLabelGenerator> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}

impl From<RangeLabelGenerator> for SharedLabelGenerator {
    fn from(generator: RangeLabelGenerator) -> Self {
        Self::new(generator)
    }
}
