use expectancy_core::Expectation;
use serde::{Deserialize, Serialize};

/// Append-only history of observed values in arrival order.
///
/// Values are never reordered or removed individually; the only way to
/// forget is [`HistoryBuffer::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryBuffer {
    values: Vec<Option<f64>>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Option<f64>) {
        self.values.push(value);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Most recent entry; undefined when empty or when that entry was missing.
    pub fn last(&self) -> Expectation {
        self.values.last().copied().flatten().into()
    }
}

impl FromIterator<Option<f64>> for HistoryBuffer {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
