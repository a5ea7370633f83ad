use std::sync::Arc;

use crate::core::primitives::same_value;
use crate::error::{ChartError, ChartResult};

/// Immutable pair of equal-length coordinate sequences.
///
/// Storage is shared between clones. A data change is expressed by building a
/// new value, never by mutating an existing one.
#[derive(Debug, Clone)]
pub struct SeriesData {
    x: Arc<[f64]>,
    y: Arc<[f64]>,
}

impl SeriesData {
    pub fn new(x: impl Into<Arc<[f64]>>, y: impl Into<Arc<[f64]>>) -> ChartResult<Self> {
        let x = x.into();
        let y = y.into();
        if x.len() != y.len() {
            return Err(ChartError::SeriesLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            x: Arc::from(Vec::new()),
            y: Arc::from(Vec::new()),
        }
    }

    /// New value with replaced x-values, sharing the current y-values.
    pub fn with_x(&self, x: impl Into<Arc<[f64]>>) -> ChartResult<Self> {
        Self::new(x, Arc::clone(&self.y))
    }

    /// New value with replaced y-values, sharing the current x-values.
    pub fn with_y(&self, y: impl Into<Arc<[f64]>>) -> ChartResult<Self> {
        Self::new(Arc::clone(&self.x), y)
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x_eq(&self, other: &Self) -> bool {
        axis_eq(&self.x, &other.x)
    }

    #[must_use]
    pub fn y_eq(&self, other: &Self) -> bool {
        axis_eq(&self.y, &other.y)
    }

    /// Structural equality over both axes. Identity is never consulted beyond
    /// a shortcut for shared storage.
    #[must_use]
    pub fn value_eq(&self, other: &Self) -> bool {
        self.x_eq(other) && self.y_eq(other)
    }

    pub(crate) fn x_shared(&self) -> Arc<[f64]> {
        Arc::clone(&self.x)
    }

    pub(crate) fn y_shared(&self) -> Arc<[f64]> {
        Arc::clone(&self.y)
    }
}

impl Default for SeriesData {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for SeriesData {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

fn axis_eq(left: &Arc<[f64]>, right: &Arc<[f64]>) -> bool {
    if Arc::ptr_eq(left, right) {
        return true;
    }
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|(&a, &b)| same_value(a, b))
}
