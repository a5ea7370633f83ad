/// Element equality used when diffing series values.
///
/// `NaN` equals `NaN` and `0.0` equals `-0.0`, so a series holding gaps
/// compares equal to an unchanged copy of itself.
#[must_use]
pub fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
