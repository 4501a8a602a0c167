/// Bounds `value` into `[min, max]`.
///
/// Evaluated as `max(min, min(value, max))`: the value is capped at `max`
/// first and then floored at `min`. Nothing is validated, so `min > max`
/// yields `min` instead of panicking like [`f64::clamp`]. A NaN `value` is
/// ignored by `f64::min` and yields `max`.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}
