//! Min-max extent and linear rescaling onto character widths and heights

use num_traits::{Float, NumCast};

/// Smallest and largest value of a sequence, or `None` when it is empty
pub fn extent<T: Float>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value))),
    )
}

/// Linearly map `value` from `[min, max]` onto `[0, span]`, truncating toward zero
///
/// Returns `None` when the range is degenerate (`max == min`), leaving the
/// caller to apply its own flat-data policy instead of dividing by zero.
/// Ranges wider than the float type can hold are measured on halved values.
pub fn rescale<T: Float>(value: T, min: T, max: T, span: usize) -> Option<usize> {
    let (offset, range) = if (max - min).is_finite() {
        (value - min, max - min)
    } else {
        let two = T::one() + T::one();
        (value / two - min / two, max / two - min / two)
    };
    if range.is_zero() {
        return None;
    }

    let span = <T as NumCast>::from(span)?;
    let scaled = offset / range * span;
    Some(scaled.to_usize().unwrap_or(0))
}

/// Value at `step` of `steps` equal intervals climbing from `min` to `max`
pub fn interpolate<T: Float>(min: T, max: T, step: usize, steps: usize) -> T {
    let (Some(step), Some(steps)) = (<T as NumCast>::from(step), <T as NumCast>::from(steps))
    else {
        return min;
    };
    if steps.is_zero() {
        return min;
    }
    if (max - min).is_finite() {
        return min + step * (max - min) / steps;
    }

    let two = T::one() + T::one();
    (min / two + (max / two - min / two) / steps * step) * two
}
