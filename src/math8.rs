/// Clamp an arbitrary integer into the 0-255 channel range
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp8(value: i32) -> u8 {
    if value <= 0 {
        0
    } else if value >= 255 {
        255
    } else {
        value as u8
    }
}

/// Weighted average of two 8-bit values, rounded to the nearest integer
///
/// # Arguments
/// * `start` - Value the fade starts from
/// * `target` - Value the fade ends at
/// * `start_weight` - Weight of `start`
/// * `target_weight` - Weight of `target`
/// * `total_weight` - Divisor, normally the sum of both weights
///
/// A non-positive or NaN divisor yields `target`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn blend_weighted(
    start: u8,
    target: u8,
    start_weight: f32,
    target_weight: f32,
    total_weight: f32,
) -> u8 {
    if total_weight.is_nan() || total_weight <= 0.0 {
        return target;
    }

    let value =
        (f32::from(target) * target_weight + f32::from(start) * start_weight) / total_weight;
    if value.is_nan() {
        return target;
    }

    // `as` saturates on out-of-range floats
    clamp8(libm::roundf(value) as i32)
}
