/// Pin a requested pixel position to the last valid index of a strip.
///
/// Negative positions resolve to the first pixel, positions past the end
/// resolve to the last one. Returns `None` only for an empty strip.
#[allow(clippy::cast_sign_loss)]
pub const fn clamp_position(position: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if position <= 0 {
        return Some(0);
    }

    let position = position as usize;
    if position >= len {
        return Some(len - 1);
    }
    Some(position)
}
