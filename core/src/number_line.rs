use crate::{NUM_MAX, NUM_MIN, RANGE};

/// Pixel distance between adjacent tick marks. The line keeps one extra
/// segment beyond each end tick, hence `RANGE + 2` divisions.
pub fn tick_spacing(surface_width: f64) -> f64 {
    surface_width / (RANGE + 2) as f64
}

/// Maps a surface x offset to the nearest number-line value, clamped to
/// `[NUM_MIN, NUM_MAX]`. Out-of-range pixels are corrected silently.
pub fn x_to_num(surface_width: f64, x: f64) -> i32 {
    let index = (x / tick_spacing(surface_width)).round() as i32;
    (index - RANGE / 2 - 1).clamp(NUM_MIN, NUM_MAX)
}

/// Pixel x of a number-line value. Inverse of `x_to_num` up to rounding.
pub fn num_to_x(surface_width: f64, num: i32) -> f64 {
    (num + RANGE / 2 + 1) as f64 * tick_spacing(surface_width)
}
