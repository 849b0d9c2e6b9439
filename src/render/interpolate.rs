//! Incremental linear interpolation over an integer axis.

/// Interpolates a dependent value `d` over every integer `i` in `i0..=i1`.
///
/// Returns exactly `i1 - i0 + 1` samples starting at `d0` and stepping by the
/// constant slope `(d1 - d0) / (i1 - i0)`. When `i0 == i1` the single sample
/// `d0` is returned without computing a slope.
///
/// Callers must order the independent axis so that `i0 <= i1`.
pub fn interpolate(i0: i32, d0: f32, i1: i32, d1: f32) -> Vec<f32> {
    debug_assert!(i0 <= i1, "interpolate called with i0 ({i0}) > i1 ({i1})");

    if i0 == i1 {
        return vec![d0];
    }

    let steps = i64::from(i1) - i64::from(i0);
    let slope = (d1 - d0) / steps as f32;
    let mut values = Vec::with_capacity((steps + 1) as usize);
    let mut d = d0;
    for _ in i0..=i1 {
        values.push(d);
        d += slope;
    }
    values
}
