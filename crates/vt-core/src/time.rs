//! Speed and duration helpers.

/// Multiply metres-per-second by this to get kilometres-per-hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// Average speed in km/h over `distance_m` metres covered in `secs` seconds.
///
/// Returns `0.0` when `secs` is not positive.
#[inline]
pub fn speed_kmh(distance_m: f64, secs: f64) -> f64 {
    if secs > 0.0 {
        distance_m / secs * MPS_TO_KMH
    } else {
        0.0
    }
}

/// Render a whole number of seconds as `M:SS`.
///
/// Minutes are not wrapped into hours: 3725 s renders as `62:05`.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
