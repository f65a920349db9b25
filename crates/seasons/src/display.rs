use crate::constants::TILT_SATURATION_MARGIN;

/// Text for the inclination readout.
///
/// Values within half a degree of the maximum tilt show the maximum itself,
/// everything else is floored to a whole degree, so `5.7` reads `"5.0°"` and
/// `-5.3` reads `"-6.0°"`.
pub fn format_inclination(degrees: f64, max_tilt_degrees: f64) -> String {
    let threshold = max_tilt_degrees - TILT_SATURATION_MARGIN;
    if degrees > threshold {
        return format!("{:.1}°", max_tilt_degrees);
    }
    if degrees < -threshold {
        return format!("{:.1}°", -max_tilt_degrees);
    }
    format!("{}.0°", degrees.floor() as i64)
}
