use crate::constants::{N, SURFACE_TEMPERATURE, TERMINATOR_MERCURY};

/// Surface temperature in Kelvin at a given latitude.
///
/// `phi` is the angle in radians measured from the north pole. The model is
/// `T = T_surface + T_terminator * cos(phi - pi/2)^N` after Butler '97.
///
/// No bounds are enforced on `phi`. When `cos(phi - pi/2)` is negative the
/// fractional power is undefined and `f64::powf` returns NaN; that NaN is
/// the model's answer and propagates to the caller unchanged.
pub fn molecule_temperature(phi: f64) -> f64 {
    SURFACE_TEMPERATURE + TERMINATOR_MERCURY * (phi - std::f64::consts::FRAC_PI_2).cos().powf(N)
}
