use rand::Rng;

use crate::constants::{COLD_TRAP, ESC_MERCURY, PHOTO_CARBON_DIOXIDE, PHOTO_WATER};

/// Whether a hop ends in Jeans escape: the vertical velocity component
/// `v * sin(psi)` meets or exceeds Mercury's escape velocity.
pub fn jeans_escape(velocity: f64, emergent_angle: f64) -> bool {
    velocity * emergent_angle.sin() >= ESC_MERCURY
}

/// Whether a volatile is caught by a cold trap, i.e. its local temperature
/// is at or below the cold trap threshold.
pub fn cold_trapped(temperature: f64) -> bool {
    temperature <= COLD_TRAP
}

/// Probability that a volatile is photodestroyed during one hop of
/// `airborne_time` seconds: `1 - exp(-t / tau)`.
///
/// The selector uses the same partition as the velocity model: `0` is water,
/// anything else is carbon dioxide.
pub fn photodestruction_probability(airborne_time: f64, volatile: i32) -> f64 {
    let timescale = if volatile == 0 {
        PHOTO_WATER
    } else {
        PHOTO_CARBON_DIOXIDE
    };
    1.0 - (-airborne_time / timescale).exp()
}

/// Bernoulli draw against the photodestruction probability for one hop.
pub fn photodestroyed<R: Rng>(airborne_time: f64, volatile: i32, rng: &mut R) -> bool {
    rng.gen::<f64>() < photodestruction_probability(airborne_time, volatile)
}
