use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::{BOLTZMANN, CARBON_DIOXIDE_MASS, WATER_MASS};

/// Molecular mass in kg for a volatile selector.
///
/// The selector is the bare integer the reference model uses: `0` is water
/// and any other value, negative included, is carbon dioxide. Keep the
/// zero/nonzero partition as-is; callers deliberately pass values like `-1`.
pub fn molecule_mass(volatile: i32) -> f64 {
    if volatile == 0 {
        WATER_MASS
    } else {
        CARBON_DIOXIDE_MASS
    }
}

/// Thermal launch velocity in m/s of a volatile at a given temperature.
///
/// `v = sqrt(3 k T / m)` from kinetic theory. A negative temperature puts a
/// negative value under the square root and the result is NaN; the model
/// performs no validation and neither does this function.
pub fn launch_velocity(temperature: f64, volatile: i32) -> f64 {
    (3.0 * BOLTZMANN * temperature / molecule_mass(volatile)).sqrt()
}

/// Draw a launch speed from the velocity distribution at a given temperature.
///
/// The thermal velocity is the center of a normal distribution with sigma
/// equal to the center itself (the rederived pdf from the expectation value
/// calculation). Draws below zero are clamped to zero.
pub fn sampled_velocity<R: Rng>(temperature: f64, mass: f64, rng: &mut R) -> f64 {
    let calc_velocity = (3.0 * BOLTZMANN * temperature / mass).sqrt();
    let volatile_speed = match Normal::new(calc_velocity, calc_velocity) {
        Ok(normal) => normal.sample(rng),
        Err(_) => f64::NAN, // NaN center/sigma from a NaN temperature
    };
    volatile_speed.max(0.0)
}
