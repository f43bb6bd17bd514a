pub mod checks;
pub mod cli;
pub mod constants;
mod file;
mod hop;
mod loss;
mod temperature;
mod velocity;

pub use checks::{run_reference_checks, CheckResult, ReferenceCheck, REFERENCE_CHECKS};
pub use file::{load_scenarios, Scenario};
pub use hop::{adjusted_gravity, arc_radians, emergent_angle, hop_distance, hop_time, max_height};
pub use loss::{cold_trapped, jeans_escape, photodestroyed, photodestruction_probability};
pub use temperature::molecule_temperature;
pub use velocity::{launch_velocity, molecule_mass, sampled_velocity};

// returns the launch velocity of the given molecule at the given latitude,
// chaining the temperature model into the velocity model
pub fn velocity_at(latitude: f64, molecule: i32) -> f64 {
    let temperature = molecule_temperature(latitude);
    launch_velocity(temperature, molecule)
}
