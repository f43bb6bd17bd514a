// Note: all units have been converted into SI units.
// Temperature model values follow Butler '97.

/// Boltzmann constant in J/K (rounded reference value used by the model).
pub const BOLTZMANN: f64 = 1.38e-23;

/// Mean radius of Mercury in meters (2,439 km).
pub const RAD_MERCURY: f64 = 2.439e6;

/// Surface gravitational acceleration on Mercury in m/s^2.
pub const GRAV_MERCURY: f64 = 3.705;

/// Escape velocity of Mercury in m/s (4.251 km/s).
pub const ESC_MERCURY: f64 = 4.251e3;

/// Baseline surface temperature in Kelvin (138.1 K).
pub const SURFACE_TEMPERATURE: f64 = 1.381e2;

/// Terminator temperature contribution in Kelvin (378.5 K).
pub const TERMINATOR_MERCURY: f64 = 3.785e2;

/// Run parameter shaping the latitude-to-temperature falloff, dimensionless.
pub const N: f64 = 3.7e-1;

/// Mass of a water molecule in kg (18.02 amu).
pub const WATER_MASS: f64 = 2.989e-26;

/// Mass of a carbon dioxide molecule in kg (44.01 amu).
pub const CARBON_DIOXIDE_MASS: f64 = 7.308e-26;

/// Cold trap threshold temperature in Kelvin.
pub const COLD_TRAP: f64 = 225.0;

/// Newton's gravitational constant in m^3 / (kg s^2).
pub const NEWTON_CONSTANT: f64 = 6.67e-11;

/// Photodestruction timescale for water in seconds (10^4 s).
pub const PHOTO_WATER: f64 = 1.0e4;

/// Photodestruction timescale for carbon dioxide in seconds (3.3 * 10^4 s).
pub const PHOTO_CARBON_DIOXIDE: f64 = 3.3e4;
