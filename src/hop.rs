use rand::Rng;

use crate::constants::{GRAV_MERCURY, RAD_MERCURY};

/// Draw an emergent launch angle in radians off the ground, uniform in
/// `[0, pi/2)`.
pub fn emergent_angle<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..std::f64::consts::FRAC_PI_2)
}

/// Gravitational acceleration in m/s^2 at a given height above the surface.
///
/// `g * (R / (R + h))^2`. This is only an approximation for the change in
/// gravity over a hop; the full differential equation is nonhomogeneous.
pub fn adjusted_gravity(height: f64) -> f64 {
    GRAV_MERCURY * (RAD_MERCURY / (RAD_MERCURY + height)).powi(2)
}

/// Maximum height in meters reached by a volatile launched at `velocity`
/// m/s and `incidence` radians off the ground.
///
/// `R * v_y^2 / (2 R g - v_y^2)`, which reduces to the flat-ground
/// `v_y^2 / 2g` when `v_y` is small against the escape velocity.
pub fn max_height(velocity: f64, incidence: f64, gravity: f64) -> f64 {
    let velocity_y_squared = (velocity * incidence.sin()).powi(2);
    (RAD_MERCURY * velocity_y_squared) / (2.0 * RAD_MERCURY * gravity - velocity_y_squared)
}

/// Time in seconds a volatile stays airborne for one hop, `2 v_y / g`.
pub fn hop_time(velocity: f64, incidence: f64, gravity: f64) -> f64 {
    2.0 * velocity * incidence.sin() / gravity
}

/// Ground displacement in meters covered by one ballistic hop.
pub fn hop_distance(velocity: f64, incidence: f64, gravity: f64) -> f64 {
    let velocity_x = velocity * incidence.cos();
    velocity_x * hop_time(velocity, incidence, gravity)
}

/// Convert a ground displacement in meters to the equivalent arc in radians
/// on the planet's surface.
pub fn arc_radians(displacement: f64) -> f64 {
    displacement / RAD_MERCURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn gravity_falls_off_with_height() {
        assert_eq!(adjusted_gravity(0.0), GRAV_MERCURY);
        assert!(adjusted_gravity(1.0e5) < GRAV_MERCURY);
        // one planet radius up, gravity is a quarter of the surface value
        let at_one_radius = adjusted_gravity(RAD_MERCURY);
        assert!((at_one_radius - GRAV_MERCURY / 4.0).abs() < 1.0e-9);
    }

    #[test]
    fn vertical_hop_matches_flat_ground_kinematics() {
        // 800 m/s straight up is small against escape velocity, so the
        // curved-surface correction is tiny and v^2 / 2g is a good check
        let height = max_height(800.0, FRAC_PI_2, GRAV_MERCURY);
        let flat_ground = 800.0_f64.powi(2) / (2.0 * GRAV_MERCURY);
        assert!((height - flat_ground).abs() / flat_ground < 0.05);
    }

    #[test]
    fn horizontal_launch_goes_nowhere_up() {
        assert_eq!(max_height(800.0, 0.0, GRAV_MERCURY), 0.0);
        assert_eq!(hop_time(800.0, 0.0, GRAV_MERCURY), 0.0);
        assert_eq!(hop_distance(800.0, 0.0, GRAV_MERCURY), 0.0);
    }

    #[test]
    fn forty_five_degrees_maximizes_range() {
        let range_45 = hop_distance(800.0, FRAC_PI_4, GRAV_MERCURY);
        let range_30 = hop_distance(800.0, FRAC_PI_4 * 2.0 / 3.0, GRAV_MERCURY);
        let range_60 = hop_distance(800.0, FRAC_PI_4 * 4.0 / 3.0, GRAV_MERCURY);
        assert!(range_45 > range_30);
        assert!(range_45 > range_60);
    }

    #[test]
    fn arc_radians_scales_by_planet_radius() {
        assert_eq!(arc_radians(RAD_MERCURY), 1.0);
        assert_eq!(arc_radians(0.0), 0.0);
    }

    #[test]
    fn emergent_angle_stays_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let psi = emergent_angle(&mut rng);
            assert!((0.0..FRAC_PI_2).contains(&psi));
        }
    }
}
