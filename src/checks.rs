use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::velocity_at;

/// Absolute tolerance on the reference velocities, m/s.
pub const TOLERANCE: f64 = 0.5;

/// One fixed scenario from the reference model's checklist.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceCheck {
    /// Checklist number, 1-based.
    pub number: usize,
    /// Latitude in radians from the north pole.
    pub latitude: f64,
    /// Volatile selector, 0 for water, anything else for carbon dioxide.
    pub molecule: i32,
    /// Expected launch velocity in m/s.
    pub expected: f64,
}

/// The five scenarios the reference model checks itself against.
///
/// Check 2 and check 3 both select carbon dioxide, one with `1` and one
/// with `-1`; the negative selector is intentional and must keep resolving
/// to the nonzero branch.
pub const REFERENCE_CHECKS: [ReferenceCheck; 5] = [
    ReferenceCheck {
        number: 1,
        latitude: 1.0, // water, 1 radian from the north pole
        molecule: 0,
        expected: 826.5,
    },
    ReferenceCheck {
        number: 2,
        latitude: 1.0, // carbon dioxide at the same latitude
        molecule: 1,
        expected: 529.0,
    },
    ReferenceCheck {
        number: 3,
        latitude: PI, // carbon dioxide at the south pole
        molecule: -1,
        expected: 280.0,
    },
    ReferenceCheck {
        number: 4,
        latitude: FRAC_PI_2, // water at the equator
        molecule: 0,
        expected: 846.0,
    },
    ReferenceCheck {
        number: 5,
        latitude: 2.0,
        molecule: 0,
        expected: 835.0,
    },
];

/// Outcome of one reference check.
#[derive(Clone, Copy, Debug)]
pub struct CheckResult {
    pub number: usize,
    /// Velocity the model produced, m/s. NaN makes `passed` false.
    pub actual: f64,
    pub passed: bool,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the literal output line the reference model prints
        write!(f, "Unit test {} was {}", self.number, self.passed)
    }
}

impl ReferenceCheck {
    /// Run this check against the model.
    ///
    /// A NaN velocity compares unordered, so `|actual - expected| < tol`
    /// is false and the check fails rather than aborting.
    pub fn run(&self) -> CheckResult {
        let actual = velocity_at(self.latitude, self.molecule);
        CheckResult {
            number: self.number,
            actual,
            passed: (actual - self.expected).abs() < TOLERANCE,
        }
    }
}

/// Run the full checklist in order.
pub fn run_reference_checks() -> Vec<CheckResult> {
    REFERENCE_CHECKS.iter().map(ReferenceCheck::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_reference_checks_pass() {
        let results = run_reference_checks();
        assert_eq!(results.len(), 5);
        for result in &results {
            assert!(
                result.passed,
                "check {} produced {:.4}",
                result.number, result.actual
            );
        }
    }

    #[test]
    fn checks_run_in_checklist_order() {
        let numbers: Vec<usize> = run_reference_checks().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn result_line_format() {
        let passing = CheckResult {
            number: 1,
            actual: 826.5,
            passed: true,
        };
        assert_eq!(passing.to_string(), "Unit test 1 was true");

        let failing = CheckResult {
            number: 3,
            actual: f64::NAN,
            passed: false,
        };
        assert_eq!(failing.to_string(), "Unit test 3 was false");
    }

    #[test]
    fn nan_velocity_fails_without_aborting() {
        // past the south pole the cosine goes negative and the model
        // produces NaN; the comparison must come out false
        let check = ReferenceCheck {
            number: 6,
            latitude: 3.0 * FRAC_PI_2,
            molecule: 0,
            expected: 826.5,
        };
        let result = check.run();
        assert!(result.actual.is_nan());
        assert!(!result.passed);
    }
}
