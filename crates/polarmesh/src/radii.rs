//! Radial ring placement.
//!
//! Rings grow geometrically by `1 + Δθ` so the radial thickness of each
//! cell, `r·Δθ`, matches its arc length at the inner edge and cells stay
//! close to square all the way out.

use tracing::debug;

use crate::error::{MeshError, Result};

/// Generate ring radii from `inner_radius` outward.
///
/// Each ring is the previous one multiplied by `1 + delta_theta`. The
/// first value that would exceed `outer_radius` is discarded and ends
/// the sequence, as does reaching `max_steps` growth steps. The result
/// always starts with `inner_radius`; if that already exceeds
/// `outer_radius` it is the only element.
pub fn radius_sequence(
    inner_radius: f64,
    outer_radius: f64,
    delta_theta: f64,
    max_steps: usize,
) -> Result<Vec<f64>> {
    if !(inner_radius.is_finite() && inner_radius > 0.0) {
        return Err(MeshError::invalid("inner radius must be positive"));
    }
    if outer_radius.is_nan() {
        return Err(MeshError::invalid("outer radius must be a number"));
    }
    if !(delta_theta.is_finite() && delta_theta > 0.0) {
        return Err(MeshError::invalid("angular step must be positive"));
    }

    let growth = 1.0 + delta_theta;
    let mut radii = vec![inner_radius];
    let mut r = inner_radius;
    for _ in 0..max_steps {
        let next = r * growth;
        if next > outer_radius {
            return Ok(radii);
        }
        radii.push(next);
        r = next;
    }

    debug!(
        max_steps,
        last_radius = r,
        outer_radius,
        "radial step bound reached before outer radius"
    );
    Ok(radii)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_quarter_wedge_sequence() {
        let dt = PI / 60.0;
        let radii = radius_sequence(0.5, 18.0, dt, 1000).unwrap();

        assert_eq!(radii[0], 0.5);
        // ln(36) / ln(1 + π/60) ≈ 70.2
        assert_eq!(radii.len() - 1, 70);
        assert!(*radii.last().unwrap() <= 18.0);
        assert!(radii.last().unwrap() * (1.0 + dt) > 18.0);

        for pair in radii.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] / pair[0], 1.0 + dt, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_step_bound_stops_growth() {
        let radii = radius_sequence(1.0, 1e9, 0.1, 5).unwrap();
        assert_eq!(radii.len(), 6);
        assert_relative_eq!(radii[5], 1.1f64.powi(5), epsilon = 1e-12);
    }

    #[test]
    fn test_inner_beyond_outer_is_single_ring() {
        let radii = radius_sequence(20.0, 18.0, 0.05, 100).unwrap();
        assert_eq!(radii, vec![20.0]);
    }

    #[test]
    fn test_first_step_overshoots() {
        let radii = radius_sequence(1.0, 1.01, 0.5, 100).unwrap();
        assert_eq!(radii, vec![1.0]);
    }

    #[test]
    fn test_non_positive_step_rejected() {
        assert!(matches!(
            radius_sequence(1.0, 2.0, 0.0, 10),
            Err(MeshError::InvalidConfiguration(_))
        ));
        assert!(radius_sequence(1.0, 2.0, -0.1, 10).is_err());
        assert!(radius_sequence(1.0, 2.0, f64::NAN, 10).is_err());
        assert!(radius_sequence(0.0, 2.0, 0.1, 10).is_err());
        assert!(matches!(
            radius_sequence(1.0, f64::NAN, 0.1, 5),
            Err(MeshError::InvalidConfiguration(_))
        ));
    }
}
