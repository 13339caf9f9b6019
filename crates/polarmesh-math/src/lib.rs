#![warn(missing_docs)]

//! Math types for the polarmesh generator.
//!
//! Thin wrappers around nalgebra providing the handful of geometric
//! primitives the mesh builder needs: points, tolerance
//! constants, polar-to-Cartesian conversion and signed volumes of
//! tetrahedra and hexahedra.

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A point in the XY plane.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in model units.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Point at `radius` and `angle` (radians, measured from +X towards +Y)
/// on the plane at height `z`.
pub fn polar_point(radius: f64, angle: f64, z: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    Point3::new(radius * c, radius * s, z)
}

/// Signed volume of the tetrahedron `(a, b, c, d)`.
///
/// Positive when `d` lies on the side of the triangle `(a, b, c)` that its
/// counter-clockwise normal points to.
pub fn tet_signed_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    (b - a).cross(&(c - a)).dot(&(d - a)) / 6.0
}

/// Scalar triple product of the three edges leaving corner 0 of a
/// hexahedron.
///
/// Corners follow the blockMesh convention: `0-1-2-3` is the bottom face,
/// `4-5-6-7` the top face, and corner `i + 4` sits above corner `i`. The
/// local axes at corner 0 are `0→1`, `0→3` and `0→4`; a right-handed,
/// non-inverted cell gives a positive value.
pub fn hex_corner_jacobian(corners: &[Point3; 8]) -> f64 {
    let e1 = corners[1] - corners[0];
    let e2 = corners[3] - corners[0];
    let e3 = corners[4] - corners[0];
    e1.cross(&e2).dot(&e3)
}

/// Signed volume of a hexahedron with blockMesh corner ordering.
///
/// Splits the cell into six tetrahedra sharing the `0-6` diagonal, so the
/// result is exact for cells with planar faces and a close approximation
/// for mildly warped ones.
pub fn hex_signed_volume(corners: &[Point3; 8]) -> f64 {
    const TETS: [[usize; 3]; 6] = [
        [1, 2, 6],
        [2, 3, 6],
        [3, 7, 6],
        [7, 4, 6],
        [4, 5, 6],
        [5, 1, 6],
    ];
    let c = corners;
    TETS.iter()
        .map(|[b, d, e]| tet_signed_volume(&c[0], &c[*b], &c[*d], &c[*e]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn unit_cube() -> [Point3; 8] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_polar_point_quadrants() {
        let p = polar_point(2.0, 0.0, 1.5);
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 1.5);

        let q = polar_point(2.0, PI / 2.0, 0.0);
        assert!(q.x.abs() < 1e-12);
        assert_relative_eq!(q.y, 2.0);
    }

    #[test]
    fn test_tet_orientation() {
        let a = Point3::origin();
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, 1.0);
        assert_relative_eq!(tet_signed_volume(&a, &b, &c, &d), 1.0 / 6.0);
        assert_relative_eq!(tet_signed_volume(&a, &c, &b, &d), -1.0 / 6.0);
    }

    #[test]
    fn test_unit_cube_volume() {
        let cube = unit_cube();
        assert_relative_eq!(hex_signed_volume(&cube), 1.0, epsilon = 1e-12);
        assert_relative_eq!(hex_corner_jacobian(&cube), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverted_cube_is_negative() {
        // Naive bottom ordering walked the other way round flips the cell.
        let c = unit_cube();
        let flipped = [c[0], c[3], c[2], c[1], c[4], c[7], c[6], c[5]];
        assert!(hex_signed_volume(&flipped) < 0.0);
        assert!(hex_corner_jacobian(&flipped) < 0.0);
    }

    #[test]
    fn test_scaled_box_volume() {
        let c = unit_cube().map(|p| Point3::new(p.x * 2.0, p.y * 3.0, p.z * 0.5));
        assert_relative_eq!(hex_signed_volume(&c), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-12, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
        assert!(tol.angles_equal(PI, PI + 1e-12));
    }
}
