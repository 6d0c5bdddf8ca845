//! Ray-sphere intersection (quadratic equation).

use lumen_math::Tuple;

use crate::Ray;

/// Intersect an object-space ray with the unit sphere at the origin.
///
/// Returns both roots `(t1, t2)` with `t1 <= t2`, or `None` when the
/// discriminant is negative. Roots behind the origin are kept; choosing
/// among them is the caller's job.
pub fn intersect_unit_sphere(ray: &Ray) -> Option<(f64, f64)> {
    let sphere_to_ray = ray.origin - Tuple::origin();
    let d = &ray.direction;

    // Quadratic: |o + t*d|^2 = 1
    let a = d.dot(d);
    let b = 2.0 * d.dot(&sphere_to_ray);
    let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    Some((t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::{point, vector};

    #[test]
    fn test_ray_sphere_through_center() {
        let ray = Ray::new(point(-10.0, 0.0, 0.0), vector(1.0, 0.0, 0.0));
        let (t1, t2) = intersect_unit_sphere(&ray).unwrap();
        assert!((t1 - 9.0).abs() < 1e-10);
        assert!((t2 - 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let ray = Ray::new(point(-10.0, 1.5, 0.0), vector(1.0, 0.0, 0.0));
        assert!(intersect_unit_sphere(&ray).is_none());
    }

    #[test]
    fn test_roots_are_ordered_for_reversed_direction() {
        let ray = Ray::new(point(0.0, 0.0, 5.0), vector(0.0, 0.0, -1.0));
        let (t1, t2) = intersect_unit_sphere(&ray).unwrap();
        assert!(t1 <= t2);
        assert!((t1 - 4.0).abs() < 1e-10);
        assert!((t2 - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 2.0));
        let (t1, t2) = intersect_unit_sphere(&ray).unwrap();
        assert!((t1 - 2.0).abs() < 1e-10);
        assert!((t2 - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_origin_ignores_w() {
        // a point's w must not leak into the quadratic
        let ray = Ray::new(point(0.0, 0.0, -2.0), vector(0.0, 0.0, 1.0));
        let (t1, _) = intersect_unit_sphere(&ray).unwrap();
        assert!((t1 - 1.0).abs() < 1e-10);
    }
}
