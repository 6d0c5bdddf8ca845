//! Ray-object intersection algorithms.
//!
//! Each primitive kind has a dedicated intersector working in the
//! primitive's object space.

mod sphere;

pub use sphere::intersect_unit_sphere;

use crate::error::Result;
use crate::intersection::Intersections;
use crate::object::{Object, ObjectId};
use crate::ray::Ray;

/// Intersect a world-space ray with an object, tagging hits with `id`.
///
/// This dispatches to the appropriate intersector based on object kind.
pub fn intersect_object(ray: &Ray, id: ObjectId, object: &Object) -> Result<Intersections> {
    match object {
        Object::Sphere(sphere) => sphere.intersect(id, ray),
    }
}
