//! The unit sphere primitive.

use lumen_math::{MathError, Matrix, Tuple};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::intersect::intersect_unit_sphere;
use crate::intersection::{Intersection, Intersections};
use crate::object::ObjectId;
use crate::ray::Ray;

/// A unit sphere centered at the object-space origin.
///
/// Placement, orientation and scale in the world come entirely from
/// `transform`, which maps object space to world space. Its inverse is
/// computed once when the transform is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SphereRepr", into = "SphereRepr")]
pub struct Sphere {
    transform: Matrix,
    inverse: std::result::Result<Matrix, MathError>,
}

#[derive(Serialize, Deserialize)]
struct SphereRepr {
    transform: Matrix,
}

impl From<SphereRepr> for Sphere {
    fn from(repr: SphereRepr) -> Self {
        Sphere::new().with_transform(repr.transform)
    }
}

impl From<Sphere> for SphereRepr {
    fn from(sphere: Sphere) -> Self {
        SphereRepr {
            transform: sphere.transform,
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Sphere {
    /// A sphere with the identity transform.
    pub fn new() -> Self {
        Self {
            transform: Matrix::identity(4),
            inverse: Ok(Matrix::identity(4)),
        }
    }

    /// Builder-style variant of [`Sphere::set_transform`].
    pub fn with_transform(mut self, transform: Matrix) -> Self {
        self.set_transform(transform);
        self
    }

    /// Object-to-world transform.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Replace the object-to-world transform.
    ///
    /// The inverse is computed here, once. A singular transform is still
    /// accepted, but casting a ray or asking for a normal then fails with
    /// the inversion error; [`Sphere::is_placeable`] checks ahead.
    pub fn set_transform(&mut self, transform: Matrix) {
        self.inverse = transform.inverse();
        if let Err(e) = &self.inverse {
            log::debug!("sphere transform has no inverse: {e}");
        }
        self.transform = transform;
    }

    /// True when the transform can be inverted.
    pub fn is_placeable(&self) -> bool {
        self.inverse.is_ok()
    }

    /// World-to-object transform.
    pub fn inverse_transform(&self) -> Result<&Matrix> {
        self.inverse.as_ref().map_err(|e| e.clone().into())
    }

    /// Intersect a world-space ray, tagging both roots with `id`.
    ///
    /// The ray is moved into object space with the inverse transform; a
    /// singular transform is an error. A miss yields an empty collection.
    /// When the ray hits, both roots are returned with `t1 <= t2`, including
    /// roots behind the origin.
    pub fn intersect(&self, id: ObjectId, ray: &Ray) -> Result<Intersections> {
        let local = ray.transform(self.inverse_transform()?)?;
        Ok(match intersect_unit_sphere(&local) {
            Some((t1, t2)) => Intersections::new(vec![
                Intersection::new(t1, id),
                Intersection::new(t2, id),
            ]),
            None => Intersections::empty(),
        })
    }

    /// Unit surface normal at a world-space point.
    ///
    /// The object-space normal is carried back with the inverse transpose so
    /// it stays perpendicular under non-uniform scaling.
    pub fn normal_at(&self, world_point: &Tuple) -> Result<Tuple> {
        let inverse = self.inverse_transform()?;
        let object_point = inverse.multiply_tuple(world_point)?;
        let object_normal = object_point - Tuple::origin();
        let mut world_normal = inverse.transpose().multiply_tuple(&object_normal)?;
        // the transpose drags translation into w
        world_normal.w = 0.0;
        Ok(world_normal.normalize()?)
    }
}
