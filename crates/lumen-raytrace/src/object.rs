//! Scene objects and their handles.

use lumen_math::{Matrix, Tuple};
use slotmap::new_key_type;

use crate::error::Result;
use crate::intersect::intersect_object;
use crate::intersection::Intersections;
use crate::ray::Ray;
use crate::sphere::Sphere;

new_key_type! {
    /// Handle naming an object inside a [`Scene`](crate::Scene).
    pub struct ObjectId;
}

/// A primitive that rays can hit.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Unit sphere placed by its transform.
    Sphere(Sphere),
}

impl Object {
    /// Object-to-world transform.
    pub fn transform(&self) -> &Matrix {
        match self {
            Object::Sphere(s) => s.transform(),
        }
    }

    /// Intersect a world-space ray, tagging each hit with `id`.
    pub fn intersect(&self, id: ObjectId, ray: &Ray) -> Result<Intersections> {
        intersect_object(ray, id, self)
    }

    /// World-space surface normal at a world-space point.
    pub fn normal_at(&self, world_point: &Tuple) -> Result<Tuple> {
        match self {
            Object::Sphere(s) => s.normal_at(world_point),
        }
    }
}

impl From<Sphere> for Object {
    fn from(s: Sphere) -> Self {
        Object::Sphere(s)
    }
}
