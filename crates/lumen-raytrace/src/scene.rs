//! Object storage for a scene.

use lumen_math::Tuple;
use slotmap::SlotMap;

use crate::error::{RaytraceError, Result};
use crate::intersection::Intersections;
use crate::object::{Object, ObjectId};
use crate::ray::Ray;

/// Owns every object in a scene. Intersections refer back here by [`ObjectId`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: SlotMap<ObjectId, Object>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its handle.
    pub fn add(&mut self, object: impl Into<Object>) -> ObjectId {
        let id = self.objects.insert(object.into());
        log::debug!("added object {id:?} ({} total)", self.objects.len());
        id
    }

    /// Look up an object.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    /// Look up an object for modification.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    /// Remove an object. Its handle, and any intersection holding it, goes stale.
    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        self.objects.remove(id)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over `(handle, object)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects.iter()
    }

    /// Intersect a ray with every object, in the scene's iteration order.
    ///
    /// The result is not sorted; use [`Intersections::hit`] to pick the
    /// visible one.
    pub fn intersect(&self, ray: &Ray) -> Result<Intersections> {
        let mut all = Intersections::empty();
        for (id, object) in &self.objects {
            all.extend(object.intersect(id, ray)?);
        }
        log::trace!("ray {ray} produced {} intersections", all.len());
        Ok(all)
    }

    /// Surface normal of the object named by `id` at a world-space point.
    pub fn normal_at(&self, id: ObjectId, world_point: &Tuple) -> Result<Tuple> {
        self.objects
            .get(id)
            .ok_or(RaytraceError::UnknownObject(id))?
            .normal_at(world_point)
    }
}
