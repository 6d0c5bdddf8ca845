#![warn(missing_docs)]

//! Ray casting for the lumen ray tracer.
//!
//! # Architecture
//!
//! - [`Ray`] - origin and direction, transformable by a [`lumen_math::Matrix`]
//! - [`Sphere`] - unit sphere placed by an object-to-world transform
//! - [`Scene`] - arena owning the objects, handing out [`ObjectId`]s
//! - [`Intersection`] / [`Intersections`] - hit records and the `hit` query
//! - [`intersect`] - per-primitive intersection algorithms
//!
//! # Example
//!
//! ```
//! use lumen_math::{point, vector};
//! use lumen_raytrace::{Ray, Scene, Sphere};
//!
//! let mut scene = Scene::new();
//! let id = scene.add(Sphere::new());
//!
//! let ray = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
//! let xs = scene.intersect(&ray).unwrap();
//! let hit = xs.hit().unwrap();
//! assert_eq!(hit.object, id);
//! assert_eq!(hit.t, 4.0);
//! ```

pub mod error;
pub mod intersect;
mod intersection;
mod object;
mod ray;
mod scene;
mod sphere;

pub use error::{RaytraceError, Result};
pub use intersection::{Intersection, Intersections};
pub use object::{Object, ObjectId};
pub use ray::Ray;
pub use scene::Scene;
pub use sphere::Sphere;
