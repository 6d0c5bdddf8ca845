//! Hit records and ordered collections of them.

use std::ops::Index;

use lumen_math::approx_eq;

use crate::object::ObjectId;

/// A single ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Ray parameter at the hit.
    pub t: f64,
    /// The object that was hit. The scene owns it; this is only a handle.
    pub object: ObjectId,
}

impl Intersection {
    /// Create an intersection record.
    pub fn new(t: f64, object: ObjectId) -> Self {
        Self { t, object }
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object && approx_eq(self.t, other.t)
    }
}

/// Intersections in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intersections {
    items: Vec<Intersection>,
}

impl Intersections {
    /// Wrap a list of intersections, keeping its order.
    pub fn new(items: Vec<Intersection>) -> Self {
        Self { items }
    }

    /// No intersections, e.g. a ray that missed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append one intersection.
    pub fn push(&mut self, i: Intersection) {
        self.items.push(i);
    }

    /// Number of intersections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are none.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in production order.
    pub fn iter(&self) -> std::slice::Iter<'_, Intersection> {
        self.items.iter()
    }

    /// The nearest intersection with `t >= 0`.
    ///
    /// Negative `t` lies behind the ray origin and is never selected. `None`
    /// means nothing is in front of the ray, which is not an error.
    pub fn hit(&self) -> Option<&Intersection> {
        self.items
            .iter()
            .filter(|i| i.t >= 0.0)
            .fold(None, |best: Option<&Intersection>, i| match best {
                Some(b) if b.t <= i.t => Some(b),
                _ => Some(i),
            })
    }

    /// A copy ordered by ascending `t`.
    pub fn sorted(&self) -> Intersections {
        let mut items = self.items.clone();
        items.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { items }
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &[Intersection] {
        &self.items
    }
}

impl Index<usize> for Intersections {
    type Output = Intersection;

    fn index(&self, index: usize) -> &Intersection {
        &self.items[index]
    }
}

impl Extend<Intersection> for Intersections {
    fn extend<I: IntoIterator<Item = Intersection>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<Intersection> for Intersections {
    fn from_iter<I: IntoIterator<Item = Intersection>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Intersections {
    type Item = Intersection;
    type IntoIter = std::vec::IntoIter<Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Intersections {
    type Item = &'a Intersection;
    type IntoIter = std::slice::Iter<'a, Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
