//! Affine transform constructors.
//!
//! Each constructor starts from the 4x4 identity and overwrites the entries
//! for its transform. Rotations are right-handed and take radians.

use crate::matrix::Matrix;

impl Matrix {
    /// Translation by `(x, y, z)`. Vectors (`w == 0`) are unaffected.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Matrix::identity(4);
        m[(0, 3)] = x;
        m[(1, 3)] = y;
        m[(2, 3)] = z;
        m
    }

    /// Non-uniform scale by `(x, y, z)`.
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut m = Matrix::identity(4);
        m[(0, 0)] = x;
        m[(1, 1)] = y;
        m[(2, 2)] = z;
        m
    }

    /// Rotation about the X axis.
    pub fn rotation_x(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Matrix::identity(4);
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        m
    }

    /// Rotation about the Y axis.
    pub fn rotation_y(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Matrix::identity(4);
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        m
    }

    /// Rotation about the Z axis.
    pub fn rotation_z(radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Matrix::identity(4);
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        m
    }

    /// Shear where each coefficient moves one axis in proportion to another:
    /// `xy` moves x in proportion to y, `zx` moves z in proportion to x, etc.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        let mut m = Matrix::identity(4);
        m[(0, 1)] = xy;
        m[(0, 2)] = xz;
        m[(1, 0)] = yx;
        m[(1, 2)] = yz;
        m[(2, 0)] = zx;
        m[(2, 1)] = zy;
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::{point, vector};
    use std::f64::consts::PI;

    #[test]
    fn test_translation() {
        let t = Matrix::translation(5.0, -3.0, 2.0);
        assert_eq!(t.multiply_tuple(&point(-3.0, 4.0, 5.0)).unwrap(), point(2.0, 1.0, 7.0));

        let inv = t.inverse().unwrap();
        assert_eq!(inv.multiply_tuple(&point(-3.0, 4.0, 5.0)).unwrap(), point(-8.0, 7.0, 3.0));
    }

    #[test]
    fn test_translation_ignores_vectors() {
        let t = Matrix::translation(5.0, -3.0, 2.0);
        let v = vector(-3.0, 4.0, 5.0);
        assert_eq!(t.multiply_tuple(&v).unwrap(), v);
    }

    #[test]
    fn test_scaling() {
        let s = Matrix::scaling(2.0, 3.0, 4.0);
        assert_eq!(s.multiply_tuple(&point(-4.0, 6.0, 8.0)).unwrap(), point(-8.0, 18.0, 32.0));
        assert_eq!(s.multiply_tuple(&vector(-4.0, 6.0, 8.0)).unwrap(), vector(-8.0, 18.0, 32.0));
        let inv = s.inverse().unwrap();
        assert_eq!(inv.multiply_tuple(&vector(-4.0, 6.0, 8.0)).unwrap(), vector(-2.0, 2.0, 2.0));
    }

    #[test]
    fn test_reflection_is_negative_scaling() {
        let s = Matrix::scaling(-1.0, 1.0, 1.0);
        assert_eq!(s.multiply_tuple(&point(2.0, 3.0, 4.0)).unwrap(), point(-2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rotation_x() {
        let p = point(0.0, 1.0, 0.0);
        let half_quarter = Matrix::rotation_x(PI / 4.0);
        let full_quarter = Matrix::rotation_x(PI / 2.0);
        let h = 2f64.sqrt() / 2.0;
        assert_eq!(half_quarter.multiply_tuple(&p).unwrap(), point(0.0, h, h));
        assert_eq!(full_quarter.multiply_tuple(&p).unwrap(), point(0.0, 0.0, 1.0));

        let inv = half_quarter.inverse().unwrap();
        assert_eq!(inv.multiply_tuple(&p).unwrap(), point(0.0, h, -h));
    }

    #[test]
    fn test_rotation_y() {
        let p = point(0.0, 0.0, 1.0);
        let h = 2f64.sqrt() / 2.0;
        assert_eq!(Matrix::rotation_y(PI / 4.0).multiply_tuple(&p).unwrap(), point(h, 0.0, h));
        assert_eq!(Matrix::rotation_y(PI / 2.0).multiply_tuple(&p).unwrap(), point(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotation_z() {
        let p = point(0.0, 1.0, 0.0);
        let h = 2f64.sqrt() / 2.0;
        assert_eq!(Matrix::rotation_z(PI / 4.0).multiply_tuple(&p).unwrap(), point(-h, h, 0.0));
        assert_eq!(Matrix::rotation_z(PI / 2.0).multiply_tuple(&p).unwrap(), point(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_shearing_each_axis_pair() {
        let p = point(2.0, 3.0, 4.0);
        let cases = [
            ([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], point(5.0, 3.0, 4.0)),
            ([0.0, 1.0, 0.0, 0.0, 0.0, 0.0], point(6.0, 3.0, 4.0)),
            ([0.0, 0.0, 1.0, 0.0, 0.0, 0.0], point(2.0, 5.0, 4.0)),
            ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], point(2.0, 7.0, 4.0)),
            ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], point(2.0, 3.0, 6.0)),
            ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], point(2.0, 3.0, 7.0)),
        ];
        for ([xy, xz, yx, yz, zx, zy], expected) in cases {
            let s = Matrix::shearing(xy, xz, yx, yz, zx, zy);
            assert_eq!(s.multiply_tuple(&p).unwrap(), expected);
        }
    }

    #[test]
    fn test_sequenced_and_chained_transforms() {
        let p = point(1.0, 0.0, 1.0);
        let a = Matrix::rotation_x(PI / 2.0);
        let b = Matrix::scaling(5.0, 5.0, 5.0);
        let c = Matrix::translation(10.0, 5.0, 7.0);

        let p2 = a.multiply_tuple(&p).unwrap();
        assert_eq!(p2, point(1.0, -1.0, 0.0));
        let p3 = b.multiply_tuple(&p2).unwrap();
        assert_eq!(p3, point(5.0, -5.0, 0.0));
        let p4 = c.multiply_tuple(&p3).unwrap();
        assert_eq!(p4, point(15.0, 0.0, 7.0));

        // Chained transforms compose in reverse order.
        let t = c.multiply(&b).unwrap().multiply(&a).unwrap();
        assert_eq!(t.multiply_tuple(&p).unwrap(), point(15.0, 0.0, 7.0));
    }
}
