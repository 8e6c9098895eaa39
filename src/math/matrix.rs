use std::{error::Error, fmt::Display, ops};

use super::{point::Point, tuple::Tuple, vector::Vector};
use crate::math::approx_eq::ApproxEq;

/// Numerical failure that indicates a misconfigured scene rather than a
/// per-ray degeneracy; surfaced at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationalError {
    SingularMatrix,
}

impl Display for ComputationalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputationalError::SingularMatrix => {
                write!(f, "matrix with zero determinant cannot be inverted")
            }
        }
    }
}

impl Error for ComputationalError {}

/// Row-major 3x3 matrix; the linear part of an affine transform.
#[derive(Debug, Clone, Copy)]
pub struct Matrix3 {
    data: [f64; 9],
}

impl Matrix3 {
    pub fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            1., 0., 0.,
            0., 1., 0.,
            0., 0., 1.,
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut res = *self;

        res.data.swap(1, 3);
        res.data.swap(2, 6);
        res.data.swap(5, 7);

        res
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let mut minor = [0.; 4];
        let mut id = 0;
        for r in 0..3 {
            for c in 0..3 {
                if r != row && c != col {
                    minor[id] = self[(r, c)];
                    id += 1;
                }
            }
        }
        let sign = if (row + col) % 2 == 0 { 1. } else { -1. };
        sign * (minor[0] * minor[3] - minor[1] * minor[2])
    }

    /// Inverts by the adjugate over the determinant.
    pub fn inverse(&self) -> Result<Matrix3, ComputationalError> {
        let det = self.determinant();
        if det.approx_eq(&0.) {
            return Err(ComputationalError::SingularMatrix);
        }

        let mut res = Matrix3::identity();
        for row in 0..3 {
            for col in 0..3 {
                // adjugate is the transposed cofactor matrix
                res[(col, row)] = self.cofactor(row, col) / det;
            }
        }
        Ok(res)
    }
}

impl From<&Matrix> for Matrix3 {
    /// Extracts the linear (upper-left) block of an affine matrix.
    fn from(m: &Matrix) -> Self {
        Self::new([
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
            m[(2, 0)],
            m[(2, 1)],
            m[(2, 2)],
        ])
    }
}

impl ApproxEq for Matrix3 {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq_epsilon(b, epsilon))
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 3);
        debug_assert!(col < 3);
        &self.data[row * 3 + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < 3);
        debug_assert!(col < 3);
        &mut self.data[row * 3 + col]
    }
}

impl ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut res = Matrix3::new([0.; 9]);
        for row in 0..3 {
            for col in 0..3 {
                res[(row, col)] = (0..3).map(|i| self[(row, i)] * rhs[(i, col)]).sum();
            }
        }
        res
    }
}

impl ops::Mul<Vector> for Matrix3 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        Vector::new(
            self[(0, 0)] * rhs.x() + self[(0, 1)] * rhs.y() + self[(0, 2)] * rhs.z(),
            self[(1, 0)] * rhs.x() + self[(1, 1)] * rhs.y() + self[(1, 2)] * rhs.z(),
            self[(2, 0)] * rhs.x() + self[(2, 1)] * rhs.y() + self[(2, 2)] * rhs.z(),
        )
    }
}

/// Row-major 4x4 matrix for homogeneous transforms.
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    data: [f64; 16],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub fn new(data: [f64; 16]) -> Self {
        Self { data }
    }
    pub fn empty() -> Self {
        Self::new([0.; 16])
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut res = *self;

        res.data.swap(1, 4);
        res.data.swap(2, 8);

        res.data.swap(3, 12);
        res.data.swap(6, 9);

        res.data.swap(7, 13);
        res.data.swap(11, 14);

        res
    }

    /// Multiplies by the transpose without materializing it.
    pub fn mul_transposed<T: Tuple>(&self, rhs: T) -> T {
        T::new(
            self[(0, 0)] * rhs.x()
                + self[(1, 0)] * rhs.y()
                + self[(2, 0)] * rhs.z()
                + self[(3, 0)] * rhs.w(),
            self[(0, 1)] * rhs.x()
                + self[(1, 1)] * rhs.y()
                + self[(2, 1)] * rhs.z()
                + self[(3, 1)] * rhs.w(),
            self[(0, 2)] * rhs.x()
                + self[(1, 2)] * rhs.y()
                + self[(2, 2)] * rhs.z()
                + self[(3, 2)] * rhs.w(),
        )
    }

    /// 3x3 minor obtained by deleting `row` and `col`.
    fn submatrix(&self, row: usize, col: usize) -> Matrix3 {
        let mut data = [0.; 9];
        let mut id = 0;
        for r in 0..4 {
            for c in 0..4 {
                if r != row && c != col {
                    data[id] = self[(r, c)];
                    id += 1;
                }
            }
        }
        Matrix3::new(data)
    }

    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let sign = if (row + col) % 2 == 0 { 1. } else { -1. };
        sign * self.submatrix(row, col).determinant()
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        (0..4).map(|col| self[(0, col)] * self.cofactor(0, col)).sum()
    }

    /// Inverts by the adjugate over the determinant. Fails when the
    /// determinant is zero; the caller decides whether a singular
    /// transform is fatal.
    pub fn inverse(&self) -> Result<Matrix, ComputationalError> {
        let det = self.determinant();
        if det.approx_eq(&0.) {
            return Err(ComputationalError::SingularMatrix);
        }

        let mut res = Matrix::empty();
        for row in 0..4 {
            for col in 0..4 {
                res[(col, row)] = self.cofactor(row, col) / det;
            }
        }
        Ok(res)
    }

    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            1., 0., 0., x,
            0., 1., 0., y,
            0., 0., 1., z,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        Matrix::new([
            x, 0., 0., 0.,
            0., y, 0., 0.,
            0., 0., z, 0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn scaling_uniform(f: f64) -> Matrix {
        Self::scaling(f, f, f)
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            1., 0., 0., 0.,
            0., cos_r, -sin_r, 0.,
            0., sin_r, cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, 0., sin_r, 0.,
            0., 1., 0., 0.,
            -sin_r, 0., cos_r, 0.,
            0., 0., 0., 1.,
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Matrix {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix::new([
            cos_r, -sin_r, 0., 0.,
            sin_r, cos_r, 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    /// World-to-camera matrix for a camera at `from` looking at `to`.
    pub fn view_transformation(from: Point, to: Point, up_v: Vector) -> Matrix {
        let up_v = up_v.normalize();

        let forward_v = (to - from).normalize();
        let left_v = forward_v.cross(up_v);
        let true_up_v = left_v.cross(forward_v);

        #[rustfmt::skip]
        let orientation = Matrix::new([
            left_v.x(), left_v.y(), left_v.z(), 0.,
            true_up_v.x(), true_up_v.y(), true_up_v.z(), 0.,
            -forward_v.x(), -forward_v.y(), -forward_v.z(), 0.,
            0., 0., 0., 1.,
        ]);

        orientation * Matrix::translation(-from.x(), -from.y(), -from.z())
    }
}

impl From<Matrix3> for Matrix {
    /// Embeds the 3x3 linear block into the upper-left of an affine 4x4.
    fn from(m: Matrix3) -> Self {
        let mut res = Matrix::identity();
        for row in 0..3 {
            for col in 0..3 {
                res[(row, col)] = m[(row, col)];
            }
        }
        res
    }
}

impl ApproxEq for Matrix {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq_epsilon(b, epsilon))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < 4);
        debug_assert!(col < 4);
        &self.data[row * 4 + col]
    }
}

impl ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < 4);
        debug_assert!(col < 4);
        &mut self.data[row * 4 + col]
    }
}

impl ops::Mul<Matrix> for Matrix {
    type Output = Self;
    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Self::Output {
        let mut output = Self::Output::empty();
        for row in 0..4 {
            for col in 0..4 {
                output[(row, col)] = (0..4).map(|i| self[(row, i)] * rhs[(i, col)]).sum();
            }
        }
        output
    }
}

impl<T: Tuple> ops::Mul<T> for &Matrix {
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        let x = self[(0, 0)] * rhs.x()
            + self[(0, 1)] * rhs.y()
            + self[(0, 2)] * rhs.z()
            + self[(0, 3)] * rhs.w();
        let y = self[(1, 0)] * rhs.x()
            + self[(1, 1)] * rhs.y()
            + self[(1, 2)] * rhs.z()
            + self[(1, 3)] * rhs.w();
        let z = self[(2, 0)] * rhs.x()
            + self[(2, 1)] * rhs.y()
            + self[(2, 2)] * rhs.z()
            + self[(2, 3)] * rhs.w();
        let w = self[(3, 0)] * rhs.x()
            + self[(3, 1)] * rhs.y()
            + self[(3, 2)] * rhs.z()
            + self[(3, 3)] * rhs.w();

        // homogeneous divide for points under projective transforms;
        // vectors (w = 0) are never divided
        if rhs.w() == 1. && w != 0. && w != 1. {
            T::new(x / w, y / w, z / w)
        } else {
            T::new(x, y, z)
        }
    }
}

impl<T: Tuple> ops::Mul<T> for Matrix {
    type Output = T;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
