use super::matrix::{ComputationalError, Matrix, Matrix3};
use super::point::Point;
use super::vector::Vector;

/// Local-to-world coordinate frame with the inverse cached at
/// construction, so a singular matrix is rejected before any ray is
/// traced against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix,
    inverse: Matrix,
    /// Transpose of the inverse's linear block; maps local surface
    /// normals to world space correctly under non-uniform scale.
    normal_matrix: Matrix3,
}

impl Transform {
    pub fn new(matrix: Matrix) -> Result<Self, ComputationalError> {
        let inverse = matrix.inverse()?;
        let normal_matrix = Matrix3::from(&inverse).transpose();
        Ok(Self {
            matrix,
            inverse,
            normal_matrix,
        })
    }

    pub fn identity() -> Self {
        Self {
            matrix: Matrix::identity(),
            inverse: Matrix::identity(),
            normal_matrix: Matrix3::identity(),
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix {
        &self.inverse
    }

    pub fn point_to_world(&self, point: Point) -> Point {
        &self.matrix * point
    }

    pub fn point_to_local(&self, point: Point) -> Point {
        &self.inverse * point
    }

    pub fn vector_to_world(&self, vector: Vector) -> Vector {
        &self.matrix * vector
    }

    pub fn vector_to_local(&self, vector: Vector) -> Vector {
        &self.inverse * vector
    }

    /// Maps a local surface normal to a unit world-space normal.
    pub fn normal_to_world(&self, normal: Vector) -> Vector {
        (self.normal_matrix * normal).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
