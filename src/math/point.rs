use std::ops;

use super::{tuple::Tuple, vector::Vector};
use crate::math::approx_eq::ApproxEq;

#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Point {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn w(&self) -> f64 {
        1.
    }
}

impl Point {
    pub fn zero() -> Self {
        Self::new(0., 0., 0.)
    }
}

impl ApproxEq for Point {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_epsilon(&other.x, epsilon)
            && self.y.approx_eq_epsilon(&other.y, epsilon)
            && self.z.approx_eq_epsilon(&other.z, epsilon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x + rhs.x(),
            y: self.y + rhs.y(),
            z: self.z + rhs.z(),
        }
    }
}

impl ops::AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x();
        self.y += rhs.y();
        self.z += rhs.z();
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x - rhs.x(),
            y: self.y - rhs.y(),
            z: self.z - rhs.z(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn add_vector() {
        assert_approx_eq!(
            Point::new(-2., 3., 1.) + Vector::new(3., -2., 5.),
            Point::new(1., 1., 6.)
        );
    }

    #[test]
    fn add_assign_vector() {
        let mut p = Point::new(-2., 3., 1.);
        p += Vector::new(3., -2., 5.);
        assert_approx_eq!(p, Point::new(1., 1., 6.));
    }

    #[test]
    fn sub_vector() {
        assert_approx_eq!(
            Point::new(3., 2., 1.) - Vector::new(5., 6., 7.),
            Point::new(-2., -4., -6.)
        );
    }

    #[test]
    fn sub_points_gives_vector() {
        assert_approx_eq!(
            Point::new(3., 2., 1.) - Point::new(5., 6., 7.),
            Vector::new(-2., -4., -6.)
        );
    }
}
