use std::ops;

use crate::math::approx_eq::ApproxEq;

/// 2-D surface (texture) coordinate. By convention (0, 0) is the
/// lower-left corner of a texture image.
#[derive(Copy, Clone, Debug, Default)]
pub struct Uv {
    u: f64,
    v: f64,
}

impl Uv {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    pub fn zero() -> Self {
        Self::new(0., 0.)
    }

    pub fn u(&self) -> f64 {
        self.u
    }

    pub fn v(&self) -> f64 {
        self.v
    }

    pub fn dot(&self, rhs: Self) -> f64 {
        self.u * rhs.u + self.v * rhs.v
    }

    /// 2-D analog of the cross product; the z component of the 3-D cross
    /// of the two coordinates lifted into the plane.
    pub fn cross(&self, rhs: Self) -> f64 {
        self.u * rhs.v - self.v * rhs.u
    }

    /// Counter-clockwise perpendicular.
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.v, self.u)
    }

    /// Interpolates three per-vertex coordinates by barycentric weights
    /// (1 - beta - gamma, beta, gamma).
    pub fn barycentric(a: Self, b: Self, c: Self, beta: f64, gamma: f64) -> Self {
        a * (1. - beta - gamma) + b * beta + c * gamma
    }
}

impl ApproxEq for Uv {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.u.approx_eq_epsilon(&other.u, epsilon) && self.v.approx_eq_epsilon(&other.v, epsilon)
    }
}

impl PartialEq for Uv {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Uv {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.u + rhs.u, self.v + rhs.v)
    }
}

impl ops::Sub for Uv {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.u - rhs.u, self.v - rhs.v)
    }
}

impl ops::Mul<f64> for Uv {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.u * rhs, self.v * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn perpendicular_is_ccw() {
        assert_approx_eq!(Uv::new(1., 0.).perpendicular(), Uv::new(0., 1.));
        assert_approx_eq!(Uv::new(0., 1.).perpendicular(), Uv::new(-1., 0.));
    }

    #[test]
    fn cross_sign() {
        assert_approx_eq!(Uv::new(1., 0.).cross(Uv::new(0., 1.)), 1.);
        assert_approx_eq!(Uv::new(0., 1.).cross(Uv::new(1., 0.)), -1.);
    }

    #[test]
    fn dot() {
        assert_approx_eq!(Uv::new(1., 2.).dot(Uv::new(3., 4.)), 11.);
    }

    #[test]
    fn barycentric_interpolation() {
        let a = Uv::new(0., 0.);
        let b = Uv::new(1., 0.);
        let c = Uv::new(0., 1.);

        assert_approx_eq!(Uv::barycentric(a, b, c, 0., 0.), a);
        assert_approx_eq!(Uv::barycentric(a, b, c, 1., 0.), b);
        assert_approx_eq!(Uv::barycentric(a, b, c, 0., 1.), c);
        assert_approx_eq!(
            Uv::barycentric(a, b, c, 1. / 3., 1. / 3.),
            Uv::new(1. / 3., 1. / 3.)
        );
    }
}
