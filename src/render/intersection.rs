use crate::math::{approx_eq::EPSILON, point::Point, uv::Uv, vector::Vector};
use crate::scene::surface::Surface;

/// Result of a successful ray-surface intersection. Borrows the surface
/// it was produced by and lives only for the duration of the shading
/// call chain that requested it.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    t: f64,
    point: Point,
    normal: Vector,
    uv: Uv,
    surface: &'a Surface,
}

impl<'a> HitRecord<'a> {
    pub fn new(t: f64, point: Point, normal: Vector, uv: Uv, surface: &'a Surface) -> Self {
        Self {
            t,
            point,
            normal,
            uv,
            surface,
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// World-space intersection point.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Unit world-space surface normal.
    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn uv(&self) -> Uv {
        self.uv
    }

    pub fn surface(&self) -> &'a Surface {
        self.surface
    }

    /// Hit point nudged along the normal; origin for shadow and
    /// reflection rays so they don't re-hit this surface.
    pub fn over_point(&self) -> Point {
        self.point + self.normal * EPSILON
    }

    /// Hit point nudged against the normal; origin for refracted rays.
    pub fn under_point(&self) -> Point {
        self.point - self.normal * EPSILON
    }
}
