pub mod cuboid;
pub mod mesh;
pub mod sphere;
pub mod triangle;

use cuboid::UnitCuboid;
use mesh::Mesh;
use sphere::UnitSphere;
use triangle::Triangle;

use crate::math::matrix::{ComputationalError, Matrix};
use crate::math::{point::Point, transform::Transform, uv::Uv, vector::Vector};
use crate::render::{intersection::HitRecord, ray::Ray};
use crate::shading::Shader;

/// Canonical geometry in the surface's local frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Unit sphere centered at the local origin
    Sphere,
    /// Axis-aligned box spanning [-1, 1] on every axis
    Cuboid,
    Triangle(Triangle),
    Mesh(Mesh),
}

/// Intersection reported by a canonical geometry, still in local
/// coordinates.
#[derive(Debug, Clone)]
pub struct LocalHit {
    pub t: f64,
    pub point: Point,
    pub normal: Vector,
    pub uv: Uv,
}

impl Geometry {
    /// Nearest hit with `t` in the open interval `(t_min, t_max)`.
    pub fn local_intersect(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<LocalHit> {
        match self {
            Geometry::Sphere => UnitSphere::local_intersect(ray, t_min, t_max),
            Geometry::Cuboid => UnitCuboid::local_intersect(ray, t_min, t_max),
            Geometry::Triangle(triangle) => triangle.local_intersect(ray, t_min, t_max),
            Geometry::Mesh(mesh) => mesh.local_intersect(ray, t_min, t_max),
        }
    }

    pub fn triangle(p1: Point, p2: Point, p3: Point) -> Self {
        Geometry::Triangle(Triangle::new(p1, p2, p3))
    }

    pub fn smooth_triangle(
        p1: Point,
        p2: Point,
        p3: Point,
        n1: Vector,
        n2: Vector,
        n3: Vector,
    ) -> Self {
        Geometry::Triangle(Triangle::smooth(p1, p2, p3, n1, n2, n3))
    }
}

/// A renderable object: canonical geometry placed in the world by a
/// transform and shaded by a shader.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    geometry: Geometry,
    transform: Transform,
    shader: Shader,
}

impl Surface {
    pub fn new(geometry: Geometry, transform: Transform, shader: Shader) -> Self {
        Self {
            geometry,
            transform,
            shader,
        }
    }

    pub fn with_geometry(geometry: Geometry) -> Self {
        Self::new(geometry, Transform::identity(), Shader::default())
    }

    pub fn with_transformation(
        geometry: Geometry,
        matrix: Matrix,
        shader: Shader,
    ) -> Result<Self, ComputationalError> {
        Ok(Self::new(geometry, Transform::new(matrix)?, shader))
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }

    /// Nearest valid hit in `(t_min, t_max)`, reported in world space
    /// with a unit outward normal.
    ///
    /// The ray is taken into the local frame with the un-normalized
    /// transformed direction, so the parameter `t` of a local hit is
    /// also the world-space parameter.
    pub fn intersect(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>> {
        let local_ray = Ray::new(
            self.transform.point_to_local(*ray.origin()),
            self.transform.vector_to_local(*ray.direction()),
        );
        let hit = self.geometry.local_intersect(&local_ray, t_min, t_max)?;

        Some(HitRecord::new(
            hit.t,
            ray.position(hit.t),
            self.transform.normal_to_world(hit.normal),
            hit.uv,
            self,
        ))
    }
}
