use super::LocalHit;
use crate::math::approx_eq::ApproxEq;
use crate::math::{point::Point, uv::Uv, vector::Vector};
use crate::render::ray::Ray;

/// Triangle with precomputed edges and flat normal. Optional per-vertex
/// normals enable smooth shading, per-vertex uvs drive texturing.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
    e1: Vector,
    e2: Vector,
    normal: Vector,
    normals: Option<[Vector; 3]>,
    uvs: [Uv; 3],
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = e2.cross(e1).normalize();

        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal,
            normals: None,
            uvs: [Uv::new(0., 0.), Uv::new(1., 0.), Uv::new(0., 1.)],
        }
    }

    pub fn smooth(p1: Point, p2: Point, p3: Point, n1: Vector, n2: Vector, n3: Vector) -> Self {
        Self {
            normals: Some([n1, n2, n3]),
            ..Self::new(p1, p2, p3)
        }
    }

    pub fn with_uvs(mut self, uv1: Uv, uv2: Uv, uv3: Uv) -> Self {
        self.uvs = [uv1, uv2, uv3];
        self
    }

    pub fn p1(&self) -> Point {
        self.p1
    }
    pub fn p2(&self) -> Point {
        self.p2
    }
    pub fn p3(&self) -> Point {
        self.p3
    }
    pub fn e1(&self) -> Vector {
        self.e1
    }
    pub fn e2(&self) -> Vector {
        self.e2
    }
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Moller-Trumbore intersection. Barycentric weights of the hit
    /// feed uv and smooth-normal interpolation.
    pub fn local_intersect(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<LocalHit> {
        let dir_cross_e2 = ray.direction().cross(self.e2);
        let det = self.e1.dot(dir_cross_e2);
        if det.approx_eq(&0.) {
            return None;
        }

        let f = 1. / det;
        let p1_to_origin = *ray.origin() - self.p1;
        let u = f * p1_to_origin.dot(dir_cross_e2);
        if !(0. ..=1.).contains(&u) {
            return None;
        }

        let origin_cross_e1 = p1_to_origin.cross(self.e1);
        let v = f * ray.direction().dot(origin_cross_e1);
        if v < 0. || u + v > 1. {
            return None;
        }

        let t = f * self.e2.dot(origin_cross_e1);
        if !(t_min..t_max).contains(&t) {
            return None;
        }

        Some(LocalHit {
            t,
            point: ray.position(t),
            normal: self.normal_at(ray, u, v),
            uv: Uv::barycentric(self.uvs[0], self.uvs[1], self.uvs[2], u, v),
        })
    }

    /// Interpolated vertex normals are reported as-is; the flat normal
    /// is flipped toward the incoming ray so either side shades alike.
    fn normal_at(&self, ray: &Ray, u: f64, v: f64) -> Vector {
        match self.normals {
            Some([n1, n2, n3]) => (n1 * (1. - u - v) + n2 * u + n3 * v).normalize(),
            None => {
                if self.normal.dot(*ray.direction()) > 0. {
                    -self.normal
                } else {
                    self.normal
                }
            }
        }
    }
}
