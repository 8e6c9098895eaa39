use std::f64::consts::{PI, TAU};

use super::LocalHit;
use crate::math::{point::Point, tuple::Tuple, uv::Uv};
use crate::render::ray::Ray;

pub struct UnitSphere;

impl UnitSphere {
    /// Solves `|o + t * d|^2 = 1` and keeps the smallest root inside
    /// `(t_min, t_max)`.
    pub fn local_intersect(ray: &Ray, t_min: f64, t_max: f64) -> Option<LocalHit> {
        let sphere_to_ray = *ray.origin() - Point::zero();

        let a = ray.direction().dot(*ray.direction());
        let b = 2. * ray.direction().dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let delta_sqrt = discriminant.sqrt();
        let t = [(-b - delta_sqrt) / (2. * a), (-b + delta_sqrt) / (2. * a)]
            .into_iter()
            .find(|t| (t_min..t_max).contains(t))?;

        let point = ray.position(t);
        let normal = (point - Point::zero()).normalize();

        Some(LocalHit {
            t,
            point,
            normal,
            uv: Self::uv_at(point),
        })
    }

    /// u is the longitude over the full turn, v the latitude mapped to
    /// [0, 1] with v = 1 at the +y pole.
    fn uv_at(point: Point) -> Uv {
        let longitude = point.z().atan2(point.x());
        let latitude = point.y().clamp(-1., 1.).acos();

        let mut u = longitude / TAU;
        if u < 0. {
            u += 1.;
        }
        Uv::new(u, 1. - latitude / PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::vector::Vector;

    fn intersect(ray: &Ray) -> Option<LocalHit> {
        UnitSphere::local_intersect(ray, 1e-5, f64::INFINITY)
    }

    #[test]
    fn head_on_hit_from_outside() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        let hit = intersect(&ray).unwrap();

        assert_approx_eq!(hit.t, 4.);
        assert_approx_eq!(hit.point, Point::new(0., 0., -1.));
        assert_approx_eq!(hit.normal, Vector::new(0., 0., -1.));
    }

    #[test]
    fn tangent_hit() {
        let ray = Ray::new(Point::new(0., 1., -5.), Vector::new(0., 0., 1.));
        assert_approx_eq!(intersect(&ray).unwrap().t, 5.);
    }

    #[test]
    fn miss() {
        let ray = Ray::new(Point::new(0., 2., -5.), Vector::new(0., 0., 1.));
        assert!(intersect(&ray).is_none());
    }

    #[test]
    fn ray_origin_inside_hits_far_wall() {
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        assert_approx_eq!(intersect(&ray).unwrap().t, 1.);
    }

    #[test]
    fn sphere_behind_ray_misses() {
        let ray = Ray::new(Point::new(0., 0., 5.), Vector::new(0., 0., 1.));
        assert!(intersect(&ray).is_none());
    }

    #[test]
    fn zero_direction_is_degenerate() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::zero());
        assert!(intersect(&ray).is_none());
    }

    #[test]
    fn uv_at_equator_and_poles() {
        assert_approx_eq!(UnitSphere::uv_at(Point::new(1., 0., 0.)), Uv::new(0., 0.5));
        assert_approx_eq!(
            UnitSphere::uv_at(Point::new(-1., 0., 0.)),
            Uv::new(0.5, 0.5)
        );
        assert_approx_eq!(
            UnitSphere::uv_at(Point::new(0., 0., 1.)),
            Uv::new(0.25, 0.5)
        );
        assert_approx_eq!(UnitSphere::uv_at(Point::new(0., 1., 0.)).v(), 1.);
        assert_approx_eq!(UnitSphere::uv_at(Point::new(0., -1., 0.)).v(), 0.);
    }
}
