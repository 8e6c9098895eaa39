use super::LocalHit;
use crate::math::{
    point::Point,
    tuple::{Axis, Tuple},
    uv::Uv,
    vector::Vector,
};
use crate::render::ray::Ray;

pub struct UnitCuboid;

impl UnitCuboid {
    /// Slab method: intersect the per-axis t-intervals of the three
    /// pairs of planes; an empty intersection means a miss.
    pub fn local_intersect(ray: &Ray, t_min: f64, t_max: f64) -> Option<LocalHit> {
        let (xtmin, xtmax) = Self::axis_intersec_times(ray.origin().x(), ray.dir_inv().x());
        let (ytmin, ytmax) = Self::axis_intersec_times(ray.origin().y(), ray.dir_inv().y());
        let (ztmin, ztmax) = Self::axis_intersec_times(ray.origin().z(), ray.dir_inv().z());

        let tmin = xtmin.max(ytmin).max(ztmin);
        let tmax = xtmax.min(ytmax).min(ztmax);

        if tmin > tmax {
            return None;
        }

        let t = [tmin, tmax]
            .into_iter()
            .find(|t| (t_min..t_max).contains(t))?;

        let point = ray.position(t);
        Some(LocalHit {
            t,
            point,
            normal: Self::normal_at(point),
            uv: Self::uv_at(point),
        })
    }

    fn axis_intersec_times(origin: f64, dir_inv: f64) -> (f64, f64) {
        let tmin = (-1. - origin) * dir_inv;
        let tmax = (1. - origin) * dir_inv;

        if tmin < tmax { (tmin, tmax) } else { (tmax, tmin) }
    }

    fn dominant_axis(point: Point) -> Axis {
        let abs_x = point.x().abs();
        let abs_y = point.y().abs();
        let abs_z = point.z().abs();
        let max = abs_x.max(abs_y).max(abs_z);

        if max == abs_x {
            Axis::X
        } else if max == abs_y {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    fn normal_at(point: Point) -> Vector {
        match Self::dominant_axis(point) {
            Axis::X => Vector::new(point.x().signum(), 0., 0.),
            Axis::Y => Vector::new(0., point.y().signum(), 0.),
            Axis::Z => Vector::new(0., 0., point.z().signum()),
        }
    }

    /// Planar coordinates of the hit face, each mapped from [-1, 1]
    /// to [0, 1].
    fn uv_at(point: Point) -> Uv {
        let to_unit = |v: f64| (v + 1.) / 2.;
        match Self::dominant_axis(point) {
            Axis::X => Uv::new(to_unit(point.z()), to_unit(point.y())),
            Axis::Y => Uv::new(to_unit(point.x()), to_unit(point.z())),
            Axis::Z => Uv::new(to_unit(point.x()), to_unit(point.y())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    fn intersect(ray: &Ray) -> Option<LocalHit> {
        UnitCuboid::local_intersect(ray, 1e-5, f64::INFINITY)
    }

    #[test]
    fn ray_hits_each_face() {
        let examples = [
            (Point::new(5., 0.5, 0.), Vector::new(-1., 0., 0.)),
            (Point::new(-5., 0.5, 0.), Vector::new(1., 0., 0.)),
            (Point::new(0.5, 5., 0.), Vector::new(0., -1., 0.)),
            (Point::new(0.5, -5., 0.), Vector::new(0., 1., 0.)),
            (Point::new(0.5, 0., 5.), Vector::new(0., 0., -1.)),
            (Point::new(0.5, 0., -5.), Vector::new(0., 0., 1.)),
        ];

        for (origin, direction) in examples {
            let hit = intersect(&Ray::new(origin, direction)).unwrap();
            assert_approx_eq!(hit.t, 4.);
        }
    }

    #[test]
    fn ray_from_inside_hits_exit_face() {
        let ray = Ray::new(Point::new(0., 0.5, 0.), Vector::new(0., 0., 1.));
        assert_approx_eq!(intersect(&ray).unwrap().t, 1.);
    }

    #[test]
    fn ray_misses() {
        let rays = [
            Ray::new(Point::new(-2., 0., 0.), Vector::new(0.2673, 0.5345, 0.8018)),
            Ray::new(Point::new(0., -2., 0.), Vector::new(0.8018, 0.2673, 0.5345)),
            Ray::new(Point::new(0., 0., -2.), Vector::new(0.5345, 0.8018, 0.2673)),
            Ray::new(Point::new(2., 0., 2.), Vector::new(0., 0., -1.)),
            Ray::new(Point::new(0., 2., 2.), Vector::new(0., -1., 0.)),
            Ray::new(Point::new(2., 2., 0.), Vector::new(-1., 0., 0.)),
        ];

        for ray in &rays {
            assert!(intersect(ray).is_none());
        }
    }

    #[test]
    fn outward_normals() {
        let examples = [
            (Point::new(1., 0.5, -0.8), Vector::new(1., 0., 0.)),
            (Point::new(-1., -0.2, 0.9), Vector::new(-1., 0., 0.)),
            (Point::new(-0.4, 1., -0.1), Vector::new(0., 1., 0.)),
            (Point::new(0.3, -1., -0.7), Vector::new(0., -1., 0.)),
            (Point::new(-0.6, 0.3, 1.), Vector::new(0., 0., 1.)),
            (Point::new(0.4, 0.4, -1.), Vector::new(0., 0., -1.)),
        ];

        for (point, expected) in examples {
            assert_approx_eq!(UnitCuboid::normal_at(point), expected);
        }
    }

    #[test]
    fn face_uv_spans_unit_square() {
        assert_approx_eq!(UnitCuboid::uv_at(Point::new(0., 0., -1.)), Uv::new(0.5, 0.5));
        assert_approx_eq!(UnitCuboid::uv_at(Point::new(1., -1., -1.)), Uv::new(0., 0.));
        assert_approx_eq!(UnitCuboid::uv_at(Point::new(1., 1., 1.)), Uv::new(1., 1.));
    }
}
