use super::LocalHit;
use super::triangle::Triangle;
use crate::math::{point::Point, uv::Uv, vector::Vector};
use crate::render::ray::Ray;

/// Triangle soup sharing one transform and shader through the owning
/// surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Builds the triangle list from shared vertex data. Each entry of
    /// `indices` selects three vertices; `normals` and `uvs`, when
    /// given, are indexed the same way.
    pub fn from_indexed(
        positions: &[Point],
        indices: &[[usize; 3]],
        normals: Option<&[Vector]>,
        uvs: Option<&[Uv]>,
    ) -> Self {
        let triangles = indices
            .iter()
            .map(|&[i1, i2, i3]| {
                assert!(
                    i1 < positions.len() && i2 < positions.len() && i3 < positions.len(),
                    "vertex index out of bounds"
                );
                let (p1, p2, p3) = (positions[i1], positions[i2], positions[i3]);

                let mut triangle = match normals {
                    Some(normals) => {
                        Triangle::smooth(p1, p2, p3, normals[i1], normals[i2], normals[i3])
                    }
                    None => Triangle::new(p1, p2, p3),
                };
                if let Some(uvs) = uvs {
                    triangle = triangle.with_uvs(uvs[i1], uvs[i2], uvs[i3]);
                }
                triangle
            })
            .collect();

        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Scans every triangle, narrowing the interval to the nearest hit
    /// found so far.
    pub fn local_intersect(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<LocalHit> {
        let mut nearest: Option<LocalHit> = None;
        let mut t_max = t_max;

        for triangle in &self.triangles {
            if let Some(hit) = triangle.local_intersect(ray, t_min, t_max) {
                t_max = hit.t;
                nearest = Some(hit);
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::tuple::Tuple;

    #[test]
    fn nearest_of_stacked_triangles_wins() {
        let far = Triangle::new(
            Point::new(0., 1., 5.),
            Point::new(-1., 0., 5.),
            Point::new(1., 0., 5.),
        );
        let near = Triangle::new(
            Point::new(0., 1., 2.),
            Point::new(-1., 0., 2.),
            Point::new(1., 0., 2.),
        );
        let mesh = Mesh::new(vec![far, near]);

        let ray = Ray::new(Point::new(0., 0.5, 0.), Vector::new(0., 0., 1.));
        let hit = mesh.local_intersect(&ray, 1e-5, f64::INFINITY).unwrap();
        assert_approx_eq!(hit.t, 2.);
    }

    #[test]
    fn from_indexed_shares_vertices() {
        let positions = [
            Point::new(-1., 0., 0.),
            Point::new(1., 0., 0.),
            Point::new(1., 1., 0.),
            Point::new(-1., 1., 0.),
        ];
        let mesh = Mesh::from_indexed(&positions, &[[0, 1, 2], [0, 2, 3]], None, None);

        assert_eq!(mesh.triangles().len(), 2);

        // both halves of the quad are hittable
        let lower = Ray::new(Point::new(0.5, 0.25, -1.), Vector::new(0., 0., 1.));
        let upper = Ray::new(Point::new(-0.5, 0.75, -1.), Vector::new(0., 0., 1.));
        assert!(mesh.local_intersect(&lower, 1e-5, f64::INFINITY).is_some());
        assert!(mesh.local_intersect(&upper, 1e-5, f64::INFINITY).is_some());
    }

    #[test]
    fn empty_mesh_never_hits() {
        let mesh = Mesh::default();
        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        assert!(mesh.local_intersect(&ray, 1e-5, f64::INFINITY).is_none());
    }
}
