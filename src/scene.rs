pub mod camera;
pub mod demo;
pub mod light;
pub mod surface;
pub mod texture;

use derive_builder::Builder;

use crate::math::{approx_eq::EPSILON, color::Color};
use crate::render::{intersection::HitRecord, ray::Ray};
use crate::shading;
use light::Light;
use surface::Surface;

/// Recursion cap for reflection and refraction rays.
pub const MAX_RECURSIVE_DEPTH: usize = 5;

/// Lower bound of every primary and secondary ray's t interval; guards
/// against self-intersection at the ray origin.
const T_MIN: f64 = EPSILON;

#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(default)]
pub struct Scene {
    surfaces: Vec<Surface>,
    lights: Vec<Light>,
    /// Color returned for rays that escape the scene.
    background: Color,
    max_recursive_depth: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Color::black())
    }
}

impl Scene {
    pub fn new(surfaces: Vec<Surface>, lights: Vec<Light>, background: Color) -> Self {
        Self {
            surfaces,
            lights,
            background,
            max_recursive_depth: MAX_RECURSIVE_DEPTH,
        }
    }

    pub fn add_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn max_recursive_depth(&self) -> usize {
        self.max_recursive_depth
    }

    pub fn set_max_recursive_depth(&mut self, depth: usize) {
        self.max_recursive_depth = depth;
    }

    /// Nearest hit along the ray, past the self-intersection guard.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.intersect_within(ray, T_MIN, f64::INFINITY)
    }

    /// Nearest hit with t in `(t_min, t_max)`, narrowing the interval
    /// as closer hits are found.
    pub fn intersect_within(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>> {
        let mut nearest: Option<HitRecord> = None;
        let mut t_max = t_max;

        for surface in &self.surfaces {
            if let Some(hit) = surface.intersect(ray, t_min, t_max) {
                t_max = hit.t();
                nearest = Some(hit);
            }
        }
        nearest
    }

    /// Whether anything blocks the ray before `t_max`; used for shadow
    /// rays, where the nearest hit is irrelevant.
    pub fn is_occluded(&self, ray: &Ray, t_max: f64) -> bool {
        self.surfaces
            .iter()
            .any(|surface| surface.intersect(ray, T_MIN, t_max).is_some())
    }

    pub fn color_at(&self, ray: &Ray) -> Color {
        self.color_at_depth(ray, 0)
    }

    pub(crate) fn color_at_depth(&self, ray: &Ray, depth: usize) -> Color {
        self.intersect(ray)
            .map_or(self.background, |hit| shading::shade(self, &hit, ray, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::math::matrix::Matrix;
    use crate::math::{point::Point, tuple::Tuple, vector::Vector};
    use crate::scene::surface::Geometry;
    use crate::shading::Shader;

    fn two_spheres() -> Scene {
        let mut scene = Scene::default();
        scene.add_surface(Surface::with_geometry(Geometry::Sphere));
        scene.add_surface(
            Surface::with_transformation(
                Geometry::Sphere,
                Matrix::translation(0., 0., -3.),
                Shader::default(),
            )
            .unwrap(),
        );
        scene
    }

    #[test]
    fn nearest_surface_wins() {
        let scene = two_spheres();
        let ray = Ray::new(Point::new(0., 0., -10.), Vector::new(0., 0., 1.));

        // the translated sphere's near wall at z = -4
        assert_approx_eq!(scene.intersect(&ray).unwrap().t(), 6.);
    }

    #[test]
    fn miss_returns_no_hit() {
        let scene = two_spheres();
        let ray = Ray::new(Point::new(0., 5., -10.), Vector::new(0., 0., 1.));

        assert!(scene.intersect(&ray).is_none());
        assert_approx_eq!(scene.color_at(&ray), scene.background());
    }

    #[test]
    fn occlusion_respects_distance_cap() {
        let scene = two_spheres();
        let ray = Ray::new(Point::new(0., 0., -10.), Vector::new(0., 0., 1.));

        assert!(scene.is_occluded(&ray, f64::INFINITY));
        // both spheres lie beyond t = 5
        assert!(!scene.is_occluded(&ray, 5.));
    }

    #[test]
    fn builder_defaults() {
        let scene = SceneBuilder::default().build().unwrap();

        assert!(scene.surfaces().is_empty());
        assert!(scene.lights().is_empty());
        assert_approx_eq!(scene.background(), Color::black());
        assert_eq!(scene.max_recursive_depth(), MAX_RECURSIVE_DEPTH);
    }

    #[test]
    fn facing_mirrors_terminate() {
        let mirror = Shader::mirror(Color::new(0.9, 0.9, 0.9));
        let mut scene = Scene::default();
        scene.add_surface(
            Surface::with_transformation(
                Geometry::Cuboid,
                Matrix::translation(0., 0., 4.) * Matrix::scaling(3., 3., 1.),
                mirror.clone(),
            )
            .unwrap(),
        );
        scene.add_surface(
            Surface::with_transformation(
                Geometry::Cuboid,
                Matrix::translation(0., 0., -4.) * Matrix::scaling(3., 3., 1.),
                mirror,
            )
            .unwrap(),
        );

        let ray = Ray::new(Point::zero(), Vector::new(0., 0., 1.));
        assert!(scene.color_at(&ray).is_finite());
    }
}
