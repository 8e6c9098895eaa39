pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod uv;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
    pub mod renderer;
}

pub mod scene;
pub mod shading;

pub use math::color::Color;
pub use math::matrix::{ComputationalError, Matrix, Matrix3};
pub use math::point::Point;
pub use math::transform::Transform;
pub use math::uv::Uv;
pub use math::vector::Vector;
pub use render::canvas::{Canvas, ImageFormat};
pub use render::intersection::HitRecord;
pub use render::ray::Ray;
pub use render::renderer::{Renderer, RendererBuilder};
pub use scene::camera::Camera;
pub use scene::light::Light;
pub use scene::surface::{Geometry, Surface};
pub use scene::texture::{ImageBuffer, ImageTexture, Texture};
pub use scene::{Scene, SceneBuilder};
pub use shading::Shader;
