//! Showcase scene exercising every geometry, shader and light kind.

use crate::math::matrix::{ComputationalError, Matrix};
use crate::math::transform::Transform;
use crate::math::tuple::Tuple;
use crate::math::{color::Color, point::Point, uv::Uv, vector::Vector};
use crate::scene::Scene;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::surface::mesh::Mesh;
use crate::scene::surface::{Geometry, Surface};
use crate::scene::texture::Texture;
use crate::shading::Shader;

fn checkered_floor() -> Surface {
    let positions = [
        Point::new(-10., 0., -10.),
        Point::new(10., 0., -10.),
        Point::new(10., 0., 10.),
        Point::new(-10., 0., 10.),
    ];
    let uvs = [
        Uv::new(0., 0.),
        Uv::new(1., 0.),
        Uv::new(1., 1.),
        Uv::new(0., 1.),
    ];
    let mesh = Mesh::from_indexed(&positions, &[[0, 1, 2], [0, 2, 3]], None, Some(&uvs));

    Surface::new(
        Geometry::Mesh(mesh),
        Transform::identity(),
        Shader::lambertian(Texture::checker(
            Color::white(),
            Color::new(0.25, 0.25, 0.25),
            10.,
        )),
    )
}

fn tetrahedron() -> Mesh {
    let positions = [
        Point::new(1., 0., -1.),
        Point::new(-1., 0., -1.),
        Point::new(0., 0., 1.),
        Point::new(0., 1.5, 0.),
    ];
    let indices = [[0, 1, 2], [0, 3, 1], [1, 3, 2], [2, 3, 0]];
    Mesh::from_indexed(&positions, &indices, None, None)
}

pub fn scene() -> Result<Scene, ComputationalError> {
    let matte = Surface::with_transformation(
        Geometry::Sphere,
        Matrix::translation(-2.5, 1., 0.5),
        Shader::lambertian(Texture::Constant(Color::new(0.8, 0.25, 0.2))),
    )?;
    let glossy = Surface::with_transformation(
        Geometry::Sphere,
        Matrix::translation(0., 1., 0.),
        Shader::phong(
            Texture::Constant(Color::new(0.2, 0.35, 0.8)),
            Color::new(0.9, 0.9, 0.9),
            120.,
        ),
    )?;
    let mirror = Surface::with_transformation(
        Geometry::Sphere,
        Matrix::translation(2.5, 1., 1.),
        Shader::mirror(Color::new(0.9, 0.9, 0.9)),
    )?;
    let glass = Surface::with_transformation(
        Geometry::Sphere,
        Matrix::translation(0.8, 0.75, -2.) * Matrix::scaling_uniform(0.75),
        Shader::glass(1.5),
    )?;
    let pedestal = Surface::with_transformation(
        Geometry::Cuboid,
        Matrix::translation(-1.2, 0.4, -2.2) * Matrix::scaling(0.6, 0.4, 0.6),
        Shader::phong(
            Texture::Constant(Color::new(0.85, 0.65, 0.2)),
            Color::new(0.4, 0.4, 0.4),
            30.,
        ),
    )?;
    let gem = Surface::with_transformation(
        Geometry::Mesh(tetrahedron()),
        Matrix::translation(-1.2, 0.8, -2.2) * Matrix::scaling_uniform(0.45),
        Shader::lambertian(Texture::Constant(Color::new(0.3, 0.75, 0.4))),
    )?;

    Ok(Scene::new(
        vec![
            checkered_floor(),
            matte,
            glossy,
            mirror,
            glass,
            pedestal,
            gem,
        ],
        vec![
            Light::ambient(Color::new(0.08, 0.08, 0.08)),
            Light::point(Point::new(-6., 8., -8.), Color::new(0.9, 0.9, 0.9)),
            Light::directional(Vector::new(1., -2., 1.), Color::new(0.25, 0.25, 0.25)),
        ],
        Color::new(0.05, 0.07, 0.12),
    ))
}

pub fn camera(width: usize, height: usize, field_of_view: f64) -> Result<Camera, ComputationalError> {
    Camera::look_at(
        width,
        height,
        field_of_view,
        Point::new(0., 2.5, -7.),
        Point::new(0., 1., 0.),
        Vector::new(0., 1., 0.),
    )
}
