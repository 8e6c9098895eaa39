use crate::math::matrix::{ComputationalError, Matrix};
use crate::math::{point::Point, transform::Transform, tuple::Tuple, vector::Vector};
use crate::render::{canvas::Canvas, ray::Ray};

/// Pinhole camera. The view plane sits one unit in front of the eye
/// along -z in camera space; `camera_to_world` places the eye in the
/// scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    width: usize,
    height: usize,
    field_of_view: f64,
    camera_to_world: Transform,
    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(width: usize, height: usize, field_of_view: f64) -> Self {
        assert!(height > 0, "camera height must be positive");
        let half_view = (field_of_view / 2.).tan();
        let aspect_ratio = width as f64 / height as f64;

        let (half_width, half_height) = if aspect_ratio >= 1. {
            (half_view, half_view / aspect_ratio)
        } else {
            (half_view * aspect_ratio, half_view)
        };

        Self {
            width,
            height,
            field_of_view,
            camera_to_world: Transform::identity(),
            pixel_size: half_width * 2. / width as f64,
            half_width,
            half_height,
        }
    }

    /// Camera positioned by a world-to-camera view matrix.
    pub fn with_transformation(
        width: usize,
        height: usize,
        field_of_view: f64,
        view: Matrix,
    ) -> Result<Self, ComputationalError> {
        let camera_to_world = Transform::new(view.inverse()?)?;
        Ok(Self {
            camera_to_world,
            ..Self::new(width, height, field_of_view)
        })
    }

    pub fn look_at(
        width: usize,
        height: usize,
        field_of_view: f64,
        from: Point,
        to: Point,
        up: Vector,
    ) -> Result<Self, ComputationalError> {
        Self::with_transformation(
            width,
            height,
            field_of_view,
            Matrix::view_transformation(from, to, up),
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Ray from the eye through the given pixel. Fractional pixel
    /// coordinates select sub-pixel sample positions.
    pub fn ray_for_pixel(&self, x: f64, y: f64) -> Ray {
        // offsets from the canvas edge to the sample point
        let x_offset = (x + 0.5) * self.pixel_size;
        let y_offset = (y + 0.5) * self.pixel_size;

        // x grows rightward on the canvas but leftward in camera space
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self
            .camera_to_world
            .point_to_world(Point::new(world_x, world_y, -1.));
        let origin = self.camera_to_world.point_to_world(Point::zero());
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn pixel_size_for_landscape_canvas() {
        let camera = Camera::new(200, 125, FRAC_PI_2);
        assert_approx_eq!(camera.pixel_size(), 0.01);
    }

    #[test]
    fn pixel_size_for_portrait_canvas() {
        let camera = Camera::new(125, 200, FRAC_PI_2);
        assert_approx_eq!(camera.pixel_size(), 0.01);
    }

    #[test]
    fn ray_through_canvas_center() {
        let camera = Camera::new(201, 101, FRAC_PI_2);
        let ray = camera.ray_for_pixel(100., 50.);

        assert_approx_eq!(*ray.origin(), Point::zero());
        assert_approx_eq!(*ray.direction(), Vector::new(0., 0., -1.));
    }

    #[test]
    fn ray_through_canvas_corner() {
        let camera = Camera::new(201, 101, FRAC_PI_2);
        let ray = camera.ray_for_pixel(0., 0.);

        assert_approx_eq!(*ray.origin(), Point::zero());
        assert_approx_eq!(*ray.direction(), Vector::new(0.66519, 0.33259, -0.66851));
    }

    #[test]
    fn ray_with_transformed_camera() {
        let view = Matrix::rotation_y(PI / 4.) * Matrix::translation(0., -2., 5.);
        let camera = Camera::with_transformation(201, 101, FRAC_PI_2, view).unwrap();
        let ray = camera.ray_for_pixel(100., 50.);

        let sqrt2_div2 = 2_f64.sqrt() / 2.;
        assert_approx_eq!(*ray.origin(), Point::new(0., 2., -5.));
        assert_approx_eq!(*ray.direction(), Vector::new(sqrt2_div2, 0., -sqrt2_div2));
    }

    #[test]
    fn look_at_aims_the_camera() {
        let camera = Camera::look_at(
            11,
            11,
            FRAC_PI_2,
            Point::new(0., 0., -5.),
            Point::zero(),
            Vector::new(0., 1., 0.),
        )
        .unwrap();
        let ray = camera.ray_for_pixel(5., 5.);

        assert_approx_eq!(*ray.origin(), Point::new(0., 0., -5.));
        assert_approx_eq!(*ray.direction(), Vector::new(0., 0., 1.));
    }
}
