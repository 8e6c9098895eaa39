use crate::math::{color::Color, uv::Uv};

/// Surface color as a function of uv coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    Constant(Color),
    /// Alternating squares of `scale` x `scale` cells per unit of uv
    /// space.
    Checker { c1: Color, c2: Color, scale: f64 },
    /// Image sampled with nearest-texel lookup, tiled over the whole
    /// uv plane.
    Repeat(ImageTexture),
}

impl Texture {
    pub fn checker(c1: Color, c2: Color, scale: f64) -> Self {
        Texture::Checker { c1, c2, scale }
    }

    pub fn color_at(&self, uv: Uv) -> Color {
        match self {
            Texture::Constant(color) => *color,
            Texture::Checker { c1, c2, scale } => {
                let cell = (uv.u() * scale).floor() + (uv.v() * scale).floor();
                if (cell as i64).rem_euclid(2) == 0 {
                    *c1
                } else {
                    *c2
                }
            }
            Texture::Repeat(image) => image.color_at_uv(uv),
        }
    }
}

impl Default for Texture {
    fn default() -> Self {
        Texture::Constant(Color::white())
    }
}

/// Packed rgb texel grid, row 0 at the top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    texels: Vec<u32>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize, texels: Vec<u32>) -> Self {
        assert_eq!(texels.len(), width * height, "texel count mismatch");
        Self {
            width,
            height,
            texels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color_at(&self, row: usize, col: usize) -> Color {
        Color::from_rgb_u32(self.texels[row * self.width + col])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageTexture {
    image: Option<ImageBuffer>,
}

impl ImageTexture {
    pub fn new(image: ImageBuffer) -> Self {
        Self { image: Some(image) }
    }

    /// Texture with no backing image; samples as magenta so the gap is
    /// visible in the render.
    pub fn unloaded() -> Self {
        Self { image: None }
    }

    /// Nearest texel at the uv point, wrapped so every integer offset
    /// of uv samples the same texel. v grows upward while rows grow
    /// downward, hence the flip.
    pub fn color_at_uv(&self, uv: Uv) -> Color {
        let Some(image) = &self.image else {
            log::warn!("sampling image texture with no image loaded");
            return Color::magenta();
        };

        let width = image.width() as i64;
        let height = image.height() as i64;

        let col = ((uv.u() * width as f64 + 0.5).floor() as i64).rem_euclid(width);
        let row = (((1. - uv.v()) * height as f64 + 0.5).floor() as i64).rem_euclid(height);

        image.color_at(row as usize, col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn checker_alternates_between_colors() {
        let texture = Texture::checker(Color::white(), Color::black(), 2.);

        assert_approx_eq!(texture.color_at(Uv::new(0.1, 0.1)), Color::white());
        assert_approx_eq!(texture.color_at(Uv::new(0.6, 0.1)), Color::black());
        assert_approx_eq!(texture.color_at(Uv::new(0.6, 0.6)), Color::white());
        assert_approx_eq!(texture.color_at(Uv::new(0.1, 0.6)), Color::black());
    }

    #[test]
    fn checker_handles_negative_uv() {
        let texture = Texture::checker(Color::white(), Color::black(), 1.);

        assert_approx_eq!(texture.color_at(Uv::new(0.5, 0.5)), Color::white());
        assert_approx_eq!(texture.color_at(Uv::new(-0.5, 0.5)), Color::black());
        assert_approx_eq!(texture.color_at(Uv::new(-0.5, -0.5)), Color::white());
    }

    fn gradient_image() -> ImageBuffer {
        // 2x2 with a distinct color per texel
        ImageBuffer::new(2, 2, vec![0xff0000, 0x00ff00, 0x0000ff, 0xffffff])
    }

    #[test]
    fn repeat_wraps_uv_by_whole_turns() {
        let texture = ImageTexture::new(gradient_image());

        let inside = texture.color_at_uv(Uv::new(0.3, 0.8));
        let wrapped = texture.color_at_uv(Uv::new(1.3, -0.2));
        assert_approx_eq!(inside, wrapped);
    }

    #[test]
    fn repeat_samples_nearest_texel() {
        let texture = ImageTexture::new(gradient_image());

        // u slightly past a texel center stays on that texel
        assert_approx_eq!(texture.color_at_uv(Uv::new(0.1, 0.9)), Color::red());
        assert_approx_eq!(texture.color_at_uv(Uv::new(0.6, 0.9)), Color::green());
        assert_approx_eq!(texture.color_at_uv(Uv::new(0.1, 0.4)), Color::blue());
        assert_approx_eq!(texture.color_at_uv(Uv::new(0.6, 0.4)), Color::white());
    }

    #[test]
    fn unloaded_image_samples_magenta() {
        let texture = ImageTexture::unloaded();
        assert_approx_eq!(texture.color_at_uv(Uv::new(0.5, 0.5)), Color::magenta());
    }

    #[test]
    fn buffer_decodes_packed_rgb() {
        let image = ImageBuffer::new(1, 1, vec![0x4080ff]);
        let color = image.color_at(0, 0);

        assert_approx_eq!(color.r(), 64. / 255.);
        assert_approx_eq!(color.g(), 128. / 255.);
        assert_approx_eq!(color.b(), 1.);
    }
}
