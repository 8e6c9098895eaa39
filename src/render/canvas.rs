use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

use crate::math::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Pixel grid the renderer writes into, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Computes every pixel in parallel from its (x, y) coordinates,
    /// ticking the progress bar per pixel when one is given.
    pub fn set_each_pixel<F>(&mut self, fun: F, progress_bar: Option<ProgressBar>)
    where
        F: Fn(usize, usize) -> Color + Sync,
    {
        let width = self.width;
        let set = |(index, pixel): (usize, &mut Color)| {
            *pixel = fun(index % width, index / width);
        };

        let iter = self.pixels.par_iter_mut().enumerate();
        match progress_bar {
            Some(progress_bar) => iter.progress_with(progress_bar).for_each(set),
            None => iter.for_each(set),
        }
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(Color::as_scaled_values)
            .collect()
    }

    pub fn save_to_file(&self, path: &Path, format: ImageFormat) -> Result<(), std::io::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        match format {
            ImageFormat::Ppm => self.write_ppm(&mut writer),
            ImageFormat::Png => self.write_png(writer),
        }
    }

    fn write_ppm<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        // ppm lines should stay under 70 characters
        let mut line_len = 0;
        for value in self.as_u8_rgb() {
            let entry = value.to_string();
            if line_len + entry.len() + 1 > 70 {
                writeln!(writer)?;
                line_len = 0;
            }
            if line_len > 0 {
                write!(writer, " ")?;
                line_len += 1;
            }
            write!(writer, "{entry}")?;
            line_len += entry.len();
        }
        writeln!(writer)
    }

    fn write_png<W: Write>(&self, writer: W) -> Result<(), std::io::Error> {
        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&self.as_u8_rgb())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(10, 20);

        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 20);
        assert!(
            (0..20).all(|y| (0..10).all(|x| canvas.pixel_at(x, y) == Color::black()))
        );
    }

    #[test]
    fn write_and_read_pixel() {
        let mut canvas = Canvas::new(10, 20);
        canvas.write_pixel(2, 3, Color::red());

        assert_eq!(canvas.pixel_at(2, 3), Color::red());
    }

    #[test]
    fn set_each_pixel_passes_coordinates() {
        let mut canvas = Canvas::new(4, 3);
        canvas.set_each_pixel(
            |x, y| Color::new(x as f64, y as f64, 0.),
            None,
        );

        assert_eq!(canvas.pixel_at(3, 2), Color::new(3., 2., 0.));
        assert_eq!(canvas.pixel_at(0, 1), Color::new(0., 1., 0.));
    }

    #[test]
    fn ppm_header_and_payload() {
        let mut canvas = Canvas::new(2, 2);
        canvas.write_pixel(0, 0, Color::red());

        let mut buffer = Vec::new();
        canvas.write_ppm(&mut buffer).unwrap();
        let ppm = String::from_utf8(buffer).unwrap();

        assert!(ppm.starts_with("P3\n2 2\n255\n"));
        assert!(ppm.contains("255 0 0"));
    }

    #[test]
    fn u8_rgb_is_row_major() {
        let mut canvas = Canvas::new(2, 1);
        canvas.write_pixel(0, 0, Color::red());
        canvas.write_pixel(1, 0, Color::green());

        assert_eq!(canvas.as_u8_rgb(), vec![255, 0, 0, 0, 255, 0]);
    }
}
