use std::ops;

use crate::math::approx_eq::ApproxEq;

/// RGB radiance triple. Channels are conventionally in [0, 1] but are not
/// clamped during shading; clamping happens only on conversion to 8-bit.
#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }
    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }
    pub fn red() -> Self {
        Self::new(1., 0., 0.)
    }
    pub fn green() -> Self {
        Self::new(0., 1., 0.)
    }
    pub fn blue() -> Self {
        Self::new(0., 0., 1.)
    }
    pub fn magenta() -> Self {
        Self::new(1., 0., 1.)
    }

    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Decodes a packed `0x00RRGGBB` texel.
    pub fn from_rgb_u32(packed: u32) -> Self {
        let r = ((packed >> 16) & 0xff) as f64;
        let g = ((packed >> 8) & 0xff) as f64;
        let b = (packed & 0xff) as f64;
        Self::new(r / 255., g / 255., b / 255.)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    fn scale_val_to_u8(v: f64) -> u8 {
        let v = v.clamp(0., 1.);
        (v * 255.).round() as u8
    }

    pub fn as_scaled_values(&self) -> [u8; 3] {
        [
            Self::scale_val_to_u8(self.r),
            Self::scale_val_to_u8(self.g),
            Self::scale_val_to_u8(self.b),
        ]
    }
}

impl ApproxEq for Color {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.r.approx_eq_epsilon(&other.r, epsilon)
            && self.g.approx_eq_epsilon(&other.g, epsilon)
            && self.b.approx_eq_epsilon(&other.b, epsilon)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl ops::Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Color {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl ops::MulAssign<f64> for Color {
    fn mul_assign(&mut self, rhs: f64) {
        self.r *= rhs;
        self.g *= rhs;
        self.b *= rhs;
    }
}

impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Color {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(
            Color::new(0.9, 0.6, 0.75) + Color::new(0.7, 0.1, 0.25),
            Color::new(1.6, 0.7, 1.0)
        );
    }

    #[test]
    fn sub() {
        assert_eq!(
            Color::new(0.9, 0.6, 0.75) - Color::new(0.7, 0.1, 0.25),
            Color::new(0.2, 0.5, 0.5)
        );
    }

    #[test]
    fn mul_f64() {
        assert_eq!(Color::new(0.2, 0.3, 0.4) * 2., Color::new(0.4, 0.6, 0.8));
    }

    #[test]
    fn div_f64() {
        assert_eq!(Color::new(0.2, 0.3, 0.4) / 2., Color::new(0.1, 0.15, 0.2));
    }

    #[test]
    fn mul_componentwise() {
        assert_eq!(
            Color::new(1., 0.2, 0.4) * Color::new(0.9, 1., 0.1),
            Color::new(0.9, 0.2, 0.04)
        );
    }

    #[test]
    fn from_packed_rgb() {
        assert_eq!(Color::from_rgb_u32(0x00ff0000), Color::red());
        assert_eq!(Color::from_rgb_u32(0x0000ff00), Color::green());
        assert_eq!(Color::from_rgb_u32(0x000000ff), Color::blue());
        assert_eq!(Color::from_rgb_u32(0x00ffffff), Color::white());
    }

    #[test]
    fn scaled_values_clamp() {
        assert_eq!(Color::new(1.5, -0.3, 0.5).as_scaled_values(), [255, 0, 128]);
    }
}
