use crate::math::{color::Color, point::Point, vector::Vector};

/// Scene light source. The intensity color doubles as the light's
/// strength, so channels above 1 are meaningful.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Radiates from a position in every direction, unattenuated.
    Point { position: Point, intensity: Color },
    /// Parallel rays along a fixed direction, as if infinitely far away.
    Directional {
        direction: Vector,
        intensity: Color,
    },
    /// Uniform term applied regardless of geometry or occlusion.
    Ambient { intensity: Color },
}

impl Light {
    pub fn point(position: Point, intensity: Color) -> Self {
        Light::Point {
            position,
            intensity,
        }
    }

    pub fn directional(direction: Vector, intensity: Color) -> Self {
        Light::Directional {
            direction,
            intensity,
        }
    }

    pub fn ambient(intensity: Color) -> Self {
        Light::Ambient { intensity }
    }

    pub fn intensity(&self) -> Color {
        match self {
            Light::Point { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Ambient { intensity } => *intensity,
        }
    }

    /// Unit direction from `point` toward the light and the distance a
    /// shadow ray must stay clear over. Ambient light has no direction
    /// and never casts shadows.
    pub fn incident_at(&self, point: Point) -> Option<(Vector, f64)> {
        match self {
            Light::Point { position, .. } => {
                let to_light = *position - point;
                Some((to_light.normalize(), to_light.magnitude()))
            }
            Light::Directional { direction, .. } => {
                Some((-direction.normalize(), f64::INFINITY))
            }
            Light::Ambient { .. } => None,
        }
    }
}
