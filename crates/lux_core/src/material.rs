//! Phong material definition.

use lux_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface material for Phong shading plus the recursive terms.
///
/// Owned by a shape and read-only during tracing. `reflection_strength`
/// is per-channel; `Vec3::ZERO` means no reflection. A `refractive_index`
/// of 1.0 means the material does not refract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient color coefficient
    pub ambient: Color,

    /// Diffuse color coefficient
    pub diffuse: Color,

    /// Specular color coefficient
    pub specular: Color,

    /// Shininess exponent for the specular highlight
    pub shininess: f32,

    /// Per-channel mirror reflection strength (ZERO = none)
    pub reflection_strength: Color,

    /// Index of refraction (1.0 = non-refractive, 1.5 = glass)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.5), // Grey default
            specular: Vec3::splat(0.5),
            shininess: 32.0,
            reflection_strength: Vec3::ZERO,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create a new material from its Phong coefficients.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            ..Default::default()
        }
    }

    /// Set the per-channel mirror reflection strength.
    pub fn with_reflection(mut self, strength: Color) -> Self {
        self.reflection_strength = strength;
        self
    }

    /// Set the index of refraction.
    pub fn with_refraction(mut self, index: f32) -> Self {
        self.refractive_index = index;
        self
    }

    /// Mean of the per-channel reflection strengths, used as the scalar
    /// blend weight between local and reflected color.
    pub fn mean_reflection(&self) -> f32 {
        let r = self.reflection_strength;
        (r.x + r.y + r.z) / 3.0
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.mean_reflection() > 0.0
    }

    /// Check if this material spawns refraction rays.
    pub fn is_refractive(&self) -> bool {
        self.refractive_index > 1.0
    }
}
