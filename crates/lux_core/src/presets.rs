//! Built-in demo scenes.
//!
//! Each preset builds a fresh, fully owned [`Scene`]; selecting another
//! preset replaces the whole scene value rather than mutating shapes.

use lux_math::Vec3;
use thiserror::Error;

use crate::material::{Color, Material};
use crate::plane::Plane;
use crate::scene::{PointLight, Scene};
use crate::shape::ShapeId;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Error returned when a preset index does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown scene preset {0} (valid presets are 1 and 2)")]
    Unknown(u32),
}

/// The built-in scene presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Mirror sphere and a pyramid on a floor, walled in behind.
    One,
    /// Glass and mirror spheres over a reflective floor.
    Two,
}

impl Preset {
    /// Look up a preset by its 1-based index.
    pub fn from_index(index: u32) -> Result<Self, PresetError> {
        match index {
            1 => Ok(Preset::One),
            2 => Ok(Preset::Two),
            other => Err(PresetError::Unknown(other)),
        }
    }

    /// Build the preset's scene.
    pub fn build(self) -> Scene {
        let scene = match self {
            Preset::One => scene_one(),
            Preset::Two => scene_two(),
        };
        log::debug!("built preset {:?} with {} shapes", self, scene.shape_count());
        scene
    }
}

fn mirror_grey() -> Material {
    Material::new(
        Color::splat(0.1),
        Color::splat(0.4),
        Color::splat(0.7),
        64.0,
    )
    .with_reflection(Color::splat(0.4))
}

fn matte(color: Color) -> Material {
    Material::new(color * 0.1, color, Color::splat(0.2), 8.0)
}

fn scene_one() -> Scene {
    let mut scene = Scene::new(PointLight::new(Vec3::new(0.0, 2.5, -5.0)));

    // Reflective grey sphere
    scene.add(Box::new(Sphere::new(
        0,
        Vec3::new(0.9, -1.9, -6.7),
        0.8,
        mirror_grey(),
    )));

    // Blue pyramid: four faces around an apex, ids 1-4
    let apex = Vec3::new(-1.0, -1.0, -6.5);
    let base = [
        Vec3::new(-1.7, -2.75, -5.8),
        Vec3::new(-0.3, -2.75, -5.8),
        Vec3::new(-0.3, -2.75, -7.2),
        Vec3::new(-1.7, -2.75, -7.2),
    ];
    let blue = matte(Color::new(0.2, 0.3, 0.9)).with_reflection(Color::splat(0.2));
    for i in 0..4usize {
        scene.add(Box::new(Triangle::new(
            1 + i as ShapeId,
            base[i],
            base[(i + 1) % 4],
            apex,
            blue,
        )));
    }

    // Floor
    scene.add(Box::new(Plane::new(
        5,
        Vec3::new(0.0, -2.75, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        matte(Color::new(0.8, 0.8, 0.4)),
    )));

    // Back wall
    scene.add(Box::new(Plane::new(
        6,
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::new(0.0, 0.0, 1.0),
        matte(Color::new(0.6, 0.6, 0.6)),
    )));

    scene
}

fn scene_two() -> Scene {
    let mut scene = Scene::new(PointLight::new(Vec3::new(4.0, 6.0, -1.0)));

    // Glass sphere front and center
    scene.add(Box::new(Sphere::new(
        0,
        Vec3::new(0.0, -0.5, -4.0),
        1.0,
        Material::new(
            Color::splat(0.05),
            Color::splat(0.1),
            Color::splat(0.8),
            128.0,
        )
        .with_refraction(1.5),
    )));

    // Mirror sphere behind and to the left
    scene.add(Box::new(Sphere::new(
        1,
        Vec3::new(-2.2, 0.0, -6.5),
        1.5,
        mirror_grey().with_reflection(Color::splat(0.8)),
    )));

    // Matte red sphere to the right
    scene.add(Box::new(Sphere::new(
        2,
        Vec3::new(2.3, -1.0, -6.0),
        1.0,
        matte(Color::new(0.9, 0.2, 0.2)),
    )));

    // Reflective floor
    scene.add(Box::new(Plane::new(
        3,
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        matte(Color::splat(0.7)).with_reflection(Color::splat(0.3)),
    )));

    scene
}
