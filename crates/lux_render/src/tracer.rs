//! Recursive ray tracing.

use lux_core::{Color, Scene, ShapeId, SHADOW_BIAS};
use lux_math::Ray;

use crate::shading;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth for primary rays
    pub max_depth: u32,
    /// Color returned when a ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Color::ZERO,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Resolves the nearest hit (skipping `exclude`, the shape the ray was
/// spawned from), shades it with a shadow-tested Phong term, and recurses
/// for mirror reflection and refraction while `depth` lasts. A miss
/// returns the background color and is always terminal, so the recursion
/// is bounded by `depth` alone.
pub fn trace(
    scene: &Scene,
    ray: &Ray,
    depth: u32,
    exclude: Option<ShapeId>,
    config: &RenderConfig,
) -> Color {
    let hit = scene.nearest_hit(ray, exclude);
    if !hit.is_hit() {
        return config.background;
    }

    // Shadow test: ambient-only when something sits between the hit
    // point and the light.
    let light_dir = (scene.light.position - hit.point).normalize();
    let shadow_ray = Ray::new(hit.point + hit.normal * SHADOW_BIAS, light_dir);
    let mut color = if scene.any_occluder(&shadow_ray, Some(hit.shape)).is_some() {
        shading::ambient(scene, &hit)
    } else {
        shading::phong(scene, ray, &hit)
    };

    // Recursion floor: local term only, no reflection or refraction.
    if depth == 0 {
        return color;
    }

    let reflectivity = hit.material.mean_reflection();
    if reflectivity > 0.0 {
        let d = ray.direction();
        let n = hit.normal;
        // R = D - 2(N.D)N
        let reflect_dir = d - 2.0 * d.dot(n) * n;
        let reflect_ray = Ray::new(hit.point + n * SHADOW_BIAS, reflect_dir);
        let reflected = trace(scene, &reflect_ray, depth - 1, Some(hit.shape), config);
        color = (1.0 - reflectivity) * color + reflectivity * reflected;
    }

    if hit.material.is_refractive() {
        let mut eta_i = 1.0;
        let mut eta_t = hit.material.refractive_index;
        let mut n = hit.normal;
        let mut cos_i = ray.direction().dot(n);

        // Ray travelling inside the object: swap media, flip the normal
        if cos_i > 0.0 {
            std::mem::swap(&mut eta_i, &mut eta_t);
            n = -n;
            cos_i = ray.direction().dot(n);
        }

        let eta = eta_i / eta_t;
        let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
        let refract_dir = if k < 0.0 {
            // Total internal reflection: fall back to the mirror direction
            let d = ray.direction();
            d - 2.0 * d.dot(n) * n
        } else {
            eta * ray.direction() + (eta * cos_i - k.sqrt()) * n
        };

        let refract_ray = Ray::new(hit.point - n * SHADOW_BIAS, refract_dir);
        let refracted = trace(scene, &refract_ray, depth - 1, Some(hit.shape), config);

        // Fixed even split against the color so far, not a Fresnel weight
        color = 0.5 * color + 0.5 * refracted;
    }

    color
}
