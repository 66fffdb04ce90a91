//! Phong local illumination.

use lux_core::{Color, Intersection, Scene};
use lux_math::Ray;

/// Ambient-only color at a hit: the material's ambient coefficient scaled
/// by the scene's global ambient term. This is the full contribution of a
/// point in shadow.
pub fn ambient(scene: &Scene, hit: &Intersection) -> Color {
    debug_assert!(hit.is_hit(), "shading a miss record");
    scene.ambient * hit.material.ambient
}

/// Full Phong color at a hit: ambient + diffuse + specular.
///
/// The specular term mirrors the light direction about the surface normal
/// and raises its alignment with the view direction to the material's
/// shininess exponent.
pub fn phong(scene: &Scene, ray: &Ray, hit: &Intersection) -> Color {
    debug_assert!(hit.is_hit(), "shading a miss record");

    let light = &scene.light;
    let n = hit.normal;
    let light_dir = (light.position - hit.point).normalize();
    let view_dir = (ray.origin() - hit.point).normalize();

    let lambert = n.dot(light_dir).max(0.0);

    // Light direction mirrored about the normal
    let reflect_dir = 2.0 * n.dot(light_dir) * n - light_dir;
    let highlight = reflect_dir.dot(view_dir).max(0.0).powf(hit.material.shininess);

    ambient(scene, hit)
        + hit.material.diffuse * lambert * light.color
        + hit.material.specular * highlight * light.color
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{Material, PointLight, Sphere};
    use lux_math::Vec3;

    fn lit_sphere_scene(light_position: Vec3) -> Scene {
        let material = Material::new(
            Color::new(0.1, 0.2, 0.3),
            Color::splat(0.6),
            Color::splat(0.4),
            16.0,
        );
        let mut scene = Scene::new(PointLight::new(light_position));
        scene.add(Box::new(Sphere::new(0, Vec3::new(0.0, 0.0, -3.0), 1.0, material)));
        scene
    }

    #[test]
    fn test_ambient_scales_material() {
        let mut scene = lit_sphere_scene(Vec3::new(0.0, 10.0, 0.0));
        scene.ambient = Color::splat(0.5);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray, None);

        assert_eq!(ambient(&scene, &hit), Color::new(0.05, 0.1, 0.15));
    }

    #[test]
    fn test_lit_point_exceeds_ambient() {
        // Light sits between the camera and the sphere, shining on the
        // front face we hit.
        let scene = lit_sphere_scene(Vec3::new(0.0, 0.0, -1.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray, None);

        let full = phong(&scene, &ray, &hit);
        let ambient_only = ambient(&scene, &hit);
        assert!(full.x > ambient_only.x);
        assert!(full.y > ambient_only.y);
        assert!(full.z > ambient_only.z);
    }

    #[test]
    fn test_light_behind_surface_clamps_to_ambient() {
        // Light hidden behind the sphere relative to the hit point; the
        // Lambert term clamps to zero and the mirrored light direction
        // points away from the viewer, so only ambient remains.
        let scene = lit_sphere_scene(Vec3::new(0.0, 0.0, -10.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.nearest_hit(&ray, None);

        let full = phong(&scene, &ray, &hit);
        let ambient_only = ambient(&scene, &hit);
        assert!((full - ambient_only).length() < 1e-6);
    }
}
