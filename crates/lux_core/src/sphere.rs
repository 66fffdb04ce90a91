//! Sphere primitive.

use lux_math::{Interval, Ray, Vec3};

use crate::material::Material;
use crate::shape::{Intersection, Shape, ShapeId, HIT_EPSILON};

/// A sphere primitive.
pub struct Sphere {
    id: ShapeId,
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(id: ShapeId, center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            id,
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Sphere center.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn intersect(&self, ray: &Ray) -> Intersection {
        // Ray directions are unit length, so the quadratic's `a` term is 1.
        let oc = self.center - ray.origin();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return Intersection::miss();
        }

        let sqrtd = discriminant.sqrt();
        let near = h - sqrtd;
        let far = h + sqrtd;

        let forward = Interval::new(HIT_EPSILON, f32::INFINITY);
        let mut count = 0;
        if forward.surrounds(near) {
            count += 1;
        }
        // A tangency (zero discriminant) is a single root, not two.
        if sqrtd > 0.0 && forward.surrounds(far) {
            count += 1;
        }

        let t = if forward.surrounds(near) {
            near
        } else if forward.surrounds(far) {
            far
        } else {
            return Intersection::miss();
        };

        let point = ray.at(t);
        Intersection {
            count,
            point,
            // Outward geometric normal; the tracer flips it for hits
            // from inside the sphere.
            normal: (point - self.center) / self.radius,
            material: self.material,
            shape: self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_sphere_near_root() {
        let sphere = Sphere::new(0, Vec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray);
        assert_eq!(hit.count, 2);
        assert!((hit.point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
        // Unit sphere at the origin: the normal equals the hit point.
        assert!((hit.normal - hit.point).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(0, Vec3::new(0.0, 0.0, -1.0), 0.5, Material::default());

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(!sphere.intersect(&ray).is_hit());
    }

    #[test]
    fn test_sphere_from_inside() {
        let sphere = Sphere::new(3, Vec3::ZERO, 2.0, Material::default());

        // Origin at the center: only the exit root is forward.
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let hit = sphere.intersect(&ray);

        assert_eq!(hit.count, 1);
        assert!((hit.point - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(hit.shape, 3);
        // Outward normal points away from the ray origin here.
        assert!(hit.normal.dot(ray.direction()) > 0.0);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(0, Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default());

        // Sphere entirely behind the ray
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(!sphere.intersect(&ray).is_hit());
    }
}
