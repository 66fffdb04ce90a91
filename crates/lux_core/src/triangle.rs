//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use lux_math::{Interval, Ray, Vec3};

use crate::material::Material;
use crate::shape::{Intersection, Shape, ShapeId, HIT_EPSILON};

/// A triangle primitive.
pub struct Triangle {
    id: ShapeId,
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(id: ShapeId, v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = edge1.cross(edge2).normalize();

        Self {
            id,
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }
}

impl Shape for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn material(&self) -> &Material {
        &self.material
    }

    /// Möller-Trumbore ray-triangle intersection. Triangles are two-sided;
    /// the returned normal faces the incoming ray.
    fn intersect(&self, ray: &Ray) -> Intersection {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return Intersection::miss();
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return Intersection::miss();
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        if v < 0.0 || u + v > 1.0 {
            return Intersection::miss();
        }

        let t = f * edge2.dot(q);
        if !Interval::new(HIT_EPSILON, f32::INFINITY).surrounds(t) {
            return Intersection::miss();
        }

        Intersection {
            count: 1,
            point: ray.at(t),
            normal: if self.normal.dot(ray.direction()) < 0.0 {
                self.normal
            } else {
                -self.normal
            },
            material: self.material,
            shape: self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_triangle() -> Triangle {
        // Triangle in the XY plane at z=-1
        Triangle::new(
            7,
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Material::default(),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = test_triangle();

        // Ray pointing at the triangle center
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = tri.intersect(&ray);

        assert_eq!(hit.count, 1);
        assert_eq!(hit.shape, 7);
        assert!((hit.point.z - -1.0).abs() < 1e-5);
        assert!(hit.normal.dot(ray.direction()) < 0.0);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = test_triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(!tri.intersect(&ray).is_hit());
    }

    #[test]
    fn test_triangle_edge_miss() {
        let tri = test_triangle();

        // Aimed wide of the v parameter range
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!tri.intersect(&ray).is_hit());
    }

    #[test]
    fn test_triangle_backface_hit() {
        let tri = test_triangle();

        // Approaching from behind the face
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = tri.intersect(&ray);

        assert!(hit.is_hit());
        assert!(hit.normal.dot(ray.direction()) < 0.0);
    }
}
