//! Shape trait and Intersection record for ray-shape queries.

use lux_math::{Ray, Vec3};

use crate::material::Material;

/// Unique identifier of a shape within a scene.
///
/// Spawned rays carry the id of the shape they left so intersection
/// queries can skip it and avoid floating-point self-intersection.
pub type ShapeId = u32;

/// Roots at or below this parametric distance are rejected, so a ray
/// never re-hits the surface it was spawned from.
pub const HIT_EPSILON: f32 = 1e-4;

/// Result of testing a ray against a shape.
///
/// `count` is the number of forward intersection roots found; zero means
/// the ray missed and the remaining fields hold no meaningful data.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Number of forward roots (0 = miss; a sphere can report 2)
    pub count: u32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection, unit length, oriented for shading
    pub normal: Vec3,
    /// Material of the hit shape
    pub material: Material,
    /// Id of the hit shape
    pub shape: ShapeId,
}

impl Intersection {
    /// A miss record. Callers must check [`is_hit`](Self::is_hit) before
    /// reading any other field.
    pub fn miss() -> Self {
        Self {
            count: 0,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
            shape: 0,
        }
    }

    /// Whether the ray actually hit the shape.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.count > 0
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::miss()
    }
}

/// Trait for surfaces a ray can intersect.
pub trait Shape: Send + Sync {
    /// This shape's scene-unique id.
    fn id(&self) -> ShapeId;

    /// The shape's material.
    fn material(&self) -> &Material;

    /// Test the ray against this shape.
    ///
    /// Pure function of the shape's fixed geometry and the ray: returns
    /// the nearest root with parametric distance above [`HIT_EPSILON`],
    /// or a miss record if no forward root exists.
    fn intersect(&self, ray: &Ray) -> Intersection;
}
