//! Scene aggregate and its intersection queries.
//!
//! A [`Scene`] owns its shapes and is immutable for the duration of one
//! trace; switching presets builds a fresh `Scene` rather than mutating
//! shapes in place. The light and all query state are threaded through as
//! explicit parameters - there is no process-wide scene state.

use lux_math::{Interval, Ray, Vec3};

use crate::material::Color;
use crate::shape::{Intersection, Shape, ShapeId, HIT_EPSILON};

/// Offset applied along the normal when spawning secondary rays, so they
/// start clear of the surface they leave.
pub const SHADOW_BIAS: f32 = 1e-3;

/// Margin subtracted from the light distance in occlusion queries, so the
/// light's own position never registers as a blocker.
pub const LIGHT_MARGIN: f32 = 0.01;

/// A point light source.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Emitted color
    pub color: Color,
}

impl PointLight {
    /// Create a white light at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            color: Color::ONE,
        }
    }
}

/// A complete scene: an ordered set of shapes plus one point light.
///
/// Insertion order carries no priority - the nearest hit is always
/// selected explicitly - but it does decide ties, first encountered wins.
pub struct Scene {
    shapes: Vec<Box<dyn Shape>>,
    /// The scene's single point light
    pub light: PointLight,
    /// Global ambient term, scales each material's ambient coefficient
    pub ambient: Color,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(light: PointLight) -> Self {
        Self {
            shapes: Vec::new(),
            light,
            ambient: Color::ONE,
        }
    }

    /// Add a shape to the scene. Ids are expected to be unique; queries
    /// that exclude a shape rely on it.
    pub fn add(&mut self, shape: Box<dyn Shape>) {
        debug_assert!(
            self.shapes.iter().all(|s| s.id() != shape.id()),
            "duplicate shape id {}",
            shape.id()
        );
        self.shapes.push(shape);
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find the nearest intersection of `ray` with any shape other than
    /// `exclude`, measured by distance from the ray origin to the hit
    /// point. Returns a miss record if nothing is hit.
    pub fn nearest_hit(&self, ray: &Ray, exclude: Option<ShapeId>) -> Intersection {
        let mut closest = Intersection::miss();
        let mut min_distance = f32::INFINITY;

        for shape in &self.shapes {
            if exclude == Some(shape.id()) {
                continue;
            }
            let hit = shape.intersect(ray);
            if !hit.is_hit() {
                continue;
            }
            let distance = hit.point.distance(ray.origin());
            if distance < min_distance {
                min_distance = distance;
                closest = hit;
            }
        }

        closest
    }

    /// Existence check for a blocker between the ray origin and the
    /// scene's light: returns the id of the first shape (other than
    /// `exclude`) hit strictly between [`HIT_EPSILON`] and the light
    /// distance minus [`LIGHT_MARGIN`]. Does not search for the nearest.
    pub fn any_occluder(&self, ray: &Ray, exclude: Option<ShapeId>) -> Option<ShapeId> {
        let reach = Interval::new(
            HIT_EPSILON,
            ray.origin().distance(self.light.position) - LIGHT_MARGIN,
        );

        for shape in &self.shapes {
            if exclude == Some(shape.id()) {
                continue;
            }
            let hit = shape.intersect(ray);
            if hit.is_hit() && reach.surrounds(hit.point.distance(ray.origin())) {
                return Some(hit.shape);
            }
        }

        None
    }
}
