//! Camera for primary ray generation.
//!
//! The camera looks down -z from its view point. Pixels are sampled at
//! their centers on both axes, mapped to an image plane one unit in front
//! of the view point; the vertical field of view sets the plane's scale
//! and the aspect ratio widens it horizontally. Row 0 is the bottom
//! scanline.

use lux_math::{Ray, Vec3};

/// Camera for generating one ray per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // View settings
    view_point: Vec3,
    vfov: f32, // Vertical field of view in degrees
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 800,
            view_point: Vec3::new(0.0, 0.0, 1.3),
            vfov: 90.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the view point.
    pub fn with_view_point(mut self, view_point: Vec3) -> Self {
        self.view_point = view_point;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// The camera's view point.
    pub fn view_point(&self) -> Vec3 {
        self.view_point
    }

    /// Generate the primary ray for pixel (x, y).
    pub fn pixel_ray(&self, x: u32, y: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let aspect = width / height;
        let scale = (self.vfov.to_radians() / 2.0).tan();

        let u = (2.0 * (x as f32 + 0.5) / width - 1.0) * scale * aspect;
        let v = (2.0 * (y as f32 + 0.5) / height - 1.0) * scale;

        // Image plane point one unit in front of the view point
        let plane_point = self.view_point + Vec3::new(u, v, -1.0);

        Ray::new(self.view_point, plane_point - self.view_point)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
