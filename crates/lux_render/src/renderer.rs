//! Render drivers: one trace per pixel, sequential or parallel.
//!
//! Each pixel reads only the immutable scene and writes exactly one
//! buffer cell, so the parallel driver splits the buffer into disjoint
//! scanlines with no locking and produces bit-identical output.

use rayon::prelude::*;

use lux_core::Scene;

use crate::camera::Camera;
use crate::framebuffer::ImageBuffer;
use crate::tracer::{trace, RenderConfig};

/// Render the scene to an image buffer, one pixel at a time.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "tracing {}x{} image, depth {}",
        camera.image_width,
        camera.image_height,
        config.max_depth
    );

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let ray = camera.pixel_ray(x, y);
            image.set(x, y, trace(scene, &ray, config.max_depth, None, config));
        }
    }

    image
}

/// Render the scene with one rayon task per scanline.
pub fn render_parallel(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "tracing {}x{} image in parallel, depth {}",
        camera.image_width,
        camera.image_height,
        config.max_depth
    );

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let width = camera.image_width as usize;

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.pixel_ray(x as u32, y as u32);
                *pixel = trace(scene, &ray, config.max_depth, None, config);
            }
        });

    image
}
