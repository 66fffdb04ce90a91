//! Lux Render - recursive CPU ray tracing.
//!
//! A Whitted-style tracer: one primary ray per pixel, shadow test plus
//! Phong shading at the nearest hit, and depth-bounded recursion for
//! mirror reflection and refraction. The output is an owned pixel buffer;
//! this crate never touches a display surface.

mod camera;
mod framebuffer;
mod renderer;
mod shading;
mod tracer;

pub use camera::Camera;
pub use framebuffer::{color_to_rgba8, linear_to_gamma, ImageBuffer};
pub use renderer::{render, render_parallel};
pub use shading::{ambient, phong};
pub use tracer::{trace, RenderConfig};

/// Re-export the scene model and math types used at the API surface
pub use lux_core::{Color, Intersection, Material, PointLight, Preset, Scene, Shape, ShapeId};
pub use lux_math::{Ray, Vec3};
