//! World transforms for the host renderer
//!
//! The renderer itself lives outside this crate. Each frame the simulation
//! state is turned into a camera, a light and a list of
//! (mesh, transform, material) draw commands.

pub mod build;
pub mod camera;
pub mod draw;

pub use build::{Scene, SceneOptions, build_scene};
pub use camera::{Camera, Light};
pub use draw::{DrawCommand, DrawTarget, Material, MaterialInfo, Mesh, RawDraw};
