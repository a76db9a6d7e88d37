//! Draw commands and the host renderer interface

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use serde::Serialize;

use super::camera::{Camera, Light};
use crate::hex_color;

/// Mesh handles understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mesh {
    FishBody = 0,
    FishWingLeft = 1,
    FishWingRight = 2,
    FishMouth = 3,
    Cube = 4,
    Eye = 5,
    Mine = 6,
    Skull = 7,
}

impl Mesh {
    pub const ALL: [Mesh; 8] = [
        Mesh::FishBody,
        Mesh::FishWingLeft,
        Mesh::FishWingRight,
        Mesh::FishMouth,
        Mesh::Cube,
        Mesh::Eye,
        Mesh::Mine,
        Mesh::Skull,
    ];

    /// Model file, or None for built-in primitives
    pub fn asset(self) -> Option<&'static str> {
        match self {
            Mesh::FishBody => Some("assets/fish_body.obj"),
            Mesh::FishWingLeft => Some("assets/fish_wingL.obj"),
            Mesh::FishWingRight => Some("assets/fish_wingR.obj"),
            Mesh::FishMouth => Some("assets/fish_mouth.obj"),
            Mesh::Mine => Some("assets/debris.obj"),
            Mesh::Skull => Some("assets/skull.obj"),
            Mesh::Cube | Mesh::Eye => None,
        }
    }
}

/// Material handles understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Material {
    Sky = 0,
    FishBody = 1,
    /// Fish body while debris is inbound
    FishBodyDanger = 2,
    FishWing = 3,
    FishEye = 4,
    FishMouth = 5,
    Floor = 6,
    Roof = 7,
    Mine = 8,
    Skull = 9,
    Crosshair = 10,
    DeathEye = 11,
}

/// Natural ambient level shared by lit materials
const NATURAL_AMBIENT: f32 = 0.3;

/// Phong parameters for one material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialInfo {
    pub id: u32,
    pub color: Vec3,
    pub ambient: f32,
    pub diffusivity: f32,
    pub specularity: f32,
    pub texture: Option<&'static str>,
    /// Texture coordinates scroll with time
    pub scrolling: bool,
}

impl Material {
    pub const ALL: [Material; 12] = [
        Material::Sky,
        Material::FishBody,
        Material::FishBodyDanger,
        Material::FishWing,
        Material::FishEye,
        Material::FishMouth,
        Material::Floor,
        Material::Roof,
        Material::Mine,
        Material::Skull,
        Material::Crosshair,
        Material::DeathEye,
    ];

    pub fn info(self) -> MaterialInfo {
        let (color, ambient, diffusivity, specularity, texture, scrolling) = match self {
            Material::Sky => ("#061d27", 0.9, 0.0, 0.0, Some("assets/ocean.jpg"), false),
            Material::FishBody => ("#185b3b", NATURAL_AMBIENT, 1.0, 1.0, Some("assets/chain.jpg"), false),
            Material::FishBodyDanger => ("#726329", NATURAL_AMBIENT, 1.0, 1.0, Some("assets/chain.jpg"), false),
            Material::FishWing => ("#96ce86", NATURAL_AMBIENT, 0.6, 0.3, Some("assets/oaklog.png"), false),
            Material::FishEye => ("#000000", 0.0, 0.5, 1.0, None, false),
            Material::FishMouth => ("#ffffff", NATURAL_AMBIENT, 0.5, 1.0, None, false),
            Material::Floor => ("#000000", 0.9, 0.0, 0.0, Some("assets/sand.jpg"), true),
            Material::Roof => ("#000000", 0.9, 0.0, 0.0, Some("assets/water_surface.jpeg"), true),
            Material::Mine => ("#a79595", NATURAL_AMBIENT, 0.5, 0.5, None, false),
            Material::Skull => ("#caca90", NATURAL_AMBIENT, 0.8, 0.9, None, false),
            Material::Crosshair => ("#ff0000", 1.0, 0.0, 0.0, None, false),
            Material::DeathEye => ("#ff6060", 0.1, 0.5, 1.0, None, false),
        };
        MaterialInfo {
            id: self as u32,
            color: hex_color(color),
            ambient,
            diffusivity,
            specularity,
            texture,
            scrolling,
        }
    }
}

/// One draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Mat4,
}

/// Flat layout of a draw command for the host: ids then a column-major matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RawDraw {
    pub mesh: f32,
    pub material: f32,
    pub transform: [f32; 16],
}

impl RawDraw {
    /// Floats per command in the flat buffer
    pub const FLOATS: usize = std::mem::size_of::<RawDraw>() / std::mem::size_of::<f32>();
}

impl From<&DrawCommand> for RawDraw {
    fn from(cmd: &DrawCommand) -> Self {
        Self {
            mesh: cmd.mesh as u32 as f32,
            material: cmd.material as u32 as f32,
            transform: cmd.transform.to_cols_array(),
        }
    }
}

/// The rendering collaborator
pub trait DrawTarget {
    fn set_camera(&mut self, camera: &Camera);
    fn set_lights(&mut self, lights: &[Light]);
    fn draw(&mut self, mesh: Mesh, transform: &Mat4, material: Material);
}
