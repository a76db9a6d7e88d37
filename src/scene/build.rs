//! Per-frame scene assembly

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat4, Vec3};

use super::camera::{Camera, Light};
use super::draw::{DrawCommand, DrawTarget, Material, Mesh, RawDraw};
use crate::sim::{DebrisKind, GameState, ViewMode};

/// Presentation switches taken from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOptions {
    pub show_crosshair: bool,
    pub reduced_motion: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_crosshair: true,
            reduced_motion: false,
        }
    }
}

impl From<&crate::Settings> for SceneOptions {
    fn from(settings: &crate::Settings) -> Self {
        Self {
            show_crosshair: settings.show_crosshair,
            reduced_motion: settings.reduced_motion,
        }
    }
}

/// Seconds before the crosshair and life icons appear
const UI_DELAY: f32 = 5.0;
/// Sky panel timings during the intro swing
const SKY_FRONT_FROM: f32 = 2.5;
const SKY_BACK_UNTIL: f32 = 4.5;
/// Vertical offset of the whole environment
const SKY_HEIGHT_OFFSET: f32 = -10.0;
/// Skulls circling the fish once the game is over
const DEATH_SKULLS: usize = 8;

/// Everything the host needs to draw one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub light: Light,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Replay the frame into a renderer
    pub fn submit<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.set_camera(&self.camera);
        target.set_lights(std::slice::from_ref(&self.light));
        for cmd in &self.commands {
            target.draw(cmd.mesh, &cmd.transform, cmd.material);
        }
    }

    /// Commands as a flat float buffer (`RawDraw::FLOATS` per command)
    pub fn draw_buffer(&self) -> Vec<f32> {
        let raw: Vec<RawDraw> = self.commands.iter().map(RawDraw::from).collect();
        let floats: &[f32] = bytemuck::cast_slice(raw.as_slice());
        floats.to_vec()
    }

    fn push(&mut self, mesh: Mesh, material: Material, transform: Mat4) {
        self.commands.push(DrawCommand {
            mesh,
            material,
            transform,
        });
    }
}

/// Camera for the current state: side-on when dead or in fish view
pub fn camera_for(state: &GameState, options: SceneOptions) -> Camera {
    if state.is_game_over() || state.view == ViewMode::FishView {
        Camera::fish_view(&state.fish)
    } else {
        Camera::chase(&state.fish, state.time, state.last_dt, options.reduced_motion)
    }
}

fn rot_x(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle)
}

fn rot_y(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}

fn rot_z(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle)
}

fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

/// Build the draw list for the current frame
pub fn build_scene(state: &GameState, options: SceneOptions) -> Scene {
    let game_over = state.is_game_over();
    let mut scene = Scene {
        camera: camera_for(state, options),
        light: Light::for_frame(state.time, game_over),
        commands: Vec::with_capacity(state.field.len() + 32),
    };

    draw_fish(&mut scene, state, options);

    if game_over {
        draw_death_scene(&mut scene, state);
    } else {
        if options.show_crosshair && state.time > UI_DELAY {
            draw_crosshair(&mut scene, state);
        }
        draw_environment(&mut scene, state);
        draw_debris(&mut scene, state);
    }

    draw_lives(&mut scene, state);

    scene
}

fn fish_matrix(state: &GameState, options: SceneOptions) -> Mat4 {
    let fish = &state.fish;
    let t = state.time;
    let angle = TAU * t;
    let wobble = if options.reduced_motion { 0.0 } else { 1.0 };

    rot_y(wobble * 0.15 * angle.sin())
        * translate(0.0, fish.vert, fish.horz)
        * rot_x(fish.horz_tilt + wobble * 0.2 * angle.sin())
        * rot_z(fish.vert_tilt + wobble * 0.2 * t.sin())
}

fn draw_fish(scene: &mut Scene, state: &GameState, options: SceneOptions) {
    let fish = fish_matrix(state, options);
    let body = if state.field.inbound() {
        Material::FishBodyDanger
    } else {
        Material::FishBody
    };
    scene.push(Mesh::FishBody, body, fish);

    for side in [1.0, -1.0] {
        let eye = fish * translate(1.0, 0.5, 0.4 * side) * scale(0.1, 0.1, 0.1);
        scene.push(Mesh::Eye, Material::FishEye, eye);
    }

    let mouth = fish * translate(1.59, 0.1, 0.0) * scale(0.3, 0.3, 0.3);
    scene.push(Mesh::FishMouth, Material::FishMouth, mouth);

    // Wings flap between rest and 5% of a turn
    const HALF_FISH_WIDTH: f32 = 0.85;
    let angle = TAU * state.time;
    let flap = (0.5 - 0.5 * angle.cos()) * TAU * 0.05;
    let left = fish * translate(0.0, 0.0, -HALF_FISH_WIDTH) * rot_y(-flap);
    let right = fish * translate(0.0, 0.0, HALF_FISH_WIDTH) * rot_y(flap);
    scene.push(Mesh::FishWingLeft, Material::FishWing, left);
    scene.push(Mesh::FishWingRight, Material::FishWing, right);

    let tail = fish * translate(-3.0, 0.0, 0.0) * rot_y(-0.5 * angle.sin()) * scale(1.0, 0.6, 0.6);
    let left_tail = tail * rot_y(1.0) * translate(0.0, 0.0, 0.5);
    let right_tail = tail * rot_y(-1.0) * translate(0.0, 0.0, -0.5);
    scene.push(Mesh::FishWingLeft, Material::FishWing, left_tail);
    scene.push(Mesh::FishWingRight, Material::FishWing, right_tail);
}

fn draw_crosshair(scene: &mut Scene, state: &GameState) {
    let vertical = translate(15.0, state.fish.vert, state.fish.horz) * scale(0.1, 0.5, 0.1);
    let horizontal = vertical * scale(1.0, 0.2, 5.0);
    scene.push(Mesh::Cube, Material::Crosshair, vertical);
    scene.push(Mesh::Cube, Material::Crosshair, horizontal);
}

fn draw_environment(scene: &mut Scene, state: &GameState) {
    let t = state.time;

    if t >= SKY_FRONT_FROM {
        let front = translate(200.0, SKY_HEIGHT_OFFSET, -20.0 * (t * 2.0).sin())
            * scale(0.1, 125.0, 400.0);
        scene.push(Mesh::Cube, Material::Sky, front);
    }

    // Behind the fish: only seen while the camera swings in, or side-on
    if t < SKY_BACK_UNTIL || state.view == ViewMode::FishView {
        let back = translate(-200.0, SKY_HEIGHT_OFFSET, -20.0 * (t / 1.4).sin())
            * scale(0.1, 125.0, 400.0);
        scene.push(Mesh::Cube, Material::Sky, back);
    }

    let side_z = if state.fish.horz > 2.0 { 200.0 } else { -200.0 };
    let side = translate(0.0, -10.0 + SKY_HEIGHT_OFFSET, side_z) * scale(400.0, 125.0, 0.1);
    scene.push(Mesh::Cube, Material::Sky, side);

    let floor = translate(0.0, -10.0 + SKY_HEIGHT_OFFSET, 0.0) * scale(150.0, 1.0, 200.0);
    let roof = translate(0.0, 70.0 + SKY_HEIGHT_OFFSET, 0.0) * scale(-150.0, 1.0, 200.0);
    scene.push(Mesh::Cube, Material::Floor, floor);
    scene.push(Mesh::Cube, Material::Roof, roof);
}

fn draw_debris(scene: &mut Scene, state: &GameState) {
    for debris in state.field.debris() {
        let transform = translate(debris.depth, debris.vert, debris.horz)
            * rot_x(debris.tilt_x)
            * rot_y(debris.tilt_y)
            * rot_z(debris.tilt_z);
        let (mesh, material) = match debris.kind {
            DebrisKind::Mine => (Mesh::Mine, Material::Mine),
            DebrisKind::Skull => (Mesh::Skull, Material::Skull),
        };
        scene.push(mesh, material, transform);
    }
}

/// One bobbing skull per remaining life, pinned to the top left of the view
fn draw_lives(scene: &mut Scene, state: &GameState) {
    if state.time < UI_DELAY {
        return;
    }
    let t = state.time;
    let screen = scene.camera.screen_matrix();
    for i in 0..state.fish.lives {
        let i = f32::from(i);
        let icon = screen
            * translate(-1.5 + 0.3 * i, 0.75 + 0.05 * (TAU * t / 3.0 + i).sin(), -3.0)
            * rot_y(-FRAC_PI_2)
            * scale(0.1, 0.1, 0.1);
        scene.push(Mesh::Skull, Material::Skull, icon);
    }
}

/// Skulls with glowing eyes orbiting the view
fn draw_death_scene(scene: &mut Scene, state: &GameState) {
    let t = state.time;
    let screen = Camera::fish_view(&state.fish).screen_matrix();
    for i in 0..DEATH_SKULLS {
        let phase = 2.0 * PI * i as f32 / DEATH_SKULLS as f32 + t;
        let skull = screen
            * translate(3.0 * phase.cos(), 3.0 * phase.sin(), -8.0)
            * rot_y(-FRAC_PI_2)
            * scale(0.5, 0.5, 0.5);
        scene.push(Mesh::Skull, Material::Skull, skull);
        scene.push(Mesh::Eye, Material::DeathEye, skull);
    }
}
