//! Ocean Commotion entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use ocean_commotion::highscores::format_time;
    use ocean_commotion::platform::Controls;
    use ocean_commotion::scene::{Material, Mesh, SceneOptions, build_scene};
    use ocean_commotion::sim::{GameState, ViewMode, autopilot, tick};
    use ocean_commotion::{HighScores, Settings};

    // The page hosts the WebGL renderer; these forward to it if present
    #[wasm_bindgen(inline_js = "
        export function submit_frame(camera, light, draws) {
            const host = window.oceanCommotion;
            if (host && host.submitFrame) {
                host.submitFrame(camera, light, draws);
            }
        }

        export function register_assets(manifest) {
            const host = window.oceanCommotion;
            if (host && host.registerAssets) {
                host.registerAssets(JSON.parse(manifest));
            }
        }
    ")]
    extern "C" {
        fn submit_frame(camera: &[f32], light: &[f32], draws: &[f32]);
        fn register_assets(manifest: &str);
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        controls: Controls,
        settings: Settings,
        high_scores: HighScores,
        last_time: f64,
        /// Autopilot plays instead of the keyboard
        demo_mode: bool,
        /// Current run already entered into the leaderboard
        run_recorded: bool,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: GameState::with_settings(seed, &settings),
                controls: Controls::new(),
                settings,
                high_scores: HighScores::load(),
                last_time: 0.0,
                demo_mode: false,
                run_recorded: false,
            }
        }

        fn update(&mut self, dt: f32) {
            let mut input = self.controls.take_frame_input();
            if self.demo_mode {
                input.direction = autopilot::steer(&self.state);
            }
            if input.reset {
                self.run_recorded = false;
            }

            tick(&mut self.state, &input, dt);

            if input.toggle_view {
                self.settings.fish_view = self.state.view == ViewMode::FishView;
                self.settings.save();
            }

            if self.state.is_game_over() && !self.run_recorded {
                self.run_recorded = true;
                let survived = self.state.survival_time();
                if let Some(rank) = self.high_scores.add_run(survived, js_sys::Date::now()) {
                    log::info!("New best time #{} ({})", rank, format_time(survived));
                    self.high_scores.save();
                }
            }
        }

        fn render(&self) {
            let scene = build_scene(&self.state, SceneOptions::from(&self.settings));
            let cam = scene.camera;
            let camera = [
                cam.eye.x, cam.eye.y, cam.eye.z, cam.target.x, cam.target.y, cam.target.z,
                cam.up.x, cam.up.y, cam.up.z,
            ];
            let l = scene.light;
            let light = [
                l.position.x, l.position.y, l.position.z, l.position.w, l.color.x, l.color.y,
                l.color.z, l.size,
            ];
            submit_frame(&camera, &light, &scene.draw_buffer());
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.state.snapshot();

            if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
                el.set_text_content(Some(&snapshot.lives.to_string()));
            }

            if let Some(el) = document.query_selector("#hud-time .hud-value").ok().flatten() {
                el.set_text_content(Some(&format_time(snapshot.survival_time)));
            }

            if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
                let best = self.high_scores.best().map(format_time).unwrap_or_default();
                el.set_text_content(Some(&best));
            }

            if let Some(el) = document.get_element_by_id("demo-badge") {
                let class = if self.demo_mode { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if snapshot.game_over {
                    let _ = el.set_attribute("class", "");
                    if let Some(time_el) = document.get_element_by_id("final-time") {
                        time_el.set_text_content(Some(&format_time(snapshot.survival_time)));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// JSON list of meshes and materials for the host to load up front
    fn asset_manifest() -> String {
        let meshes: Vec<_> = Mesh::ALL
            .iter()
            .map(|m| serde_json::json!({ "id": *m as u32, "name": m, "asset": m.asset() }))
            .collect();
        let materials: Vec<_> = Material::ALL.iter().map(|m| m.info()).collect();
        serde_json::json!({ "meshes": meshes, "materials": materials }).to_string()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Ocean Commotion starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        register_assets(&asset_manifest());

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_focus_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Ocean Commotion running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down: movement, reset, view toggle, demo toggle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if key == "i" || key == "I" {
                    g.demo_mode = !g.demo_mode;
                    log::info!("Demo mode: {}", g.demo_mode);
                    return;
                }
                if g.controls.key_down(&key) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release held direction
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().controls.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Key-up events are lost while unfocused, so drop held keys on blur
    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().controls.release_all();
                log::info!("Window blurred, released held keys");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(document) = window.document() {
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().controls.release_all();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ocean Commotion (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let max_seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0);

    run_demo(seed, max_seconds);
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Let the autopilot play one session and report how it went
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64, max_seconds: f32) {
    use ocean_commotion::highscores::format_time;
    use ocean_commotion::scene::{SceneOptions, build_scene};
    use ocean_commotion::sim::{FrameInput, GameState, autopilot, tick};
    use ocean_commotion::{HighScores, Settings};

    const FRAME_DT: f32 = 1.0 / 60.0;

    let settings = Settings::load();
    let mut state = GameState::with_settings(seed, &settings);
    let mut high_scores = HighScores::load();

    let mut hits = 0u32;
    let mut inbound_frames = 0u32;
    let mut recycled = 0u32;

    while state.time < max_seconds && !state.is_game_over() {
        let input = FrameInput {
            direction: autopilot::steer(&state),
            ..Default::default()
        };
        let report = tick(&mut state, &input, FRAME_DT);
        hits += report.hits;
        recycled += report.recycled;
        if report.inbound {
            inbound_frames += 1;
        }
    }

    let scene = build_scene(&state, SceneOptions::from(&settings));

    println!("\nSeed {}:", seed);
    println!("  survived      {}", format_time(state.survival_time()));
    println!("  lives left    {}", state.fish.lives);
    println!("  hits taken    {}", hits);
    println!("  close calls   {} frames", inbound_frames);
    println!("  recycled      {}", recycled);
    println!("  drift rate    {:.1}", state.field.wave_period());
    println!("  draw calls    {}", scene.commands.len());

    if let Some(rank) = high_scores.add_run(state.survival_time(), 0.0) {
        log::info!("Run ranked #{}", rank);
        high_scores.save();
    }
}
