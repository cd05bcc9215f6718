//! Auto Racer entry point
//!
//! Browser builds run the game loop on `requestAnimationFrame`; native builds
//! run a headless autopilot round and report the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use auto_racer::renderer::RenderState;
    use auto_racer::{Game, Tuning};

    /// Browser-side game instance
    struct App {
        game: Game,
        render_state: Option<RenderState>,
    }

    impl App {
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.game.state()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            let hud = self.game.hud();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("time") {
                el.set_text_content(Some(&hud.time));
            }
            if let Some(el) = document.get_element_by_id("speed") {
                el.set_text_content(Some(&hud.speed));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match hud.banner {
                    Some((message, prompt)) => {
                        let _ = el.class_list().remove_1("hidden");
                        if let Some(msg_el) = document.get_element_by_id("end-message") {
                            msg_el.set_text_content(Some(message));
                        }
                        if let Some(prompt_el) = document.get_element_by_id("restart-prompt") {
                            prompt_el.set_text_content(Some(prompt));
                        }
                    }
                    None => {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
            }
        }
    }

    /// Optional `<script id="tuning" type="application/json">` override
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::error!("Ignoring tuning overrides: {}", e);
                Tuning::default()
            }
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }
        log::info!("Auto Racer starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #game canvas");
            return;
        };

        let tuning = load_tuning(&document);
        let playfield = (tuning.screen_width, tuning.screen_height);

        // Backing store at device resolution, playfield aspect
        let dpr = window.device_pixel_ratio();
        let width = (playfield.0 as f64 * dpr) as u32;
        let height = (playfield.1 as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let mut game = match Game::seeded(tuning, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Invalid tuning: {}", e);
                return;
            }
        };
        game.restart(now_ms());
        let app = Rc::new(RefCell::new(App {
            game,
            render_state: None,
        }));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                match instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await
                {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height, playfield).await
                        {
                            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("Failed to get adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_input_handlers(app.clone());

        // Start game loop
        request_animation_frame(app);
        log::info!("Auto Racer running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_event(&event.key(), pressed) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.game.frame(time);
            a.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                a.update_hud(&document);
            }
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Auto Racer (native) starting...");
    log::info!("Native mode runs a headless autopilot round - run with `trunk serve` to play");

    let tuning = native::load_tuning();
    let seed = std::env::var("AUTO_RACER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let game = match native::autopilot_round(tuning, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            std::process::exit(1);
        }
    };
    let hud = game.hud();
    println!("\nScore {}  Time {}  Speed {}", hud.score, hud.time, hud.speed);
    if let Some((message, _)) = hud.banner {
        println!("{}", message);
    }
    match serde_json::to_string_pretty(game.state()) {
        Ok(json) => log::debug!("Final state:\n{}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use auto_racer::sim::{GameState, Key, lane_center};
    use auto_racer::{Game, Tuning, TuningError};

    /// 60 Hz frames
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// How far ahead of the player the autopilot looks for traffic
    const LOOKAHEAD: f32 = 220.0;

    /// Tuning from the JSON file named by `AUTO_RACER_TUNING`, if any
    pub fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var("AUTO_RACER_TUNING") else {
            return Tuning::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    /// Play one round with a simple lane-dodging policy
    pub fn autopilot_round(tuning: Tuning, seed: u64) -> Result<Game, TuningError> {
        let mut game = Game::seeded(tuning, seed)?;
        game.key_down(Key::Throttle);

        let mut time = 0.0;
        game.restart(time);
        while game.state().is_running() {
            if let Some(key) = steer(game.state()) {
                game.key_down(key);
            }
            time += FRAME_MS;
            game.frame(time);
        }
        Ok(game)
    }

    fn lane_is_clear(state: &GameState, lane: u32) -> bool {
        let top = state.player.y - LOOKAHEAD;
        let bottom = state.player.y + state.player.height;
        !state
            .enemies
            .iter()
            .any(|e| e.lane == lane && e.y + e.height >= top && e.y <= bottom)
    }

    /// Step toward the nearest clear lane when traffic is ahead
    fn steer(state: &GameState) -> Option<Key> {
        let lane = state.player.lane;
        if lane_is_clear(state, lane) {
            return None;
        }
        let tuning = &state.tuning;
        let here = lane_center(tuning, lane);
        (0..tuning.lane_count)
            .filter(|&l| l != lane && lane_is_clear(state, l))
            .min_by(|&a, &b| {
                let da = (lane_center(tuning, a) - here).abs();
                let db = (lane_center(tuning, b) - here).abs();
                da.total_cmp(&db)
            })
            .map(|target| if target < lane { Key::Left } else { Key::Right })
    }
}
