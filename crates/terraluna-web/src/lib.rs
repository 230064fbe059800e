pub mod runner;

pub use runner::SceneRunner;

use std::cell::RefCell;

use terraluna_engine::{InputEvent, SceneConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. Returns `None` before `scene_init`.
fn with_runner<R>(f: impl FnOnce(&mut SceneRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("scene not initialized, call scene_init() first");
                None
            }
        }
    })
}

/// Resolve the startup config. A missing or invalid config is not fatal:
/// the defaults are used instead.
fn load_config(config_json: Option<String>, seed: Option<u64>) -> SceneConfig {
    let mut config = match config_json.as_deref() {
        None | Some("") => SceneConfig::default(),
        Some(json) => SceneConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("ignoring scene config: {err}");
            SceneConfig::default()
        }),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config
}

#[wasm_bindgen]
pub fn scene_init(width: u32, height: u32, seed: Option<u64>, config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = load_config(config_json, seed);
    let stars = config.star_count;
    let mut runner = SceneRunner::new(config, width, height);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("terraluna: initialized {width}x{height} with {stars} stars");
}

/// Run one frame using the browser clock.
#[wasm_bindgen]
pub fn scene_tick() {
    let now = js_sys::Date::now();
    with_runner(|r| r.tick(now));
}

/// Run one frame at an explicit host time in milliseconds.
#[wasm_bindgen]
pub fn scene_tick_at(now_ms: f64) {
    with_runner(|r| r.tick(now_ms));
}

#[wasm_bindgen]
pub fn scene_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

#[wasm_bindgen]
pub fn scene_resize(width: u32, height: u32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn scene_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn scene_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn scene_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner(|r| r.stars_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_stars_len() -> u32 {
    with_runner(|r| r.stars_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.star_count()).unwrap_or(0)
}

/// Changes whenever the star buffer must be re-uploaded.
#[wasm_bindgen]
pub fn get_star_generation() -> u32 {
    with_runner(|r| r.star_generation()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_camera_distance() -> f32 {
    with_runner(|r| r.camera_distance()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_zoom_phase() -> u32 {
    with_runner(|r| r.zoom_phase()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_scroll_count() -> u32 {
    with_runner(|r| r.scroll_count()).unwrap_or(0)
}

/// Scene description JSON. `texture_base` overrides the texture URL prefix.
#[wasm_bindgen]
pub fn get_scene_description(texture_base: Option<String>) -> Option<String> {
    with_runner(|r| r.scene_description(texture_base.as_deref()))
        .and_then(|scene| match scene.to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                log::error!("scene description: {err}");
                None
            }
        })
}
