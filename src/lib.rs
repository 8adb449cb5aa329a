//! Pixel Collision - per-pixel platformer collision resolution in WASM
//!
//! Resolves an actor's intended movement for one tick against a level painted
//! pixel by pixel with swatches (solid, semisolid, fire, water, slippery).
//!
//! Architecture:
//! - core/          - Geometry, DDA lines, config, errors
//! - domain/        - Actors and swatches
//! - spatial/       - Chunked swatch grid
//! - systems/       - Edge scanning, movement resolution, actor overlap
//! - simulation/    - Level orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
///
/// Installs the panic hook and routes `tracing` output at `info` and above to
/// the browser console. Use [`init_logging`] for a different filter.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    if crate::core::logs::setup_logging("info").is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
    web_sys::console::log_1(&"Pixel collision engine initialized".into());
}

/// Install the tracing subscriber with a filter such as `"pixel_collision=trace"`.
///
/// Call this before [`init`]; only the first subscriber installed takes effect.
#[wasm_bindgen]
pub fn init_logging(filter: String) -> Result<(), JsValue> {
    crate::core::logs::setup_logging(&filter).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{CollisionConfig, CollisionError, Point, Rect, Result};
pub use domain::{Actor, ActorOffset, ActorState, Swatch};
pub use simulation::{CollisionWorld, LevelCore, ResolveResult, ResolveStats, Sprite};
pub use spatial::{Grid, SwatchGrid};
pub use systems::collision::{between_boxes, can_step_up, collides_with_grid, Collide, IndexTuple, Side};
