use wasm_bindgen::prelude::*;

use crate::core::geom::{Point, Rect};
use crate::domain::actor::ActorState;
use crate::domain::swatch::Swatch;
use crate::systems::collision::Collide;

use super::perf_stats::ResolveStats;
use super::LevelCore;

/// A sprite handed to the resolver from JS
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct Sprite {
    state: ActorState,
}

#[wasm_bindgen]
impl Sprite {
    /// Sprite at (x, y) drawn at w x h, with no declared hitbox
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            state: ActorState::new(Point::new(x, y), Rect::sized(w, h)),
        }
    }

    /// Declare a hitbox relative to the sprite's top-left corner
    pub fn set_hitbox(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.state.hitbox = Rect::new(x, y, w, h);
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.state.move_to(Point::new(x, y));
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 { self.state.position.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 { self.state.position.y }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 { self.state.size.w }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 { self.state.size.h }

    #[wasm_bindgen(getter)]
    pub fn grounded(&self) -> bool { self.state.grounded }
    #[wasm_bindgen(setter)]
    pub fn set_grounded(&mut self, grounded: bool) { self.state.grounded = grounded; }
}

/// Flattened `Collide` for JS
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct ResolveResult {
    collide: Collide,
    colliding: bool,
}

#[wasm_bindgen]
impl ResolveResult {
    #[wasm_bindgen(getter)]
    pub fn colliding(&self) -> bool { self.colliding }
    #[wasm_bindgen(getter)]
    pub fn move_x(&self) -> i32 { self.collide.move_to.x }
    #[wasm_bindgen(getter)]
    pub fn move_y(&self) -> i32 { self.collide.move_to.y }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> bool { self.collide.top }
    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> bool { self.collide.bottom }
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> bool { self.collide.left }
    #[wasm_bindgen(getter)]
    pub fn right(&self) -> bool { self.collide.right }

    /// Name of the fire swatch touched, if any
    #[wasm_bindgen(getter)]
    pub fn in_fire(&self) -> Option<String> { self.collide.in_fire.clone() }
    #[wasm_bindgen(getter)]
    pub fn in_water(&self) -> bool { self.collide.in_water }
    #[wasm_bindgen(getter)]
    pub fn is_slippery(&self) -> bool { self.collide.is_slippery }
}

#[wasm_bindgen]
pub struct CollisionWorld {
    core: LevelCore,
}

#[wasm_bindgen]
impl CollisionWorld {
    /// Create an empty level stored in `chunk_size` x `chunk_size` chunks
    #[wasm_bindgen(constructor)]
    pub fn new(chunk_size: u32) -> Result<CollisionWorld, JsValue> {
        if chunk_size == 0 {
            return Err(JsValue::from_str("chunk size must be positive"));
        }
        Ok(Self {
            core: LevelCore::new(chunk_size),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> u32 { self.core.pixel_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn slope_max_height(&self) -> i32 { self.core.config().slope_max_height }

    /// Register a swatch and return its palette index
    pub fn add_swatch(
        &mut self,
        name: String,
        solid: bool,
        semisolid: bool,
        fire: bool,
        water: bool,
        slippery: bool,
    ) -> u32 {
        self.core.add_swatch(Swatch { name, solid, semisolid, fire, water, slippery }) as u32
    }

    /// Register a swatch from its JSON form, e.g. `{"name":"lava","fire":true}`
    pub fn add_swatch_json(&mut self, json: String) -> Result<u32, JsValue> {
        self.core
            .add_swatch_json(&json)
            .map(|idx| idx as u32)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, swatch: u32) -> Result<(), JsValue> {
        self.core
            .set_pixel(Point::new(x, y), swatch as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, swatch: u32) -> Result<(), JsValue> {
        self.core
            .fill_rect(Rect::new(x, y, w, h), swatch as usize)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn erase_pixel(&mut self, x: i32, y: i32) -> bool {
        self.core.erase_pixel(Point::new(x, y))
    }

    /// Remove every painted pixel (the palette is kept)
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_slope_max_height(&mut self, height: i32) -> Result<(), JsValue> {
        self.core
            .set_slope_max_height(height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Enable or disable per-resolve perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> ResolveStats {
        self.core.get_perf_stats()
    }

    /// Resolve the sprite's move toward (target_x, target_y).
    ///
    /// Updates the sprite's grounded flag; the caller applies `move_x/move_y`.
    pub fn resolve(&mut self, sprite: &mut Sprite, target_x: i32, target_y: i32) -> ResolveResult {
        let (collide, colliding) = self.core.resolve(&mut sprite.state, Point::new(target_x, target_y));
        ResolveResult { collide, colliding }
    }

    /// Intersecting pairs among boxes packed as [x, y, w, h, x, y, w, h, ...].
    ///
    /// Returns pairs packed as [i, j, i, j, ...]. A trailing partial box is ignored.
    pub fn overlapping_pairs(&self, boxes: Vec<i32>) -> Vec<u32> {
        let rects: Vec<Rect> = boxes
            .chunks_exact(4)
            .map(|b| Rect::new(b[0], b[1], b[2], b[3]))
            .collect();

        self.core
            .overlapping_pairs(&rects)
            .into_iter()
            .flat_map(|pair| [pair.0 as u32, pair.1 as u32])
            .collect()
    }
}
