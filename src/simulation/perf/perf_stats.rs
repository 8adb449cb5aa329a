use wasm_bindgen::prelude::*;

use crate::systems::collision::perf::{reset_collision_perf_counters, take_collision_perf_counters};

/// Running totals over every resolve since perf metrics were enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct ResolveStats {
    pub(super) resolves: u32,
    pub(super) last_resolve_ms: f64,
    pub(super) total_resolve_ms: f64,
    pub(super) max_resolve_ms: f64,
    pub(super) box_scans: u32,
    pub(super) trace_points: u32,
}

impl ResolveStats {
    pub(crate) fn reset(&mut self) {
        *self = ResolveStats::default();
    }

    /// Run one resolve and fold its wall time and scan counters into the totals.
    pub(crate) fn time<T>(&mut self, resolve: impl FnOnce() -> T) -> T {
        reset_collision_perf_counters();
        let started = now_ms();
        let out = resolve();
        let elapsed = now_ms() - started;
        let (scans, points) = take_collision_perf_counters();
        self.record(elapsed, scans, points);
        out
    }

    pub(crate) fn record(&mut self, ms: f64, box_scans: u64, trace_points: u64) {
        self.resolves = self.resolves.saturating_add(1);
        self.last_resolve_ms = ms;
        self.total_resolve_ms += ms;
        self.max_resolve_ms = self.max_resolve_ms.max(ms);
        self.box_scans = self.box_scans.saturating_add(box_scans.min(u32::MAX as u64) as u32);
        self.trace_points = self.trace_points.saturating_add(trace_points.min(u32::MAX as u64) as u32);
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[wasm_bindgen]
impl ResolveStats {
    #[wasm_bindgen(getter)]
    pub fn resolves(&self) -> u32 { self.resolves }
    #[wasm_bindgen(getter)]
    pub fn last_resolve_ms(&self) -> f64 { self.last_resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn total_resolve_ms(&self) -> f64 { self.total_resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn max_resolve_ms(&self) -> f64 { self.max_resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn box_scans(&self) -> u32 { self.box_scans }
    #[wasm_bindgen(getter)]
    pub fn trace_points(&self) -> u32 { self.trace_points }

    /// Mean wall time per resolve (0 when nothing was recorded)
    #[wasm_bindgen(getter)]
    pub fn mean_resolve_ms(&self) -> f64 {
        if self.resolves == 0 {
            0.0
        } else {
            self.total_resolve_ms / self.resolves as f64
        }
    }
}
