use super::*;
use crate::core::error::CollisionError;
use crate::domain::actor::ActorState;

fn platform_level() -> LevelCore {
    let mut level = LevelCore::new(64);
    let stone = level.add_swatch(Swatch::solid("stone"));
    level.fill_rect(Rect::new(0, 500, 1000, 1), stone).unwrap();
    level
}

fn player(x: i32, y: i32) -> ActorState {
    ActorState::new(Point::new(x, y), Rect::sized(32, 32))
}

#[test]
fn painting_counts_pixels() {
    let mut level = platform_level();
    assert_eq!(level.pixel_count(), 1000);

    assert!(level.erase_pixel(Point::new(0, 500)));
    assert!(!level.erase_pixel(Point::new(0, 500)));
    assert_eq!(level.pixel_count(), 999);

    level.clear();
    assert_eq!(level.pixel_count(), 0);
    assert_eq!(level.grid().palette().len(), 1);
}

#[test]
fn set_pixel_rejects_unknown_swatch() {
    let mut level = LevelCore::new(16);
    let err = level.set_pixel(Point::new(1, 1), 3).unwrap_err();
    assert!(matches!(err, CollisionError::UnknownSwatch(3)));
}

#[test]
fn add_swatch_json_parses_flags() {
    let mut level = LevelCore::new(16);
    let idx = level.add_swatch_json(r#"{"name":"lava","fire":true}"#).unwrap();
    let lava = level.grid().swatch(idx).unwrap();
    assert_eq!(lava.name, "lava");
    assert!(lava.fire);
    assert!(!lava.solid);

    assert!(matches!(level.add_swatch_json("{not json"), Err(CollisionError::Json(_))));
}

#[test]
fn config_json_replaces_settings() {
    let mut level = LevelCore::new(16);
    level.load_config_json(r#"{"slopeMaxHeight":3}"#).unwrap();
    assert_eq!(level.config().slope_max_height, 3);

    // A rejected config leaves the old one in place.
    assert!(level.load_config_json(r#"{"slopeMaxHeight":-1}"#).is_err());
    assert!(level.set_slope_max_height(-5).is_err());
    assert_eq!(level.config().slope_max_height, 3);

    level.set_slope_max_height(12).unwrap();
    assert_eq!(level.config().slope_max_height, 12);
}

#[test]
fn resolve_walks_along_floor() {
    let mut level = platform_level();
    let mut actor = player(100, 468).with_grounded(true);

    let (c, colliding) = level.resolve(&mut actor, Point::new(110, 468));
    assert!(colliding);
    assert!(c.bottom);
    assert!(!c.left && !c.right && !c.top);
    assert_eq!(c.move_to, Point::new(110, 468));
    assert!(actor.grounded);
}

#[test]
fn resolve_lands_falling_actor() {
    let mut level = platform_level();
    let mut actor = player(100, 400);

    let (c, colliding) = level.resolve(&mut actor, Point::new(100, 490));
    assert!(colliding);
    assert!(c.bottom);
    assert_eq!(c.move_to, Point::new(100, 468));
    assert!(actor.grounded);
}

#[test]
fn perf_stats_only_recorded_when_enabled() {
    let mut level = platform_level();
    let mut actor = player(100, 468).with_grounded(true);

    level.resolve(&mut actor, Point::new(110, 468));
    assert_eq!(level.get_perf_stats().resolves(), 0);

    level.enable_perf_metrics(true);
    level.resolve(&mut actor, Point::new(110, 468));
    level.resolve(&mut actor, Point::new(110, 468));

    let stats = level.get_perf_stats();
    assert_eq!(stats.resolves(), 2);
    assert!(stats.box_scans() >= 2);
    assert!(stats.trace_points() >= 2);
    assert!(stats.total_resolve_ms() >= 0.0);
    assert!(stats.max_resolve_ms() >= stats.mean_resolve_ms());

    // Re-enabling starts a fresh window.
    level.enable_perf_metrics(false);
    level.enable_perf_metrics(true);
    assert_eq!(level.get_perf_stats().resolves(), 0);
}

#[test]
fn overlapping_pairs_are_ordered() {
    let level = LevelCore::new(16);
    let boxes = [
        Rect::new(0, 0, 10, 10),
        Rect::new(50, 50, 10, 10),
        Rect::new(5, 5, 10, 10),
        Rect::new(55, 55, 2, 2),
    ];
    assert_eq!(
        level.overlapping_pairs(&boxes),
        vec![IndexTuple(0, 2), IndexTuple(1, 3)]
    );
}
