#![cfg(not(target_arch = "wasm32"))]

use pixel_collision::core::logs::setup_logging;
use pixel_collision::{ActorState, LevelCore, Point, Rect};

#[test]
fn logging_installs_once_and_resolves_still_run() {
    setup_logging("pixel_collision=trace").expect("first subscriber installs");
    assert!(setup_logging("info").is_err(), "a second global subscriber is refused");

    // Trace-level events from the resolver go through the installed subscriber.
    let mut level = LevelCore::new(32);
    let mut actor = ActorState::new(Point::new(0, 0), Rect::sized(8, 8));
    let (c, colliding) = level.resolve(&mut actor, Point::new(4, 4));
    assert!(!colliding);
    assert_eq!(c.move_to, Point::new(4, 4));
}
