//! Collision system - level geometry and actor overlap
//!
//! - bounding/  - actor box helpers
//! - scan/      - four-edge grid scanner
//! - resolve/   - movement resolver (stuck recovery, caps, slopes)
//! - actors/    - pairwise actor overlap
//!
//! Nothing here allocates per pixel or performs I/O; a resolution call always
//! completes within the tick that invoked it.

pub mod actors;
pub mod bounding;
pub mod collide;
pub mod perf;
pub mod resolve;
pub mod scan;

pub use actors::{between_boxes, compare_boxes, overlap, overlap_relative, BetweenBoxes, BoxCollision, IndexTuple};
pub use bounding::{bounding_rect, bounding_rect_hitbox, effective_hitbox, size_plus_hitbox};
pub use collide::{Collide, Side};
pub use resolve::{box_collides_with_grid, can_step_up, collides_with_grid};
pub use scan::{scan_bounding_box, scan_grid_line, CollisionBox, EdgeScan};
