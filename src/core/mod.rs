//! Core building blocks shared by every collision system

pub mod config;
pub mod error;
pub mod geom;
pub mod line;
pub mod logs;

pub use config::CollisionConfig;
pub use error::{CollisionError, Result};
pub use geom::{Point, Rect};
pub use line::{iter_line, LineIter};
