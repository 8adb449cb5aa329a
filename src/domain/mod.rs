pub mod actor;
pub mod swatch;

pub use actor::{Actor, ActorOffset, ActorState};
pub use swatch::Swatch;
