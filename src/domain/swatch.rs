use serde::{Deserialize, Serialize};

/// A named surface material painted into the level
///
/// Only `solid` and `semisolid` swatches block movement. Fire, water and
/// slippery are attributes reported to gameplay code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    pub name: String,
    #[serde(default)]
    pub solid: bool,
    /// Blocks from above and the sides but never the Top edge.
    #[serde(default)]
    pub semisolid: bool,
    #[serde(default)]
    pub fire: bool,
    #[serde(default)]
    pub water: bool,
    #[serde(default)]
    pub slippery: bool,
}

impl Swatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn solid(name: impl Into<String>) -> Self {
        Self { solid: true, ..Self::new(name) }
    }

    pub fn semisolid(name: impl Into<String>) -> Self {
        Self { semisolid: true, ..Self::new(name) }
    }

    pub fn fire(name: impl Into<String>) -> Self {
        Self { fire: true, ..Self::new(name) }
    }

    pub fn water(name: impl Into<String>) -> Self {
        Self { water: true, ..Self::new(name) }
    }

    #[inline]
    pub fn blocks(&self) -> bool {
        self.solid || self.semisolid
    }
}
