//! Grid - swatch lookup by level pixel
//!
//! The resolver only ever asks "which swatch is at this point?" through the
//! [`Grid`] trait. [`SwatchGrid`] is an in-memory chunked store implementing it:
//! chunks are allocated on first write, and each chunk keeps a dense array of
//! palette ids so lookups stay a hash probe plus an index.
//!
//! Coordinates are unbounded in both directions, negative included.

use std::collections::HashMap;

use crate::core::error::{CollisionError, Result};
use crate::core::geom::{Point, Rect};
use crate::domain::swatch::Swatch;

mod chunk;
mod indexing;

pub use chunk::Chunk;
pub use indexing::ChunkCoord;

/// Default chunk edge length in pixels
pub const DEFAULT_CHUNK_SIZE: u32 = 128;

/// Read-only swatch lookup used by the edge scanner.
///
/// The four edge scans query the grid concurrently, hence `Sync`. A point
/// with nothing painted returns [`CollisionError::NotFound`].
pub trait Grid: Sync {
    fn get(&self, point: Point) -> Result<&Swatch>;
}

pub struct SwatchGrid {
    chunk_size: u32,
    palette: Vec<Swatch>,
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl Default for SwatchGrid {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl SwatchGrid {
    pub fn new(chunk_size: u32) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            chunk_size,
            palette: Vec::new(),
            chunks: HashMap::new(),
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> u32 { self.chunk_size }

    #[inline]
    pub fn chunk_count(&self) -> usize { self.chunks.len() }

    pub fn pixel_count(&self) -> usize {
        self.chunks.values().map(Chunk::len).sum()
    }

    // === Palette ===

    /// Register a swatch and return its palette index.
    pub fn add_swatch(&mut self, swatch: Swatch) -> usize {
        self.palette.push(swatch);
        self.palette.len() - 1
    }

    pub fn swatch(&self, index: usize) -> Option<&Swatch> {
        self.palette.get(index)
    }

    pub fn palette(&self) -> &[Swatch] {
        &self.palette
    }

    // === Painting ===

    /// Paint one pixel with the swatch at `index`.
    pub fn set(&mut self, point: Point, index: usize) -> Result<()> {
        // Ids are stored off by one so 0 can mean empty.
        if index >= self.palette.len() || index >= u16::MAX as usize {
            return Err(CollisionError::UnknownSwatch(index));
        }
        let id = index as u16 + 1;

        let (coord, local) = self.locate(point);
        let size = self.chunk_size;
        self.chunks
            .entry(coord)
            .or_insert_with(|| Chunk::new(size))
            .set(local, id);
        Ok(())
    }

    /// Paint every pixel in `x..x+w`, `y..y+h`.
    pub fn fill_rect(&mut self, rect: Rect, index: usize) -> Result<()> {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.set(Point::new(x, y), index)?;
            }
        }
        Ok(())
    }

    /// Clear a pixel. Returns whether anything was painted there.
    pub fn erase(&mut self, point: Point) -> bool {
        let (coord, local) = self.locate(point);
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return false;
        };
        let erased = chunk.clear(local);
        if chunk.is_empty() {
            self.chunks.remove(&coord);
        }
        erased
    }

    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}

impl Grid for SwatchGrid {
    fn get(&self, point: Point) -> Result<&Swatch> {
        let (coord, local) = self.locate(point);
        self.chunks
            .get(&coord)
            .and_then(|chunk| chunk.get(local))
            .and_then(|id| self.palette.get(id as usize - 1))
            .ok_or_else(|| CollisionError::NotFound(point))
    }
}
