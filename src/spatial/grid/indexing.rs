use super::*;

/// Chunk position in chunk units (not pixels)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
}

impl SwatchGrid {
    /// Split a level point into its chunk and the cell index inside that chunk.
    #[inline]
    pub(super) fn locate(&self, point: Point) -> (ChunkCoord, usize) {
        let size = self.chunk_size as i32;
        let coord = ChunkCoord {
            cx: point.x.div_euclid(size),
            cy: point.y.div_euclid(size),
        };
        let lx = point.x.rem_euclid(size) as usize;
        let ly = point.y.rem_euclid(size) as usize;
        (coord, ly * self.chunk_size as usize + lx)
    }
}
