/// Dense square block of palette ids (0 = empty)
pub struct Chunk {
    cells: Vec<u16>,
    filled: usize,
}

impl Chunk {
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self { cells: vec![0; len], filled: 0 }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<u16> {
        match self.cells.get(idx) {
            Some(&id) if id != 0 => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn set(&mut self, idx: usize, id: u16) {
        debug_assert!(id != 0, "use clear() to empty a cell");
        if self.cells[idx] == 0 {
            self.filled += 1;
        }
        self.cells[idx] = id;
    }

    /// Empty a cell, returning whether it held anything.
    #[inline]
    pub fn clear(&mut self, idx: usize) -> bool {
        if self.cells[idx] == 0 {
            return false;
        }
        self.cells[idx] = 0;
        self.filled -= 1;
        true
    }

    #[inline]
    pub fn len(&self) -> usize { self.filled }

    #[inline]
    pub fn is_empty(&self) -> bool { self.filled == 0 }
}
