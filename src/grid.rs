use crate::snake::Direction;

/// A grid coordinate, measured in cells rather than pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step towards `direction`. May be out of bounds.
    pub fn offset(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

/// The play field, `width` x `height` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Grid { width: width as i32, height: height as i32 }
    }

    /// Quantizes a play field given in pixels. Any remainder is dropped.
    pub fn from_play_field(field_width: u32, field_height: u32, segment_size: u32) -> Self {
        Grid::new(field_width / segment_size, field_height / segment_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell { x: self.width / 2, y: self.height / 2 }
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell { x, y }))
    }
}
