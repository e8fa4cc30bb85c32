//! Hex board geometry, stone placement and win detection
//!
//! The board is an N x N rhombus stored row-major. Red connects the top row
//! to the bottom row, Blue connects the left column to the right column.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connectivity;
use crate::notation::col_label;

/// Default board side length
pub const DEFAULT_SIZE: usize = 11;

/// Smallest supported board side
pub const MIN_SIZE: usize = 2;

/// Largest supported board side (one letter per column)
pub const MAX_SIZE: usize = 26;

/// Neighbor offsets (dr, dc) on the rhombus
pub const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Connects top <-> bottom, moves first
    Red,
    /// Connects left <-> right
    Blue,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::Red => 'R',
            Side::Blue => 'B',
        }
    }

    /// Is `coord` on the edge this side starts from (row 0 / column 0)?
    pub fn on_near_edge(self, coord: Coord) -> bool {
        match self {
            Side::Red => coord.row == 0,
            Side::Blue => coord.col == 0,
        }
    }

    /// Is `coord` on the edge this side must reach?
    pub fn on_far_edge(self, coord: Coord, size: usize) -> bool {
        match self {
            Side::Red => coord.row == size - 1,
            Side::Blue => coord.col == size - 1,
        }
    }

    /// Cells of the near goal edge, in increasing index order
    pub fn near_edge(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).map(move |i| match self {
            Side::Red => Coord::new(0, i),
            Side::Blue => Coord::new(i, 0),
        })
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Side),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Stone(side) => side.symbol(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Board coordinate (row, column), both zero-based
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Board state (clone to explore hypothetical moves)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_SIZE..=MAX_SIZE`; every column
    /// needs a letter.
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "board size {} outside {}..={}",
            size,
            MIN_SIZE,
            MAX_SIZE
        );
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell contents, `None` when out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.in_bounds(coord.row, coord.col) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Cell contents for a coordinate already known to be on the board
    pub(crate) fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    /// Place a stone. Returns false (board untouched) when the cell is
    /// out of bounds or already occupied.
    pub fn place(&mut self, row: usize, col: usize, side: Side) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.index(Coord::new(row, col));
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Stone(side);
        true
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.cell(c).is_empty()).collect()
    }

    /// In-bounds hex neighbors of (row, col)
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<Coord> {
        let mut out = Vec::with_capacity(6);
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.in_bounds(r, c) {
                out.push(Coord::new(r, c));
            }
        }
        out
    }

    pub fn check_win(&self, side: Side) -> bool {
        connectivity::has_won(self, side)
    }

    /// Winner if either side has connected its edges
    pub fn winner(&self) -> Option<Side> {
        [Side::Red, Side::Blue]
            .into_iter()
            .find(|&side| self.check_win(side))
    }

    pub fn stone_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Stone(side))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| Coord::new(r, c)))
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

/// ASCII rendering, each row shifted right to show the hex slant:
///
/// ```text
///     A  B  C
///  1  .  .  .
///   2  .  R  .
///    3  .  .  B
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.size).map(|c| col_label(c).to_string()).collect();
        writeln!(f, "    {}", header.join("  "))?;

        for r in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|c| self.cell(Coord::new(r, c)).symbol().to_string())
                .collect();
            writeln!(f, "{}{:>2}  {}", " ".repeat(r), r + 1, cells.join("  "))?;
        }

        write!(f, "\n  Red (R): top <-> bottom  |  Blue (B): left <-> right")
    }
}

// ============================================================================
// TESTS
// ============================================================================
