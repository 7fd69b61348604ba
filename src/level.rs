use crate::components::{Dir, Pos};

pub const GRID_W: usize = 19;
pub const GRID_H: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Pellet,
}

/// The maze. Built once per episode; pellets turn into empty cells as they
/// are eaten and nothing else ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// Builds the standard maze: a walled border filled with pellets, a
    /// vertical wall down the middle column and a horizontal wall across the
    /// middle row, each with a single opening at the center, and no pellets
    /// under the four corner bonuses.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(3);
        let height = height.max(3);
        let mut tiles = vec![vec![Tile::Pellet; width]; height];

        for x in 0..width {
            tiles[0][x] = Tile::Wall;
            tiles[height - 1][x] = Tile::Wall;
        }
        for row in tiles.iter_mut() {
            row[0] = Tile::Wall;
            row[width - 1] = Tile::Wall;
        }

        let mid_x = width / 2;
        let mid_y = height / 2;
        for (y, row) in tiles.iter_mut().enumerate().take(height.saturating_sub(2)).skip(2) {
            if y != mid_y {
                row[mid_x] = Tile::Wall;
            }
        }
        for x in 2..width.saturating_sub(2) {
            if x != mid_x {
                tiles[mid_y][x] = Tile::Wall;
            }
        }

        for corner in bonus_corners(width, height) {
            tiles[corner.y as usize][corner.x as usize] = Tile::Empty;
        }

        Self {
            width,
            height,
            tiles,
        }
    }

    /// Parses an ASCII layout: `#` is a wall, `.` a pellet, anything else
    /// empty floor. Short rows are padded with walls.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let tiles = rows
            .iter()
            .map(|row| {
                let mut line: Vec<Tile> = row
                    .chars()
                    .map(|c| match c {
                        '#' => Tile::Wall,
                        '.' => Tile::Pellet,
                        _ => Tile::Empty,
                    })
                    .collect();
                line.resize(width, Tile::Wall);
                line
            })
            .collect();
        Self {
            width,
            height: rows.len(),
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `pos`, or `None` past the edge.
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        self.tiles.get(y)?.get(x).copied()
    }

    pub fn is_traversable(&self, pos: Pos) -> bool {
        matches!(self.tile(pos), Some(Tile::Empty | Tile::Pellet))
    }

    /// Clears a pellet at `pos`. Returns whether there was one to eat.
    pub fn eat(&mut self, pos: Pos) -> bool {
        if self.tile(pos) != Some(Tile::Pellet) {
            return false;
        }
        self.tiles[pos.y as usize][pos.x as usize] = Tile::Empty;
        true
    }

    pub fn pellets_left(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&tile| tile == Tile::Pellet)
            .count()
    }
}

/// The four interior corners of the playable area.
pub fn bonus_corners(width: usize, height: usize) -> [Pos; 4] {
    let right = width as i32 - 2;
    let bottom = height as i32 - 2;
    [
        Pos::new(1, 1),
        Pos::new(right, 1),
        Pos::new(1, bottom),
        Pos::new(right, bottom),
    ]
}

pub fn can_move(grid: &Grid, pos: Pos, dir: Dir) -> bool {
    grid.is_traversable(pos.step(dir))
}

/// Two entities touch when they share a cell.
pub fn collides(a: Pos, b: Pos) -> bool {
    a == b
}
