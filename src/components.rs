/// A cell coordinate. Signed so that probes past the edge of the grid are
/// representable and simply come back as "not traversable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub fn step(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.delta();
        Pos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Probe order for random walks.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// Corner bonus item. Picking one up sends every ghost back to the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    pub pos: Pos,
    pub collected: bool,
}

impl Bonus {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            collected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_screen_axes() {
        let origin = Pos::new(3, 3);
        assert_eq!(origin.step(Dir::Up), Pos::new(3, 2));
        assert_eq!(origin.step(Dir::Down), Pos::new(3, 4));
        assert_eq!(origin.step(Dir::Left), Pos::new(2, 3));
        assert_eq!(origin.step(Dir::Right), Pos::new(4, 3));
    }

    #[test]
    fn step_may_leave_the_grid() {
        assert_eq!(Pos::new(0, 0).step(Dir::Left), Pos::new(-1, 0));
        assert_eq!(Pos::new(0, 0).step(Dir::Up), Pos::new(0, -1));
    }
}
