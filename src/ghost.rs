use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{Dir, Pos};
use crate::level::{can_move, Grid};

/// Frames between ghost steps.
pub const GHOST_CADENCE: u64 = 10;
/// Frames each ghost waits in the pen after being spawned, in creation order.
pub const RELEASE_DELAYS: [u64; 4] = [100, 200, 300, 400];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostState {
    Caged,
    Released,
}

/// The 3x3 pen the ghosts start in, stored as inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PenBounds {
    pub fn around(center: Pos) -> Self {
        Self {
            x0: center.x - 1,
            y0: center.y - 1,
            x1: center.x + 1,
            y1: center.y + 1,
        }
    }

    /// Standard placement: horizontally centered, one row below the middle.
    pub fn for_grid(width: usize, height: usize) -> Self {
        Self::around(Pos::new(width as i32 / 2, height as i32 / 2 + 1))
    }

    pub fn center(&self) -> Pos {
        Pos::new((self.x0 + self.x1) / 2, (self.y0 + self.y1) / 2)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x0 && pos.x <= self.x1 && pos.y >= self.y0 && pos.y <= self.y1
    }

    /// Spawn cells in creation order: center, left, right, below.
    pub fn spawns(&self) -> [Pos; 4] {
        let c = self.center();
        [
            c,
            Pos::new(c.x - 1, c.y),
            Pos::new(c.x + 1, c.y),
            Pos::new(c.x, c.y + 1),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    pub pos: Pos,
    pub direction: Option<Dir>,
    pub cadence: u64,
    pub state: GhostState,
    /// Clock value from which the ghost may start leaving the pen.
    pub release_at: u64,
}

/// What a single ghost update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostStep {
    Idle,
    Moved,
    Released,
}

impl Ghost {
    pub fn caged(pos: Pos, release_at: u64) -> Self {
        Self {
            pos,
            direction: None,
            cadence: GHOST_CADENCE,
            state: GhostState::Caged,
            release_at,
        }
    }

    pub fn is_due(&self, clock: u64) -> bool {
        self.cadence > 0 && clock % self.cadence == 0
    }

    pub fn update(
        &mut self,
        grid: &Grid,
        pen: &PenBounds,
        clock: u64,
        rng: &mut impl Rng,
    ) -> GhostStep {
        if !self.is_due(clock) {
            return GhostStep::Idle;
        }
        match self.state {
            GhostState::Caged if clock >= self.release_at => self.leave_pen(grid, pen),
            GhostState::Caged => GhostStep::Idle,
            GhostState::Released => self.wander(grid, rng),
        }
    }

    /// Walks toward the pen's center column, then up and out. Becomes
    /// released once it stands outside the pen.
    fn leave_pen(&mut self, grid: &Grid, pen: &PenBounds) -> GhostStep {
        let center_x = pen.center().x;
        let dir = if self.pos.x < center_x && can_move(grid, self.pos, Dir::Right) {
            Dir::Right
        } else if self.pos.x > center_x && can_move(grid, self.pos, Dir::Left) {
            Dir::Left
        } else {
            Dir::Up
        };
        self.direction = Some(dir);

        let moved = can_move(grid, self.pos, dir);
        if moved {
            self.pos = self.pos.step(dir);
        }

        if !pen.contains(self.pos) {
            self.state = GhostState::Released;
            return GhostStep::Released;
        }
        if moved {
            GhostStep::Moved
        } else {
            GhostStep::Idle
        }
    }

    /// Uniform pick over every open direction, with the current heading
    /// entered twice so going straight is twice as likely as any turn.
    fn wander(&mut self, grid: &Grid, rng: &mut impl Rng) -> GhostStep {
        let mut options: Vec<Dir> = Dir::ALL
            .into_iter()
            .filter(|&dir| can_move(grid, self.pos, dir))
            .collect();
        if let Some(dir) = self.direction {
            if can_move(grid, self.pos, dir) {
                options.push(dir);
            }
        }

        match options.choose(rng) {
            Some(&dir) => {
                self.direction = Some(dir);
                self.pos = self.pos.step(dir);
                GhostStep::Moved
            }
            None => GhostStep::Idle,
        }
    }
}

/// Fresh caged ghosts whose release delays count from `clock`.
pub fn spawn_ghosts(pen: &PenBounds, clock: u64) -> Vec<Ghost> {
    pen.spawns()
        .into_iter()
        .zip(RELEASE_DELAYS)
        .map(|(pos, delay)| Ghost::caged(pos, clock + delay))
        .collect()
}
