use crate::components::{Dir, Pos};
use crate::level::{can_move, Grid};

pub const PLAYER_SPAWN: Pos = Pos::new(1, 1);
/// Frames between player steps.
pub const PLAYER_CADENCE: u64 = 5;
pub const PELLET_SCORE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub direction: Option<Dir>,
    /// Last requested turn. Applied as soon as the cell in that direction
    /// opens up, so a turn can be queued before reaching the corner.
    pub next_direction: Option<Dir>,
    pub cadence: u64,
}

impl Player {
    pub fn new(spawn: Pos) -> Self {
        Self {
            pos: spawn,
            direction: None,
            next_direction: None,
            cadence: PLAYER_CADENCE,
        }
    }

    /// Input side: only ever touches the buffered turn.
    pub fn request(&mut self, dir: Dir) {
        self.next_direction = Some(dir);
    }

    pub fn is_due(&self, clock: u64) -> bool {
        self.cadence > 0 && clock % self.cadence == 0
    }

    /// One cadence step: take the queued turn if it is open, then move one
    /// cell if the way ahead is open. A blocked player keeps its heading and
    /// tries again next step. Returns whether the player moved.
    pub fn advance(&mut self, grid: &Grid) -> bool {
        if let Some(dir) = self.next_direction {
            if can_move(grid, self.pos, dir) {
                self.direction = Some(dir);
            }
        }

        match self.direction {
            Some(dir) if can_move(grid, self.pos, dir) => {
                self.pos = self.pos.step(dir);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{GRID_H, GRID_W};

    #[test]
    fn spawns_standing_still() {
        let player = Player::new(PLAYER_SPAWN);
        assert_eq!(player.pos, Pos::new(1, 1));
        assert_eq!(player.direction, None);
        assert_eq!(player.next_direction, None);
    }

    #[test]
    fn request_only_touches_the_buffer() {
        let mut player = Player::new(PLAYER_SPAWN);
        player.request(Dir::Down);
        assert_eq!(player.direction, None);
        assert_eq!(player.next_direction, Some(Dir::Down));
    }

    #[test]
    fn turn_into_a_wall_is_ignored() {
        let grid = Grid::new(GRID_W, GRID_H);
        let mut player = Player::new(PLAYER_SPAWN);
        player.request(Dir::Up);
        assert!(!player.advance(&grid));
        assert_eq!(player.pos, PLAYER_SPAWN);
        assert_eq!(player.direction, None);
    }

    #[test]
    fn buffered_turn_waits_for_the_opening() {
        let grid = Grid::from_rows(&[
            "#####",
            "#   #",
            "### #",
            "#####",
        ]);
        let mut player = Player::new(Pos::new(1, 1));
        player.request(Dir::Right);
        assert!(player.advance(&grid));
        player.request(Dir::Down);

        // (2,2) is a wall, keep heading right.
        assert!(player.advance(&grid));
        assert_eq!(player.pos, Pos::new(3, 1));
        assert_eq!(player.direction, Some(Dir::Right));

        // (3,2) is open, the queued turn kicks in.
        assert!(player.advance(&grid));
        assert_eq!(player.pos, Pos::new(3, 2));
        assert_eq!(player.direction, Some(Dir::Down));
    }

    #[test]
    fn blocked_player_keeps_its_heading() {
        let grid = Grid::from_rows(&["#####", "#  ##", "#####"]);
        let mut player = Player::new(Pos::new(1, 1));
        player.request(Dir::Right);
        assert!(player.advance(&grid));
        assert!(!player.advance(&grid));
        assert!(!player.advance(&grid));
        assert_eq!(player.pos, Pos::new(2, 1));
        assert_eq!(player.direction, Some(Dir::Right));
    }

    #[test]
    fn cadence_gates_steps() {
        let player = Player::new(PLAYER_SPAWN);
        let due: Vec<u64> = (1..=20).filter(|&t| player.is_due(t)).collect();
        assert_eq!(due, vec![5, 10, 15, 20]);
    }
}
