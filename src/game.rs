//! Simulation state and the fixed-step tick.
//!
//! Everything the game needs lives in one [`GameState`], including the
//! seeded RNG, so two states built from the same seed and fed the same
//! direction requests evolve identically.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::components::{Bonus, Dir, Pos};
use crate::ghost::{spawn_ghosts, Ghost, GhostStep, PenBounds};
use crate::level::{bonus_corners, collides, Grid, GRID_H, GRID_W};
use crate::player::{Player, PELLET_SCORE, PLAYER_SPAWN};

/// Static description of a maze and where everything starts in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub player_spawn: Pos,
    pub pen: PenBounds,
    pub bonus_cells: Vec<Pos>,
}

impl Layout {
    pub fn standard() -> Self {
        Self {
            grid: Grid::new(GRID_W, GRID_H),
            player_spawn: PLAYER_SPAWN,
            pen: PenBounds::for_grid(GRID_W, GRID_H),
            bonus_cells: bonus_corners(GRID_W, GRID_H).to_vec(),
        }
    }
}

/// Things that happened during one tick, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten(Pos),
    /// A bonus was picked up and the ghosts were sent back to the pen.
    BonusCollected(Pos),
    GhostReleased(usize),
    /// The ghost at this index caught the player; the game was reset.
    PlayerCaught(usize),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    pub bonuses: Vec<Bonus>,
    pub pen: PenBounds,
    pub score: u32,
    /// Frames simulated so far. Never rewinds.
    pub clock: u64,
    pub seed: u64,
    layout: Layout,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_layout(Layout::standard(), seed)
    }

    pub fn with_layout(layout: Layout, seed: u64) -> Self {
        Self {
            grid: layout.grid.clone(),
            player: Player::new(layout.player_spawn),
            ghosts: spawn_ghosts(&layout.pen, 0),
            bonuses: layout.bonus_cells.iter().copied().map(Bonus::new).collect(),
            pen: layout.pen,
            score: 0,
            clock: 0,
            seed,
            layout,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Queues a turn for the player. Safe to call any number of times
    /// between ticks; only the last request counts.
    pub fn request_direction(&mut self, dir: Dir) {
        self.player.request(dir);
    }

    /// Starts a new episode: fresh maze and bonuses, player back at spawn,
    /// ghosts back in the pen, score cleared. The clock keeps running and
    /// the ghosts' release schedule restarts from now.
    pub fn hard_reset(&mut self) {
        self.grid = self.layout.grid.clone();
        self.bonuses = self
            .layout
            .bonus_cells
            .iter()
            .copied()
            .map(Bonus::new)
            .collect();
        self.player = Player::new(self.layout.player_spawn);
        self.score = 0;
        self.respawn_ghosts();
    }

    /// Sends every ghost back to the pen. Nothing else changes.
    pub fn soft_reset(&mut self) {
        self.respawn_ghosts();
    }

    fn respawn_ghosts(&mut self) {
        self.ghosts = spawn_ghosts(&self.pen, self.clock);
    }
}

/// Advances the simulation by one frame.
///
/// The clock moves first, then the player (on its cadence) moves, eats and
/// picks up bonuses, then each ghost in creation order updates and is checked
/// against the player. The first catch resets the game and ends the frame.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.clock += 1;
    let clock = state.clock;

    if state.player.is_due(clock) {
        update_player(state, &mut events);
    }

    for idx in 0..state.ghosts.len() {
        let step = state.ghosts[idx].update(&state.grid, &state.pen, clock, &mut state.rng);
        if step == GhostStep::Released {
            log::debug!("ghost {} left the pen at frame {}", idx, clock);
            events.push(GameEvent::GhostReleased(idx));
        }

        if collides(state.ghosts[idx].pos, state.player.pos) {
            log::debug!(
                "ghost {} caught the player at {:?} on frame {}, score was {}",
                idx,
                state.player.pos,
                clock,
                state.score
            );
            events.push(GameEvent::PlayerCaught(idx));
            state.hard_reset();
            break;
        }
    }

    events
}

fn update_player(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.player.advance(&state.grid);
    let pos = state.player.pos;

    if state.grid.eat(pos) {
        state.score += PELLET_SCORE;
        events.push(GameEvent::PelletEaten(pos));
    }

    let mut picked_up = false;
    for bonus in state.bonuses.iter_mut() {
        if !bonus.collected && collides(bonus.pos, pos) {
            bonus.collected = true;
            picked_up = true;
            log::debug!("bonus collected at {:?} on frame {}", pos, state.clock);
            events.push(GameEvent::BonusCollected(pos));
        }
    }
    if picked_up {
        state.soft_reset();
    }
}
