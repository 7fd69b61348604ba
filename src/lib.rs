//! A grid maze chase: the player eats pellets and corner bonuses while four
//! ghosts leave their pen on a schedule and roam at random.
//!
//! - `level`, `player`, `ghost`, `game`: the fixed-step simulation
//! - `render`: terminal presentation of a [`game::GameState`]
//! - `input`: key mapping
//! - `settings`: frame driver configuration

pub mod components;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod player;
pub mod render;
pub mod settings;

pub use components::{Bonus, Dir, Pos};
pub use game::{tick, GameEvent, GameState, Layout};
pub use settings::Settings;
