use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use maze_chase::game::{tick, GameState};
use maze_chase::input::{command_for, Command};
use maze_chase::render::{compose, Renderer};
use maze_chase::Settings;

fn main() -> io::Result<()> {
    // Logs go to stderr; redirect it to keep them off the game screen.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let settings = Settings::from_env();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, settings: &Settings) -> io::Result<()> {
    let seed = settings.seed_or_random();
    let frame_time = settings.frame_time();
    log::info!("starting with seed {} at {} fps", seed, settings.fps);

    let mut game = GameState::new(seed);
    let mut renderer = Renderer::new(game.grid.width(), game.grid.height());

    loop {
        let frame_start = Instant::now();

        // Input lands in the player's turn buffer between ticks.
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => match command_for(key) {
                    Some(Command::Steer(dir)) => game.request_direction(dir),
                    Some(Command::Quit) => {
                        log::info!("quit on frame {} with score {}", game.clock, game.score);
                        return Ok(());
                    }
                    None => {}
                },
                Event::Resize(..) => renderer.invalidate(),
                _ => {}
            }
        }

        for event in tick(&mut game) {
            log::trace!("frame {}: {:?}", game.clock, event);
        }
        renderer.draw(stdout, &compose(&game), terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
