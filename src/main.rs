//! Terminal runner (default binary).
//!
//! Owns process start-up: configuration, logging, the terminal session and
//! the frame loop that feeds key presses and elapsed time into the engine.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use log::{info, LevelFilter};

use blockfall::config::Config;
use blockfall::core::{GameLoop, GameSnapshot, Shuffler};
use blockfall::input::Command;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        // stderr shares the screen with the game; stay quiet unless asked.
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {}
    }
    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let shuffler = match config.seed {
        Some(seed) => Shuffler::new(seed),
        None => Shuffler::from_entropy(),
    };
    let mut game = GameLoop::with_shuffler(shuffler, config.gravity_ms);
    info!(
        "starting: gravity {}ms, frame {}ms, seed {:?}",
        config.gravity_ms, config.frame_ms, config.seed
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(u64::from(config.frame_ms));
    let mut last_tick = Instant::now();

    loop {
        // Render the settled state.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match Command::from_key(key) {
                    Command::Quit => break,
                    Command::Restart => {
                        info!(
                            "restart after {} pieces, {} lines",
                            game.pieces_spawned(),
                            game.lines_cleared()
                        );
                        game.reset();
                    }
                    Command::Play(action) => {
                        game.queue_action(action);
                    }
                    Command::Ignore => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            game.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }

    info!(
        "quit after {} pieces, {} lines",
        game.pieces_spawned(),
        game.lines_cleared()
    );
    Ok(())
}
