//! Blockfall terminal runner (default binary).
//!
//! Single-threaded frame loop: gravity, event drain, render, then input with
//! a timeout until the next frame. The core only sees clock readings and
//! `InputEvent`s.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info};

use blockfall::config::RunConfig;
use blockfall::core::{Clock, GameSnapshot, GameState, MonotonicClock, SimpleRng};
use blockfall::input::{should_quit, InputHandler};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, HoldSpin, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, InputEvent, FRAME_MS, GAME_OVER_LINGER_MS};

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    logging::init(&config)?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut game = GameState::with_source(config.game, SimpleRng::new(config.seed));
    game.start(clock.now_millis());

    let view = GameView::default();
    let mut spin = HoldSpin::new(config.seed, clock.now_millis());
    let mut input_handler = InputHandler::new();
    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);

    let mut last_frame_ms = clock.now_millis();
    loop {
        let now_ms = clock.now_millis();
        game.tick(now_ms);
        spin.update(now_ms, game.hold().held_shape());

        for event in game.drain_events() {
            notify(event);
        }

        render(term, &view, &spin, &game, &mut snap, &mut fb)?;

        if game.game_over() {
            break;
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(input) = input_handler.handle_key_event(key) {
                        apply(&mut game, input);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now_ms = clock.now_millis();
        let elapsed = now_ms.saturating_sub(last_frame_ms).min(u32::MAX as u64) as u32;
        last_frame_ms = now_ms;
        for input in input_handler.update(elapsed) {
            apply(&mut game, input);
        }
    }

    // Keep the final board and overlay up before tearing down.
    let linger_until = clock.now_millis() + GAME_OVER_LINGER_MS as u64;
    while clock.now_millis() < linger_until {
        let remaining = linger_until.saturating_sub(clock.now_millis());
        if event::poll(Duration::from_millis(remaining))? {
            match event::read()? {
                Event::Key(key) if should_quit(key) => break,
                Event::Resize(_, _) => {
                    term.invalidate();
                    render(term, &view, &spin, &game, &mut snap, &mut fb)?;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn apply(game: &mut GameState, input: InputEvent) {
    if game.apply_input(input) {
        for event in game.drain_events() {
            notify(event);
        }
    }
}

fn render(
    term: &mut TerminalRenderer,
    view: &GameView,
    spin: &HoldSpin,
    game: &GameState,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    game.snapshot_into(snap);
    spin.apply(snap);
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

/// Stand-in for a sound layer: semantic events go to the log.
fn notify(event: GameEvent) {
    debug!("event {}", event.as_str());
}
