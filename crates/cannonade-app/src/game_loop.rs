//! The game loop: drives the engine at the fixed tick rate.
//!
//! Pulls one input snapshot per tick, advances the engine, hands the
//! world to the renderer, and paces against an absolute deadline with a
//! catch-up reset when the loop falls too far behind. A `mpsc` control
//! channel allows shutdown from outside.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use cannonade_core::constants::TICK_RATE;
use cannonade_core::enums::GamePhase;
use cannonade_core::events::GameEvent;
use cannonade_core::render::Renderer;
use cannonade_sim::engine::SimEngine;

use crate::input::InputFeed;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Control messages for a running loop.
#[derive(Debug)]
pub enum LoopCommand {
    Shutdown,
}

/// How the loop should run.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Stop after this many ticks even if the game is still going.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the tick rate; tests run unpaced.
    pub paced: bool,
}

/// What happened by the time the loop ended.
#[derive(Debug, Clone, Copy)]
pub struct LoopReport {
    pub ticks: u64,
    pub phase: GamePhase,
    pub score: i64,
}

/// Run until game over, quit, shutdown, or the tick cap.
pub fn run_game_loop(
    mut engine: SimEngine,
    input: &mut dyn InputFeed,
    renderer: &mut dyn Renderer,
    commands: &mpsc::Receiver<LoopCommand>,
    options: LoopOptions,
) -> LoopReport {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain control commands.
        match commands.try_recv() {
            Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => break,
            Err(mpsc::TryRecvError::Empty) => {}
        }

        // 2. Input snapshot for this tick.
        let frame = input.next_frame(engine.time().tick);
        if frame.quit {
            info!("quit requested");
            break;
        }

        // 3. Advance one tick.
        for event in engine.tick(&frame) {
            log_event(&event);
        }

        // 4. Draw.
        engine.render(renderer);

        if engine.phase().is_over() {
            break;
        }
        if let Some(max_ticks) = options.max_ticks {
            if engine.time().tick >= max_ticks {
                info!(max_ticks, "tick cap reached");
                break;
            }
        }

        // 5. Sleep until the next tick deadline.
        if options.paced {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind — reset to avoid a catch-up spiral.
                next_tick_time = now;
            }
        }
    }

    LoopReport {
        ticks: engine.time().tick,
        phase: engine.phase(),
        score: engine.score().score(),
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::WaveSpawned { count } => info!(count, "wave spawned"),
        GameEvent::TargetDestroyed { shape } => debug!(?shape, "target destroyed"),
        GameEvent::EnemyCannonDestroyed => info!("enemy cannon destroyed"),
        GameEvent::PlayerHit { remaining } => debug!(remaining, "player hit"),
        GameEvent::GameOver { phase } => info!(?phase, "game over"),
        GameEvent::TargetPlaced | GameEvent::BombDropped => {}
    }
}
