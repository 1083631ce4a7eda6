use std::sync::mpsc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cannonade_app::config::AppConfig;
use cannonade_app::game_loop::{run_game_loop, LoopOptions};
use cannonade_app::input::IdleInput;
use cannonade_app::renderer::HeadlessRenderer;
use cannonade_sim::engine::SimEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("CANNONADE v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let engine = SimEngine::new(config.sim_config());

    let (_commands, command_rx) = mpsc::channel();
    let mut input = IdleInput;
    let mut renderer = HeadlessRenderer::default();

    let report = run_game_loop(
        engine,
        &mut input,
        &mut renderer,
        &command_rx,
        LoopOptions {
            max_ticks: config.run.max_ticks,
            paced: !config.run.unpaced,
        },
    );

    info!(
        ticks = report.ticks,
        phase = ?report.phase,
        score = report.score,
        "run complete"
    );
    Ok(())
}
