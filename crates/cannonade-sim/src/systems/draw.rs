//! Draw phase: delegate every live entity to the rendering
//! collaborator, in fixed order (projectiles, targets, bombs, cannons,
//! then the panels). Read-only.

use hecs::{Entity, World};

use cannonade_core::components::{Bomb, CannonState, Health, Projectile, Sprite, Target};
use cannonade_core::enums::{GamePhase, Shape};
use cannonade_core::render::Renderer;
use cannonade_core::state::ScoreBoard;
use cannonade_core::types::Position;

pub fn run(
    world: &World,
    player: Entity,
    score: &ScoreBoard,
    phase: GamePhase,
    renderer: &mut dyn Renderer,
) {
    {
        let mut query = world.query::<(&Projectile, &Position, &Sprite)>();
        for (_entity, (_tag, pos, sprite)) in query.iter() {
            renderer.draw_shape(*pos, sprite.color, sprite.size, sprite.shape);
        }
    }
    {
        let mut query = world.query::<(&Target, &Position, &Sprite)>();
        for (_entity, (_tag, pos, sprite)) in query.iter() {
            renderer.draw_shape(*pos, sprite.color, sprite.size, sprite.shape);
        }
    }
    {
        let mut query = world.query::<(&Bomb, &Position, &Sprite)>();
        for (_entity, (_tag, pos, sprite)) in query.iter() {
            renderer.draw_shape(*pos, sprite.color, sprite.size, sprite.shape);
        }
    }
    {
        let mut query = world.query::<(&CannonState, &Position, &Sprite)>();
        for (_entity, (state, pos, sprite)) in query.iter() {
            renderer.draw_cannon(*pos, state.angle, state.pow, sprite.color);
        }
    }

    // The panel survives the player: after defeat it shows zero health.
    let (chosen_shape, player_health) = match (
        world.get::<&CannonState>(player),
        world.get::<&Health>(player),
    ) {
        (Ok(state), Ok(health)) => (state.chosen_shape, health.hp),
        _ => (Shape::Circle, 0),
    };
    renderer.draw_score_panel(score, chosen_shape, player_health);

    if phase.is_over() {
        renderer.draw_game_over(phase, score.score());
    }
}
