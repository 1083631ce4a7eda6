//! The input collaborator.
//!
//! A platform backend implements `InputFeed` by collapsing its event
//! queue (key state, mouse edges, WASD/arrow aliases, quit) into one
//! flat snapshot per tick. The headless runner uses `IdleInput`;
//! `ScriptedInput` replays a canned sequence, which is also how the
//! loop tests drive the player.

use std::collections::VecDeque;

use cannonade_core::input::InputFrame;

pub trait InputFeed {
    /// The snapshot for the tick about to run.
    fn next_frame(&mut self, tick: u64) -> InputFrame;
}

/// No input at all: the player sits still and never fires.
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputFeed for IdleInput {
    fn next_frame(&mut self, _tick: u64) -> InputFrame {
        InputFrame::default()
    }
}

/// Replays a prepared sequence of frames, then goes idle.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputFeed for ScriptedInput {
    fn next_frame(&mut self, _tick: u64) -> InputFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}
