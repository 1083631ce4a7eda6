//! Headless runner for CANNONADE.
//!
//! Wires the simulation engine to an input feed and a renderer and
//! drives it at the fixed tick rate. The default collaborators are
//! headless: input is idle and drawing is counted and traced, which is
//! enough to run missions end to end without a window.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod renderer;
