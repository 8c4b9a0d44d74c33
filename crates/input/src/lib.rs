//! Terminal input module.
//!
//! Maps `crossterm` key events onto the two controls the game reads each
//! tick: a level-triggered button and a 12-bit analog selector. Terminals
//! without key-release events get a release timeout instead.

pub mod handler;
pub mod map;
pub mod sampler;

pub use dino_runner_types as types;

pub use handler::{AnalogDial, TriggerHandler};
pub use map::{map_key, should_quit, InputKey};
pub use sampler::InputSampler;
