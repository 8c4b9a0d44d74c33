//! Core game logic: deterministic, allocation-free, no I/O.
//!
//! Everything here advances in whole ticks and draws through a
//! [`Renderer`](render::Renderer); the caller owns the tick source, the
//! input sampling and the panel the renderer is swapped into.
//!
//! # Module Structure
//!
//! - [`game_state`]: player position, jump physics, score, lives, difficulty
//! - [`obstacles`]: fixed slot pool of obstacles moving right to left
//! - [`collision`]: player/obstacle overlap in page/column space
//! - [`simulation`]: the `Selecting -> Running -> Dead` phase machine
//! - [`events`]: transitions reported to the caller and the log
//!
//! # Example
//!
//! ```
//! use dino_runner_core::{GameEvent, Simulation};
//! use dino_runner_core::render::{RecordingSink, Renderer};
//! use dino_runner_core::types::{GameConfig, InputSample, Phase};
//!
//! let mut sim = Simulation::new(GameConfig::default());
//! let mut renderer = Renderer::new();
//! let mut panel = RecordingSink::new();
//!
//! // Dial in three lives and confirm.
//! sim.step(InputSample::new(true, 2500), &mut renderer);
//! assert_eq!(sim.phase(), Phase::Running);
//! assert_eq!(sim.events(), &[GameEvent::GameStarted { lives: 3 }]);
//!
//! renderer.swap(&mut panel).unwrap();
//! assert!(!panel.writes().is_empty());
//! ```

pub mod collision;
pub mod events;
pub mod game_state;
pub mod obstacles;
pub mod simulation;

pub use dino_runner_render as render;
pub use dino_runner_types as types;

pub use collision::{first_hit, hits};
pub use events::GameEvent;
pub use game_state::GameState;
pub use obstacles::{Obstacle, ObstacleManager};
pub use simulation::{Simulation, MAX_EVENTS};
