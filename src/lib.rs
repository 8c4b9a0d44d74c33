//! Dino runner (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `dino_runner::{types,render,core,scheduler,input,term}` and holds the
//! binary's environment configuration.

pub mod config;

pub use dino_runner_core as core;
pub use dino_runner_input as input;
pub use dino_runner_render as render;
pub use dino_runner_scheduler as scheduler;
pub use dino_runner_term as term;
pub use dino_runner_types as types;
