//! Terminal stand-in for the LCD hardware.
//!
//! The game flushes pages into an [`LcdPanel`] exactly as it would over the
//! display bus; [`PanelView`] turns the panel RAM into terminal cells and
//! [`TerminalRenderer`] writes only the cells that changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Show the panel at 1 pixel per column, 2 pixel rows per terminal row
//! - Never touch the terminal from the view code (it can be unit-tested)

pub mod fb;
pub mod panel;
pub mod renderer;
pub mod view;

pub use dino_runner_render as render;
pub use dino_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use panel::LcdPanel;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{PanelView, StatusLine, Viewport};
