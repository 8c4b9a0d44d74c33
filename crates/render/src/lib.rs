//! Page-addressed LCD rendering.
//!
//! The panel is 8 pages x 128 columns of vertical 8-pixel byte stripes.
//! Drawing happens into a [`FrameSurface`] that remembers what the panel last
//! received; [`FrameSurface::swap`] then sends only the pages whose bytes
//! changed, which keeps bus traffic proportional to what actually moved
//! (typically one or two pages per tick).
//!
//! - [`surface`]: double buffer, dirty-page set, [`PageSink`] boundary
//! - [`glyphs`]: static 8x16 glyph table
//! - [`renderer`]: sprites, text, numbers and pixel primitives
//!
//! # Example
//!
//! ```
//! use dino_runner_render::{Renderer, RecordingSink};
//! use dino_runner_types::SpriteId;
//!
//! let mut renderer = Renderer::new();
//! let mut sink = RecordingSink::new();
//!
//! renderer.draw_sprite(4, 8, SpriteId::PlayerRun1);
//! renderer.swap(&mut sink).unwrap();
//! assert_eq!(sink.pages(), vec![4, 5]);
//!
//! // Nothing changed since the last swap: nothing is sent.
//! sink.clear();
//! renderer.swap(&mut sink).unwrap();
//! assert!(sink.writes().is_empty());
//! ```

pub mod glyphs;
pub mod renderer;
pub mod surface;

pub use dino_runner_types as types;

pub use glyphs::glyph_bytes;
pub use renderer::{decimal_digits, Renderer};
pub use surface::{DirtyPages, FrameSurface, PageBytes, PageSink, RecordingSink};
