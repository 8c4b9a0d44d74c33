//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, terminal front-end, benches).
//!
//! # Display Geometry
//!
//! The target panel is a 128x64 monochrome LCD organised in pages:
//!
//! - **Pages**: 8 horizontal bands, each 8 pixels tall (indexed 0-7, 0 = top)
//! - **Columns**: 128 (indexed 0-127)
//! - **Cell**: one byte per (page, column); bit 0 is the top pixel of the page
//! - **Glyphs**: 8 columns wide, 16 pixels tall (two pages)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GROUND_PAGE` | 6 | Page where the ground line is drawn |
//! | `PLAYER_START_PAGE` | 4 | Player's grounded page (two pages above ground) |
//! | `PLAYER_COLUMN` | 8 | Player's fixed column |
//! | `JUMP_MAX_HEIGHT` | 3 | Jump apex in pages |
//! | `SPAWN_COLUMN` | 120 | Column where obstacles appear |
//! | `OBSTACLE_STEP_COLUMNS` | 8 | Columns an obstacle moves per step |
//! | `OBSTACLE_EXIT_COLUMN` | 8 | Obstacles at or left of this column leave the screen |
//! | `ANIM_FRAME_WRAP` | 100 | Animation counter modulus |
//!
//! Tunables (spawn cadence, speed progression, hang time, tick period) live in
//! [`GameConfig`].
//!
//! # Examples
//!
//! ```
//! use dino_runner_types::{Glyph, SpriteId, GameConfig, PAGES, WIDTH};
//!
//! assert_eq!(PAGES, 8);
//! assert_eq!(WIDTH, 128);
//!
//! // Digit glyph ids are the digit values.
//! assert_eq!(Glyph::digit(7).id(), 7);
//! assert_eq!(Glyph::from_char('A'), Some(Glyph::letter(0)));
//!
//! assert_eq!(SpriteId::CactusSmall.width_cells(), 1);
//! assert_eq!(SpriteId::PlayerStand.width_cells(), 2);
//!
//! let config = GameConfig::default();
//! assert_eq!(config.spawn_interval_ticks, 100);
//! ```

use std::fmt;

/// Number of 8-pixel pages on the panel.
pub const PAGES: usize = 8;

/// Number of columns on the panel.
pub const WIDTH: usize = 128;

/// Panel height in pixels.
pub const HEIGHT: usize = PAGES * 8;

/// Width of one glyph cell in columns.
pub const CELL_WIDTH: u8 = 8;

/// Bytes per glyph cell (8 columns x 2 pages).
pub const CELL_BYTES: usize = 16;

/// Page where the ground line is drawn.
pub const GROUND_PAGE: u8 = 6;

/// Grounded page of the player sprite.
pub const PLAYER_START_PAGE: u8 = GROUND_PAGE - 2;

/// Fixed column of the player sprite.
pub const PLAYER_COLUMN: u8 = 8;

/// Jump apex, in pages above the grounded page.
pub const JUMP_MAX_HEIGHT: u8 = 3;

/// Page on which obstacles are spawned.
pub const OBSTACLE_PAGE: u8 = GROUND_PAGE - 2;

/// Rightmost spawn column for obstacles.
pub const SPAWN_COLUMN: u8 = 120;

/// Columns an obstacle travels on each movement step (one glyph width).
pub const OBSTACLE_STEP_COLUMNS: u8 = CELL_WIDTH;

/// An obstacle at or left of this column is removed on its next step.
pub const OBSTACLE_EXIT_COLUMN: u8 = 8;

/// Capacity of the obstacle slot pool.
pub const OBSTACLE_SLOTS: usize = 4;

/// Animation counter modulus.
pub const ANIM_FRAME_WRAP: u8 = 100;

/// Half of the run cycle; run frames alternate every this many ticks.
pub const RUN_FRAME_TICKS: u8 = 10;

/// Most lives a game can start with.
pub const MAX_LIVES: u8 = 4;

/// Number of discrete life indicators.
pub const LIFE_INDICATORS: usize = 4;

/// Full-scale value of the 12-bit analog selector.
pub const ANALOG_MAX: u16 = 4095;

/// Width of each analog band that selects one life count.
pub const ANALOG_BAND: u16 = 1024;

/// Maximum number of score digits drawn on screen.
pub const SCORE_DIGITS: usize = 5;

/// Largest score value the on-screen field can show; larger scores saturate.
pub const SCORE_DISPLAY_MAX: u32 = 99_999;

/// Columns behind the player column still inside the hit band.
pub const HIT_BAND_BEHIND: i16 = 4;

/// Columns ahead of the player column still inside the hit band.
pub const HIT_BAND_AHEAD: i16 = 12;

/// Obstacle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// 16x16 cactus.
    Big,
    /// 8x16 cactus.
    Small,
}

impl ObstacleKind {
    pub fn sprite(self) -> SpriteId {
        match self {
            ObstacleKind::Big => SpriteId::CactusBig,
            ObstacleKind::Small => SpriteId::CactusSmall,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "big" => Some(ObstacleKind::Big),
            "small" => Some(ObstacleKind::Small),
            _ => None,
        }
    }
}

/// Multi-cell sprites in the glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    CactusBig,
    CactusSmall,
    /// Decorative icon drawn on the sky band.
    Star,
    PlayerStand,
    PlayerRun1,
    PlayerRun2,
    /// Terminal pose drawn where the player was hit for the last time.
    PlayerDead,
    /// Ground tile, one cell wide.
    Ground,
    /// Eraser.
    Blank,
}

impl SpriteId {
    /// Width in 8-column cells (1 or 2).
    pub const fn width_cells(self) -> u8 {
        match self {
            SpriteId::CactusSmall | SpriteId::Ground | SpriteId::Blank => 1,
            _ => 2,
        }
    }

    /// Glyph cells making up this sprite, left to right.
    pub const fn cells(self) -> &'static [Glyph] {
        const fn pair(first: u8) -> [Glyph; 2] {
            [Glyph(first), Glyph(first + 1)]
        }
        const CACTUS_BIG: [Glyph; 2] = pair(Glyph::CACTUS_BIG);
        const CACTUS_SMALL: [Glyph; 1] = [Glyph(Glyph::CACTUS_SMALL)];
        const STAR: [Glyph; 2] = pair(Glyph::STAR);
        const STAND: [Glyph; 2] = pair(Glyph::PLAYER_STAND);
        const RUN_1: [Glyph; 2] = pair(Glyph::PLAYER_RUN_1);
        const RUN_2: [Glyph; 2] = pair(Glyph::PLAYER_RUN_2);
        const DEAD: [Glyph; 2] = pair(Glyph::PLAYER_DEAD);
        const GROUND: [Glyph; 1] = [Glyph(Glyph::GROUND)];
        const BLANK: [Glyph; 1] = [Glyph::BLANK];

        match self {
            SpriteId::CactusBig => &CACTUS_BIG,
            SpriteId::CactusSmall => &CACTUS_SMALL,
            SpriteId::Star => &STAR,
            SpriteId::PlayerStand => &STAND,
            SpriteId::PlayerRun1 => &RUN_1,
            SpriteId::PlayerRun2 => &RUN_2,
            SpriteId::PlayerDead => &DEAD,
            SpriteId::Ground => &GROUND,
            SpriteId::Blank => &BLANK,
        }
    }
}

/// Index of one 8x16 cell in the glyph table.
///
/// Ids 0-9 are the digits (id == digit value), 10-35 the letters `A`-`Z`,
/// 36 the blank cell, followed by the sprite cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(u8);

impl Glyph {
    const LETTER_BASE: u8 = 10;
    const BLANK_ID: u8 = 36;
    const CACTUS_BIG: u8 = 37;
    const CACTUS_SMALL: u8 = 39;
    const STAR: u8 = 40;
    const PLAYER_STAND: u8 = 42;
    const PLAYER_RUN_1: u8 = 44;
    const PLAYER_RUN_2: u8 = 46;
    const PLAYER_DEAD: u8 = 48;
    const GROUND: u8 = 50;

    /// Number of cells in the glyph table.
    pub const COUNT: usize = 51;

    pub const BLANK: Glyph = Glyph(Self::BLANK_ID);

    /// Glyph for a decimal digit. Values above 9 are a caller bug.
    pub const fn digit(value: u8) -> Self {
        debug_assert!(value < 10);
        Glyph(value)
    }

    /// Glyph for the `index`-th uppercase letter (0 = `A`).
    pub const fn letter(index: u8) -> Self {
        debug_assert!(index < 26);
        Glyph(Self::LETTER_BASE + index)
    }

    /// Map a text character; lowercase letters fold to uppercase.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Glyph::digit(ch as u8 - b'0')),
            'A'..='Z' => Some(Glyph::letter(ch as u8 - b'A')),
            'a'..='z' => Some(Glyph::letter(ch as u8 - b'a')),
            ' ' => Some(Glyph::BLANK),
            _ => None,
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pre-game life-count selection.
    Selecting,
    Running,
    /// Out of lives; waiting for a restart confirm.
    Dead,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Selecting => "selecting",
            Phase::Running => "running",
            Phase::Dead => "dead",
        };
        f.write_str(s)
    }
}

/// One tick's worth of sampled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSample {
    /// Jump/confirm button level (level-triggered).
    pub trigger: bool,
    /// 12-bit analog selector reading, only consulted while selecting.
    pub analog: u16,
}

impl InputSample {
    pub const fn new(trigger: bool, analog: u16) -> Self {
        Self { trigger, analog }
    }
}

/// Quantise an analog reading into 4 equal bands mapping to 1-4 lives.
pub fn lives_for_analog(analog: u16) -> u8 {
    let band = (analog.min(ANALOG_MAX) / ANALOG_BAND) as u8;
    band + 1
}

/// Thermometer-coded indicator pattern: the first `lives` outputs are on.
pub fn life_indicator_pattern(lives: u8) -> [bool; LIFE_INDICATORS] {
    let mut out = [false; LIFE_INDICATORS];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = i < lives as usize;
    }
    out
}

/// Game tunables.
///
/// Defaults follow the handheld board timings (20ms ticks, a spawn every
/// 100 ticks, obstacles stepping every 3 ticks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Ticks between obstacle spawns.
    pub spawn_interval_ticks: u32,
    /// Ticks between obstacle steps at game start.
    pub initial_speed: u32,
    /// Floor for `current_speed`.
    pub min_speed: u32,
    /// Ticks between difficulty increases.
    pub speed_up_interval_ticks: u32,
    pub tick_period_ms: u32,
    pub tick_period_step_ms: u32,
    pub min_tick_period_ms: u32,
    /// Hang ticks at the apex when the trigger is released.
    pub hang_ticks_tapped: u8,
    /// Hang ticks at the apex while the trigger is held (the cap).
    pub hang_ticks_held: u8,
    /// Active obstacle limit, at most [`OBSTACLE_SLOTS`].
    pub max_obstacles: usize,
    pub obstacle_kind: ObstacleKind,
    /// Ticks during which confirm input is ignored after a phase change.
    pub confirm_debounce_ticks: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ticks: 100,
            initial_speed: 3,
            min_speed: 1,
            speed_up_interval_ticks: 500,
            tick_period_ms: 20,
            tick_period_step_ms: 1,
            min_tick_period_ms: 10,
            hang_ticks_tapped: 8,
            hang_ticks_held: 16,
            max_obstacles: 1,
            obstacle_kind: ObstacleKind::Small,
            confirm_debounce_ticks: 10,
        }
    }
}

impl GameConfig {
    /// Clamp every field into a range the simulation can run with.
    pub fn sanitized(mut self) -> Self {
        self.spawn_interval_ticks = self.spawn_interval_ticks.max(1);
        self.min_speed = self.min_speed.max(1);
        self.initial_speed = self.initial_speed.max(self.min_speed);
        self.speed_up_interval_ticks = self.speed_up_interval_ticks.max(1);
        self.min_tick_period_ms = self.min_tick_period_ms.max(1);
        self.tick_period_ms = self.tick_period_ms.max(self.min_tick_period_ms);
        self.hang_ticks_tapped = self.hang_ticks_tapped.max(1);
        self.hang_ticks_held = self.hang_ticks_held.max(self.hang_ticks_tapped);
        self.max_obstacles = self.max_obstacles.clamp(1, OBSTACLE_SLOTS);
        self
    }
}
