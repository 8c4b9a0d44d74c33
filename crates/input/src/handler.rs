//! Button and dial emulation for terminal environments.
//!
//! The game samples its button level-triggered, so a key has to stay "down"
//! between the press and its release. Terminals that never report releases
//! fall back to a timeout since the last press or auto-repeat.

use std::time::{Duration, Instant};

use crate::types::{ANALOG_BAND, ANALOG_MAX, MAX_LIVES};

// Longer than the typical auto-repeat delay so a held key does not flicker
// low between the first press and the first repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

/// Level-triggered button driven by key events.
#[derive(Debug, Clone)]
pub struct TriggerHandler {
    held: bool,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl TriggerHandler {
    pub fn new() -> Self {
        Self {
            held: false,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Press or auto-repeat: the button is down and the timeout restarts.
    pub fn handle_press(&mut self) {
        self.held = true;
        self.last_key_time = Instant::now();
    }

    pub fn handle_release(&mut self) {
        self.held = false;
    }

    /// Current level, releasing the button if the timeout has elapsed.
    pub fn update(&mut self) -> bool {
        let timeout = Duration::from_millis(u64::from(self.key_release_timeout_ms));
        if self.held && self.last_key_time.elapsed() > timeout {
            self.held = false;
        }
        self.held
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for TriggerHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Emulated 12-bit potentiometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogDial {
    value: u16,
    step: u16,
}

/// A quarter band per key press.
const DEFAULT_DIAL_STEP: u16 = ANALOG_BAND / 4;

impl AnalogDial {
    /// Dial at `value` (clamped to the 12-bit range).
    pub fn new(value: u16) -> Self {
        Self {
            value: value.min(ANALOG_MAX),
            step: DEFAULT_DIAL_STEP,
        }
    }

    pub fn with_step(mut self, step: u16) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn step_up(&mut self) {
        self.value = self.value.saturating_add(self.step).min(ANALOG_MAX);
    }

    pub fn step_down(&mut self) {
        self.value = self.value.saturating_sub(self.step);
    }

    /// Centre of the band that selects `lives` (clamped to 1..=4).
    pub fn set_preset(&mut self, lives: u8) {
        let band = u16::from(lives.clamp(1, MAX_LIVES) - 1);
        self.value = (band * ANALOG_BAND + ANALOG_BAND / 2).min(ANALOG_MAX);
    }
}

impl Default for AnalogDial {
    /// Parked in the one-life band.
    fn default() -> Self {
        let mut dial = Self::new(0);
        dial.set_preset(1);
        dial
    }
}
